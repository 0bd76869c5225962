//! Color type and the fixed ornament palette.
//!
//! Every ornament color is a named constant here; medallion palettes are
//! sampled at layout time and stored as plain [`Rgb`] values.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Linear blend toward `other`, `t` clamped to 0-1
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

// Ornament colors
pub const BACKGROUND: Rgb = Rgb::new(50, 100, 150);
pub const SPECIAL_YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const DOT_WHITE: Rgb = Rgb::WHITE;
pub const GOLD: Rgb = Rgb::new(212, 175, 55);
pub const RED_LINE: Rgb = Rgb::new(255, 0, 0);
pub const PINK: Rgb = Rgb::new(255, 0, 121);
pub const BLUE: Rgb = Rgb::new(0, 179, 255);
pub const DARK_GREEN: Rgb = Rgb::new(68, 106, 55);
pub const LIGHT_GREEN: Rgb = Rgb::new(168, 191, 143);
pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const OCTAD_RED: Rgb = Rgb::new(200, 0, 0);
pub const OCTAD_YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const OCTAD_BLACK: Rgb = Rgb::BLACK;
pub const OCTAD_CORE: Rgb = Rgb::WHITE;
pub const ARC_PINK: Rgb = Rgb::new(255, 20, 147);
