//! Immutable pattern configuration shared by the layout engine and compositor.
//!
//! Values are read once; a change means building a new layout from a new
//! [`PatternConfig`].

use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb};

/// Default number of spectrum bins the driver expects per frame
pub const DEFAULT_SPECTRUM_BINS: usize = 1024;

/// Smallest usable distance between tile centers, in canvas units
pub const MIN_PITCH: f32 = 1.0;

/// Everything that shapes the composition
///
/// Built once and passed by reference; changing any value means building
/// a new layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Size of ring 0, shared by every medallion
    pub circle_diameter: f32,
    /// Gap between neighbouring medallions
    pub spacing: f32,
    /// Global layout shift
    pub offset_x: f32,
    pub offset_y: f32,
    /// Ring 0 fill for special medallions
    pub special_color: Rgb,
    pub red_line_weight: f32,
    pub red_line_spikes: usize,
    pub gold_line_weight: f32,
    pub gold_line_spikes: usize,
    /// Distance between ring 0 and the orange accent ring
    pub accent_ring_gap: f32,
    pub spectrum_bins: usize,
    pub background: Rgb,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            circle_diameter: 180.0,
            spacing: 35.0,
            offset_x: -10.0,
            offset_y: -20.0,
            special_color: color::SPECIAL_YELLOW,
            red_line_weight: 0.8,
            red_line_spikes: 130,
            gold_line_weight: 3.0,
            gold_line_spikes: 16,
            accent_ring_gap: 15.0,
            spectrum_bins: DEFAULT_SPECTRUM_BINS,
            background: color::BACKGROUND,
        }
    }
}

impl PatternConfig {
    /// Distance between neighbouring tile centers
    pub fn pitch(&self) -> f32 {
        self.circle_diameter + self.spacing
    }

    /// Radius of the orange accent ring and the octad
    pub fn accent_radius(&self) -> f32 {
        self.circle_diameter / 2.0 + self.accent_ring_gap
    }

    /// Copy with values that would stall the layout or the compositor
    /// replaced by defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.circle_diameter.is_finite() && self.circle_diameter > 0.0) {
            log::warn!(
                "circle_diameter {} is not usable, using {}",
                self.circle_diameter,
                defaults.circle_diameter
            );
            self.circle_diameter = defaults.circle_diameter;
        }
        if !(self.spacing.is_finite() && self.pitch() >= MIN_PITCH) {
            log::warn!("spacing {} is not usable, using {}", self.spacing, defaults.spacing);
            self.spacing = defaults.spacing;
        }
        if !self.offset_x.is_finite() {
            self.offset_x = defaults.offset_x;
        }
        if !self.offset_y.is_finite() {
            self.offset_y = defaults.offset_y;
        }
        if self.red_line_spikes == 0 {
            self.red_line_spikes = defaults.red_line_spikes;
        }
        if self.gold_line_spikes == 0 {
            self.gold_line_spikes = defaults.gold_line_spikes;
        }
        if self.spectrum_bins == 0 {
            self.spectrum_bins = defaults.spectrum_bins;
        }
        self
    }
}
