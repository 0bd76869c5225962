//! One tile of the composition and its randomized recipe.
//!
//! A medallion is plain data: position, diameter, a three-color palette and
//! the ornament choices sampled once per layout. Ring sizes are derived per
//! frame from the bound spectrum value.

use std::f32::consts::TAU;

use rand::Rng;

use crate::color::Rgb;
use crate::geom::Point;

/// Ring sizes as fractions of the medallion diameter, outermost first
pub const RING_RATIOS: [f32; RING_COUNT] = [1.0, 0.55, 0.5, 0.25, 0.15, 0.10, 0.05];
pub const RING_COUNT: usize = 7;
pub const PALETTE_LEN: usize = 3;

/// Largest value a spectrum bin can hold
pub const SPECTRUM_MAX: f32 = 255.0;

/// Ornament drawn between rings 2 and 3 (and 3 and 4)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StyleVariant {
    ZigzagStyle,
    LayeredRingStyle,
}

impl StyleVariant {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            StyleVariant::ZigzagStyle
        } else {
            StyleVariant::LayeredRingStyle
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Medallion {
    pub center: Point,
    pub diameter: f32,
    pub palette: [Rgb; PALETTE_LEN],
    pub start_angle: f32,
    pub has_arc: bool,
    pub style: StyleVariant,
    pub is_special: bool,
}

impl Medallion {
    /// Fresh ordinary medallion with a sampled recipe
    pub fn sample<R: Rng + ?Sized>(center: Point, diameter: f32, rng: &mut R) -> Self {
        Self {
            center,
            diameter,
            palette: sample_palette(rng),
            start_angle: rng.random_range(0.0..TAU),
            has_arc: rng.random_bool(0.5),
            style: StyleVariant::sample(rng),
            is_special: false,
        }
    }

    /// Unscaled ring sizes (diameters)
    pub fn base_rings(&self) -> RingSizes {
        RingSizes::new(self.diameter, 1.0)
    }

    /// Ring sizes breathing with the bound spectrum value
    pub fn rings_at(&self, spectrum_value: f32) -> RingSizes {
        RingSizes::new(self.diameter, scale_factor(spectrum_value))
    }

    /// Fill for ring `i`
    pub fn ring_color(&self, i: usize, special_color: Rgb) -> Rgb {
        if i == 0 && self.is_special {
            special_color
        } else {
            self.palette[i % PALETTE_LEN]
        }
    }

    /// Ornaments composed on top of ring fills, in draw order
    pub fn ornaments(&self) -> Vec<RingOrnament> {
        let mut out = Vec::with_capacity(3);
        if !self.is_special {
            out.push(RingOrnament::DotRing);
        }
        match self.style {
            StyleVariant::ZigzagStyle => out.push(RingOrnament::GoldZigzag),
            StyleVariant::LayeredRingStyle => {
                out.push(RingOrnament::PinkBlueRings);
                out.push(RingOrnament::GreenRings);
            }
        }
        out
    }
}

/// Decoration attached to a ring band
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RingOrnament {
    /// Between ring 0 and ring 1
    DotRing,
    /// Between ring 2 and ring 3
    GoldZigzag,
    /// Between ring 2 and ring 3
    PinkBlueRings,
    /// Between ring 3 and ring 4
    GreenRings,
}

impl RingOrnament {
    /// Ring index the ornament is drawn after
    pub fn ring(&self) -> usize {
        match self {
            RingOrnament::DotRing => 0,
            RingOrnament::GoldZigzag | RingOrnament::PinkBlueRings => 2,
            RingOrnament::GreenRings => 3,
        }
    }
}

/// `1 + v / 255`, with `v` clamped to the spectrum range
pub fn scale_factor(spectrum_value: f32) -> f32 {
    let v = if spectrum_value.is_finite() {
        spectrum_value.clamp(0.0, SPECTRUM_MAX)
    } else {
        0.0
    };
    1.0 + v / SPECTRUM_MAX
}

/// The seven ring diameters of one medallion
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingSizes([f32; RING_COUNT]);

impl RingSizes {
    pub fn new(diameter: f32, scale: f32) -> Self {
        Self(RING_RATIOS.map(|ratio| diameter * ratio * scale))
    }

    pub fn diameter(&self, i: usize) -> f32 {
        self.0[i]
    }

    pub fn radius(&self, i: usize) -> f32 {
        self.0[i] / 2.0
    }
}

/// Entry 0 is a random color, entries 1 and 2 random opaque grays
pub fn sample_palette<R: Rng + ?Sized>(rng: &mut R) -> [Rgb; PALETTE_LEN] {
    [
        Rgb::new(rng.random(), rng.random(), rng.random()),
        Rgb::gray(rng.random()),
        Rgb::gray(rng.random()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ordinary(style: StyleVariant) -> Medallion {
        let mut rng = StdRng::seed_from_u64(7);
        Medallion {
            style,
            ..Medallion::sample(Point::new(90.0, 90.0), 180.0, &mut rng)
        }
    }

    #[test]
    fn scale_factor_bounds() {
        assert_eq!(scale_factor(0.0), 1.0);
        assert_eq!(scale_factor(255.0), 2.0);
        assert_eq!(scale_factor(1000.0), 2.0);
        assert_eq!(scale_factor(f32::NAN), 1.0);
    }

    #[test]
    fn rings_scale_together() {
        let m = ordinary(StyleVariant::ZigzagStyle);
        let base = m.base_rings();
        for v in [0.0, 51.0, 127.5, 255.0] {
            let scaled = m.rings_at(v);
            for i in 0..RING_COUNT {
                assert_relative_eq!(
                    scaled.diameter(i),
                    base.diameter(i) * (1.0 + v / 255.0),
                    epsilon = 1e-4
                );
            }
        }
        assert_relative_eq!(m.rings_at(255.0).radius(0), 180.0);
    }

    #[test]
    fn special_ring_zero_uses_special_color() {
        let special_color = Rgb::new(1, 2, 3);
        let mut m = ordinary(StyleVariant::ZigzagStyle);
        assert_eq!(m.ring_color(0, special_color), m.palette[0]);

        m.is_special = true;
        assert_eq!(m.ring_color(0, special_color), special_color);
        assert_eq!(m.ring_color(1, special_color), m.palette[1]);
        assert_eq!(m.ring_color(3, special_color), m.palette[0]);
    }

    #[test]
    fn ornament_plan_per_variant() {
        let zig = ordinary(StyleVariant::ZigzagStyle);
        assert_eq!(zig.ornaments(), vec![RingOrnament::DotRing, RingOrnament::GoldZigzag]);

        let mut layered = ordinary(StyleVariant::LayeredRingStyle);
        assert_eq!(
            layered.ornaments(),
            vec![
                RingOrnament::DotRing,
                RingOrnament::PinkBlueRings,
                RingOrnament::GreenRings
            ]
        );

        layered.is_special = true;
        assert_eq!(
            layered.ornaments(),
            vec![RingOrnament::PinkBlueRings, RingOrnament::GreenRings]
        );
    }

    #[test]
    fn palette_grays_are_neutral() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            let palette = sample_palette(&mut rng);
            for gray in &palette[1..] {
                assert_eq!(gray.r, gray.g);
                assert_eq!(gray.g, gray.b);
            }
        }
    }

    #[test]
    fn sampled_recipe_is_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut arcs = 0;
        for _ in 0..200 {
            let m = Medallion::sample(Point::default(), 180.0, &mut rng);
            assert!((0.0..TAU).contains(&m.start_angle));
            assert!(!m.is_special);
            if m.has_arc {
                arcs += 1;
            }
        }
        assert!(arcs > 50 && arcs < 150, "arc flag should be roughly fair, got {arcs}");
    }
}
