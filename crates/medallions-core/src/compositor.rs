//! Per-frame composition of every medallion in a fixed layer order.
//!
//! The compositor is a set of free functions over a read-only [`Frame`];
//! it owns no state between frames.

use crate::color;
use crate::config::PatternConfig;
use crate::medallion::{Medallion, RingOrnament, RING_COUNT};
use crate::ornament::{self, ZigzagStyle, GREEN_RINGS, PINK_BLUE_RINGS};
use crate::paint::Painter;
use crate::signal::Spectrum;

/// Draw passes, back to front
///
/// Every medallion is drawn for one layer before any medallion is drawn
/// for the next, so accents, octads and arcs are never covered by a
/// neighbour's ring fills.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Ring fills with their dot, zigzag and layered-ring ornaments
    Rings,
    AccentRings,
    Octads,
    /// Red zigzags of the special medallions
    RedZigzags,
    Arcs,
}

impl Layer {
    pub const ORDER: [Layer; 5] = [
        Layer::Rings,
        Layer::AccentRings,
        Layer::Octads,
        Layer::RedZigzags,
        Layer::Arcs,
    ];
}

/// Read-only view of everything one frame needs
pub struct Frame<'a> {
    pub medallions: &'a [Medallion],
    pub spectrum: &'a Spectrum,
    pub rotation: f32,
    pub config: &'a PatternConfig,
}

impl Frame<'_> {
    /// Spectrum value bound to the medallion at `index`
    pub fn value_for(&self, index: usize) -> f32 {
        self.spectrum.value_for(index)
    }
}

/// Clear the canvas and draw all layers
pub fn compose_frame<P: Painter>(p: &mut P, frame: &Frame<'_>) {
    p.background(frame.config.background);
    for layer in Layer::ORDER {
        draw_layer(p, frame, layer);
    }
}

pub fn draw_layer<P: Painter>(p: &mut P, frame: &Frame<'_>, layer: Layer) {
    let config = frame.config;
    for (i, m) in frame.medallions.iter().enumerate() {
        let value = frame.value_for(i);
        match layer {
            Layer::Rings => draw_rings(p, m, value, config),
            Layer::AccentRings => ornament::draw_accent_ring(p, m.center, config.accent_radius()),
            Layer::Octads => ornament::draw_octad(
                p,
                m.center,
                config.accent_radius(),
                value,
                frame.rotation,
            ),
            Layer::RedZigzags if m.is_special => {
                let rings = m.rings_at(value);
                let style = ZigzagStyle {
                    color: color::RED_LINE,
                    weight: config.red_line_weight,
                    spikes: config.red_line_spikes,
                };
                ornament::draw_zigzag(p, m.center, rings.radius(0), rings.radius(1), style);
            }
            Layer::Arcs if m.has_arc => {
                ornament::draw_accent_arc(p, m.center, m.diameter / 2.0, m.start_angle, value)
            }
            Layer::RedZigzags | Layer::Arcs => {}
        }
    }
}

/// Seven ring fills, each followed by the ornaments attached to it
pub fn draw_rings<P: Painter>(p: &mut P, m: &Medallion, value: f32, config: &PatternConfig) {
    let rings = m.rings_at(value);
    let ornaments = m.ornaments();

    for i in 0..RING_COUNT {
        {
            let mut p = p.scoped();
            p.no_stroke();
            p.fill(m.ring_color(i, config.special_color));
            p.circle(m.center, rings.diameter(i));
        }

        for ornament in ornaments.iter().filter(|o| o.ring() == i) {
            let outer = rings.radius(i);
            let inner = rings.radius(i + 1);
            match ornament {
                RingOrnament::DotRing => ornament::draw_dot_ring(p, m.center, outer, inner),
                RingOrnament::GoldZigzag => {
                    let style = ZigzagStyle {
                        color: color::GOLD,
                        weight: config.gold_line_weight,
                        spikes: config.gold_line_spikes,
                    };
                    ornament::draw_zigzag(p, m.center, outer, inner, style);
                }
                RingOrnament::PinkBlueRings => {
                    ornament::draw_layered_rings(p, m.center, outer, inner, PINK_BLUE_RINGS)
                }
                RingOrnament::GreenRings => {
                    ornament::draw_layered_rings(p, m.center, outer, inner, GREEN_RINGS)
                }
            }
        }
    }
}
