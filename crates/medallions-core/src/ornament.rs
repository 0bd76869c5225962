//! Decorative sub-patterns drawn on and around the rings.
//!
//! Each pattern has a pure geometry function (tested directly) and a draw
//! function that styles it inside its own [`StyleScope`](crate::paint::StyleScope).

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::color::{self, Rgb};
use crate::geom::{map_range, Point};
use crate::medallion::SPECTRUM_MAX;
use crate::paint::Painter;

/// Concentric bands in the dot ring
pub const DOT_BANDS: usize = 6;
pub const DOT_SIZE: f32 = 3.5;
/// Arc length between dot centers, in dot diameters
const DOT_PITCH: f32 = 3.0;

/// Inner zigzag vertices sit this far out from the inner bound
const ZIGZAG_DEPTH: f32 = 0.3;

pub const LAYERED_RING_WEIGHT: f32 = 3.0;
pub const ACCENT_RING_WEIGHT: f32 = 2.5;

pub const OCTAD_SLOTS: usize = 8;
const OCTAD_RED_SIZE: f32 = 10.0;
const OCTAD_YELLOW_SIZE: f32 = 6.0;
const OCTAD_BLACK_SIZE: f32 = 21.0;
const OCTAD_CORE_SIZE: f32 = 7.0;

pub const ARC_WEIGHT: f32 = 6.0;
const ARC_REACH: f32 = 1.5;
const ARC_SEGMENTS: usize = 24;
const ARC_SHADOW_DROP: f32 = 3.0;
const ARC_SHADOW_DARKEN: f32 = 0.25;

/// Stroke color and weight of a zigzag
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZigzagStyle {
    pub color: Rgb,
    pub weight: f32,
    pub spikes: usize,
}

/// Two-color set of nested unfilled rings
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayeredRings {
    pub colors: [Rgb; 2],
    pub count: usize,
}

pub const PINK_BLUE_RINGS: LayeredRings = LayeredRings {
    colors: [color::PINK, color::BLUE],
    count: 5,
};

pub const GREEN_RINGS: LayeredRings = LayeredRings {
    colors: [color::DARK_GREEN, color::LIGHT_GREEN],
    count: 4,
};

/// Dot centers for the band between `inner` and `outer`, grouped by band
pub fn dot_ring_positions(center: Point, outer: f32, inner: f32) -> Vec<Vec<Point>> {
    let band = (outer - inner) / DOT_BANDS as f32;
    (0..DOT_BANDS)
        .map(|j| {
            let radius = inner + j as f32 * band + band / 2.0;
            let count = dots_on_circle(radius);
            let step = TAU / count.max(1) as f32;
            (0..count)
                .map(|i| center.polar(radius, i as f32 * step))
                .collect()
        })
        .collect()
}

/// Dots that fit on a circle of `radius` at the dot pitch
pub fn dots_on_circle(radius: f32) -> usize {
    let count = (TAU * radius / (DOT_SIZE * DOT_PITCH)).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

pub fn draw_dot_ring<P: Painter>(p: &mut P, center: Point, outer: f32, inner: f32) {
    let mut p = p.scoped();
    p.no_stroke();
    p.fill(color::DOT_WHITE);
    for band in dot_ring_positions(center, outer, inner) {
        for dot in band {
            p.circle(dot, DOT_SIZE);
        }
    }
}

/// Closed zigzag: spike tips on `outer`, valleys 30% out from `inner`
pub fn zigzag_vertices(center: Point, outer: f32, inner: f32, spikes: usize) -> Vec<Point> {
    let step = TAU / spikes.max(1) as f32;
    let valley = inner + (outer - inner) * ZIGZAG_DEPTH;
    let mut vertices = Vec::with_capacity(spikes * 2);
    for k in 0..spikes {
        let angle = k as f32 * step;
        vertices.push(center.polar(outer, angle));
        vertices.push(center.polar(valley, angle + step / 2.0));
    }
    vertices
}

pub fn draw_zigzag<P: Painter>(p: &mut P, center: Point, outer: f32, inner: f32, style: ZigzagStyle) {
    let vertices = zigzag_vertices(center, outer, inner, style.spikes);
    let mut p = p.scoped();
    p.no_fill();
    p.stroke(style.color, style.weight);
    p.polyline(&vertices, true);
}

/// Ring diameters, largest first
pub fn layered_ring_diameters(outer: f32, inner: f32, count: usize) -> Vec<f32> {
    let step = (outer - inner) / count.max(1) as f32;
    (0..count).map(|j| outer * 2.0 - j as f32 * step).collect()
}

pub fn draw_layered_rings<P: Painter>(
    p: &mut P,
    center: Point,
    outer: f32,
    inner: f32,
    rings: LayeredRings,
) {
    let mut p = p.scoped();
    p.no_fill();
    for (j, size) in layered_ring_diameters(outer, inner, rings.count)
        .into_iter()
        .enumerate()
    {
        p.stroke(rings.colors[j % 2], LAYERED_RING_WEIGHT);
        p.circle(center, size);
    }
}

pub fn draw_accent_ring<P: Painter>(p: &mut P, center: Point, radius: f32) {
    let mut p = p.scoped();
    p.no_fill();
    p.stroke(color::ORANGE, ACCENT_RING_WEIGHT);
    p.circle(center, radius * 2.0);
}

/// Primitive used for every octad shape
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OctadShape {
    Circle,
    Square,
    Triangle,
}

impl OctadShape {
    /// Three-way threshold over the spectrum range
    pub fn from_spectrum(value: f32) -> Self {
        let v = if value.is_finite() { value } else { 0.0 };
        let bucket = map_range(v, 0.0, SPECTRUM_MAX, 0.0, 3.0).floor();
        if bucket < 1.0 {
            OctadShape::Circle
        } else if bucket < 2.0 {
            OctadShape::Square
        } else {
            OctadShape::Triangle
        }
    }

    /// Draw with current style; `heading` orients triangles outward
    fn draw<P: Painter>(self, p: &mut P, at: Point, size: f32, heading: f32) {
        match self {
            OctadShape::Circle => p.circle(at, size),
            OctadShape::Square => p.rect(at, size, size),
            OctadShape::Triangle => {
                let r = size / 2.0;
                p.triangle(
                    at.polar(r, heading),
                    at.polar(r, heading + TAU / 3.0),
                    at.polar(r, heading + 2.0 * TAU / 3.0),
                );
            }
        }
    }
}

/// Local angles of the three shapes in slot `i`: red, yellow, black
pub fn octad_angles(i: usize) -> [f32; 3] {
    let step = TAU / OCTAD_SLOTS as f32;
    let angle = i as f32 * step;
    [angle, angle + step / 3.0, angle + step * 2.0 / 3.0]
}

/// Octad on the accent ring, spun by `rotation` about `center`
pub fn draw_octad<P: Painter>(
    p: &mut P,
    center: Point,
    radius: f32,
    spectrum_value: f32,
    rotation: f32,
) {
    let shape = OctadShape::from_spectrum(spectrum_value);
    let origin = Point::default();

    let mut p = p.scoped();
    p.translate(center);
    p.rotate(rotation);
    p.no_stroke();

    for i in 0..OCTAD_SLOTS {
        let [red, yellow, black] = octad_angles(i);

        p.fill(color::OCTAD_RED);
        shape.draw(&mut *p, origin.polar(radius, red), OCTAD_RED_SIZE, red);

        p.fill(color::OCTAD_YELLOW);
        shape.draw(&mut *p, origin.polar(radius, yellow), OCTAD_YELLOW_SIZE, yellow);

        let at = origin.polar(radius, black);
        p.fill(color::OCTAD_BLACK);
        shape.draw(&mut *p, at, OCTAD_BLACK_SIZE, black);
        p.fill(color::OCTAD_CORE);
        shape.draw(&mut *p, at, OCTAD_CORE_SIZE, black);
    }
}

/// Angle of the arc end point: the stored start angle swung by the signal
pub fn arc_angle(start_angle: f32, spectrum_value: f32) -> f32 {
    let v = if spectrum_value.is_finite() {
        spectrum_value.clamp(0.0, SPECTRUM_MAX)
    } else {
        0.0
    };
    start_angle - FRAC_PI_4 + map_range(v, 0.0, SPECTRUM_MAX, -FRAC_PI_2, FRAC_PI_2)
}

/// Quadratic curve from `from` to `to`, bowed to one side
pub fn curve_points(from: Point, to: Point) -> Vec<Point> {
    let control = Point::new(
        (from.x + to.x) / 2.0 + (to.y - from.y) * 0.5,
        (from.y + to.y) / 2.0 - (to.x - from.x) * 0.5,
    );
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = i as f32 / ARC_SEGMENTS as f32;
            let u = 1.0 - t;
            from * (u * u) + control * (2.0 * u * t) + to * (t * t)
        })
        .collect()
}

/// Pink curved stroke from the center outward, over a dropped shadow
pub fn draw_accent_arc<P: Painter>(
    p: &mut P,
    center: Point,
    radius: f32,
    start_angle: f32,
    spectrum_value: f32,
) {
    let end = center.polar(radius * ARC_REACH, arc_angle(start_angle, spectrum_value));
    let drop = Point::new(0.0, ARC_SHADOW_DROP);

    let mut p = p.scoped();
    p.no_fill();

    let shadow = color::ARC_PINK.lerp(Rgb::BLACK, ARC_SHADOW_DARKEN);
    p.stroke(shadow, ARC_WEIGHT);
    p.polyline(&curve_points(center + drop, end + drop), false);

    p.stroke(color::ARC_PINK, ARC_WEIGHT);
    p.polyline(&curve_points(center, end), false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Geometry, Recorder};
    use approx::assert_relative_eq;

    #[test]
    fn dot_counts_follow_arc_length() {
        let bands = dot_ring_positions(Point::default(), 90.0, 49.5);
        assert_eq!(bands.len(), DOT_BANDS);

        let band = (90.0 - 49.5) / 6.0;
        for (j, dots) in bands.iter().enumerate() {
            let radius = 49.5 + j as f32 * band + band / 2.0;
            let expected = (TAU * radius / 10.5).floor() as usize;
            assert_eq!(dots.len(), expected);
            for dot in dots {
                assert_relative_eq!(dot.distance(Point::default()), radius, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn tiny_band_has_no_dots() {
        assert_eq!(dots_on_circle(0.5), 0);
        assert!(dot_ring_positions(Point::default(), 1.0, 0.0)
            .iter()
            .all(|band| band.is_empty()));
    }

    #[test]
    fn zigzag_alternates_tip_and_valley() {
        let center = Point::new(10.0, 20.0);
        let vertices = zigzag_vertices(center, 45.0, 22.5, 16);
        assert_eq!(vertices.len(), 32);

        let valley = 22.5 + (45.0 - 22.5) * 0.3;
        for (i, v) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 45.0 } else { valley };
            assert_relative_eq!(v.distance(center), expected, epsilon = 1e-3);
        }

        let half_step = TAU / 32.0;
        let second = vertices[1] - center;
        assert_relative_eq!(second.y.atan2(second.x), half_step, epsilon = 1e-4);
    }

    #[test]
    fn layered_rings_shrink_linearly() {
        let sizes = layered_ring_diameters(45.0, 22.5, 5);
        assert_eq!(sizes.len(), 5);
        assert_relative_eq!(sizes[0], 90.0);
        assert_relative_eq!(sizes[4], 90.0 - 4.0 * 4.5, epsilon = 1e-4);

        let mut rec = Recorder::new();
        draw_layered_rings(&mut rec, Point::default(), 22.5, 13.5, GREEN_RINGS);
        let strokes: Vec<_> = rec.shapes().map(|s| s.style.stroke.unwrap().0).collect();
        assert_eq!(
            strokes,
            vec![color::DARK_GREEN, color::LIGHT_GREEN, color::DARK_GREEN, color::LIGHT_GREEN]
        );
        assert!(rec.shapes().all(|s| s.style.fill.is_none()));
    }

    #[test]
    fn octad_thresholds() {
        assert_eq!(OctadShape::from_spectrum(0.0), OctadShape::Circle);
        assert_eq!(OctadShape::from_spectrum(84.0), OctadShape::Circle);
        assert_eq!(OctadShape::from_spectrum(85.0), OctadShape::Square);
        assert_eq!(OctadShape::from_spectrum(169.0), OctadShape::Square);
        assert_eq!(OctadShape::from_spectrum(170.0), OctadShape::Triangle);
        assert_eq!(OctadShape::from_spectrum(255.0), OctadShape::Triangle);
        assert_eq!(OctadShape::from_spectrum(f32::NAN), OctadShape::Circle);
    }

    #[test]
    fn octad_draws_four_shapes_per_slot_under_rotation() {
        let mut rec = Recorder::new();
        let center = Point::new(300.0, 200.0);
        draw_octad(&mut rec, center, 105.0, 100.0, 0.5);

        let shapes: Vec<_> = rec.shapes().collect();
        assert_eq!(shapes.len(), OCTAD_SLOTS * 4);
        assert!(shapes
            .iter()
            .all(|s| matches!(s.geometry, Geometry::Rect { .. })));
        for s in &shapes {
            assert_relative_eq!(s.transform.rotation, 0.5);
            assert_relative_eq!(s.world_center().distance(center), 105.0, epsilon = 1e-2);
        }
        assert_eq!(rec.depth(), 0);
    }

    #[test]
    fn arc_angle_swings_half_pi_each_way() {
        assert_relative_eq!(arc_angle(1.0, 0.0), 1.0 - FRAC_PI_4 - FRAC_PI_2, epsilon = 1e-5);
        assert_relative_eq!(arc_angle(1.0, 127.5), 1.0 - FRAC_PI_4, epsilon = 1e-5);
        assert_relative_eq!(arc_angle(1.0, 255.0), 1.0 - FRAC_PI_4 + FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn curve_hits_both_endpoints() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(100.0, 0.0);
        let pts = curve_points(from, to);
        assert_eq!(pts.len(), ARC_SEGMENTS + 1);
        assert_eq!(pts[0], from);
        assert_relative_eq!(pts[ARC_SEGMENTS].x, 100.0, epsilon = 1e-4);
        // bowed upward on screen for a left-to-right stroke
        assert!(pts[ARC_SEGMENTS / 2].y < 0.0);
    }

    #[test]
    fn arc_shadow_drawn_first_and_dropped() {
        let mut rec = Recorder::new();
        draw_accent_arc(&mut rec, Point::new(50.0, 50.0), 90.0, 0.0, 0.0);
        let shapes: Vec<_> = rec.shapes().collect();
        assert_eq!(shapes.len(), 2);

        let (shadow_color, _) = shapes[0].style.stroke.unwrap();
        let (main_color, weight) = shapes[1].style.stroke.unwrap();
        assert_eq!(main_color, color::ARC_PINK);
        assert_ne!(shadow_color, color::ARC_PINK);
        assert_eq!(weight, ARC_WEIGHT);

        let start = |s: &crate::paint::Shape| match &s.geometry {
            Geometry::Polyline { points, closed } => {
                assert!(!closed);
                points[0]
            }
            other => panic!("expected polyline, got {other:?}"),
        };
        assert_relative_eq!(start(shapes[0]).y - start(shapes[1]).y, 3.0);
    }
}
