//! Drawing primitives consumed by the compositor.
//!
//! The compositor never rasterizes anything itself. It talks to a
//! [`Painter`], which keeps a stack of style/transform states in the same
//! way an immediate-mode canvas does. Style changes are made inside a
//! [`StyleScope`], which restores the previous state when dropped.

use std::ops::{Deref, DerefMut};

use crate::color::Rgb;
use crate::geom::Point;

/// Immediate-mode drawing backend
///
/// Shapes are drawn with the current fill and stroke. `translate` and
/// `rotate` compose onto the current transform and are part of the state
/// saved by `push_style`.
pub trait Painter {
    fn push_style(&mut self);
    fn pop_style(&mut self);

    fn fill(&mut self, color: Rgb);
    fn no_fill(&mut self);
    fn stroke(&mut self, color: Rgb, weight: f32);
    fn no_stroke(&mut self);

    fn translate(&mut self, offset: Point);
    fn rotate(&mut self, radians: f32);

    /// Clear the whole canvas, ignores the current transform
    fn background(&mut self, color: Rgb);

    fn ellipse(&mut self, center: Point, w: f32, h: f32);
    fn rect(&mut self, center: Point, w: f32, h: f32);
    fn triangle(&mut self, a: Point, b: Point, c: Point);
    fn polyline(&mut self, points: &[Point], closed: bool);

    fn circle(&mut self, center: Point, diameter: f32) {
        self.ellipse(center, diameter, diameter);
    }

    /// Save the current style; it is restored when the returned scope drops
    fn scoped(&mut self) -> StyleScope<'_, Self>
    where
        Self: Sized,
    {
        StyleScope::new(self)
    }
}

/// Guard returned by [`Painter::scoped`]
pub struct StyleScope<'a, P: Painter + ?Sized> {
    painter: &'a mut P,
}

impl<'a, P: Painter + ?Sized> StyleScope<'a, P> {
    pub fn new(painter: &'a mut P) -> Self {
        painter.push_style();
        Self { painter }
    }
}

impl<P: Painter + ?Sized> Deref for StyleScope<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.painter
    }
}

impl<P: Painter + ?Sized> DerefMut for StyleScope<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.painter
    }
}

impl<P: Painter + ?Sized> Drop for StyleScope<'_, P> {
    fn drop(&mut self) {
        self.painter.pop_style();
    }
}

/// Translation followed by rotation, in canvas space
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Transform {
    pub offset: Point,
    pub rotation: f32,
}

impl Transform {
    pub fn apply(&self, local: Point) -> Point {
        let (sin, cos) = self.rotation.sin_cos();
        Point::new(
            self.offset.x + local.x * cos - local.y * sin,
            self.offset.y + local.x * sin + local.y * cos,
        )
    }

    fn translated(self, by: Point) -> Self {
        let moved = self.apply(by);
        Self {
            offset: moved,
            rotation: self.rotation,
        }
    }
}

/// Fill and stroke in effect for a shape
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Rgb>,
    pub stroke: Option<(Rgb, f32)>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Rgb::WHITE),
            stroke: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Ellipse { center: Point, w: f32, h: f32 },
    Rect { center: Point, w: f32, h: f32 },
    Triangle([Point; 3]),
    Polyline { points: Vec<Point>, closed: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub style: Style,
    pub transform: Transform,
}

impl Shape {
    /// Anchor point of the shape in canvas space
    pub fn world_center(&self) -> Point {
        let local = match &self.geometry {
            Geometry::Ellipse { center, .. } | Geometry::Rect { center, .. } => *center,
            Geometry::Triangle(pts) => Point::new(
                (pts[0].x + pts[1].x + pts[2].x) / 3.0,
                (pts[0].y + pts[1].y + pts[2].y) / 3.0,
            ),
            Geometry::Polyline { points, .. } => points.first().copied().unwrap_or_default(),
        };
        self.transform.apply(local)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Background(Rgb),
    Shape(Shape),
}

#[derive(Copy, Clone, Default)]
struct State {
    style: Style,
    transform: Transform,
}

/// Painter that records every call instead of drawing
///
/// Each recorded shape carries the fill, stroke and transform that were
/// active when it was drawn.
#[derive(Default)]
pub struct Recorder {
    commands: Vec<DrawCmd>,
    current: State,
    saved: Vec<State>,
    /// Number of `pop_style` calls with nothing to restore
    unbalanced_pops: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Shape(shape) => Some(shape),
            DrawCmd::Background(_) => None,
        })
    }

    /// Open style scopes
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn unbalanced_pops(&self) -> usize {
        self.unbalanced_pops
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.current = State::default();
        self.saved.clear();
        self.unbalanced_pops = 0;
    }

    fn record(&mut self, geometry: Geometry) {
        self.commands.push(DrawCmd::Shape(Shape {
            geometry,
            style: self.current.style,
            transform: self.current.transform,
        }));
    }
}

impl Painter for Recorder {
    fn push_style(&mut self) {
        self.saved.push(self.current);
    }

    fn pop_style(&mut self) {
        match self.saved.pop() {
            Some(state) => self.current = state,
            None => self.unbalanced_pops += 1,
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.current.style.fill = Some(color);
    }

    fn no_fill(&mut self) {
        self.current.style.fill = None;
    }

    fn stroke(&mut self, color: Rgb, weight: f32) {
        self.current.style.stroke = Some((color, weight));
    }

    fn no_stroke(&mut self) {
        self.current.style.stroke = None;
    }

    fn translate(&mut self, offset: Point) {
        self.current.transform = self.current.transform.translated(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.current.transform.rotation += radians;
    }

    fn background(&mut self, color: Rgb) {
        self.commands.push(DrawCmd::Background(color));
    }

    fn ellipse(&mut self, center: Point, w: f32, h: f32) {
        self.record(Geometry::Ellipse { center, w, h });
    }

    fn rect(&mut self, center: Point, w: f32, h: f32) {
        self.record(Geometry::Rect { center, w, h });
    }

    fn triangle(&mut self, a: Point, b: Point, c: Point) {
        self.record(Geometry::Triangle([a, b, c]));
    }

    fn polyline(&mut self, points: &[Point], closed: bool) {
        self.record(Geometry::Polyline {
            points: points.to_vec(),
            closed,
        });
    }
}
