//! `Painter` backend drawing through a nannou `Draw`.

use medallions_core::{Painter, Point, Rgb};
use nannou::color::{rgb8, Srgb};
use nannou::geom::Rect;
use nannou::Draw;

#[derive(Clone)]
struct State {
    draw: Draw,
    fill: Option<Rgb>,
    stroke: Option<(Rgb, f32)>,
}

/// Draws in canvas space: origin at the window's top-left, y pointing down.
pub struct NannouPainter {
    root: Draw,
    state: State,
    saved: Vec<State>,
}

impl NannouPainter {
    pub fn new(draw: &Draw, bounds: Rect) -> Self {
        let canvas = draw.x_y(bounds.left(), bounds.top()).scale_y(-1.0);
        Self {
            root: draw.clone(),
            state: State {
                draw: canvas,
                fill: Some(Rgb::WHITE),
                stroke: None,
            },
            saved: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    fn is_invisible(&self) -> bool {
        self.state.fill.is_none() && self.state.stroke.is_none()
    }
}

fn srgb(c: Rgb) -> Srgb<u8> {
    rgb8(c.r, c.g, c.b)
}

impl Painter for NannouPainter {
    fn push_style(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn pop_style(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => log::warn!("pop_style without matching push_style"),
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.state.fill = Some(color);
    }

    fn no_fill(&mut self) {
        self.state.fill = None;
    }

    fn stroke(&mut self, color: Rgb, weight: f32) {
        self.state.stroke = Some((color, weight));
    }

    fn no_stroke(&mut self) {
        self.state.stroke = None;
    }

    fn translate(&mut self, offset: Point) {
        self.state.draw = self.state.draw.x_y(offset.x, offset.y);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.draw = self.state.draw.rotate(radians);
    }

    fn background(&mut self, color: Rgb) {
        self.root.background().color(srgb(color));
    }

    fn ellipse(&mut self, center: Point, w: f32, h: f32) {
        if self.is_invisible() {
            return;
        }
        let mut shape = self.state.draw.ellipse().x_y(center.x, center.y).w_h(w, h);
        shape = match self.state.fill {
            Some(c) => shape.color(srgb(c)),
            None => shape.no_fill(),
        };
        if let Some((c, weight)) = self.state.stroke {
            shape.stroke_weight(weight).stroke(srgb(c));
        }
    }

    fn rect(&mut self, center: Point, w: f32, h: f32) {
        if self.is_invisible() {
            return;
        }
        let mut shape = self.state.draw.rect().x_y(center.x, center.y).w_h(w, h);
        shape = match self.state.fill {
            Some(c) => shape.color(srgb(c)),
            None => shape.no_fill(),
        };
        if let Some((c, weight)) = self.state.stroke {
            shape.stroke_weight(weight).stroke(srgb(c));
        }
    }

    fn triangle(&mut self, a: Point, b: Point, c: Point) {
        if self.is_invisible() {
            return;
        }
        let mut shape = self
            .state
            .draw
            .tri()
            .points([a.x, a.y], [b.x, b.y], [c.x, c.y]);
        shape = match self.state.fill {
            Some(col) => shape.color(srgb(col)),
            None => shape.no_fill(),
        };
        if let Some((col, weight)) = self.state.stroke {
            shape.stroke_weight(weight).stroke(srgb(col));
        }
    }

    fn polyline(&mut self, points: &[Point], closed: bool) {
        if points.len() < 2 {
            return;
        }
        let vertices: Vec<[f32; 2]> = points.iter().map(|p| [p.x, p.y]).collect();

        if let (true, Some(c)) = (closed, self.state.fill) {
            self.state
                .draw
                .polygon()
                .points(vertices.clone())
                .color(srgb(c));
        }

        if let Some((c, weight)) = self.state.stroke {
            let mut path = vertices;
            if closed {
                path.push(path[0]);
            }
            self.state
                .draw
                .polyline()
                .weight(weight)
                .points(path)
                .color(srgb(c));
        }
    }
}
