//! Canvas geometry.
//!
//! All core coordinates are canvas coordinates: origin at the top-left
//! corner, y growing downward.

use std::ops::{Add, Mul, Sub};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along `angle` (radians, clockwise on screen)
    pub fn polar(self, radius: f32, angle: f32) -> Point {
        Point::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }

    pub fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Drawable area size in canvas units
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Linear remap of `value` from `[in_min, in_max]` to `[out_min, out_max]`, unclamped
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn polar_follows_screen_angles() {
        let p = Point::new(10.0, 10.0).polar(5.0, FRAC_PI_2);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 15.0, epsilon = 1e-5);
    }

    #[test]
    fn map_range_endpoints() {
        assert_relative_eq!(map_range(0.0, 0.0, 255.0, -FRAC_PI_2, FRAC_PI_2), -FRAC_PI_2);
        assert_relative_eq!(map_range(255.0, 0.0, 255.0, -FRAC_PI_2, FRAC_PI_2), FRAC_PI_2);
        assert_relative_eq!(map_range(127.5, 0.0, 255.0, -PI, PI), 0.0, epsilon = 1e-5);
    }
}
