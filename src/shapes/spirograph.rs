//! Spirograph - hypotrochoid curves
//!
//! A hypotrochoid is traced by a pen fixed to a small circle rolling
//! inside a larger one.
//!
//! ## Parametric Equation
//! ```text
//! diff = inner - outer
//! x(θ) = diff * cos(θ) + distance * cos(diff / outer * θ) + width / 2
//! y(θ) = diff * sin(θ) - distance * sin(diff / outer * θ) + height / 2
//! ```
//!
//! The curve closes after `ceil(2π * |outer| / gcd(inner, outer))` radians;
//! `amount` draws a fraction of that.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::ShapeError;
use crate::animation::{lerp, Interpolate};
use crate::geometry::{BoundingBox, Point};
use crate::path::Path;

/// Angle between consecutive curve points, in radians
pub const DEFAULT_STEP: f64 = 0.01;

/// Greatest common divisor of the magnitudes of `a` and `b`
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.abs();
    let mut b = b.abs();
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spirograph {
    pub inner_radius: i32,
    pub outer_radius: i32,
    /// Distance of the pen from the rolling circle's center
    pub distance: i32,
    /// Fraction of the full curve to draw
    pub amount: f64,
}

impl Spirograph {
    pub fn new(inner_radius: i32, outer_radius: i32, distance: i32, amount: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            distance,
            amount,
        }
    }

    /// Largest θ the curve is drawn to
    pub fn end_angle(&self) -> Result<f64, ShapeError> {
        if self.outer_radius == 0 {
            return Err(ShapeError::invalid(
                "Spirograph",
                "outer radius must not be zero",
            ));
        }

        let divisor = gcd(i64::from(self.inner_radius), i64::from(self.outer_radius)) as f64;
        // The period depends only on the radius magnitudes
        let outer = f64::from(self.outer_radius).abs();
        Ok((TAU * outer / divisor).ceil() * self.amount)
    }

    /// Point on the curve at `theta`
    pub fn point_at(&self, theta: f64, bounds: BoundingBox) -> Point {
        let outer = f64::from(self.outer_radius);
        let distance = f64::from(self.distance);
        let difference = f64::from(self.inner_radius) - outer;
        let ratio = difference / outer;

        Point::new(
            difference * theta.cos() + distance * (ratio * theta).cos() + bounds.width / 2.0,
            difference * theta.sin() - distance * (ratio * theta).sin() + bounds.height / 2.0,
        )
    }

    /// Number of steps of size `step` from 0 up to and including `end`
    fn step_count(end: f64, step: f64) -> usize {
        // The epsilon keeps `end` itself when `end / step` lands a hair short
        (end / step + 1e-9).floor() as usize
    }

    /// The curve with the default step
    pub fn path(&self, bounds: BoundingBox) -> Result<Path, ShapeError> {
        self.path_with_step(bounds, DEFAULT_STEP)
    }

    /// The curve sampled every `step` radians
    ///
    /// Smaller steps give smoother curves and more points. θ runs from 0
    /// through `end_angle()` inclusive; a negative `amount` draws nothing.
    pub fn path_with_step(&self, bounds: BoundingBox, step: f64) -> Result<Path, ShapeError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(ShapeError::invalid(
                "Spirograph",
                format!("step must be a positive number, got {step}"),
            ));
        }

        let end = self.end_angle()?;
        let mut path = Path::new();
        if !(end >= 0.0) {
            return Ok(path);
        }

        let steps = Self::step_count(end, step);
        log::trace!("Spirograph: {} points up to θ = {end}", steps + 1);

        path.move_to(self.point_at(0.0, bounds));
        for i in 1..=steps {
            path.line_to(self.point_at(i as f64 * step, bounds));
        }
        Ok(path)
    }
}

impl Default for Spirograph {
    fn default() -> Self {
        Self::new(125, 75, 25, 1.0)
    }
}

impl Interpolate for Spirograph {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            inner_radius: self.inner_radius.interpolate(&other.inner_radius, t),
            outer_radius: self.outer_radius.interpolate(&other.outer_radius, t),
            distance: self.distance.interpolate(&other.distance, t),
            amount: lerp(self.amount, other.amount, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(125, 75), 25);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(0, 75), 75);
        assert_eq!(gcd(-12, 18), 6);
    }

    #[test]
    fn test_end_angle() {
        // ceil(2π * 75 / 25) = ceil(6π) = 19
        let spiro = Spirograph::new(125, 75, 25, 1.0);
        assert_eq!(spiro.end_angle().unwrap(), 19.0);

        let half = Spirograph::new(125, 75, 25, 0.5);
        assert_eq!(half.end_angle().unwrap(), 9.5);
    }

    #[test]
    fn test_point_count_and_start() {
        let bounds = BoundingBox::square(300.0);
        let path = Spirograph::new(125, 75, 25, 1.0).path(bounds).unwrap();

        // θ = 0, 0.01, ..., 19.00
        assert_eq!(path.len(), 1901);
        assert_eq!(path.subpath_count(), 1);

        // cos(0) = 1 and sin(0) = 0: x = diff + distance + w / 2
        let PathSegment::MoveTo(first) = path.segments()[0] else {
            panic!("curve must start with a move");
        };
        assert!((first.x - (50.0 + 25.0 + 150.0)).abs() < 1e-9);
        assert!((first.y - 150.0).abs() < 1e-9);
        assert!(path.segments()[1..]
            .iter()
            .all(|s| matches!(s, PathSegment::LineTo(_))));
    }

    #[test]
    fn test_configurable_step() {
        let bounds = BoundingBox::square(300.0);
        let spiro = Spirograph::default();
        let coarse = spiro.path_with_step(bounds, 0.1).unwrap();
        assert_eq!(coarse.len(), 191);

        assert!(spiro.path_with_step(bounds, 0.0).is_err());
        assert!(spiro.path_with_step(bounds, f64::NAN).is_err());
    }

    #[test]
    fn test_zero_outer_radius() {
        let spiro = Spirograph::new(125, 0, 25, 1.0);
        let result = spiro.path(BoundingBox::square(300.0));
        assert!(matches!(result, Err(ShapeError::InvalidParameter { .. })));
    }

    #[test]
    fn test_negative_radii_draw_full_curve() {
        let bounds = BoundingBox::square(300.0);

        let negative_outer = Spirograph::new(125, -75, 25, 1.0);
        assert_eq!(negative_outer.end_angle().unwrap(), 19.0);
        assert_eq!(negative_outer.path(bounds).unwrap().len(), 1901);

        let negative_distance = Spirograph::new(125, 75, -25, 1.0);
        assert_eq!(negative_distance.path(bounds).unwrap().len(), 1901);
    }

    #[test]
    fn test_negative_amount_is_empty() {
        let path = Spirograph::new(125, 75, 25, -1.0)
            .path(BoundingBox::square(300.0))
            .unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_zero_amount_is_single_point() {
        let path = Spirograph::new(125, 75, 25, 0.0)
            .path(BoundingBox::square(300.0))
            .unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_interpolate_truncates_radii() {
        let a = Spirograph::new(100, 50, 10, 0.0);
        let b = Spirograph::new(111, 50, 20, 1.0);
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.inner_radius, 105);
        assert_eq!(mid.distance, 15);
        assert_eq!(mid.amount, 0.5);
    }
}
