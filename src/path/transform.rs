//! Transforms - Rotate, Translate and their compositions
//!
//! Only similarity transforms (rotation, translation, uniform scale) are
//! supported. They map circles to circles, so arc segments survive a
//! transform without being converted to curves.

use nalgebra::{Isometry2, Similarity2, Vector2};

use crate::geometry::{Angle, Point};

/// A 2D similarity transform applied to path points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    inner: Similarity2<f64>,
}

impl Transform {
    /// The transform that changes nothing
    pub fn identity() -> Self {
        Self {
            inner: Similarity2::identity(),
        }
    }

    /// Rotation about the origin
    ///
    /// Positive angles turn +X toward +Y, which is clockwise on screen.
    pub fn rotation(angle: Angle) -> Self {
        Self {
            inner: Similarity2::from_isometry(Isometry2::rotation(angle.as_radians()), 1.0),
        }
    }

    /// Translation by (dx, dy)
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            inner: Similarity2::from_isometry(Isometry2::translation(dx, dy), 1.0),
        }
    }

    /// Uniform scale about the origin
    ///
    /// # Panics
    /// Panics if `factor` is zero
    pub fn scale(factor: f64) -> Self {
        Self {
            inner: Similarity2::from_scaling(factor),
        }
    }

    /// Rotation about an arbitrary center point
    pub fn rotation_about(angle: Angle, center: Point) -> Self {
        Self::translation(-center.x, -center.y)
            .then(Self::rotation(angle))
            .then(Self::translation(center.x, center.y))
    }

    /// Apply `self` first, then `next`
    pub fn then(&self, next: Transform) -> Transform {
        Transform {
            inner: next.inner * self.inner,
        }
    }

    /// Transform a point
    pub fn apply(&self, p: Point) -> Point {
        self.inner.transform_point(&p)
    }

    /// Transform an offset (ignores translation)
    pub fn apply_vector(&self, v: Vector2<f64>) -> Vector2<f64> {
        self.inner.transform_vector(&v)
    }

    /// The rotation component
    pub fn rotation_angle(&self) -> Angle {
        Angle::radians(self.inner.isometry.rotation.angle())
    }

    /// The uniform scale component
    pub fn scaling(&self) -> f64 {
        self.inner.scaling()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
