//! Interpolation - linear blending of parameter values

use serde::{Deserialize, Serialize};

use crate::geometry::{Angle, ArcDirection};

/// Linear blend between `a` and `b`
///
/// Written as `a * (1 - t) + b * t` so that `t = 0` returns exactly `a`
/// and `t = 1` returns exactly `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// A value that can be blended with another of the same type
///
/// For `t` in [0, 1], `a.interpolate(&b, 0.0) == a` and
/// `a.interpolate(&b, 1.0) == b`. Values outside [0, 1] extrapolate.
pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        lerp(*self, *other, t)
    }
}

/// Integers blend as reals and truncate toward zero, like checkerboard
/// counts do when a grid is built
impl Interpolate for i32 {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        lerp(f64::from(*self), f64::from(*other), t) as i32
    }
}

/// Flags switch halfway through
impl Interpolate for bool {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        if t < 0.5 {
            *self
        } else {
            *other
        }
    }
}

impl Interpolate for ArcDirection {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        if t < 0.5 {
            *self
        } else {
            *other
        }
    }
}

impl Interpolate for Angle {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Angle::radians(lerp(self.as_radians(), other.as_radians(), t))
    }
}

/// Two animatable values blended with the same fraction
///
/// Use this when two parameters describe one state, like the rows and
/// columns of a grid, so that they move in lockstep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimatablePair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> AnimatablePair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Interpolate, B: Interpolate> Interpolate for AnimatablePair<A, B> {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            first: self.first.interpolate(&other.first, t),
            second: self.second.interpolate(&other.second, t),
        }
    }
}
