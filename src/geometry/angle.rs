//! Angles and arc directions

use std::f64::consts::TAU;
use std::ops::{Add, Mul, Neg, Not, Sub};

use serde::{Deserialize, Serialize};

/// An angle, stored in radians
///
/// Construct with `Angle::degrees` or `Angle::radians`; the unit only
/// matters at the edges, arithmetic works on the stored radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Zero angle
    pub const ZERO: Angle = Angle { radians: 0.0 };

    /// Create an angle from radians
    pub const fn radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Create an angle from degrees
    pub fn degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    pub fn as_radians(self) -> f64 {
        self.radians
    }

    pub fn as_degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    /// The same direction expressed in [0, 2π)
    pub fn normalized(self) -> Self {
        Self {
            radians: self.radians.rem_euclid(TAU),
        }
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle::radians(self.radians * rhs)
    }
}

/// Which way an arc sweeps from its start angle to its end angle
///
/// Directions follow the mathematical (Y-up) convention:
/// - `Clockwise` sweeps toward decreasing angles
/// - `CounterClockwise` sweeps toward increasing angles
///
/// Because path space has Y pointing down, a `CounterClockwise` arc
/// *looks* clockwise on screen. `shapes::Arc` compensates for this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

impl ArcDirection {
    /// Map a `clockwise` flag onto a direction
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            ArcDirection::Clockwise
        } else {
            ArcDirection::CounterClockwise
        }
    }

    pub fn is_clockwise(self) -> bool {
        self == ArcDirection::Clockwise
    }
}

impl Not for ArcDirection {
    type Output = ArcDirection;

    fn not(self) -> ArcDirection {
        match self {
            ArcDirection::Clockwise => ArcDirection::CounterClockwise,
            ArcDirection::CounterClockwise => ArcDirection::Clockwise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_degrees_and_radians() {
        let a = Angle::degrees(90.0);
        assert!((a.as_radians() - FRAC_PI_2).abs() < 1e-12);
        assert!((Angle::radians(PI).as_degrees() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Angle::degrees(30.0) - Angle::degrees(90.0);
        assert!((a.as_degrees() - (-60.0)).abs() < 1e-9);

        let b = Angle::degrees(45.0) * 2.0 + Angle::degrees(10.0);
        assert!((b.as_degrees() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalized() {
        let a = Angle::degrees(-90.0).normalized();
        assert!((a.as_degrees() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(!ArcDirection::Clockwise, ArcDirection::CounterClockwise);
        assert_eq!(ArcDirection::from_clockwise(false), ArcDirection::CounterClockwise);
        assert!(ArcDirection::from_clockwise(true).is_clockwise());
    }
}
