//! Shapes module - the parametric shapes paths are generated from
//!
//! This module provides:
//! - One parameter struct per shape kind (Triangle, Arc, Flower, ...)
//! - `Shape`, a closed enum over every kind
//! - `Insettable`, implemented by shapes that can shrink in place
//! - `ShapeError` for parameters no path can be built from
//!
//! Every shape turns its parameters plus a `BoundingBox` into a `Path`.
//! The same inputs always give the same path; shapes hold no hidden state.

mod checkerboard;
mod color_cycling;
mod error;
mod flower;
mod primitives;
mod spirograph;
mod traits;

pub use checkerboard::Checkerboard;
pub use color_cycling::{ColorCycling, Ring, RingShape};
pub use error::ShapeError;
pub use flower::{Flower, PETAL_COUNT};
pub use primitives::{adjust_arc_angles, Arc, Arrow, Capsule, Circle, Rectangle, Trapezoid, Triangle};
pub use spirograph::{gcd, Spirograph, DEFAULT_STEP};
pub use traits::Insettable;

use serde::{Deserialize, Serialize};

use crate::animation::Interpolate;
use crate::geometry::{Angle, BoundingBox};
use crate::path::Path;

/// Any shape, with its parameters
///
/// Serialized as `{"kind": "flower", "params": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Shape {
    Triangle(Triangle),
    Arc(Arc),
    Circle(Circle),
    Rectangle(Rectangle),
    Capsule(Capsule),
    Flower(Flower),
    ColorCycling(ColorCycling),
    Trapezoid(Trapezoid),
    Checkerboard(Checkerboard),
    Spirograph(Spirograph),
    Arrow(Arrow),
}

impl Shape {
    /// Get the name of this shape kind (for UI display and errors)
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Triangle(_) => "Triangle",
            Shape::Arc(_) => "Arc",
            Shape::Circle(_) => "Circle",
            Shape::Rectangle(_) => "Rectangle",
            Shape::Capsule(_) => "Capsule",
            Shape::Flower(_) => "Flower",
            Shape::ColorCycling(_) => "ColorCycling",
            Shape::Trapezoid(_) => "Trapezoid",
            Shape::Checkerboard(_) => "Checkerboard",
            Shape::Spirograph(_) => "Spirograph",
            Shape::Arrow(_) => "Arrow",
        }
    }

    /// One shape of each kind, with the parameters the drawing tutorial
    /// starts from
    pub fn gallery() -> Vec<Shape> {
        vec![
            Shape::Triangle(Triangle),
            Shape::Arc(Arc::new(Angle::degrees(0.0), Angle::degrees(110.0), true)),
            Shape::Arc(Arc::new(Angle::degrees(-90.0), Angle::degrees(90.0), true)),
            Shape::Flower(Flower::default()),
            Shape::ColorCycling(ColorCycling::default()),
            Shape::ColorCycling(ColorCycling::new(0.0, 100, RingShape::Rectangle)),
            Shape::Capsule(Capsule::new()),
            Shape::Trapezoid(Trapezoid::new(50.0)),
            Shape::Checkerboard(Checkerboard::default()),
            Shape::Spirograph(Spirograph::default()),
            Shape::Arrow(Arrow::new()),
        ]
    }

    /// Build the path with default settings
    ///
    /// `generator::PathGenerator` does the same with configurable
    /// settings; this is a shortcut for the common case.
    pub fn path(&self, bounds: BoundingBox) -> Result<Path, ShapeError> {
        crate::generator::PathGenerator::default().generate(self, bounds)
    }

    /// Whether `inset` can succeed for this kind
    pub fn is_insettable(&self) -> bool {
        matches!(
            self,
            Shape::Arc(_) | Shape::Circle(_) | Shape::Rectangle(_) | Shape::Capsule(_) | Shape::Arrow(_)
        )
    }

    /// A copy shrunk by a further `amount`
    pub fn inset(&self, amount: f64) -> Result<Shape, ShapeError> {
        match self {
            Shape::Arc(s) => Ok(Shape::Arc(s.inset(amount))),
            Shape::Circle(s) => Ok(Shape::Circle(s.inset(amount))),
            Shape::Rectangle(s) => Ok(Shape::Rectangle(s.inset(amount))),
            Shape::Capsule(s) => Ok(Shape::Capsule(s.inset(amount))),
            Shape::Arrow(s) => Ok(Shape::Arrow(s.inset(amount))),
            other => Err(ShapeError::NotInsettable(other.name())),
        }
    }

    /// Field-wise blend toward `other`, which must be the same kind
    pub fn interpolate(&self, other: &Shape, t: f64) -> Result<Shape, ShapeError> {
        let blended = match (self, other) {
            (Shape::Triangle(_), Shape::Triangle(_)) => Shape::Triangle(Triangle),
            (Shape::Arc(a), Shape::Arc(b)) => Shape::Arc(a.interpolate(b, t)),
            (Shape::Circle(a), Shape::Circle(b)) => Shape::Circle(a.interpolate(b, t)),
            (Shape::Rectangle(a), Shape::Rectangle(b)) => Shape::Rectangle(a.interpolate(b, t)),
            (Shape::Capsule(a), Shape::Capsule(b)) => Shape::Capsule(a.interpolate(b, t)),
            (Shape::Flower(a), Shape::Flower(b)) => Shape::Flower(a.interpolate(b, t)),
            (Shape::ColorCycling(a), Shape::ColorCycling(b)) => {
                Shape::ColorCycling(a.interpolate(b, t))
            }
            (Shape::Trapezoid(a), Shape::Trapezoid(b)) => Shape::Trapezoid(a.interpolate(b, t)),
            (Shape::Checkerboard(a), Shape::Checkerboard(b)) => {
                Shape::Checkerboard(a.interpolate(b, t))
            }
            (Shape::Spirograph(a), Shape::Spirograph(b)) => Shape::Spirograph(a.interpolate(b, t)),
            (Shape::Arrow(a), Shape::Arrow(b)) => Shape::Arrow(a.interpolate(b, t)),
            (from, to) => {
                return Err(ShapeError::KindMismatch {
                    from: from.name(),
                    to: to.name(),
                })
            }
        };
        Ok(blended)
    }
}

macro_rules! impl_from_for_shape {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Shape {
                fn from(shape: $kind) -> Self {
                    Shape::$kind(shape)
                }
            }
        )*
    };
}

impl_from_for_shape!(
    Triangle,
    Arc,
    Circle,
    Rectangle,
    Capsule,
    Flower,
    ColorCycling,
    Trapezoid,
    Checkerboard,
    Spirograph,
    Arrow,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_only_insettable_kinds() {
        for shape in Shape::gallery() {
            let result = shape.inset(5.0);
            assert_eq!(result.is_ok(), shape.is_insettable(), "{}", shape.name());
        }

        let err = Shape::Trapezoid(Trapezoid::new(10.0)).inset(1.0).unwrap_err();
        assert_eq!(err, ShapeError::NotInsettable("Trapezoid"));
    }

    #[test]
    fn test_inset_accumulates() {
        let shape = Shape::from(Circle::new()).inset(2.0).unwrap().inset(3.0).unwrap();
        assert_eq!(shape, Shape::Circle(Circle { inset_amount: 5.0 }));
    }

    #[test]
    fn test_interpolation_law() {
        let a = Shape::from(Flower::new(-20.0, 100.0));
        let b = Shape::from(Flower::new(40.0, 10.0));

        assert_eq!(a.interpolate(&b, 0.0).unwrap(), a);
        assert_eq!(a.interpolate(&b, 1.0).unwrap(), b);
        assert_eq!(
            a.interpolate(&b, 0.25).unwrap(),
            Shape::Flower(Flower::new(-5.0, 77.5))
        );
    }

    #[test]
    fn test_interpolation_every_kind_endpoints() {
        for shape in Shape::gallery() {
            assert_eq!(shape.interpolate(&shape, 0.0).unwrap(), shape);
            assert_eq!(shape.interpolate(&shape, 1.0).unwrap(), shape);
        }
    }

    #[test]
    fn test_interpolation_kind_mismatch() {
        let err = Shape::from(Triangle)
            .interpolate(&Shape::from(Arrow::new()), 0.5)
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::KindMismatch {
                from: "Triangle",
                to: "Arrow"
            }
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let shapes = Shape::gallery();
        let json = serde_json::to_string(&shapes).unwrap();
        let back: Vec<Shape> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shapes);
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(Shape::from(Trapezoid::new(50.0))).unwrap();
        assert_eq!(json["kind"], "trapezoid");
        assert_eq!(json["params"]["inset_amount"], 50.0);
    }
}
