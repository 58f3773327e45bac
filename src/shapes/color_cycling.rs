//! Color cycling - concentric rings stepping around the color wheel
//!
//! Ring `i` is the base outline inset by `i` units and colored with hue
//! `frac(i / steps + amount)`. Sliding `amount` from 0 to 1 rotates the
//! colors through every ring without touching the geometry.

use serde::{Deserialize, Serialize};

use super::primitives::{Circle, Rectangle};
use super::traits::Insettable;
use super::ShapeError;
use crate::animation::{lerp, Interpolate};
use crate::color::{wrap_hue, Hsb};
use crate::geometry::BoundingBox;
use crate::path::Path;

/// Brightness at the bottom of a circle ring's gradient
const GRADIENT_END_BRIGHTNESS: f64 = 0.5;

/// The outline each ring is drawn with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingShape {
    /// Circles, shaded with a top-to-bottom gradient
    #[default]
    Circle,
    /// Rectangles in a solid color
    Rectangle,
}

/// One generated ring: its outline and how to color it
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub path: Path,
    /// Color at the top of the ring (the whole ring when there is no gradient)
    pub color: Hsb,
    /// Color at the bottom of the ring, for gradient strokes
    pub gradient_end: Option<Hsb>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorCycling {
    /// Phase of the color cycle, usually in [0, 1]
    pub amount: f64,
    /// Number of rings
    pub steps: i32,
    #[serde(default)]
    pub ring: RingShape,
}

impl ColorCycling {
    pub fn new(amount: f64, steps: i32, ring: RingShape) -> Self {
        Self {
            amount,
            steps,
            ring,
        }
    }

    fn ring_count(&self) -> Result<usize, ShapeError> {
        usize::try_from(self.steps).map_err(|_| {
            ShapeError::invalid(
                "ColorCycling",
                format!("steps must not be negative, got {}", self.steps),
            )
        })
    }

    /// Hue of ring `index`, wrapped into [0, 1)
    pub fn hue(&self, index: usize) -> f64 {
        wrap_hue(index as f64 / f64::from(self.steps) + self.amount)
    }

    /// Fully saturated color of ring `index` at `brightness`
    pub fn color(&self, index: usize, brightness: f64) -> Hsb {
        Hsb::vivid(self.hue(index), brightness)
    }

    /// Hue of every ring, outermost first
    pub fn hues(&self) -> Result<Vec<f64>, ShapeError> {
        Ok((0..self.ring_count()?).map(|i| self.hue(i)).collect())
    }

    /// Outline of ring `index`
    pub fn ring_path(&self, index: usize, bounds: BoundingBox) -> Path {
        let inset = index as f64;
        match self.ring {
            RingShape::Circle => Circle::new().inset(inset).path(bounds),
            RingShape::Rectangle => Rectangle::new().inset(inset).path(bounds),
        }
    }

    /// Outline of every ring, outermost first
    pub fn ring_paths(&self, bounds: BoundingBox) -> Result<Vec<Path>, ShapeError> {
        Ok((0..self.ring_count()?)
            .map(|i| self.ring_path(i, bounds))
            .collect())
    }

    /// Every ring paired with its colors
    pub fn rings(&self, bounds: BoundingBox) -> Result<Vec<Ring>, ShapeError> {
        Ok((0..self.ring_count()?)
            .map(|i| Ring {
                path: self.ring_path(i, bounds),
                color: self.color(i, 1.0),
                gradient_end: match self.ring {
                    RingShape::Circle => Some(self.color(i, GRADIENT_END_BRIGHTNESS)),
                    RingShape::Rectangle => None,
                },
            })
            .collect())
    }

    /// All ring outlines combined, one subpath per ring
    pub fn path(&self, bounds: BoundingBox) -> Result<Path, ShapeError> {
        let mut path = Path::new();
        for ring in self.ring_paths(bounds)? {
            path.add_path(&ring);
        }
        Ok(path)
    }
}

impl Default for ColorCycling {
    fn default() -> Self {
        Self::new(0.0, 100, RingShape::Circle)
    }
}

impl Interpolate for ColorCycling {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            amount: lerp(self.amount, other.amount, t),
            steps: self.steps.interpolate(&other.steps, t),
            ring: if t < 0.5 { self.ring } else { other.ring },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::path::PathSegment;

    #[test]
    fn test_hues_wrap() {
        let cycling = ColorCycling::new(0.5, 4, RingShape::Circle);
        let hues = cycling.hues().unwrap();
        let expected = [0.5, 0.75, 0.0, 0.25];
        for (hue, want) in hues.iter().zip(expected) {
            assert!((hue - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ring_count_and_nesting() {
        let bounds = BoundingBox::square(300.0);
        let cycling = ColorCycling::new(0.0, 10, RingShape::Rectangle);
        let paths = cycling.ring_paths(bounds).unwrap();
        assert_eq!(paths.len(), 10);
        assert_eq!(paths[3].segments()[0], PathSegment::MoveTo(Point::new(3.0, 3.0)));

        let combined = cycling.path(bounds).unwrap();
        assert_eq!(combined.subpath_count(), 10);
    }

    #[test]
    fn test_circle_rings_have_gradient() {
        let rings = ColorCycling::new(0.25, 3, RingShape::Circle)
            .rings(BoundingBox::square(100.0))
            .unwrap();
        assert_eq!(rings.len(), 3);

        let end = rings[0].gradient_end.unwrap();
        assert_eq!(end.hue, rings[0].color.hue);
        assert_eq!(end.brightness, 0.5);
        assert_eq!(rings[0].color.brightness, 1.0);
    }

    #[test]
    fn test_rectangle_rings_are_solid() {
        let rings = ColorCycling::new(0.0, 2, RingShape::Rectangle)
            .rings(BoundingBox::square(100.0))
            .unwrap();
        assert!(rings.iter().all(|r| r.gradient_end.is_none()));
    }

    #[test]
    fn test_negative_steps_rejected() {
        let cycling = ColorCycling::new(0.0, -1, RingShape::Circle);
        assert!(matches!(
            cycling.path(BoundingBox::square(100.0)),
            Err(ShapeError::InvalidParameter { .. })
        ));
        assert!(cycling.hues().is_err());
    }

    #[test]
    fn test_interpolated_steps_truncate() {
        let a = ColorCycling::new(0.0, 10, RingShape::Circle);
        let b = ColorCycling::new(1.0, 15, RingShape::Rectangle);
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.steps, 12);
        assert_eq!(mid.ring, RingShape::Rectangle);
        assert_eq!(mid.amount, 0.5);
    }

    #[test]
    fn test_zero_steps_is_empty() {
        let cycling = ColorCycling::new(0.3, 0, RingShape::Circle);
        assert!(cycling.path(BoundingBox::square(100.0)).unwrap().is_empty());
        assert!(cycling.hues().unwrap().is_empty());
    }
}
