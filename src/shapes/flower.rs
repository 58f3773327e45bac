//! Flower - ellipse petals rotated around the center
//!
//! Each petal is the same ellipse, drawn next to the origin and then
//! turned by a multiple of π/8 before being moved to the middle of the
//! bounding box. Sixteen petals complete the circle.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::animation::{lerp, Interpolate};
use crate::geometry::{Angle, BoundingBox, Rect};
use crate::path::{Path, Transform};

/// Number of petals around the flower
pub const PETAL_COUNT: usize = 16;

/// A radially symmetric flower made of elliptical petals
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    /// How far each petal sits from the center, across its long axis
    pub petal_offset: f64,
    /// Width of each petal
    pub petal_width: f64,
}

impl Flower {
    pub fn new(petal_offset: f64, petal_width: f64) -> Self {
        Self {
            petal_offset,
            petal_width,
        }
    }

    /// Rotation of petal `index` about the flower's center
    pub fn petal_angle(index: usize) -> Angle {
        Angle::radians(index as f64 * PI / 8.0)
    }

    /// The unrotated petal: an ellipse next to the origin, as long as
    /// half the box width
    pub fn petal(&self, bounds: BoundingBox) -> Path {
        let mut petal = Path::new();
        petal.add_ellipse(Rect::new(
            self.petal_offset,
            0.0,
            self.petal_width,
            bounds.width / 2.0,
        ));
        petal
    }

    /// One subpath per petal
    pub fn path(&self, bounds: BoundingBox) -> Path {
        let petal = self.petal(bounds);
        let to_center = Transform::translation(bounds.mid_x(), bounds.mid_y());

        let mut path = Path::new();
        for index in 0..PETAL_COUNT {
            let position = Transform::rotation(Self::petal_angle(index)).then(to_center);
            path.add_path(&petal.transformed(&position));
        }
        path
    }
}

impl Default for Flower {
    fn default() -> Self {
        Self::new(-20.0, 100.0)
    }
}

impl Interpolate for Flower {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            petal_offset: lerp(self.petal_offset, other.petal_offset, t),
            petal_width: lerp(self.petal_width, other.petal_width, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::path::PathSegment;

    fn first_point(segments: &[PathSegment]) -> Point {
        match segments[0] {
            PathSegment::MoveTo(p) => p,
            other => panic!("subpath starts with {other:?}"),
        }
    }

    #[test]
    fn test_sixteen_petals() {
        let bounds = BoundingBox::square(300.0);
        for (offset, width) in [(-20.0, 100.0), (0.0, 0.0), (40.0, 5.0), (-40.0, -10.0)] {
            let path = Flower::new(offset, width).path(bounds);
            assert_eq!(path.subpath_count(), PETAL_COUNT);
        }
    }

    #[test]
    fn test_petals_are_rotations() {
        let bounds = BoundingBox::square(300.0);
        let path = Flower::default().path(bounds);
        let subpaths = path.subpaths();
        let base = first_point(subpaths[0]);

        for (k, subpath) in subpaths.iter().enumerate() {
            let expected =
                Transform::rotation_about(Flower::petal_angle(k), bounds.center()).apply(base);
            assert!((first_point(subpath) - expected).norm() < 1e-9);
        }
    }

    #[test]
    fn test_first_petal_only_translated() {
        let bounds = BoundingBox::square(200.0);
        let flower = Flower::new(-20.0, 100.0);
        let path = flower.path(bounds);

        // The unrotated petal starts at its right-most point: (x + w, y + h / 2)
        let start = first_point(path.subpaths()[0]);
        assert!((start - Point::new(-20.0 + 100.0 + 100.0, 50.0 + 100.0)).norm() < 1e-9);
    }
}
