//! Bounding boxes and rectangles

use serde::{Deserialize, Serialize};

use super::Point;

/// The area a shape is asked to fit into
///
/// A bounding box always starts at the origin; only its size varies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square box
    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    pub fn min_x(&self) -> f64 {
        0.0
    }

    pub fn mid_x(&self) -> f64 {
        self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.width
    }

    pub fn min_y(&self) -> f64 {
        0.0
    }

    pub fn mid_y(&self) -> f64 {
        self.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.height
    }

    /// Center of the box
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// The smaller of width and height
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// The box as a rectangle anchored at the origin
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::square(300.0)
    }
}

/// An axis-aligned rectangle with an origin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing all `points`, or `None` when empty
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Shrink the rectangle by `amount` on every edge
    ///
    /// Negative amounts grow it. The result may have negative size when
    /// the inset exceeds half the width or height.
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        ]
    }

    /// Whether `p` lies inside or on the edge, allowing `tolerance` slack
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.min_x() - tolerance
            && p.x <= self.max_x() + tolerance
            && p.y >= self.min_y() - tolerance
            && p.y <= self.max_y() + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_midpoints() {
        let b = BoundingBox::new(200.0, 100.0);
        assert_eq!(b.center(), Point::new(100.0, 50.0));
        assert_eq!(b.min_dimension(), 100.0);
    }

    #[test]
    fn test_rect_inset() {
        let r = BoundingBox::square(100.0).rect().inset(10.0);
        assert_eq!(r, Rect::new(10.0, 10.0, 80.0, 80.0));
        assert_eq!(r.center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_enclosing() {
        let r = Rect::enclosing([
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(r, Rect::new(-2.0, -1.0, 5.0, 5.0));
        assert!(Rect::enclosing(std::iter::empty()).is_none());
    }
}
