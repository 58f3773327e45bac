//! Polyline - a flattened subpath as a plain point sequence
//!
//! Renderers that only understand straight lines consume these.

use crate::geometry::Point;

/// A sequence of points connected in order
///
/// The polyline can be open (endpoints don't connect) or closed (last
/// point connects back to first).
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    /// Sum of edge lengths, including the closing edge
    total_length: f64,
    closed: bool,
}

impl Polyline {
    /// Create a new open polyline from points
    pub fn new(points: Vec<Point>) -> Self {
        Self::with_options(points, false)
    }

    /// Create a new closed polyline from points
    pub fn closed(points: Vec<Point>) -> Self {
        Self::with_options(points, true)
    }

    pub fn with_options(points: Vec<Point>, closed: bool) -> Self {
        let mut total_length: f64 = points.windows(2).map(|w| (w[1] - w[0]).norm()).sum();
        if closed && points.len() > 1 {
            if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                total_length += (first - last).norm();
            }
        }

        Self {
            points,
            total_length,
            closed,
        }
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Total length, including the closing segment for closed polylines
    pub fn length(&self) -> f64 {
        self.total_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_basic() {
        let line = Polyline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(line.len(), 3);
        assert!(!line.is_closed());
        assert!((line.length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_closed_length_includes_return() {
        let square = Polyline::closed(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);
        assert!((square.length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(Polyline::new(Vec::new()).length(), 0.0);
        assert_eq!(Polyline::closed(vec![Point::new(2.0, 3.0)]).length(), 0.0);
    }
}
