//! Path segments - the individual drawing instructions

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::geometry::{Angle, ArcDirection, Point};

/// A circular arc around `center`
///
/// Points on the arc are `center + radius * (cos a, sin a)`. The arc
/// sweeps from `start_angle` toward `end_angle` in `direction`, going
/// around at most once.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub direction: ArcDirection,
}

impl ArcSegment {
    pub fn new(
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        direction: ArcDirection,
    ) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        }
    }

    /// Point on the underlying circle at `angle`
    pub fn point_at_angle(&self, angle: Angle) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn start_point(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    /// Where the arc ends (the point at `start_angle + sweep`)
    pub fn end_point(&self) -> Point {
        self.position_at(1.0)
    }

    /// Signed sweep in radians: positive for counter-clockwise, negative
    /// for clockwise, magnitude in [0, 2π]
    pub fn sweep(&self) -> f64 {
        let delta = match self.direction {
            ArcDirection::CounterClockwise => {
                self.end_angle.as_radians() - self.start_angle.as_radians()
            }
            ArcDirection::Clockwise => self.start_angle.as_radians() - self.end_angle.as_radians(),
        };

        // Anything beyond a full turn draws the full circle
        let magnitude = if delta >= TAU {
            TAU
        } else {
            delta.rem_euclid(TAU)
        };

        match self.direction {
            ArcDirection::CounterClockwise => magnitude,
            ArcDirection::Clockwise => -magnitude,
        }
    }

    /// Point at parameter `t` in [0, 1] along the sweep
    pub fn position_at(&self, t: f64) -> Point {
        let angle = self.start_angle + Angle::radians(self.sweep() * t);
        self.point_at_angle(angle)
    }

    /// Arc length of the sweep
    pub fn length(&self) -> f64 {
        self.radius.abs() * self.sweep().abs()
    }
}

/// One drawing instruction in a `Path`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Start a new subpath at the point
    MoveTo(Point),
    /// Straight line from the current point
    LineTo(Point),
    /// Circular arc; a line joins the current point to the arc start
    ArcTo(ArcSegment),
    /// Cubic Bézier curve from the current point
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Close the current subpath back to its first point
    Close,
}

impl PathSegment {
    /// The point the pen rests on after this segment, if it is known
    /// without context
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
            PathSegment::ArcTo(arc) => Some(arc.end_point()),
            PathSegment::CubicTo { to, .. } => Some(*to),
            PathSegment::Close => None,
        }
    }
}

/// Evaluate a cubic Bézier curve at parameter t
pub(crate) fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    let x = mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x;
    let y = mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y;

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: Point, b: Point) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn test_quarter_sweep() {
        let arc = ArcSegment::new(
            Point::new(0.0, 0.0),
            1.0,
            Angle::degrees(-90.0),
            Angle::degrees(0.0),
            ArcDirection::CounterClockwise,
        );
        assert!((arc.sweep() - FRAC_PI_2).abs() < 1e-12);
        assert!(close(arc.start_point(), Point::new(0.0, -1.0)));
        assert!(close(arc.end_point(), Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_clockwise_takes_long_way() {
        // Same angles, opposite direction: three quarters of a turn
        let arc = ArcSegment::new(
            Point::new(0.0, 0.0),
            1.0,
            Angle::degrees(-90.0),
            Angle::degrees(0.0),
            ArcDirection::Clockwise,
        );
        assert!((arc.sweep() + 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!(close(arc.position_at(1.0), Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_full_circle() {
        let arc = ArcSegment::new(
            Point::new(5.0, 5.0),
            2.0,
            Angle::ZERO,
            Angle::radians(2.0 * PI),
            ArcDirection::CounterClockwise,
        );
        assert!((arc.sweep() - TAU).abs() < 1e-12);
        assert!((arc.length() - 4.0 * PI).abs() < 1e-9);
        assert!(close(arc.position_at(0.5), Point::new(3.0, 5.0)));
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(0.33, 1.0);
        let p2 = Point::new(0.66, 1.0);
        let p3 = Point::new(1.0, 0.0);

        assert!(close(cubic_bezier(p0, p1, p2, p3, 0.0), p0));
        assert!(close(cubic_bezier(p0, p1, p2, p3, 1.0), p3));
    }
}
