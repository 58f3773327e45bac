//! Primitive shapes - Triangle, Arc, Circle, Rectangle, Capsule,
//! Trapezoid and Arrow
//!
//! These are straight lines and circular arcs laid out against the
//! edges and center of the bounding box.

use serde::{Deserialize, Serialize};

use super::traits::Insettable;
use crate::animation::{lerp, Animatable, AnimatablePair, Interpolate};
use crate::geometry::{Angle, ArcDirection, BoundingBox, Point};
use crate::path::Path;

/// Rotation applied to arc angles so that 0° points up instead of right
const ARC_ROTATION_ADJUSTMENT: f64 = 90.0;

/// Map caller-facing arc angles onto path-space angles
///
/// Callers think of 0° as "up" and of clockwise as it looks on screen.
/// Path space measures 0° toward +X and, with Y pointing down, draws
/// `ArcDirection::Clockwise` arcs counter-clockwise on screen. So both
/// angles turn back by 90° and the direction flips:
///
/// ```text
/// adjusted_angle     = angle - 90°
/// adjusted_direction = !clockwise
/// ```
pub fn adjust_arc_angles(
    start_angle: Angle,
    end_angle: Angle,
    clockwise: bool,
) -> (Angle, Angle, ArcDirection) {
    let adjustment = Angle::degrees(ARC_ROTATION_ADJUSTMENT);
    (
        start_angle - adjustment,
        end_angle - adjustment,
        !ArcDirection::from_clockwise(clockwise),
    )
}

/// A triangle pointing up, filling the bounding box
///
/// ```text
///        top-mid
///          /\
///         /  \
///        /____\
/// bottom-left  bottom-right
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle;

impl Triangle {
    pub fn vertices(&self, bounds: BoundingBox) -> [Point; 3] {
        [
            Point::new(bounds.mid_x(), bounds.min_y()),
            Point::new(bounds.min_x(), bounds.max_y()),
            Point::new(bounds.max_x(), bounds.max_y()),
        ]
    }

    /// Three lines, the last one returning to the top
    pub fn path(&self, bounds: BoundingBox) -> Path {
        let [top, left, right] = self.vertices(bounds);
        let mut path = Path::new();
        path.move_to(top).line_to(left).line_to(right).line_to(top);
        path
    }
}

/// A single circular arc around the center of the bounding box
///
/// Angles use the caller's convention: 0° is up and `clockwise` means
/// clockwise as seen on screen. See `adjust_arc_angles`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
    #[serde(default)]
    pub inset_amount: f64,
}

impl Arc {
    pub fn new(start_angle: Angle, end_angle: Angle, clockwise: bool) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise,
            inset_amount: 0.0,
        }
    }

    /// Radius that fits the box, less the inset
    pub fn radius(&self, bounds: BoundingBox) -> f64 {
        bounds.min_dimension() / 2.0 - self.inset_amount
    }

    pub fn path(&self, bounds: BoundingBox) -> Path {
        let (start, end, direction) =
            adjust_arc_angles(self.start_angle, self.end_angle, self.clockwise);
        let mut path = Path::new();
        path.add_arc(bounds.center(), self.radius(bounds), start, end, direction);
        path
    }
}

impl Insettable for Arc {
    fn inset_amount(&self) -> f64 {
        self.inset_amount
    }

    fn with_inset_amount(&self, amount: f64) -> Self {
        Self {
            inset_amount: amount,
            ..*self
        }
    }
}

impl Interpolate for Arc {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            start_angle: self.start_angle.interpolate(&other.start_angle, t),
            end_angle: self.end_angle.interpolate(&other.end_angle, t),
            clockwise: self.clockwise.interpolate(&other.clockwise, t),
            inset_amount: lerp(self.inset_amount, other.inset_amount, t),
        }
    }
}

/// A circle inscribed in the bounding box
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(default)]
    pub inset_amount: f64,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(&self, bounds: BoundingBox) -> f64 {
        bounds.min_dimension() / 2.0 - self.inset_amount
    }

    /// One full-turn arc, starting at the right-most point
    pub fn path(&self, bounds: BoundingBox) -> Path {
        let mut path = Path::new();
        path.add_arc(
            bounds.center(),
            self.radius(bounds),
            Angle::ZERO,
            Angle::degrees(360.0),
            ArcDirection::CounterClockwise,
        )
        .close_subpath();
        path
    }
}

impl Insettable for Circle {
    fn inset_amount(&self) -> f64 {
        self.inset_amount
    }

    fn with_inset_amount(&self, amount: f64) -> Self {
        Self {
            inset_amount: amount,
        }
    }
}

impl Interpolate for Circle {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            inset_amount: lerp(self.inset_amount, other.inset_amount, t),
        }
    }
}

/// A rectangle filling the bounding box
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(default)]
    pub inset_amount: f64,
}

impl Rectangle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self, bounds: BoundingBox) -> Path {
        let mut path = Path::new();
        path.add_rect(bounds.rect().inset(self.inset_amount));
        path
    }
}

impl Insettable for Rectangle {
    fn inset_amount(&self) -> f64 {
        self.inset_amount
    }

    fn with_inset_amount(&self, amount: f64) -> Self {
        Self {
            inset_amount: amount,
        }
    }
}

impl Interpolate for Rectangle {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            inset_amount: lerp(self.inset_amount, other.inset_amount, t),
        }
    }
}

/// A rectangle whose short sides are half circles
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    #[serde(default)]
    pub inset_amount: f64,
}

impl Capsule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Four quarter arcs joined by straight edges, clockwise on screen
    /// from the top edge
    pub fn path(&self, bounds: BoundingBox) -> Path {
        let rect = bounds.rect().inset(self.inset_amount);
        let r = (rect.width.min(rect.height) / 2.0).max(0.0);
        let ccw = ArcDirection::CounterClockwise;

        let mut path = Path::new();
        path.move_to(Point::new(rect.min_x() + r, rect.min_y()))
            .add_arc(
                Point::new(rect.max_x() - r, rect.min_y() + r),
                r,
                Angle::degrees(-90.0),
                Angle::ZERO,
                ccw,
            )
            .add_arc(
                Point::new(rect.max_x() - r, rect.max_y() - r),
                r,
                Angle::ZERO,
                Angle::degrees(90.0),
                ccw,
            )
            .add_arc(
                Point::new(rect.min_x() + r, rect.max_y() - r),
                r,
                Angle::degrees(90.0),
                Angle::degrees(180.0),
                ccw,
            )
            .add_arc(
                Point::new(rect.min_x() + r, rect.min_y() + r),
                r,
                Angle::degrees(180.0),
                Angle::degrees(270.0),
                ccw,
            )
            .close_subpath();
        path
    }
}

impl Insettable for Capsule {
    fn inset_amount(&self) -> f64 {
        self.inset_amount
    }

    fn with_inset_amount(&self, amount: f64) -> Self {
        Self {
            inset_amount: amount,
        }
    }
}

impl Interpolate for Capsule {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            inset_amount: lerp(self.inset_amount, other.inset_amount, t),
        }
    }
}

/// A trapezoid with a full-width base and a top edge pulled in from
/// both sides by `inset_amount`
///
/// The inset here shapes the top edge rather than shrinking the whole
/// outline, so a trapezoid is animatable but not `Insettable`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    pub inset_amount: f64,
}

impl Trapezoid {
    pub fn new(inset_amount: f64) -> Self {
        Self { inset_amount }
    }

    pub fn path(&self, bounds: BoundingBox) -> Path {
        let bottom_left = Point::new(bounds.min_x(), bounds.max_y());
        let mut path = Path::new();
        path.move_to(bottom_left)
            .line_to(Point::new(self.inset_amount, bounds.min_y()))
            .line_to(Point::new(bounds.max_x() - self.inset_amount, bounds.min_y()))
            .line_to(Point::new(bounds.max_x(), bounds.max_y()))
            .line_to(bottom_left);
        path
    }
}

impl Animatable for Trapezoid {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.inset_amount
    }

    fn with_animatable_data(&self, data: f64) -> Self {
        Self { inset_amount: data }
    }
}

impl Interpolate for Trapezoid {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        self.animate_toward(other, t)
    }
}

/// Fraction of the height where the arrow's head strokes end
const ARROW_HEAD_DEPTH: f64 = 0.33;

/// An upward arrow drawn as strokes: a shaft and two head lines
///
/// The shaft and the left head stroke form one subpath; the right head
/// stroke is a second subpath starting again from the tip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    #[serde(default)]
    pub inset_amount: f64,
}

impl Arrow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self, bounds: BoundingBox) -> Path {
        let inset = self.inset_amount;
        let tip = Point::new(bounds.mid_x(), inset);
        let head_y = bounds.height * ARROW_HEAD_DEPTH;

        let mut path = Path::new();
        path.move_to(Point::new(bounds.mid_x(), bounds.height - inset))
            .line_to(tip)
            .line_to(Point::new(inset, head_y))
            .move_to(tip)
            .line_to(Point::new(bounds.width - inset, head_y));
        path
    }
}

impl Insettable for Arrow {
    fn inset_amount(&self) -> f64 {
        self.inset_amount
    }

    fn with_inset_amount(&self, amount: f64) -> Self {
        Self {
            inset_amount: amount,
        }
    }
}

impl Animatable for Arrow {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.inset_amount
    }

    fn with_animatable_data(&self, data: f64) -> Self {
        Self { inset_amount: data }
    }
}

impl Interpolate for Arrow {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        self.animate_toward(other, t)
    }
}

/// Arc angles and inset move together when an arc animates
impl Animatable for Arc {
    type Data = AnimatablePair<AnimatablePair<Angle, Angle>, f64>;

    fn animatable_data(&self) -> Self::Data {
        AnimatablePair::new(
            AnimatablePair::new(self.start_angle, self.end_angle),
            self.inset_amount,
        )
    }

    fn with_animatable_data(&self, data: Self::Data) -> Self {
        Self {
            start_angle: data.first.first,
            end_angle: data.first.second,
            inset_amount: data.second,
            ..*self
        }
    }
}
