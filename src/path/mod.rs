//! Path module - ordered drawing instructions for shape outlines
//!
//! This module provides:
//! - `PathSegment` and `ArcSegment`, the individual instructions
//! - `Path`, a builder and container for segments
//! - `Transform` for rotating and moving whole paths
//! - Flattening into `Polyline`s for line-only consumers
//! - SVG path-data export

mod polyline;
mod segment;
mod svg;
mod transform;

pub use polyline::Polyline;
pub use segment::{ArcSegment, PathSegment};
pub use transform::Transform;

use serde::{Deserialize, Serialize};

use crate::geometry::{Angle, ArcDirection, Point, Rect};
use segment::cubic_bezier;

/// Control point distance for approximating a quarter circle with a cubic
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// End points closer than this to the subpath start count as the start
const CLOSE_TOLERANCE: f64 = 1e-9;

/// Options for flattening curves into line segments
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlattenOptions {
    /// Number of points to sample per cubic segment
    pub curve_samples: usize,
    /// Largest angle covered by one line segment of a flattened arc
    pub max_arc_step: Angle,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            curve_samples: 16,
            max_arc_step: Angle::degrees(5.0),
        }
    }
}

/// An ordered sequence of path segments
///
/// A path may hold several disjoint subpaths; each one starts with a
/// `MoveTo`. The builder methods keep that invariant, inserting a
/// `MoveTo` before an arc that would otherwise have no start.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `p`
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    /// Straight line from the current point to `p`
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        if !self.has_current_point() {
            return self.move_to(p);
        }
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    /// Cubic Bézier from the current point to `to`
    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> &mut Self {
        if !self.has_current_point() {
            self.move_to(ctrl1);
        }
        self.segments.push(PathSegment::CubicTo { ctrl1, ctrl2, to });
        self
    }

    /// Add a circular arc
    ///
    /// If a subpath is open, a straight line joins its current point to
    /// the start of the arc. Otherwise a new subpath begins at the arc.
    pub fn add_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        direction: ArcDirection,
    ) -> &mut Self {
        let arc = ArcSegment::new(center, radius, start_angle, end_angle, direction);
        if !self.has_current_point() {
            self.move_to(arc.start_point());
        }
        self.segments.push(PathSegment::ArcTo(arc));
        self
    }

    /// Close the current subpath
    pub fn close_subpath(&mut self) -> &mut Self {
        if self.has_current_point() {
            self.segments.push(PathSegment::Close);
        }
        self
    }

    /// Closed rectangle subpath, starting at the top-left corner
    pub fn add_rect(&mut self, rect: Rect) -> &mut Self {
        let [tl, tr, br, bl] = rect.corners();
        self.move_to(tl);
        self.segments.extend([
            PathSegment::LineTo(tr),
            PathSegment::LineTo(br),
            PathSegment::LineTo(bl),
            PathSegment::Close,
        ]);
        self
    }

    /// Closed ellipse inscribed in `rect`, as four cubic segments
    ///
    /// Starts at the right-most point and runs toward increasing angles.
    pub fn add_ellipse(&mut self, rect: Rect) -> &mut Self {
        let c = rect.center();
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;

        self.move_to(Point::new(c.x + rx, c.y));
        self.segments.extend([
            PathSegment::CubicTo {
                ctrl1: Point::new(c.x + rx, c.y + ky),
                ctrl2: Point::new(c.x + kx, c.y + ry),
                to: Point::new(c.x, c.y + ry),
            },
            PathSegment::CubicTo {
                ctrl1: Point::new(c.x - kx, c.y + ry),
                ctrl2: Point::new(c.x - rx, c.y + ky),
                to: Point::new(c.x - rx, c.y),
            },
            PathSegment::CubicTo {
                ctrl1: Point::new(c.x - rx, c.y - ky),
                ctrl2: Point::new(c.x - kx, c.y - ry),
                to: Point::new(c.x, c.y - ry),
            },
            PathSegment::CubicTo {
                ctrl1: Point::new(c.x + kx, c.y - ry),
                ctrl2: Point::new(c.x + rx, c.y - ky),
                to: Point::new(c.x + rx, c.y),
            },
            PathSegment::Close,
        ]);
        self
    }

    /// Append every subpath of `other`
    pub fn add_path(&mut self, other: &Path) -> &mut Self {
        self.segments.extend_from_slice(&other.segments);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments of each subpath, in order
    pub fn subpaths(&self) -> Vec<&[PathSegment]> {
        let mut result = Vec::new();
        let mut start = 0;

        for (i, segment) in self.segments.iter().enumerate() {
            if matches!(segment, PathSegment::MoveTo(_)) && i > start {
                result.push(&self.segments[start..i]);
                start = i;
            }
        }
        if start < self.segments.len() {
            result.push(&self.segments[start..]);
        }

        result
    }

    pub fn subpath_count(&self) -> usize {
        self.subpaths().len()
    }

    /// A copy of the path with every point mapped through `transform`
    pub fn transformed(&self, transform: &Transform) -> Path {
        let rotation = transform.rotation_angle();
        let scaling = transform.scaling();

        let segments = self
            .segments
            .iter()
            .map(|segment| match *segment {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(transform.apply(p)),
                PathSegment::LineTo(p) => PathSegment::LineTo(transform.apply(p)),
                PathSegment::ArcTo(arc) => PathSegment::ArcTo(ArcSegment {
                    center: transform.apply(arc.center),
                    radius: arc.radius * scaling,
                    start_angle: arc.start_angle + rotation,
                    end_angle: arc.end_angle + rotation,
                    direction: arc.direction,
                }),
                PathSegment::CubicTo { ctrl1, ctrl2, to } => PathSegment::CubicTo {
                    ctrl1: transform.apply(ctrl1),
                    ctrl2: transform.apply(ctrl2),
                    to: transform.apply(to),
                },
                PathSegment::Close => PathSegment::Close,
            })
            .collect();

        Path { segments }
    }

    /// Convert every subpath into a polyline
    pub fn flatten(&self, options: &FlattenOptions) -> Vec<Polyline> {
        let mut lines = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut subpath_start: Option<Point> = None;

        fn finish(points: &mut Vec<Point>, closed: bool, lines: &mut Vec<Polyline>) {
            if !points.is_empty() {
                lines.push(Polyline::with_options(std::mem::take(points), closed));
            }
        }

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    finish(&mut current, false, &mut lines);
                    current.push(p);
                    subpath_start = Some(p);
                }
                PathSegment::LineTo(p) => {
                    // A line after a close restarts from the subpath start
                    if current.is_empty() {
                        current.push(subpath_start.unwrap_or(p));
                    }
                    current.push(p);
                }
                PathSegment::ArcTo(arc) => {
                    let start = arc.start_point();
                    if current.is_empty() {
                        if let Some(s) = subpath_start {
                            current.push(s);
                        }
                    }
                    if subpath_start.is_none() {
                        subpath_start = Some(start);
                    }
                    if current.last() != Some(&start) {
                        current.push(start);
                    }

                    let step = options.max_arc_step.as_radians().abs().max(1e-6);
                    let count = (arc.sweep().abs() / step).ceil().max(1.0) as usize;
                    for i in 1..=count {
                        current.push(arc.position_at(i as f64 / count as f64));
                    }
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                    let p0 = match current.last() {
                        Some(&p) => p,
                        None => {
                            let p = subpath_start.unwrap_or(ctrl1);
                            current.push(p);
                            p
                        }
                    };
                    let samples = options.curve_samples.max(1);
                    for i in 1..=samples {
                        let t = i as f64 / samples as f64;
                        current.push(cubic_bezier(p0, ctrl1, ctrl2, to, t));
                    }
                }
                PathSegment::Close => {
                    // Drop a duplicated end point; the closing edge covers it
                    if let (true, Some(&first), Some(&last)) =
                        (current.len() > 1, current.first(), current.last())
                    {
                        if (last - first).norm() <= CLOSE_TOLERANCE {
                            current.pop();
                        }
                    }
                    finish(&mut current, true, &mut lines);
                }
            }
        }

        finish(&mut current, false, &mut lines);
        lines
    }

    /// Bounding rectangle of the flattened path, or `None` when empty
    pub fn bounds(&self) -> Option<Rect> {
        let lines = self.flatten(&FlattenOptions::default());
        Rect::enclosing(lines.iter().flat_map(|l| l.points().iter().copied()))
    }

    fn has_current_point(&self) -> bool {
        !matches!(self.segments.last(), None | Some(PathSegment::Close))
    }
}
