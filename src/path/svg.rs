//! SVG export - render a `Path` as the `d` attribute of an SVG `<path>`

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use super::{ArcSegment, Path, PathSegment};
use crate::geometry::Point;

impl Path {
    /// Path data in SVG syntax (`M`, `L`, `A`, `C`, `Z` commands)
    ///
    /// SVG uses the same Y-down space as paths, so points are written as is.
    /// Full circles are split into two half arcs since a single SVG arc
    /// cannot start and end on the same point.
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        let mut current: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;

        for segment in self.segments() {
            match *segment {
                PathSegment::MoveTo(p) => {
                    push_command(&mut out, 'M', &[p]);
                    current = Some(p);
                    subpath_start = Some(p);
                }
                PathSegment::LineTo(p) => {
                    push_command(&mut out, 'L', &[p]);
                    current = Some(p);
                }
                PathSegment::ArcTo(arc) => {
                    let start = arc.start_point();
                    match current {
                        None => {
                            push_command(&mut out, 'M', &[start]);
                            subpath_start = Some(start);
                        }
                        Some(p) if p != start => push_command(&mut out, 'L', &[start]),
                        Some(_) => {}
                    }
                    push_arc(&mut out, &arc);
                    current = Some(arc.end_point());
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                    push_command(&mut out, 'C', &[ctrl1, ctrl2, to]);
                    current = Some(to);
                }
                PathSegment::Close => {
                    out.push_str(if out.is_empty() { "Z" } else { " Z" });
                    current = subpath_start;
                }
            }
        }

        out
    }
}

fn push_command(out: &mut String, command: char, points: &[Point]) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push(command);
    for p in points {
        let _ = write!(out, " {} {}", fmt_number(p.x), fmt_number(p.y));
    }
}

fn push_arc(out: &mut String, arc: &ArcSegment) {
    let sweep = arc.sweep();
    if sweep.abs() < 1e-12 {
        return;
    }

    let radius = fmt_number(arc.radius.abs());
    // SVG's sweep flag 1 runs toward increasing angles
    let sweep_flag = if sweep > 0.0 { 1 } else { 0 };

    let mut push_piece = |to: Point, large: bool| {
        let _ = write!(
            out,
            " A {radius} {radius} 0 {} {sweep_flag} {} {}",
            u8::from(large),
            fmt_number(to.x),
            fmt_number(to.y)
        );
    };

    if sweep.abs() >= TAU - 1e-9 {
        push_piece(arc.position_at(0.5), false);
        push_piece(arc.end_point(), false);
    } else {
        push_piece(arc.end_point(), sweep.abs() > PI);
    }
}

/// Format with at most four decimals and no trailing zeros
fn fmt_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // Avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Angle, ArcDirection, Rect};

    #[test]
    fn test_fmt_number() {
        assert_eq!(fmt_number(10.0), "10");
        assert_eq!(fmt_number(0.5), "0.5");
        assert_eq!(fmt_number(-0.00001), "0");
        assert_eq!(fmt_number(1.23456), "1.2346");
    }

    #[test]
    fn test_lines_and_close() {
        let mut path = Path::new();
        path.add_rect(Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(path.to_svg_data(), "M 0 0 L 10 0 L 10 5 L 0 5 Z");
    }

    #[test]
    fn test_quarter_arc() {
        let mut path = Path::new();
        path.add_arc(
            Point::new(50.0, 50.0),
            50.0,
            Angle::degrees(-90.0),
            Angle::ZERO,
            ArcDirection::CounterClockwise,
        );
        assert_eq!(path.to_svg_data(), "M 50 0 A 50 50 0 0 1 100 50");
    }

    #[test]
    fn test_full_circle_splits() {
        let mut path = Path::new();
        path.add_arc(
            Point::new(0.0, 0.0),
            1.0,
            Angle::ZERO,
            Angle::degrees(360.0),
            ArcDirection::CounterClockwise,
        );
        let data = path.to_svg_data();
        assert_eq!(data.matches(" A ").count(), 2);
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(Path::new().to_svg_data(), "");
    }
}
