//! SVG export - lays generated shapes out as a gallery document
//!
//! Each shape gets one cell of a grid. Color cycling shapes are written
//! ring by ring so every ring keeps its own color; circle rings get a
//! vertical gradient. A shape that fails to generate leaves its cell
//! empty and is logged rather than aborting the whole document.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::Write as _;

use thiserror::Error;

use crate::color::{Hsb, Rgb};
use crate::generator::PathGenerator;
use crate::geometry::BoundingBox;
use crate::shapes::{Ring, Shape};

/// Errors that can occur while writing an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write SVG: {0}")]
    IoError(#[from] std::io::Error),
}

/// Gallery layout and colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryOptions {
    /// Bounds each shape is generated into
    pub cell: BoundingBox,
    /// Cells per row
    pub columns: usize,
    /// Space around and between cells
    pub padding: f64,
    pub line_width: f64,
    pub stroke: Rgb,
    pub background: Rgb,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            cell: BoundingBox::square(300.0),
            columns: 4,
            padding: 20.0,
            line_width: 2.0,
            stroke: Rgb::BLACK,
            background: Rgb::WHITE,
        }
    }
}

impl GalleryOptions {
    /// Total document size for `count` shapes
    pub fn document_size(&self, count: usize) -> (f64, f64) {
        let columns = self.columns.max(1);
        let rows = count.div_ceil(columns).max(1);
        let used_columns = count.clamp(1, columns);
        (
            used_columns as f64 * (self.cell.width + self.padding) + self.padding,
            rows as f64 * (self.cell.height + self.padding) + self.padding,
        )
    }

    /// Top-left corner of cell `index`
    pub fn cell_origin(&self, index: usize) -> (f64, f64) {
        let columns = self.columns.max(1);
        let (row, column) = (index / columns, index % columns);
        (
            self.padding + column as f64 * (self.cell.width + self.padding),
            self.padding + row as f64 * (self.cell.height + self.padding),
        )
    }
}

/// How a shape's path is painted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Paint {
    Stroke,
    Fill,
    /// Fill where an odd number of subpaths overlap
    FillEvenOdd,
}

fn paint_for(shape: &Shape) -> Paint {
    match shape {
        Shape::Flower(_) => Paint::FillEvenOdd,
        Shape::Checkerboard(_) => Paint::Fill,
        _ => Paint::Stroke,
    }
}

/// Inset an insettable shape by half the line width so its stroke stays
/// inside the cell; other shapes are stroked on their outline
fn stroke_border(shape: &Shape, line_width: f64) -> Cow<'_, Shape> {
    if shape.is_insettable() {
        if let Ok(inset) = shape.inset(line_width / 2.0) {
            return Cow::Owned(inset);
        }
    }
    Cow::Borrowed(shape)
}

/// Build an SVG document drawing every shape in `shapes`
pub fn gallery_svg(shapes: &[Shape], generator: &PathGenerator, options: &GalleryOptions) -> String {
    let (width, height) = options.document_size(shapes.len());
    let mut defs = String::new();
    let mut body = String::new();
    let mut drawn = 0;

    for (index, shape) in shapes.iter().enumerate() {
        let (x, y) = options.cell_origin(index);
        let transform = format!("translate({} {})", fmt_coord(x), fmt_coord(y));

        let written = match shape {
            Shape::ColorCycling(cycling) => generator
                .generate_rings(cycling, options.cell)
                .map(|rings| write_rings(&mut defs, &mut body, index, &rings, &transform)),
            _ => {
                let paint = paint_for(shape);
                let shape = match paint {
                    Paint::Stroke => stroke_border(shape, options.line_width),
                    Paint::Fill | Paint::FillEvenOdd => Cow::Borrowed(shape),
                };
                generator
                    .generate(&shape, options.cell)
                    .map(|path| write_path(&mut body, &path.to_svg_data(), paint, &transform, options))
            }
        };

        match written {
            Ok(()) => drawn += 1,
            Err(e) => log::warn!("Skipping {} at cell {}: {}", shape.name(), index, e),
        }
    }

    log::info!("Exported {} of {} shapes", drawn, shapes.len());

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_coord(width),
        h = fmt_coord(height),
    );
    if !defs.is_empty() {
        let _ = write!(svg, "<defs>\n{defs}</defs>\n");
    }
    let _ = writeln!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        options.background.to_hex()
    );
    svg.push_str(&body);
    svg.push_str("</svg>\n");
    svg
}

fn write_path(body: &mut String, data: &str, paint: Paint, transform: &str, options: &GalleryOptions) {
    if data.is_empty() {
        return;
    }
    let color = options.stroke.to_hex();
    let style = match paint {
        Paint::Stroke => format!(
            r#"fill="none" stroke="{color}" stroke-width="{}""#,
            fmt_coord(options.line_width)
        ),
        Paint::Fill => format!(r#"fill="{color}""#),
        Paint::FillEvenOdd => format!(r#"fill="{color}" fill-rule="evenodd""#),
    };
    let _ = writeln!(body, r#"<path d="{data}" {style} transform="{transform}"/>"#);
}

fn write_rings(
    defs: &mut String,
    body: &mut String,
    cell: usize,
    rings: &[Ring],
    transform: &str,
) {
    // Rings are one unit apart, so a unit stroke fills the gaps exactly
    let _ = writeln!(body, r#"<g transform="{transform}" fill="none" stroke-width="1">"#);
    for (i, ring) in rings.iter().enumerate() {
        let data = ring.path.to_svg_data();
        let stroke = match ring.gradient_end {
            Some(end) => {
                let id = format!("ring-{cell}-{i}");
                write_gradient(defs, &id, ring.color, end);
                format!("url(#{id})")
            }
            None => ring.color.to_rgb().to_hex(),
        };
        let _ = writeln!(body, r#"<path d="{data}" stroke="{stroke}"/>"#);
    }
    body.push_str("</g>\n");
    log::trace!("Wrote {} rings for cell {}", rings.len(), cell);
}

fn write_gradient(defs: &mut String, id: &str, top: Hsb, bottom: Hsb) {
    let _ = writeln!(
        defs,
        r#"<linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient>"#,
        top.to_rgb().to_hex(),
        bottom.to_rgb().to_hex(),
    );
}

/// Document coordinates: whole numbers stay whole, others get two decimals
fn fmt_coord(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Write `svg` to `path`, or to stdout when no path is given
pub fn write_svg(svg: &str, path: Option<&std::path::Path>) -> Result<(), ExportError> {
    match path {
        Some(path) => {
            std::fs::write(path, svg)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Checkerboard, Circle, ColorCycling, Flower, RingShape, Spirograph, Triangle};

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_layout() {
        let options = GalleryOptions {
            cell: BoundingBox::new(100.0, 50.0),
            columns: 3,
            padding: 10.0,
            ..GalleryOptions::default()
        };
        assert_eq!(options.cell_origin(0), (10.0, 10.0));
        assert_eq!(options.cell_origin(4), (120.0, 70.0));
        assert_eq!(options.document_size(4), (340.0, 130.0));
        assert_eq!(options.document_size(2), (230.0, 70.0));
    }

    #[test]
    fn test_single_shape_document() {
        let options = GalleryOptions {
            cell: BoundingBox::square(100.0),
            ..GalleryOptions::default()
        };
        let svg = gallery_svg(&[Shape::from(Triangle)], &PathGenerator::default(), &options);

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(r#"d="M 50 0 L 0 100 L 100 100 L 50 0""#));
        assert!(svg.contains(r##"stroke="#000000""##));
        assert!(svg.contains(r#"transform="translate(20 20)""#));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_insettable_strokes_stay_inside_cell() {
        let options = GalleryOptions {
            cell: BoundingBox::square(100.0),
            line_width: 10.0,
            ..GalleryOptions::default()
        };
        let shapes = [Shape::from(Circle::new()), Shape::from(Triangle)];
        let svg = gallery_svg(&shapes, &PathGenerator::default(), &options);

        // radius 50 - 10 / 2, starting at the right-most point
        assert!(svg.contains(r#"d="M 95 50 A 45 45 "#));
        // not insettable: drawn on its outline
        assert!(svg.contains(r#"d="M 50 0 L 0 100 L 100 100 L 50 0""#));
    }

    #[test]
    fn test_filled_shapes_are_not_inset() {
        let options = GalleryOptions {
            cell: BoundingBox::square(100.0),
            line_width: 10.0,
            ..GalleryOptions::default()
        };
        let shapes = [Shape::from(Checkerboard::new(1, 1))];
        let svg = gallery_svg(&shapes, &PathGenerator::default(), &options);
        assert!(svg.contains(r#"d="M 0 0 L 100 0 L 100 100 L 0 100 Z""#));
    }

    #[test]
    fn test_rings_get_their_own_colors() {
        let shapes = [Shape::from(ColorCycling::new(0.0, 3, RingShape::Rectangle))];
        let svg = gallery_svg(&shapes, &PathGenerator::default(), &GalleryOptions::default());
        assert_eq!(count(&svg, "<path "), 3);
        // hues 0, 1/3, 2/3
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r##"stroke="#00ff00""##));
        assert!(svg.contains(r##"stroke="#0000ff""##));
    }

    #[test]
    fn test_circle_rings_use_gradients() {
        let shapes = [Shape::from(ColorCycling::new(0.0, 2, RingShape::Circle))];
        let svg = gallery_svg(&shapes, &PathGenerator::default(), &GalleryOptions::default());
        assert_eq!(count(&svg, "<linearGradient "), 2);
        assert!(svg.contains(r#"stroke="url(#ring-0-1)""#));
        // brightness 0.5 at the bottom of the first ring
        assert!(svg.contains(r##"stop-color="#800000""##));
    }

    #[test]
    fn test_fill_styles() {
        let shapes = [
            Shape::from(Flower::default()),
            Shape::from(Checkerboard::default()),
        ];
        let svg = gallery_svg(&shapes, &PathGenerator::default(), &GalleryOptions::default());
        assert_eq!(count(&svg, r#"fill-rule="evenodd""#), 1);
        assert_eq!(count(&svg, r##"fill="#000000""##), 2);
    }

    #[test]
    fn test_failed_shape_is_skipped() {
        let shapes = [
            Shape::from(Spirograph::new(125, 0, 25, 1.0)),
            Shape::from(Triangle),
        ];
        let svg = gallery_svg(&shapes, &PathGenerator::default(), &GalleryOptions::default());
        assert_eq!(count(&svg, "<path "), 1);
        // the triangle keeps its own cell
        assert!(svg.contains(r#"transform="translate(340 20)""#));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.svg");
        write_svg("<svg/>", Some(path.as_path())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");

        let missing = dir.path().join("no-such-dir").join("gallery.svg");
        assert!(matches!(
            write_svg("<svg/>", Some(missing.as_path())),
            Err(ExportError::IoError(_))
        ));
    }
}
