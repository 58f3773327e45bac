//! Checkerboard - alternating filled cells
//!
//! Rows and columns animate as a pair of real numbers so a grid can grow
//! smoothly from 4×4 to 8×16. When a path is built they are truncated
//! toward zero, which makes the grid step from one whole count to the
//! next during a transition rather than drawing partial cells.

use serde::{Deserialize, Serialize};

use super::ShapeError;
use crate::animation::{Animatable, AnimatablePair, Interpolate};
use crate::geometry::{BoundingBox, Rect};
use crate::path::Path;

/// A grid where every cell with an even `row + column` is filled
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkerboard {
    pub rows: f64,
    pub columns: f64,
}

impl Checkerboard {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows: f64::from(rows),
            columns: f64::from(columns),
        }
    }

    /// Whole rows and columns to draw
    ///
    /// Counts are truncated toward zero; anything that truncates to zero
    /// or below (including NaN) is rejected.
    pub fn grid_size(&self) -> Result<(u32, u32), ShapeError> {
        let rows = self.rows as i64;
        let columns = self.columns as i64;

        if rows <= 0 {
            return Err(ShapeError::invalid(
                "Checkerboard",
                format!("rows must be at least 1, got {}", self.rows),
            ));
        }
        if columns <= 0 {
            return Err(ShapeError::invalid(
                "Checkerboard",
                format!("columns must be at least 1, got {}", self.columns),
            ));
        }

        let clamp = |n: i64| n.min(i64::from(u32::MAX)) as u32;
        Ok((clamp(rows), clamp(columns)))
    }

    /// The filled cells, row by row
    pub fn cells(&self, bounds: BoundingBox) -> Result<Vec<Rect>, ShapeError> {
        let (rows, columns) = self.grid_size()?;
        let row_size = bounds.height / f64::from(rows);
        let column_size = bounds.width / f64::from(columns);

        let mut cells = Vec::new();
        for row in 0..rows {
            for column in 0..columns {
                if (row + column) % 2 == 0 {
                    cells.push(Rect::new(
                        column_size * f64::from(column),
                        row_size * f64::from(row),
                        column_size,
                        row_size,
                    ));
                }
            }
        }
        Ok(cells)
    }

    /// One closed rectangle subpath per filled cell
    pub fn path(&self, bounds: BoundingBox) -> Result<Path, ShapeError> {
        let mut path = Path::new();
        for cell in self.cells(bounds)? {
            path.add_rect(cell);
        }
        Ok(path)
    }
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl Animatable for Checkerboard {
    type Data = AnimatablePair<f64, f64>;

    fn animatable_data(&self) -> Self::Data {
        AnimatablePair::new(self.rows, self.columns)
    }

    fn with_animatable_data(&self, data: Self::Data) -> Self {
        Self {
            rows: data.first,
            columns: data.second,
        }
    }
}

impl Interpolate for Checkerboard {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        self.animate_toward(other, t)
    }
}
