//! Path generator - the single entry point from shape parameters to paths
//!
//! `PathGenerator::generate` matches over every `Shape` kind and hands
//! back a fresh `Path`. It holds only configuration, so one generator can
//! be shared freely and called once per animation frame.

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;
use crate::path::{FlattenOptions, Path, Polyline};
use crate::shapes::{self, ColorCycling, Ring, Shape, ShapeError};

/// Settings that affect how finely paths are generated
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Radians between consecutive spirograph points
    pub spirograph_step: f64,
    /// How curves are split into lines by `polylines`
    pub flatten: FlattenOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            spirograph_step: shapes::DEFAULT_STEP,
            flatten: FlattenOptions::default(),
        }
    }
}

/// Turns `(Shape, BoundingBox)` into paths
#[derive(Clone, Debug, Default)]
pub struct PathGenerator {
    config: GeneratorConfig,
}

impl PathGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the outline of `shape` inside `bounds`
    ///
    /// Fails only for parameters no path can be built from; no partial
    /// path is returned in that case.
    pub fn generate(&self, shape: &Shape, bounds: BoundingBox) -> Result<Path, ShapeError> {
        let path = match shape {
            Shape::Triangle(s) => s.path(bounds),
            Shape::Arc(s) => s.path(bounds),
            Shape::Circle(s) => s.path(bounds),
            Shape::Rectangle(s) => s.path(bounds),
            Shape::Capsule(s) => s.path(bounds),
            Shape::Flower(s) => s.path(bounds),
            Shape::ColorCycling(s) => s.path(bounds)?,
            Shape::Trapezoid(s) => s.path(bounds),
            Shape::Checkerboard(s) => s.path(bounds)?,
            Shape::Spirograph(s) => s.path_with_step(bounds, self.config.spirograph_step)?,
            Shape::Arrow(s) => s.path(bounds),
        };

        log::debug!(
            "Generated {}: {} segments in {} subpaths",
            shape.name(),
            path.len(),
            path.subpath_count()
        );
        Ok(path)
    }

    /// Generate color-cycling rings, each with its own colors
    pub fn generate_rings(
        &self,
        shape: &ColorCycling,
        bounds: BoundingBox,
    ) -> Result<Vec<Ring>, ShapeError> {
        let rings = shape.rings(bounds)?;
        log::debug!("Generated {} color cycling rings", rings.len());
        Ok(rings)
    }

    /// Generate and flatten into polylines, one per subpath
    pub fn polylines(
        &self,
        shape: &Shape,
        bounds: BoundingBox,
    ) -> Result<Vec<Polyline>, ShapeError> {
        Ok(self.generate(shape, bounds)?.flatten(&self.config.flatten))
    }
}
