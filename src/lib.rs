//! drawing - parametric 2D path generation
//!
//! Turns a small set of shape parameters plus a bounding box into
//! resolution-independent vector paths made of lines, arcs and cubic
//! curves.
//!
//! ## Modules
//! - `geometry`: points, angles, bounding boxes
//! - `path`: the path model, transforms, flattening and SVG path data
//! - `shapes`: the parametric shapes and the `Shape` enum over them
//! - `generator`: `PathGenerator`, the one entry point from shape to path
//! - `animation`: blending shape parameters between two states
//! - `color`: HSB colors for color cycling
//! - `settings`: persisted JSON settings
//! - `export`: SVG gallery documents
//!
//! ## Example
//!
//! ```rust
//! use drawing::{BoundingBox, PathGenerator, Shape};
//! use drawing::shapes::Flower;
//!
//! let generator = PathGenerator::default();
//! let path = generator
//!     .generate(&Shape::from(Flower::default()), BoundingBox::square(300.0))
//!     .unwrap();
//! assert_eq!(path.subpath_count(), 16);
//! ```

pub mod animation;
pub mod color;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod path;
pub mod settings;
pub mod shapes;

pub use generator::{GeneratorConfig, PathGenerator};
pub use geometry::{Angle, BoundingBox, Point};
pub use path::{Path, PathSegment};
pub use shapes::{Shape, ShapeError};
