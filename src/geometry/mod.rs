//! Geometry module - the coordinate space shapes are laid out in
//!
//! This module provides:
//! - `Point` and `Vector` aliases over nalgebra's 2D types
//! - `BoundingBox` (the area a shape must fit into) and `Rect`
//! - `Angle` and `ArcDirection` for arc segments
//!
//! ## Coordinate System
//!
//! - The origin (0, 0) is the top-left corner of the bounding box
//! - X grows to the right, Y grows downward (screen convention)
//! - Angles are measured from the positive X axis toward positive Y

mod angle;
mod bounds;

pub use angle::{Angle, ArcDirection};
pub use bounds::{BoundingBox, Rect};

/// A position in path space
pub type Point = nalgebra::Point2<f64>;

/// An offset in path space
pub type Vector = nalgebra::Vector2<f64>;
