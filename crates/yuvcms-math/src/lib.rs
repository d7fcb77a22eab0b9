//! # yuvcms-math
//!
//! Homogeneous color-matrix algebra.
//!
//! This crate provides the two value types every transform in the workspace
//! is built from:
//!
//! - [`Color`] - an untagged triple of `f64` components
//! - [`ColorMatrix`] - a 4x4 homogeneous affine transform
//!
//! # Design
//!
//! Matrices are stored **row-major** and act on **column vectors**; a point
//! is treated as `[x, y, z, 1]` and only the first three rows are ever
//! recomputed. Pipelines are composed stage by stage by left-multiplying
//! each new stage onto the accumulated matrix, so the stage added first
//! applies to the input first:
//!
//! ```rust
//! use yuvcms_math::{Color, ColorMatrix};
//!
//! let mut m = ColorMatrix::IDENTITY;
//! m.offset(-16.0, -128.0, -128.0);
//! m.scale(1.0 / 219.0, 1.0 / 224.0, 1.0 / 224.0);
//!
//! // studio black normalizes to zero
//! let c = m.apply(Color::new(16.0, 128.0, 128.0));
//! assert!(c.x.abs() < 1e-12);
//! ```
//!
//! A `Color` carries no unit tag: the same value may hold YCbCr bytes,
//! normalized RGB, CIE XYZ, or CIE xyY, and the caller tracks which space
//! it is currently expressed in.
//!
//! # Dependencies
//!
//! - [`glam`] - `DMat3`/`DMat4` interop for cross-checking
//!
//! # Used By
//!
//! - `yuvcms-primaries` - RGB/XYZ matrix generation
//! - `yuvcms-color` - Transform composition and the baked table

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod matrix;

pub use color::*;
pub use matrix::*;
