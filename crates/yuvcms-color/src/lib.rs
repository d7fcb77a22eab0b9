//! # yuvcms-color
//!
//! Composed color transforms and the baked lookup table.
//!
//! This crate assembles the primitives from `yuvcms-math`,
//! `yuvcms-transfer`, and `yuvcms-primaries` into the one product the
//! workspace exists for: a 256^3-entry, 3-channel table mapping every
//! studio-range YCbCr byte triple to its color-corrected counterpart,
//! re-gamutted for the reference display.
//!
//! # Layers
//!
//! - [`convert`] - Named matrix builders (studio YUV <-> RGB, RGB <-> XYZ)
//! - [`table`] - [`TransformTable`]: the baked LUT, its process-wide cache,
//!   and the per-row applier
//! - [`frame`] - Whole-frame conversion for the supported pixel layouts
//!
//! # Usage
//!
//! ```rust,no_run
//! use yuvcms_color::{Channel, TransformTable};
//!
//! let table = TransformTable::shared();
//! let y = table.lookup(Channel::Luma, 16, 128, 128);
//! assert!(y.abs_diff(16) <= 1);
//! ```
//!
//! (`no_run`: the first `shared()` call bakes all 16.7M entries.)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod frame;
pub mod table;

pub use convert::*;
pub use frame::*;
pub use table::*;
