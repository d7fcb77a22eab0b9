//! # yuvcms-core
//!
//! Core types for YUV color management.
//!
//! This crate provides the shared vocabulary for the rest of the workspace:
//!
//! - [`PixelFormat`] - The supported YUV pixel layouts
//! - [`Frame`] / [`Plane`] - Byte-plane frame storage with row access
//! - [`Error`] / [`Result`] - Unified error handling
//!
//! # Usage
//!
//! ```rust
//! use yuvcms_core::{Frame, PixelFormat};
//!
//! let frame = Frame::alloc(PixelFormat::I420, 16, 16).unwrap();
//! assert_eq!(frame.planes().len(), 3);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error derive
//!
//! # Used By
//!
//! - `yuvcms-color` - Frame conversion through the transform table
//! - `yuvcms-cli` - Raw frame I/O

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod frame;
mod pixel;

pub use error::*;
pub use frame::*;
pub use pixel::*;
