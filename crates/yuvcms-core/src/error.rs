//! Error types for yuvcms operations.
//!
//! The [`Error`] enum covers the failure modes of frame handling and
//! conversion: unsupported layouts, malformed buffer sizes, geometry
//! mismatches, and I/O.
//!
//! Programming errors (singular matrices where invertibility is assumed,
//! mismatched row lengths handed to the row applier) are *not* represented
//! here - those are precondition violations and panic.
//!
//! # Usage
//!
//! ```rust
//! use yuvcms_core::{Error, Result};
//!
//! fn check_width(width: u32) -> Result<()> {
//!     if width == 0 {
//!         return Err(Error::invalid_dimensions(width, 1, "zero width"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during frame handling and conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel format name or selector is not one of the supported layouts.
    ///
    /// Surfaced when an external caller configures a layout the converter
    /// does not handle, rather than falling through undefined.
    #[error("unsupported pixel format: {format}")]
    UnsupportedFormat {
        /// Format name or description
        format: String,
    },

    /// Raw buffer length does not match the frame geometry.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSize {
        /// Bytes required by the format and dimensions
        expected: usize,
        /// Bytes provided
        got: usize,
    },

    /// Frame dimensions don't match for the operation.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First frame width
        a_width: u32,
        /// First frame height
        a_height: u32,
        /// Second frame width
        b_width: u32,
        /// Second frame height
        b_height: u32,
    },

    /// Frame carries the wrong number of planes for its format.
    #[error("plane count mismatch: format needs {expected}, frame has {got}")]
    PlaneCount {
        /// Planes required by the format
        expected: usize,
        /// Planes present
        got: usize,
    },

    /// Invalid frame dimensions.
    ///
    /// Zero sizes, or an odd width/height where the layout's chroma
    /// subsampling requires an even one.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// I/O error during raw frame reading/writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Creates an [`Error::BufferSize`] error.
    #[inline]
    pub fn buffer_size(expected: usize, got: usize) -> Self {
        Self::BufferSize { expected, got }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::PlaneCount`] error.
    #[inline]
    pub fn plane_count(expected: usize, got: usize) -> Self {
        Self::PlaneCount { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a format/layout error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
