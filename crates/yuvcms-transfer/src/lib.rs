//! # yuvcms-transfer
//!
//! Transfer functions (OETF/EOTF) for the conversion pipeline.
//!
//! Transfer functions convert between linear light and the nonlinear
//! (gamma-encoded) signal a display-referred pipeline carries.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! The SD pipeline uses a single curve, the [`rec601`] piecewise gamma with
//! its linear toe below the 0.0812 breakpoint.
//!
//! # Usage
//!
//! ```rust
//! use yuvcms_transfer::rec601;
//!
//! let linear = rec601::eotf(0.5);
//! let back = rec601::oetf(linear);
//! assert!((back - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `yuvcms-color` - The linearize / re-encode stages of the baked table

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod rec601;
