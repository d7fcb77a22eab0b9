//! Named transform builders.
//!
//! Each builder composes one real-world pipeline stage out of the matrix
//! primitives, stages chained input-first. The studio-range constants are
//! the BT.601 ones: Y spans `[16, 235]` (219 steps), chroma spans
//! `[16, 240]` (224 steps) around neutral 128.

use yuvcms_math::ColorMatrix;
use yuvcms_primaries::{REFERENCE_DISPLAY, SMPTE_C, rgb_to_xyz_matrix, xyz_to_rgb_matrix};

/// BT.601 red luminance coefficient (SD).
pub const KR_601: f64 = 0.2990;

/// BT.601 blue luminance coefficient (SD).
pub const KB_601: f64 = 0.1140;

/// BT.709 red luminance coefficient (HD).
pub const KR_709: f64 = 0.2126;

/// BT.709 blue luminance coefficient (HD).
pub const KB_709: f64 = 0.0722;

/// Studio YUV (BT.601 byte range) to normalized RGB.
///
/// Offsets out sync/black/neutral levels, normalizes the studio range to
/// `[0, 1]` / `[-0.5, 0.5]`, then applies the SD luma/chroma matrix. The
/// output is gamma-encoded RGB in `[0, 1]` for in-gamut input.
pub fn yuv_to_rgb_601() -> ColorMatrix {
    let mut m = ColorMatrix::IDENTITY;
    // offset and scale required to get studio black to (0, 0, 0)
    m.offset(-16.0, -128.0, -128.0);
    m.scale(1.0 / 219.0, 1.0 / 224.0, 1.0 / 224.0);
    m.ycbcr_to_rgb(KR_601, KB_601);
    m
}

/// Normalized RGB back to studio YUV (BT.601 byte range).
///
/// Algebraic inverse of [`yuv_to_rgb_601`], composed the same way around:
/// luma/chroma matrix first, then studio range re-insertion.
pub fn rgb_to_yuv_601() -> ColorMatrix {
    let mut m = ColorMatrix::IDENTITY;
    m.rgb_to_ycbcr(KR_601, KB_601);
    m.scale(219.0, 224.0, 224.0);
    m.offset(16.0, 128.0, 128.0);
    m
}

/// BT.709 studio YUV re-encoded as BT.601 studio YUV.
///
/// A pure matrix re-encode: decode with the HD coefficients, re-encode
/// with the SD ones. No transfer-function or gamut stage is involved, so
/// the whole trip stays a single affine transform.
pub fn bt709_to_bt601() -> ColorMatrix {
    let mut m = ColorMatrix::IDENTITY;
    m.offset(-16.0, -128.0, -128.0);
    m.scale(1.0 / 219.0, 1.0 / 224.0, 1.0 / 224.0);
    m.ycbcr_to_rgb(KR_709, KB_709);
    m.rgb_to_ycbcr(KR_601, KB_601);
    m.scale(219.0, 224.0, 224.0);
    m.offset(16.0, 128.0, 128.0);
    m
}

/// SMPTE-C ("601") RGB to CIE XYZ.
pub fn rgb_to_xyz_601() -> ColorMatrix {
    rgb_to_xyz_matrix(&SMPTE_C)
}

/// CIE XYZ to the reference display's RGB.
pub fn xyz_to_display_rgb() -> ColorMatrix {
    xyz_to_rgb_matrix(&REFERENCE_DISPLAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuvcms_math::Color;

    #[test]
    fn test_studio_black_and_white() {
        let m = yuv_to_rgb_601();
        let black = m.apply(Color::new(16.0, 128.0, 128.0));
        assert!(black.max_abs_diff(Color::ZERO) < 1e-12);
        let white = m.apply(Color::new(235.0, 128.0, 128.0));
        assert!(white.max_abs_diff(Color::ONE) < 1e-12);
    }

    #[test]
    fn test_yuv_rgb_inverse_pair() {
        let m = rgb_to_yuv_601() * yuv_to_rgb_601();
        // composition is the identity on the full affine transform
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (m.m[i][j] - expected).abs() < 1e-9,
                    "m[{}][{}] = {}",
                    i,
                    j,
                    m.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_bt709_to_bt601_fixed_points() {
        let m = bt709_to_bt601();
        // black, white, and neutral gray encode identically in both
        for y in [16.0, 126.0, 235.0] {
            let c = m.apply(Color::new(y, 128.0, 128.0));
            assert!(
                c.max_abs_diff(Color::new(y, 128.0, 128.0)) < 1e-9,
                "neutral {} moved to {:?}",
                y,
                c
            );
        }
    }

    #[test]
    fn test_bt709_to_bt601_moves_chroma() {
        let m = bt709_to_bt601();
        let c = m.apply(Color::new(81.0, 90.0, 240.0));
        // saturated red re-encodes to different code points
        assert!((c.x - 81.0).abs() > 1.0 || (c.y - 90.0).abs() > 1.0);
    }

    #[test]
    fn test_display_regamut_roundtrip_shape() {
        // 601 -> XYZ -> display is linear, invertible, and close to the
        // identity for a near-709 display
        let m = xyz_to_display_rgb() * rgb_to_xyz_601();
        let gray = m.apply(Color::splat(0.5));
        assert!(gray.max_abs_diff(Color::splat(0.5)) < 0.05);
    }
}
