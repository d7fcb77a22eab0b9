//! # yuvcms-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation.
//!
//! A [`Primaries`] value defines an RGB color space by the CIE xy
//! chromaticities of its red, green, and blue basis vectors plus its
//! reference white. From those, [`rgb_to_xyz_matrix`] derives the 3x3
//! matrix (carried as a homogeneous [`ColorMatrix`]) that maps the space's
//! RGB to CIE XYZ, scaled so RGB `(1, 1, 1)` lands on the white point.
//!
//! # Included chromaticity sets
//!
//! | Set | Use |
//! |-----|-----|
//! | [`SMPTE_C`] | SD "601" content (SMPTE 170M-2004) |
//! | [`REC709`] | HD content (Rec. ITU-R BT.709-5) |
//! | [`NTSC_1953`] | Legacy NTSC receivers |
//! | [`REFERENCE_DISPLAY`] | Measured primaries of the calibrated target display |
//!
//! # Usage
//!
//! ```rust
//! use yuvcms_math::Color;
//! use yuvcms_primaries::{SMPTE_C, rgb_to_xyz_matrix};
//!
//! let m = rgb_to_xyz_matrix(&SMPTE_C);
//! let white = m.apply(Color::ONE);
//! assert!((white.y - 1.0).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `yuvcms-color` - The XYZ re-gamut stage of the baked table

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use yuvcms_math::{Color, ColorMatrix};

/// RGB color space definition: three primaries and a white point, all as
/// CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y = 1).
    #[inline]
    pub fn white_xyz(&self) -> Color {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

/// SMPTE-C primaries (SMPTE 170M-2004), the practical "601" SD set.
pub const SMPTE_C: Primaries = Primaries {
    r: (0.630, 0.340),
    g: (0.310, 0.595),
    b: (0.155, 0.070),
    w: (0.3127, 0.3290),
    name: "SMPTE-C",
};

/// Rec. ITU-R BT.709-5 primaries (identical to sRGB).
pub const REC709: Primaries = Primaries {
    r: (0.640, 0.330),
    g: (0.300, 0.600),
    b: (0.150, 0.060),
    w: (0.3127, 0.3290),
    name: "Rec.709",
};

/// NTSC 1953 receiver primaries (SMPTE 170M-2004, informative).
pub const NTSC_1953: Primaries = Primaries {
    r: (0.67, 0.33),
    g: (0.21, 0.71),
    b: (0.14, 0.08),
    w: (0.3127, 0.3290),
    name: "NTSC 1953",
};

/// Measured primaries of the calibrated target display.
///
/// The conversion bakes its output gamut against this set; swap the
/// constants to retarget another monitor.
pub const REFERENCE_DISPLAY: Primaries = Primaries {
    r: (0.662, 0.329),
    g: (0.205, 0.683),
    b: (0.146, 0.077),
    w: (0.3135, 0.3290),
    name: "reference display",
};

/// Converts xy chromaticity to XYZ with Y = 1.
fn xy_to_xyz(x: f64, y: f64) -> Color {
    Color::new(x, y, 1.0).xyy_to_xyz()
}

/// Derives the RGB-to-XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert each primary and the white point from xyY to XYZ (Y = 1)
/// 2. Assemble the primaries as the columns of a 3x3 matrix `M`
/// 3. Solve `M * s = W` for the per-column scale `s`
/// 4. Rescale the columns so `(1, 1, 1)` RGB maps to the white point
///
/// # Preconditions
///
/// The primaries must not be collinear - the primary matrix has to be
/// invertible (`det != 0`). A degenerate set is a programming error and
/// aborts.
pub fn rgb_to_xyz_matrix(p: &Primaries) -> ColorMatrix {
    let r = xy_to_xyz(p.r.0, p.r.1);
    let g = xy_to_xyz(p.g.0, p.g.1);
    let b = xy_to_xyz(p.b.0, p.b.1);
    let w = p.white_xyz();

    // primaries as columns; stored row-major, so rows hold one coordinate
    // of each primary
    let mut m = ColorMatrix::IDENTITY;
    m.m[0][0] = r.x;
    m.m[0][1] = g.x;
    m.m[0][2] = b.x;
    m.m[1][0] = r.y;
    m.m[1][1] = g.y;
    m.m[1][2] = b.y;
    m.m[2][0] = r.z;
    m.m[2][1] = g.z;
    m.m[2][2] = b.z;

    let s = m
        .invert_linear()
        .expect("collinear primaries: primary matrix is singular")
        .apply(w);

    let rs = r * s.x;
    let gs = g * s.y;
    let bs = b * s.z;
    let mut out = ColorMatrix::IDENTITY;
    for i in 0..3 {
        out.m[i][0] = rs[i];
        out.m[i][1] = gs[i];
        out.m[i][2] = bs[i];
    }
    out
}

/// Derives the XYZ-to-RGB matrix for a set of primaries.
///
/// Inverse of [`rgb_to_xyz_matrix`]; same precondition on the primaries.
pub fn xyz_to_rgb_matrix(p: &Primaries) -> ColorMatrix {
    rgb_to_xyz_matrix(p)
        .invert_linear()
        .expect("collinear primaries: primary matrix is singular")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_white_maps_to_white_point() {
        for p in [SMPTE_C, REC709, NTSC_1953, REFERENCE_DISPLAY] {
            let m = rgb_to_xyz_matrix(&p);
            let white = m.apply(Color::ONE);
            let expected = p.white_xyz();
            assert!(
                white.max_abs_diff(expected) < 1e-9,
                "{}: white {:?} vs {:?}",
                p.name,
                white,
                expected
            );
        }
    }

    #[test]
    fn test_rec709_known_values() {
        // Rec.709/sRGB D65 matrix, textbook values
        let m = rgb_to_xyz_matrix(&REC709);
        assert_relative_eq!(m.m[0][0], 0.4124564, epsilon = 1e-4);
        assert_relative_eq!(m.m[1][0], 0.2126729, epsilon = 1e-4);
        assert_relative_eq!(m.m[2][2], 0.9503041, epsilon = 1e-4);
    }

    #[test]
    fn test_xyz_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&SMPTE_C);
        let to_rgb = xyz_to_rgb_matrix(&SMPTE_C);
        let rgb = Color::new(0.25, 0.6, 0.9);
        let back = to_rgb.apply(to_xyz.apply(rgb));
        assert!(rgb.max_abs_diff(back) < 1e-9);
    }

    #[test]
    fn test_luma_row_sums_to_one() {
        // the Y row of an RGB-to-XYZ matrix carries the luminance weights
        let m = rgb_to_xyz_matrix(&SMPTE_C);
        let sum = m.m[1][0] + m.m[1][1] + m.m[1][2];
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }
}
