//! Untagged color triple.
//!
//! [`Color`] is a plain triple of doubles. Depending on where it sits in a
//! pipeline it holds YCbCr byte-range values, normalized RGB, CIE XYZ, or
//! CIE xyY coordinates - no type-level tag distinguishes these, the caller
//! tracks the current space.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// An ordered triple of `f64` color components.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`. For YCbCr:
/// x=Y, y=Cb, z=Cr. For RGB: x=R, y=G, z=B.
///
/// # Example
///
/// ```rust
/// use yuvcms_math::Color;
///
/// let c = Color::new(0.5, 1.2, -0.1);
/// assert_eq!(c.clamp01(), Color::new(0.5, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Color {
    /// First component (Y for YCbCr, R for RGB, X for XYZ).
    pub x: f64,
    /// Second component (Cb for YCbCr, G for RGB, Y for XYZ).
    pub y: f64,
    /// Third component (Cr for YCbCr, B for RGB, Z for XYZ).
    pub z: f64,
}

impl Color {
    /// Zero color (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One color (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new color triple.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a color with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Gamut clamp: restricts every component to `[0, 1]`.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.x.clamp(0.0, 1.0),
            self.y.clamp(0.0, 1.0),
            self.z.clamp(0.0, 1.0),
        )
    }

    /// Applies a scalar function to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Maximum absolute component difference to another color.
    #[inline]
    pub fn max_abs_diff(self, other: Self) -> f64 {
        let d = self - other;
        d.x.abs().max(d.y.abs()).max(d.z.abs())
    }

    /// Interprets `self` as CIE xyY and converts to CIE XYZ.
    ///
    /// The degenerate `y = 0` chromaticity maps to black.
    pub fn xyy_to_xyz(self) -> Self {
        if self.y == 0.0 {
            Self::ZERO
        } else {
            Self::new(
                self.x * self.z / self.y,
                self.z,
                (1.0 - self.x - self.y) * self.z / self.y,
            )
        }
    }

    /// Interprets `self` as CIE XYZ and converts to CIE xyY.
    ///
    /// A zero-sum input has no chromaticity; it maps to the conventional
    /// white chromaticity `(0.3128, 0.3290)` with zero luminance.
    pub fn xyz_to_xyy(self) -> Self {
        let d = self.x + self.y + self.z;
        if d == 0.0 {
            Self::new(0.3128, 0.3290, 0.0)
        } else {
            Self::new(self.x / d, self.y / d, self.y)
        }
    }

    /// Converts to a glam double-precision vector.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from a glam double-precision vector.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Index<usize> for Color {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("color component index {} out of range", i),
        }
    }
}

impl IndexMut<usize> for Color {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("color component index {} out of range", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_index() {
        let c = Color::new(1.0, 2.0, 3.0);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[2], 3.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Color::new(1.0, 2.0, 3.0);
        let b = Color::new(0.5, 0.25, -1.0);
        assert_eq!(a + b, Color::new(1.5, 2.25, 2.0));
        assert_eq!(a - b, Color::new(0.5, 1.75, 4.0));
        assert_eq!(b * 2.0, Color::new(1.0, 0.5, -2.0));
        assert_eq!(a.max_abs_diff(b), 4.0);
    }

    #[test]
    fn test_clamp01() {
        let c = Color::new(-0.5, 0.5, 1.5).clamp01();
        assert_eq!(c, Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_xyy_to_xyz_white() {
        // D65-ish white at Y=1
        let xyz = Color::new(0.3127, 0.3290, 1.0).xyy_to_xyz();
        assert_relative_eq!(xyz.y, 1.0);
        assert_relative_eq!(xyz.x, 0.3127 / 0.3290, epsilon = 1e-12);
    }

    #[test]
    fn test_xyy_xyz_roundtrip() {
        let xyy = Color::new(0.31, 0.33, 0.8);
        let back = xyy.xyy_to_xyz().xyz_to_xyy();
        assert!(xyy.max_abs_diff(back) < 1e-12);
    }

    #[test]
    fn test_degenerate_chromaticity() {
        assert_eq!(Color::new(0.3, 0.0, 1.0).xyy_to_xyz(), Color::ZERO);
        let fallback = Color::ZERO.xyz_to_xyy();
        assert_eq!(fallback, Color::new(0.3128, 0.3290, 0.0));
    }

    #[test]
    fn test_glam_roundtrip() {
        let c = Color::new(0.1, 0.2, 0.3);
        assert_eq!(Color::from_glam(c.to_glam()), c);
    }
}
