//! 4x4 homogeneous color matrix.
//!
//! [`ColorMatrix`] represents an affine color transform in homogeneous
//! coordinates: rows 0-2 hold the 3x3 linear part plus a translation
//! column, row 3 stays at the identity `[0, 0, 0, 1]`.
//!
//! Pipeline stages are composed by left-multiplication: calling a builder
//! method computes `stage * self`, so the method called first applies to
//! the input first.

use crate::Color;
use std::fmt;
use std::ops::{Index, Mul};

/// Determinant magnitude below which the linear part is treated as
/// singular.
const SINGULAR_EPS: f64 = 1e-12;

/// A 4x4 homogeneous affine color transform.
///
/// # Example
///
/// ```rust
/// use yuvcms_math::{Color, ColorMatrix};
///
/// let mut m = ColorMatrix::IDENTITY;
/// m.scale(2.0, 2.0, 2.0);
/// m.offset(1.0, 0.0, 0.0);
///
/// // scale applies first, then the offset
/// assert_eq!(m.apply(Color::new(1.0, 1.0, 1.0)), Color::new(3.0, 2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct ColorMatrix {
    /// Matrix elements in row-major order.
    pub m: [[f64; 4]; 4],
}

impl ColorMatrix {
    /// The multiplicative identity.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Standard 4x4 matrix product `self * other`.
    ///
    /// Computed into a temporary, so the result may be stored back over
    /// either operand.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut out = Self { m: [[0.0; 4]; 4] };
        for i in 0..4 {
            for j in 0..4 {
                let mut x = 0.0;
                for k in 0..4 {
                    x += self.m[i][k] * other.m[k][j];
                }
                out.m[i][j] = x;
            }
        }
        out
    }

    /// Applies the transform to a point.
    ///
    /// The point is treated as the homogeneous column `[x, y, z, 1]`; only
    /// the first three rows are evaluated, the homogeneous coordinate is
    /// assumed to stay 1.
    pub fn apply(&self, c: Color) -> Color {
        let mut out = [0.0; 3];
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.m[i][0] * c.x + self.m[i][1] * c.y + self.m[i][2] * c.z + self.m[i][3];
        }
        Color::from_array(out)
    }

    /// Determinant of the 3x3 linear submatrix.
    pub fn determinant_linear(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverts the 3x3 linear submatrix by the cofactor/adjugate method.
    ///
    /// Returns `None` when the linear part is singular. The translation
    /// column of the result is zero and row 3 is the identity row; callers
    /// that compose offsets must invert them as separate stages.
    ///
    /// Callers for which invertibility is a precondition (`det != 0`)
    /// `expect` the result; that is the fatal-assertion path for feeding a
    /// singular matrix where a well-formed primary set is assumed.
    pub fn invert_linear(&self) -> Option<Self> {
        let mut adj = Self::IDENTITY;
        for j in 0..3 {
            for i in 0..3 {
                adj.m[j][i] = self.m[(i + 1) % 3][(j + 1) % 3] * self.m[(i + 2) % 3][(j + 2) % 3]
                    - self.m[(i + 1) % 3][(j + 2) % 3] * self.m[(i + 2) % 3][(j + 1) % 3];
            }
        }
        let det =
            adj.m[0][0] * self.m[0][0] + adj.m[0][1] * self.m[1][0] + adj.m[0][2] * self.m[2][0];
        if det.abs() < SINGULAR_EPS {
            return None;
        }
        for j in 0..3 {
            for i in 0..3 {
                adj.m[i][j] /= det;
            }
        }
        Some(adj)
    }

    /// Transposes the 3x3 linear submatrix.
    ///
    /// Translation and homogeneous rows are left at identity defaults.
    pub fn transpose_linear(&self) -> Self {
        let mut out = Self::IDENTITY;
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.m[j][i];
            }
        }
        out
    }

    /// Left-multiplies a translation stage onto the transform.
    pub fn offset(&mut self, dx: f64, dy: f64, dz: f64) {
        let mut a = Self::IDENTITY;
        a.m[0][3] = dx;
        a.m[1][3] = dy;
        a.m[2][3] = dz;
        *self = a * *self;
    }

    /// Left-multiplies a per-component scaling stage onto the transform.
    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        let mut a = Self::IDENTITY;
        a.m[0][0] = sx;
        a.m[1][1] = sy;
        a.m[2][2] = sz;
        *self = a * *self;
    }

    /// Left-multiplies the YCbCr-to-RGB stage for luminance coefficients
    /// `kr`, `kb` (with `kg = 1 - kr - kb`).
    ///
    /// Expects Y in `[0, 1]` and Cb/Cr in `[-0.5, 0.5]` at this point of
    /// the pipeline.
    pub fn ycbcr_to_rgb(&mut self, kr: f64, kb: f64) {
        let kg = 1.0 - kr - kb;
        let k = Self::from_rows([
            [1.0, 0.0, 2.0 * (1.0 - kr), 0.0],
            [
                1.0,
                -2.0 * kb * (1.0 - kb) / kg,
                -2.0 * kr * (1.0 - kr) / kg,
                0.0,
            ],
            [1.0, 2.0 * (1.0 - kb), 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        *self = k * *self;
    }

    /// Left-multiplies the RGB-to-YCbCr stage for luminance coefficients
    /// `kr`, `kb`.
    ///
    /// Row 0 is the luma row `[kr, kg, kb]`; rows 1 and 2 are the
    /// color-difference rows scaled by `1 / (2 (1 - kb))` and
    /// `1 / (2 (1 - kr))` respectively, per the ITU-R equations.
    pub fn rgb_to_ycbcr(&mut self, kr: f64, kb: f64) {
        let kg = 1.0 - kr - kb;
        let mut k = Self::IDENTITY;

        k.m[0][0] = kr;
        k.m[0][1] = kg;
        k.m[0][2] = kb;

        let x = 1.0 / (2.0 * (1.0 - kb));
        k.m[1][0] = -x * kr;
        k.m[1][1] = -x * kg;
        k.m[1][2] = x * (1.0 - kb);

        let x = 1.0 / (2.0 * (1.0 - kr));
        k.m[2][0] = x * (1.0 - kr);
        k.m[2][1] = -x * kg;
        k.m[2][2] = -x * kb;

        *self = k * *self;
    }

    /// The 3x3 linear part as a glam matrix (column-major).
    pub fn linear_to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// The full matrix as a glam `DMat4` (column-major).
    pub fn to_glam(&self) -> glam::DMat4 {
        let t = self.m;
        glam::DMat4::from_cols_array_2d(&[
            [t[0][0], t[1][0], t[2][0], t[3][0]],
            [t[0][1], t[1][1], t[2][1], t[3][1]],
            [t[0][2], t[1][2], t[2][2], t[3][2]],
            [t[0][3], t[1][3], t[2][3], t[3][3]],
        ])
    }

    /// Creates from a glam `DMat4`.
    pub fn from_glam(g: glam::DMat4) -> Self {
        let c = g.to_cols_array_2d();
        let mut out = Self::IDENTITY;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = c[j][i];
            }
        }
        out
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for ColorMatrix {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for ColorMatrix {
    type Output = [f64; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 4] {
        &self.m[i]
    }
}

impl fmt::Display for ColorMatrix {
    /// Pretty-prints the matrix, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in &self.m {
            write!(f, "  ")?;
            for v in row {
                write!(f, " {:10.5}", v)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
