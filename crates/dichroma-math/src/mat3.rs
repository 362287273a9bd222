//! Row-major 3x3 matrices acting on column vectors.
//!
//! [`Mat3`] keeps its three rows as [`Vec3`], so applying it to a vector is
//! three dot products:
//!
//! ```text
//! | r0 |         | r0 . v |
//! | r1 | * v  =  | r1 . v |
//! | r2 |         | r2 . v |
//! ```

use crate::Vec3;
use std::ops::Mul;

/// 3x3 matrix mapping linear RGB to XYZ and back.
///
/// # Example
///
/// ```rust
/// use dichroma_math::{Mat3, Vec3};
///
/// let scale = Mat3::diagonal(2.0, 3.0, 4.0);
/// assert_eq!(scale * Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    rows: [Vec3; 3],
}

impl Mat3 {
    /// All zeros.
    pub const ZERO: Self = Self::from_rows([[0.0; 3]; 3]);

    /// The identity.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Builds a matrix from `[row0, row1, row2]`.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self {
            rows: [
                Vec3::from_array(rows[0]),
                Vec3::from_array(rows[1]),
                Vec3::from_array(rows[2]),
            ],
        }
    }

    /// Builds a matrix whose columns are `c0`, `c1`, `c2`.
    ///
    /// An RGB to XYZ matrix has the XYZ of each primary as a column.
    #[inline]
    pub const fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_rows([[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]])
    }

    /// `diag(d0, d1, d2)`.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Row `i` (0..3).
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        self.rows[i]
    }

    /// Column `i` (0..3).
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        let [r0, r1, r2] = self.rows;
        Vec3::new(r0[i], r1[i], r2[i])
    }

    /// The rows as plain arrays.
    #[inline]
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        self.rows.map(Vec3::to_array)
    }

    /// Swaps rows and columns.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_col_vecs(self.rows[0], self.rows[1], self.rows[2])
    }

    /// Determinant, as the scalar triple product of the rows.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let [r0, r1, r2] = self.rows;
        r0.dot(r1.cross(r2))
    }

    /// Inverse, or `None` when the determinant is (nearly) zero.
    ///
    /// The columns of the inverse are the pairwise cross products of the
    /// rows, divided by the determinant.
    ///
    /// ```rust
    /// use dichroma_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// assert_eq!(m.inverse(), Some(Mat3::diagonal(0.5, 0.25, 0.125)));
    /// assert_eq!(Mat3::ZERO.inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-15 {
            return None;
        }
        let [r0, r1, r2] = self.rows;
        let k = 1.0 / det;
        Some(Self::from_col_vecs(
            r1.cross(r2) * k,
            r2.cross(r0) * k,
            r0.cross(r1) * k,
        ))
    }

    /// `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let [r0, r1, r2] = self.rows;
        Vec3::new(r0.dot(v), r1.dot(v), r2.dot(v))
    }

    /// `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        // Row i of the product is row i of self pushed through `other` as a row vector.
        let t = other.transpose();
        Self {
            rows: self.rows.map(|r| t.transform(r)),
        }
    }

    /// Largest element-wise `|self - other|`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.max_abs_diff_to(*b))
            .fold(0.0, f64::max)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        self.transform(v)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        self.mul_mat(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: Mat3 = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);

    #[test]
    fn identity_keeps_vectors() {
        let v = Vec3::new(0.25, -3.0, 9.5);
        assert_eq!(Mat3::IDENTITY * v, v);
        assert_eq!(Mat3::default(), Mat3::IDENTITY);
    }

    #[test]
    fn columns_and_rows() {
        let m = Mat3::from_col_vecs(M.col(0), M.col(1), M.col(2));
        assert_eq!(m, M);
        assert_eq!(M.col(2), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(M.row(2), Vec3::new(5.0, 6.0, 0.0));
        assert_eq!(M.transpose().to_rows()[0], [1.0, 0.0, 5.0]);
    }

    #[test]
    fn determinant_of_known_matrix() {
        assert!((M.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_both_sides() {
        let inv = M.inverse().unwrap();
        assert!((M * inv).max_abs_diff(&Mat3::IDENTITY) < 1e-12);
        assert!((inv * M).max_abs_diff(&Mat3::IDENTITY) < 1e-12);
    }

    #[test]
    fn dependent_rows_have_no_inverse() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn product_applies_right_factor_first() {
        let swap_xy = Mat3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let scale = Mat3::diagonal(2.0, 3.0, 4.0);
        let v = Vec3::new(1.0, 10.0, 100.0);
        assert_eq!((scale * swap_xy) * v, scale * (swap_xy * v));
        assert_eq!((scale * swap_xy) * v, Vec3::new(20.0, 3.0, 400.0));
    }
}
