use std::fmt;
use std::ops::{Index, IndexMut};

use crate::traits::{Scalar, Zero};
use crate::{vec2, vec3, Vec2, Vec3};

mod ops;

/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Matrix2x2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Matrix2x2<f64>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Matrix3x3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Matrix3x3<f64>;
/// A homogeneous 4x4 matrix with [`f32`] elements.
pub type Mat4hf = Matrix4x4H<f32>;
/// A homogeneous 4x4 matrix with [`f64`] elements.
pub type Mat4hd = Matrix4x4H<f64>;

/// Symbolic `(row, column)` index into a matrix.
///
/// `Mrc` addresses the element in row `r` and column `c`, matching common mathematical
/// notation (0-based). The full 4x4 index set is defined here; each matrix type accepts
/// the subset valid for its dimension and panics on the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixIndex {
    M00,
    M01,
    M02,
    M03,
    M10,
    M11,
    M12,
    M13,
    M20,
    M21,
    M22,
    M23,
    M30,
    M31,
    M32,
    M33,
}

impl MatrixIndex {
    /// The row this index addresses.
    pub const fn row(self) -> usize {
        self as usize / 4
    }

    /// The column this index addresses.
    pub const fn col(self) -> usize {
        self as usize % 4
    }

    /// Returns the symbolic index for `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 4 or larger.
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < 4 && col < 4, "matrix index out of range");
        // Variant discriminants are laid out row-major, so this is a plain offset.
        const INDICES: [MatrixIndex; 16] = [
            MatrixIndex::M00,
            MatrixIndex::M01,
            MatrixIndex::M02,
            MatrixIndex::M03,
            MatrixIndex::M10,
            MatrixIndex::M11,
            MatrixIndex::M12,
            MatrixIndex::M13,
            MatrixIndex::M20,
            MatrixIndex::M21,
            MatrixIndex::M22,
            MatrixIndex::M23,
            MatrixIndex::M30,
            MatrixIndex::M31,
            MatrixIndex::M32,
            MatrixIndex::M33,
        ];
        INDICES[row * 4 + col]
    }

    /// Maps this index to the flat row-major storage offset of a `dim`-dimensional matrix.
    ///
    /// The mapping is total for every index within `dim` and never changes.
    ///
    /// # Panics
    ///
    /// Panics if the index addresses a row or column outside `dim`.
    pub const fn offset(self, dim: usize) -> usize {
        let (row, col) = (self.row(), self.col());
        assert!(
            row < dim && col < dim,
            "matrix index addresses a row or column outside the matrix dimension"
        );
        row * dim + col
    }
}

/// The shared contract of the fixed-dimension square matrix types.
///
/// Implementers provide flat row-major storage, [`transpose`][Self::transpose],
/// [`determinant`][Self::determinant] and [`invert`][Self::invert]; everything else
/// (diagonal construction, the matrix product, and the structural predicates) is derived
/// here from the indexed-access contract.
pub trait SquareMatrix<T: Scalar>:
    Sized + Copy + PartialEq + Index<MatrixIndex, Output = T> + IndexMut<MatrixIndex>
{
    /// The number of rows (and columns) of this matrix type.
    const DIM: usize;

    /// The matrix with every element set to 0.
    const ZERO: Self;

    /// The matrix with 1 on its diagonal and 0 everywhere else.
    const IDENTITY: Self;

    /// Creates a matrix by copying exactly `DIM²` row-major elements out of `elems`.
    ///
    /// # Panics
    ///
    /// Panics if `elems.len()` is not exactly `DIM²`.
    fn from_slice(elems: &[T]) -> Self;

    /// The flat row-major element store.
    fn as_slice(&self) -> &[T];

    /// Mutable access to the flat row-major element store.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Swaps the rows and columns of this matrix.
    ///
    /// Transposition is its own inverse: `m.transpose().transpose() == m`.
    fn transpose(&self) -> Self;

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    fn determinant(&self) -> T;

    /// Inverts this matrix.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not invertible (ie. if its [`determinant`][Self::determinant]
    /// is exactly zero). No near-singularity tolerance is applied; callers that need one
    /// must check the determinant themselves.
    fn invert(&self) -> Self;

    /// Creates a matrix with the given diagonal and 0 outside of its diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `diagonal.len()` is not exactly `DIM`.
    fn from_diagonal(diagonal: &[T]) -> Self {
        assert_eq!(
            diagonal.len(),
            Self::DIM,
            "diagonal length does not match the matrix dimension"
        );
        let mut out = Self::ZERO;
        for (i, &elem) in diagonal.iter().enumerate() {
            out[MatrixIndex::at(i, i)] = elem;
        }
        out
    }

    /// The matrix product of `self` and `rhs` (row-by-column summation).
    ///
    /// Also available through the `*` operator. Not commutative.
    fn matmul(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..Self::DIM {
            for j in 0..Self::DIM {
                let mut acc = T::ZERO;
                for k in 0..Self::DIM {
                    acc = acc + self[MatrixIndex::at(i, k)] * rhs[MatrixIndex::at(k, j)];
                }
                out[MatrixIndex::at(i, j)] = acc;
            }
        }
        out
    }

    /// Whether every element outside the diagonal is exactly zero.
    fn is_diagonal(&self) -> bool {
        for i in 0..Self::DIM {
            for j in 0..Self::DIM {
                if i != j && self[MatrixIndex::at(i, j)] != T::ZERO {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every element is exactly zero.
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whether this matrix is exactly the identity matrix.
    fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Whether this matrix equals its own transpose.
    fn is_symmetric(&self) -> bool {
        self.transpose() == *self
    }

    /// Whether the transpose of this matrix equals its element-wise negation.
    fn is_skew_symmetric(&self) -> bool {
        self.transpose()
            .as_slice()
            .iter()
            .zip(self.as_slice())
            .all(|(&t, &s)| -t == s)
    }

    /// Whether the inverse of this matrix equals its transpose *and* the absolute value
    /// of its determinant is exactly 1.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is singular, since the check computes the inverse.
    fn is_orthonormal(&self) -> bool {
        self.invert() == self.transpose() && self.determinant().abs() == T::ONE
    }

    /// Whether this matrix is orthonormal with determinant +1.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is singular.
    fn is_right_handed(&self) -> bool {
        self.is_orthonormal() && self.determinant() == T::ONE
    }

    /// Whether this matrix is orthonormal with determinant -1.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is singular.
    fn is_left_handed(&self) -> bool {
        self.is_orthonormal() && self.determinant() == -T::ONE
    }

    /// Whether the inverse of this matrix equals its transpose.
    ///
    /// Unlike [`is_orthonormal`][Self::is_orthonormal], this does *not* also require the
    /// determinant to have absolute value 1, so it accepts some non-rotation matrices
    /// (eg. certain shears). The asymmetry between the two predicates is a documented
    /// part of the contract; do not unify them.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is singular.
    fn is_rotation(&self) -> bool {
        self.invert() == self.transpose()
    }

    /// Whether this matrix is diagonal with every diagonal element strictly positive.
    ///
    /// A single zero or negative diagonal element disqualifies the matrix.
    fn is_scaling(&self) -> bool {
        if !self.is_diagonal() {
            return false;
        }
        let mut min = self[MatrixIndex::M00];
        for i in 1..Self::DIM {
            let elem = self[MatrixIndex::at(i, i)];
            if elem < min {
                min = elem;
            }
        }
        min > T::ZERO
    }
}

/// A 2x2 matrix stored as 4 row-major elements.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let m = Matrix2x2::from([0.0, 2.0, 3.0, 5.0]);
/// assert_eq!(m[MatrixIndex::M01], 2.0);
/// assert_eq!(m.determinant(), -6.0);
/// ```
#[derive(Clone, Copy, PartialEq, Hash)]
#[repr(transparent)]
pub struct Matrix2x2<T>([T; 4]);

/// A 3x3 matrix stored as 9 row-major elements.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let m = Matrix3x3::from_diagonal(&[1.0, 2.0, 3.0]);
/// assert!(m.is_diagonal());
/// assert_eq!(m.determinant(), 6.0);
/// ```
#[derive(Clone, Copy, PartialEq, Hash)]
#[repr(transparent)]
pub struct Matrix3x3<T>([T; 9]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Matrix2x2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Matrix2x2<T> {}
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Matrix3x3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Matrix3x3<T> {}

impl<T> From<[T; 4]> for Matrix2x2<T> {
    /// Creates a matrix from its 4 row-major elements.
    #[inline]
    fn from(elems: [T; 4]) -> Self {
        Self(elems)
    }
}

impl<T> From<[T; 9]> for Matrix3x3<T> {
    /// Creates a matrix from its 9 row-major elements.
    #[inline]
    fn from(elems: [T; 9]) -> Self {
        Self(elems)
    }
}

impl<T: Scalar> SquareMatrix<T> for Matrix2x2<T> {
    const DIM: usize = 2;
    const ZERO: Self = Self([T::ZERO; 4]);
    const IDENTITY: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ONE]);

    fn from_slice(elems: &[T]) -> Self {
        assert_eq!(
            elems.len(),
            4,
            "cannot construct a 2x2 matrix from a slice of length {}",
            elems.len(),
        );
        Self([elems[0], elems[1], elems[2], elems[3]])
    }

    fn as_slice(&self) -> &[T] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    fn transpose(&self) -> Self {
        let [a, b, c, d] = self.0;
        Self([a, c, b, d])
    }

    fn determinant(&self) -> T {
        let [a, b, c, d] = self.0;
        a * d - b * c
    }

    fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        let [a, b, c, d] = self.0;
        Self([d, -b, -c, a]).scaled(T::ONE / det)
    }
}

impl<T: Scalar> Matrix2x2<T> {
    /// Creates a matrix from 2 row vectors.
    ///
    /// # Panics
    ///
    /// Panics if `rows.len()` is not exactly 2.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Matrix2x2::from_rows(&[vec2(0.0, 1.0), vec2(2.0, 3.0)]);
    /// assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn from_rows(rows: &[Vec2<T>]) -> Self {
        assert_eq!(rows.len(), 2, "a 2x2 matrix requires exactly 2 rows");
        let [a, b] = rows[0].into_array();
        let [c, d] = rows[1].into_array();
        Self([a, b, c, d])
    }

    /// Creates a matrix from 2 column vectors.
    ///
    /// Always equal to the transpose of [`from_rows`][Self::from_rows] over the same
    /// vectors.
    ///
    /// # Panics
    ///
    /// Panics if `columns.len()` is not exactly 2.
    pub fn from_columns(columns: &[Vec2<T>]) -> Self {
        assert_eq!(columns.len(), 2, "a 2x2 matrix requires exactly 2 columns");
        Self::from_rows(columns).transpose()
    }

    /// The rows of this matrix, top to bottom.
    pub fn rows(&self) -> [Vec2<T>; 2] {
        let [a, b, c, d] = self.0;
        [vec2(a, b), vec2(c, d)]
    }

    /// The columns of this matrix, left to right.
    pub fn columns(&self) -> [Vec2<T>; 2] {
        self.transpose().rows()
    }

    /// The diagonal of this matrix as a vector.
    pub fn diagonal(&self) -> Vec2<T> {
        vec2(self.0[0], self.0[3])
    }

    fn scaled(&self, factor: T) -> Self {
        Self(self.0.map(|elem| elem * factor))
    }
}

impl<T: Scalar> SquareMatrix<T> for Matrix3x3<T> {
    const DIM: usize = 3;
    const ZERO: Self = Self([T::ZERO; 9]);
    const IDENTITY: Self = Self([
        T::ONE,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ONE,
        T::ZERO,
        T::ZERO,
        T::ZERO,
        T::ONE,
    ]);

    fn from_slice(elems: &[T]) -> Self {
        assert_eq!(
            elems.len(),
            9,
            "cannot construct a 3x3 matrix from a slice of length {}",
            elems.len(),
        );
        let mut store = [T::ZERO; 9];
        store.copy_from_slice(elems);
        Self(store)
    }

    fn as_slice(&self) -> &[T] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    fn transpose(&self) -> Self {
        let [a, b, c, d, e, f, g, h, i] = self.0;
        Self([a, d, g, b, e, h, c, f, i])
    }

    /// Cofactor expansion along the first row.
    fn determinant(&self) -> T {
        let [a, b, c, d, e, f, g, h, i] = self.0;
        let det_a = e * i - f * h;
        let det_b = d * i - f * g;
        let det_c = d * h - e * g;
        a * det_a - b * det_b + c * det_c
    }

    fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        self.transpose().adjugate().scaled(T::ONE / det)
    }
}

impl<T: Scalar> Matrix3x3<T> {
    /// Creates a matrix from 3 row vectors.
    ///
    /// # Panics
    ///
    /// Panics if `rows.len()` is not exactly 3.
    pub fn from_rows(rows: &[Vec3<T>]) -> Self {
        assert_eq!(rows.len(), 3, "a 3x3 matrix requires exactly 3 rows");
        let [a, b, c] = rows[0].into_array();
        let [d, e, f] = rows[1].into_array();
        let [g, h, i] = rows[2].into_array();
        Self([a, b, c, d, e, f, g, h, i])
    }

    /// Creates a matrix from 3 column vectors.
    ///
    /// Always equal to the transpose of [`from_rows`][Self::from_rows] over the same
    /// vectors.
    ///
    /// # Panics
    ///
    /// Panics if `columns.len()` is not exactly 3.
    pub fn from_columns(columns: &[Vec3<T>]) -> Self {
        assert_eq!(columns.len(), 3, "a 3x3 matrix requires exactly 3 columns");
        Self::from_rows(columns).transpose()
    }

    /// The rows of this matrix, top to bottom.
    pub fn rows(&self) -> [Vec3<T>; 3] {
        let [a, b, c, d, e, f, g, h, i] = self.0;
        [
            vec3(a, b, c),
            vec3(d, e, f),
            vec3(g, h, i),
        ]
    }

    /// The columns of this matrix, left to right.
    pub fn columns(&self) -> [Vec3<T>; 3] {
        self.transpose().rows()
    }

    /// The diagonal of this matrix as a vector.
    pub fn diagonal(&self) -> Vec3<T> {
        vec3(self.0[0], self.0[4], self.0[8])
    }

    /// The matrix of signed 2x2 minors of `self`.
    ///
    /// Applied to the transpose, this yields the classical adjugate used by
    /// [`invert`][SquareMatrix::invert].
    pub fn adjugate(&self) -> Self {
        let [a, b, c, d, e, f, g, h, i] = self.0;

        let d00 = e * i - f * h;
        let d01 = d * i - f * g;
        let d02 = d * h - e * g;
        let d10 = b * i - c * h;
        let d11 = a * i - c * g;
        let d12 = a * h - b * g;
        let d20 = b * f - c * e;
        let d21 = a * f - c * d;
        let d22 = a * e - b * d;

        Self([d00, -d01, d02, -d10, d11, -d12, d20, -d21, d22])
    }

    fn scaled(&self, factor: T) -> Self {
        Self(self.0.map(|elem| elem * factor))
    }
}

/// A homogeneous 4x4 matrix stored as 16 row-major elements.
///
/// This is a storage-only type reserved for a future affine-transform API: only
/// zero-construction and indexed element access are supported. It deliberately does not
/// implement [`SquareMatrix`], and no arithmetic, determinant, or inverse is provided.
#[derive(Clone, Copy, PartialEq, Hash)]
#[repr(transparent)]
pub struct Matrix4x4H<T>([T; 16]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Matrix4x4H<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Matrix4x4H<T> {}

impl<T: Zero> Matrix4x4H<T> {
    /// Creates a matrix with every element set to 0.
    pub const fn new() -> Self {
        Self([T::ZERO; 16])
    }
}

impl<T> Matrix4x4H<T> {
    /// The flat row-major element store.
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Zero> Default for Matrix4x4H<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<MatrixIndex> for Matrix4x4H<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: MatrixIndex) -> &T {
        &self.0[index.offset(4)]
    }
}

impl<T> IndexMut<MatrixIndex> for Matrix4x4H<T> {
    #[inline]
    fn index_mut(&mut self, index: MatrixIndex) -> &mut T {
        &mut self.0[index.offset(4)]
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix4x4H<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(f, &self.0, 4)
    }
}

/// Formats a flat row-major store as a list of row lists.
fn fmt_rows<T: fmt::Debug>(f: &mut fmt::Formatter<'_>, elems: &[T], dim: usize) -> fmt::Result {
    let mut list = f.debug_list();
    for row in elems.chunks(dim) {
        list.entry(&row);
    }
    list.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3};

    #[test]
    fn index_mapping() {
        for row in 0..4 {
            for col in 0..4 {
                let index = MatrixIndex::at(row, col);
                assert_eq!(index.row(), row);
                assert_eq!(index.col(), col);
                assert_eq!(index.offset(4), row * 4 + col);
            }
        }
        assert_eq!(MatrixIndex::M00.offset(2), 0);
        assert_eq!(MatrixIndex::M11.offset(2), 3);
        assert_eq!(MatrixIndex::M21.offset(3), 7);
    }

    #[test]
    #[should_panic(expected = "outside the matrix dimension")]
    fn index_outside_dimension() {
        MatrixIndex::M02.offset(2);
    }

    #[test]
    fn indexed_access() {
        let mut m = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m[MatrixIndex::M00], 1.0);
        assert_eq!(m[MatrixIndex::M01], 2.0);
        assert_eq!(m[MatrixIndex::M10], 3.0);
        assert_eq!(m[MatrixIndex::M11], 4.0);
        m[MatrixIndex::M10] = 777.0;
        assert_eq!(m.as_slice(), &[1.0, 2.0, 777.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "slice of length 3")]
    fn from_slice_too_short() {
        Mat2f::from_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "slice of length 10")]
    fn from_slice_too_long() {
        Mat3f::from_slice(&[0.0; 10]);
    }

    #[test]
    #[should_panic(expected = "exactly 3 rows")]
    fn from_rows_wrong_count() {
        Matrix3x3::from_rows(&[vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn rows_and_columns() {
        let rows2 = [vec2(0.0, 1.0), vec2(2.0, 3.0)];
        assert_eq!(
            Matrix2x2::from_columns(&rows2),
            Matrix2x2::from_rows(&rows2).transpose()
        );
        assert_eq!(Matrix2x2::from_rows(&rows2).rows(), rows2);
        assert_eq!(
            Matrix2x2::from_columns(&rows2).columns(),
            rows2,
        );

        let rows3 = [
            vec3(0.0, 1.0, 2.0),
            vec3(3.0, 4.0, 5.0),
            vec3(6.0, 7.0, 8.0),
        ];
        assert_eq!(
            Matrix3x3::from_columns(&rows3),
            Matrix3x3::from_rows(&rows3).transpose()
        );
        assert_eq!(Matrix3x3::from_rows(&rows3).rows(), rows3);
    }

    #[test]
    fn diagonal() {
        let m = Mat3d::from_diagonal(&[1.0, 2.0, 3.0]);
        assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0]);
        assert_eq!(m.diagonal(), vec3(1.0, 2.0, 3.0));
        assert!(m.is_diagonal());

        let m = Mat2f::from_slice(&[1.0, 0.5, 0.0, 2.0]);
        assert!(!m.is_diagonal());
        assert_eq!(m.diagonal(), vec2(1.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "diagonal length")]
    fn diagonal_wrong_length() {
        Mat2f::from_diagonal(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn transpose() {
        let m = Mat3f::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(
            m.transpose().as_slice(),
            &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]
        );
        assert_eq!(m.transpose().transpose(), m);

        let m = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.transpose().as_slice(), &[1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3d::ZERO.determinant(), 0.0);
        assert_eq!(Mat3d::IDENTITY.determinant(), 1.0);

        assert_eq!(Mat2f::from_slice(&[-2.0, -1.0, 3.0, 3.0]).determinant(), -3.0);

        let m = Mat3d::from_slice(&[-2.0, -1.0, 2.0, 2.0, 1.0, 4.0, -3.0, 3.0, -1.0]);
        assert_eq!(m.determinant(), 54.0);
        assert_eq!(m.transpose().determinant(), 54.0);
    }

    #[test]
    fn invert_2x2() {
        let m = Mat2d::from_slice(&[-2.0, -1.0, 3.0, 3.0]);
        let inv = m.invert();
        assert_eq!(inv.as_slice(), &[-1.0, -1.0 / 3.0, 1.0, 2.0 / 3.0]);
    }

    #[test]
    fn invert_3x3() {
        let m = Mat3d::from_slice(&[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        let inv = m.invert();
        assert_eq!(
            inv.as_slice(),
            &[-24.0, 18.0, 5.0, 20.0, -15.0, -4.0, -5.0, 4.0, 1.0]
        );
    }

    #[test]
    #[should_panic(expected = "non-invertible")]
    fn invert_singular_2x2() {
        Mat2f::from_slice(&[1.0, 2.0, 2.0, 4.0]).invert();
    }

    #[test]
    #[should_panic(expected = "non-invertible")]
    fn invert_singular_3x3() {
        Mat3f::ZERO.invert();
    }

    #[test]
    fn predicates() {
        assert!(Mat2f::ZERO.is_zero());
        assert!(!Mat2f::IDENTITY.is_zero());
        assert!(Mat3d::IDENTITY.is_identity());
        assert!(!Mat3d::ZERO.is_identity());

        let sym = Mat3f::from_slice(&[1.0, 7.0, 3.0, 7.0, 4.0, 5.0, 3.0, 5.0, 6.0]);
        assert!(sym.is_symmetric());
        assert!(!Mat3f::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).is_symmetric());

        let skew = Mat2f::from_slice(&[0.0, -2.0, 2.0, 0.0]);
        assert!(skew.is_skew_symmetric());
        assert!(!Mat2f::IDENTITY.is_skew_symmetric());
    }

    #[test]
    fn orthonormal_and_handedness() {
        assert!(Mat3d::IDENTITY.is_orthonormal());
        assert!(Mat3d::IDENTITY.is_right_handed());
        assert!(!Mat3d::IDENTITY.is_left_handed());

        // Reflection across the X axis: orthonormal but left-handed.
        let reflection = Mat2d::from_diagonal(&[1.0, -1.0]);
        assert!(reflection.is_orthonormal());
        assert!(reflection.is_left_handed());
        assert!(!reflection.is_right_handed());

        // Quarter-turn rotation, exact under integer-valued floats.
        let quarter = Mat2d::from_slice(&[0.0, -1.0, 1.0, 0.0]);
        assert!(quarter.is_orthonormal());
        assert!(quarter.is_right_handed());

        assert!(!Mat2d::from_diagonal(&[2.0, 2.0]).is_orthonormal());
    }

    #[test]
    fn rotation_is_weaker_than_orthonormal() {
        assert!(Mat2d::IDENTITY.is_rotation());

        let quarter = Mat2d::from_slice(&[0.0, -1.0, 1.0, 0.0]);
        assert!(quarter.is_rotation());

        // The rotation predicate only checks `invert() == transpose()` and performs no
        // determinant screening, so a reflection (det == -1) passes it too.
        let reflection = Mat2d::from_diagonal(&[1.0, -1.0]);
        assert!(reflection.is_rotation());
        assert!(!reflection.is_right_handed());

        assert!(!Mat2d::from_diagonal(&[2.0, 0.5]).is_rotation());
    }

    #[test]
    fn scaling() {
        assert!(Mat2f::from_diagonal(&[2.0, 3.0]).is_scaling());
        assert!(Mat3d::IDENTITY.is_scaling());
        // A zero diagonal element disqualifies the matrix, as does a negative one.
        assert!(!Mat2f::from_diagonal(&[2.0, 0.0]).is_scaling());
        assert!(!Mat2f::from_diagonal(&[2.0, -1.0]).is_scaling());
        assert!(!Mat2f::from_slice(&[2.0, 1.0, 0.0, 3.0]).is_scaling());
    }

    #[test]
    fn homogeneous_stub() {
        let mut m = Mat4hf::new();
        assert!(m.as_slice().iter().all(|&e| e == 0.0));
        m[MatrixIndex::M33] = 1.0;
        m[MatrixIndex::M03] = 7.0;
        assert_eq!(m[MatrixIndex::M33], 1.0);
        assert_eq!(m[MatrixIndex::M03], 7.0);
        assert_eq!(m.as_slice()[3], 7.0);
        assert_eq!(m.as_slice()[15], 1.0);
        assert_eq!(Mat4hd::default(), Mat4hd::new());
    }

    #[test]
    fn fmt() {
        let m = Mat2f::from_slice(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(format!("{m:?}"), "[[0.0, 1.0], [2.0, 3.0]]");
    }
}
