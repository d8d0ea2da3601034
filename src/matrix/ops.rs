//! Implementations of `std::ops` and `approx` comparisons for the matrix types.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::traits::Scalar;

use super::{Matrix2x2, Matrix3x3, MatrixIndex, SquareMatrix};

macro_rules! impl_matrix_ops {
    ($mat:ident, $dim:expr) => {
        impl<T> Index<MatrixIndex> for $mat<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: MatrixIndex) -> &T {
                &self.0[index.offset($dim)]
            }
        }

        impl<T> IndexMut<MatrixIndex> for $mat<T> {
            #[inline]
            fn index_mut(&mut self, index: MatrixIndex) -> &mut T {
                &mut self.0[index.offset($dim)]
            }
        }

        /// The default value is the zero matrix.
        impl<T: Scalar> Default for $mat<T> {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $mat<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                super::fmt_rows(f, &self.0, $dim)
            }
        }

        /// Element-wise addition.
        impl<T: Scalar> Add for $mat<T> {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        /// Element-wise addition.
        impl<T: Scalar> AddAssign for $mat<T> {
            fn add_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                    *lhs = *lhs + rhs;
                }
            }
        }

        /// Element-wise subtraction.
        impl<T: Scalar> Sub for $mat<T> {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        /// Element-wise subtraction.
        impl<T: Scalar> SubAssign for $mat<T> {
            fn sub_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                    *lhs = *lhs - rhs;
                }
            }
        }

        /// Element-wise negation.
        impl<T: Scalar> Neg for $mat<T> {
            type Output = Self;

            fn neg(self) -> Self {
                $mat(self.0.map(|elem| -elem))
            }
        }

        /// Matrix * Matrix (row-by-column summation).
        impl<T: Scalar> Mul for $mat<T> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                self.matmul(&rhs)
            }
        }

        /// Matrix * Matrix (row-by-column summation).
        impl<T: Scalar> MulAssign for $mat<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.matmul(&rhs);
            }
        }

        /// Matrix * Scalar (uniform scaling of every element).
        impl<T: Scalar> Mul<T> for $mat<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                self.scaled(rhs)
            }
        }

        /// Matrix * Scalar (uniform scaling of every element).
        impl<T: Scalar> MulAssign<T> for $mat<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = self.scaled(rhs);
            }
        }

        impl<T> AbsDiffEq for $mat<T>
        where
            T: AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.0
                    .iter()
                    .zip(&other.0)
                    .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
            }
        }

        impl<T> RelativeEq for $mat<T>
        where
            T: RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.0
                    .iter()
                    .zip(&other.0)
                    .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
            }
        }
    };
}

impl_matrix_ops!(Matrix2x2, 2);
impl_matrix_ops!(Matrix3x3, 3);

// Scalar-Matrix multiplication needs one impl per scalar type.
macro_rules! impl_scalar_mul {
    ($mat:ident: $($scalar:ty),+) => {
        $(
            /// Scalar * Matrix (uniform scaling of every element).
            impl Mul<$mat<$scalar>> for $scalar {
                type Output = $mat<$scalar>;

                fn mul(self, rhs: $mat<$scalar>) -> Self::Output {
                    rhs.scaled(self)
                }
            }
        )+
    };
}

impl_scalar_mul!(Matrix2x2: f32, f64);
impl_scalar_mul!(Matrix3x3: f32, f64);
