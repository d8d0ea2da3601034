//! Implementations of `std::ops` and `approx` comparisons.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Written out by hand so vectors can be compared against vectors and arrays of a
// different element type.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
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

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

/// Negates every element.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(|elem| -elem)
    }
}

/// Adds two vectors element-wise.
impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
    T: Add,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(lhs, rhs)| lhs + rhs)
    }
}

/// Adds two vectors element-wise.
impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        for (lhs, rhs) in self.as_mut_slice().iter_mut().zip(rhs.into_array()) {
            *lhs += rhs;
        }
    }
}

/// Subtracts two vectors element-wise.
impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
    T: Sub,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(lhs, rhs)| lhs - rhs)
    }
}

/// Subtracts two vectors element-wise.
impl<T, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        for (lhs, rhs) in self.as_mut_slice().iter_mut().zip(rhs.into_array()) {
            *lhs -= rhs;
        }
    }
}

/// Scales every element by `rhs`.
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|lhs| lhs * rhs)
    }
}

/// Scales every element by `rhs`.
impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        for lhs in self.as_mut_slice() {
            *lhs *= rhs;
        }
    }
}

/// Divides every element by `rhs`.
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|lhs| lhs / rhs)
    }
}

/// Divides every element by `rhs`.
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        for lhs in self.as_mut_slice() {
            *lhs /= rhs;
        }
    }
}

// Scalar-Vector multiplication needs one impl per scalar type; a blanket
// `impl Mul<Vector<T, N>> for T` would conflict with the impls above.
macro_rules! scalar_mul {
    ($($scalar:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;

                fn mul(self, rhs: Vector<$scalar, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}
scalar_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vec2f};

    #[test]
    fn arith() {
        assert_eq!(vec2(1.0, 2.0) + vec2(10.0, 20.0), vec2(11.0, 22.0));
        assert_eq!(vec2(1.0, 2.0) - vec2(10.0, 20.0), vec2(-9.0, -18.0));
        assert_eq!(-vec3(1.0, -2.0, 3.0), vec3(-1.0, 2.0, -3.0));

        let mut v = vec2(1.0, 2.0);
        v += vec2(1.0, 1.0);
        assert_eq!(v, vec2(2.0, 3.0));
        v -= vec2(2.0, 2.0);
        assert_eq!(v, vec2(0.0, 1.0));
    }

    #[test]
    fn scaling() {
        assert_eq!(vec3(1.0, 2.0, 3.0) * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(2.0 * vec3(1.0, 2.0, 3.0), vec3(2.0, 4.0, 6.0));
        assert_eq!(2.0_f64 * vec2(1.0, 2.0), vec2(2.0, 4.0));
        assert_eq!(vec2(2.0, 4.0) / 2.0, vec2(1.0, 2.0));

        let mut v = Vec2f::X;
        v *= 3.0;
        assert_eq!(v, vec2(3.0, 0.0));
        v /= 2.0;
        assert_eq!(v, vec2(1.5, 0.0));
    }
}
