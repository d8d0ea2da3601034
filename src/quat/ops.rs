//! Implementations of `std::ops` and `approx` comparisons for [`Quat`].

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::traits::Number;

use super::Quat;

/// Component-wise addition over the `[r, ix, iy, iz]` flattening.
impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.i + rhs.i)
    }
}

/// Component-wise addition over the `[r, ix, iy, iz]` flattening.
impl<T: Number> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Component-wise subtraction over the `[r, ix, iy, iz]` flattening.
impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.i - rhs.i)
    }
}

/// Component-wise subtraction over the `[r, ix, iy, iz]` flattening.
impl<T: Number> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Quaternion * Scalar: scales all four flattened components uniformly.
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.r * rhs, self.i * rhs)
    }
}

/// Quaternion * Scalar: scales all four flattened components uniformly.
impl<T: Number> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// The Hamilton product.
///
/// Follows the standard sign/term layout and is *not* commutative.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [w0, x0, y0, z0] = self.into_array();
        let [w1, x1, y1, z1] = rhs.into_array();

        Self::from_array([
            w0 * w1 - x0 * x1 - y0 * y1 - z0 * z1,
            w0 * x1 + x0 * w1 + y0 * z1 - z0 * y1,
            w0 * y1 - x0 * z1 + y0 * w1 + z0 * x1,
            w0 * z1 + x0 * y1 - y0 * x1 + z0 * w1,
        ])
    }
}

/// The Hamilton product.
impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Scalar-Quaternion multiplication needs one impl per scalar type.
macro_rules! scalar_mul {
    ($($scalar:ty),+) => {
        $(
            /// Scalar * Quaternion: scales all four flattened components uniformly.
            impl Mul<Quat<$scalar>> for $scalar {
                type Output = Quat<$scalar>;

                fn mul(self, rhs: Quat<$scalar>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_mul!(f32, f64);

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon) && self.i.abs_diff_eq(&other.i, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.i.relative_eq(&other.i, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Quatd, Quatf};

    #[test]
    fn add_sub() {
        let p = Quatf::from_array([1.0, 2.0, 3.0, 4.0]);
        let q = Quatf::from_array([10.0, 20.0, 30.0, 40.0]);
        assert_eq!((p + q).into_array(), [11.0, 22.0, 33.0, 44.0]);
        assert_eq!((q - p).into_array(), [9.0, 18.0, 27.0, 36.0]);
        assert_eq!(p + q - q, p);

        let mut acc = p;
        acc += q;
        assert_eq!(acc, p + q);
        acc -= q;
        assert_eq!(acc, p);
    }

    #[test]
    fn scalar_mul() {
        let q = Quatd::from_array([1.0, -2.0, 3.0, -4.0]);
        assert_eq!((q * 2.0).into_array(), [2.0, -4.0, 6.0, -8.0]);
        assert_eq!(2.0 * q, q * 2.0);

        let mut q = q;
        q *= -1.0;
        assert_eq!(q.into_array(), [-1.0, 2.0, -3.0, 4.0]);
    }

    #[test]
    fn hamilton_product() {
        let p = Quatd::from_array([2.0, 3.0, 4.0, 5.0]);
        let q = Quatd::from_array([6.0, 7.0, 8.0, 9.0]);

        assert_eq!((p * q).into_array(), [-86.0, 28.0, 48.0, 44.0]);
        // Not commutative.
        assert_ne!(p * q, q * p);

        let identity = Quatd::from_array([1.0, 0.0, 0.0, 0.0]);
        assert_eq!(p * identity, p);
        assert_eq!(identity * p, p);
    }

    #[test]
    fn norm_is_multiplicative() {
        // Exact for integer-valued components.
        let p = Quatd::from_array([2.0, 3.0, 4.0, 5.0]);
        let q = Quatd::from_array([6.0, 7.0, 8.0, 9.0]);
        assert_eq!((p * q).norm(), p.norm() * q.norm());
    }
}
