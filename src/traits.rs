use std::ops;

/// Types with a square-root operation.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types with an absolute-value operation.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types with an additive identity.
pub trait Zero {
    /// The value 0 of this type.
    const ZERO: Self;
}

/// Types with a multiplicative identity.
pub trait One {
    /// The value 1 of this type.
    const ONE: Self;
}

/// Types whose degree angle values can be converted to radians.
pub trait ToRadians {
    /// Converts `self` from degrees to radians (`self * π / 180`).
    fn to_radians(self) -> Self;
}

/// Numbers: types closed under the basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point-capable numbers.
///
/// This is the element contract required by magnitudes, matrix decomposition,
/// and the structural predicates ([`is_orthonormal`][crate::SquareMatrix::is_orthonormal],
/// [`is_scaling`][crate::SquareMatrix::is_scaling], ...). Implemented by [`f32`] and [`f64`].
pub trait Scalar: Number + PartialOrd + Abs + Sqrt {}
impl<T> Scalar for T where T: Number + PartialOrd + Abs + Sqrt {}

impl Zero for f32 {
    const ZERO: Self = 0.0;
}
impl Zero for f64 {
    const ZERO: Self = 0.0;
}

impl One for f32 {
    const ONE: Self = 1.0;
}
impl One for f64 {
    const ONE: Self = 1.0;
}

impl ToRadians for f32 {
    fn to_radians(self) -> Self {
        self.to_radians()
    }
}
impl ToRadians for f64 {
    fn to_radians(self) -> Self {
        self.to_radians()
    }
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Abs for f32 {
    fn abs(self) -> Self {
        self.abs()
    }
}
impl Abs for f64 {
    fn abs(self) -> Self {
        self.abs()
    }
}

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// assert_eq!(degrees_to_radians(180.0_f32), std::f32::consts::PI);
/// assert_eq!(degrees_to_radians(90.0_f64), std::f64::consts::FRAC_PI_2);
/// ```
pub fn degrees_to_radians<T: ToRadians>(degrees: T) -> T {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees() {
        assert_eq!(degrees_to_radians(0.0_f32), 0.0);
        assert_eq!(degrees_to_radians(360.0_f64), 2.0 * std::f64::consts::PI);
        assert_eq!(degrees_to_radians(-180.0_f32), -std::f32::consts::PI);
    }
}
