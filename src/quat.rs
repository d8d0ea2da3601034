use crate::traits::{Number, Sqrt};
use crate::{vec3, Vec3};

mod ops;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of a real number and 3 imaginary numbers.
///
/// The canonical flattening is `[r, ix, iy, iz]` (real part first): every arithmetic
/// operation, [`from_array`][Self::from_array], and [`into_array`][Self::into_array]
/// agree on that layout.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let q = Quat::new(2.0, vec3(3.0, 4.0, 5.0));
/// assert_eq!(q.into_array(), [2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(q.conjugate().into_array(), [2.0, -3.0, -4.0, -5.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Hash)]
#[repr(C)]
pub struct Quat<T> {
    /// The real (scalar) part.
    pub r: T,
    /// The imaginary (vector) part.
    pub i: Vec3<T>,
}

// `Vec3<T>` is `repr(transparent)` over `[T; 3]`, so `Quat<T>` is 4 consecutive `T`s.
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part and imaginary vector.
    #[inline]
    pub const fn new(r: T, i: Vec3<T>) -> Self {
        Self { r, i }
    }

    /// Creates a quaternion from its canonical `[r, ix, iy, iz]` flattening.
    pub fn from_array([r, ix, iy, iz]: [T; 4]) -> Self {
        Self::new(r, vec3(ix, iy, iz))
    }

    /// Creates a quaternion by copying exactly 4 elements (`[r, ix, iy, iz]`) out of
    /// `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len()` is not exactly 4.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Copy,
    {
        assert_eq!(
            slice.len(),
            4,
            "cannot construct a quaternion from a slice of length {}",
            slice.len(),
        );
        Self::from_array([slice[0], slice[1], slice[2], slice[3]])
    }

    /// Creates a quaternion from a rotation angle (in radians) and an axis.
    ///
    /// FIXME: this currently stores `angle` and `axis` verbatim instead of computing
    /// `(cos(angle/2), sin(angle/2) * axis)`; it is *not* a working axis-angle
    /// conversion. Callers and tests rely on the literal behavior, so it must stay
    /// as-is until the conversion semantics are decided.
    pub fn from_angle_axis(angle: T, axis: Vec3<T>) -> Self {
        Self::new(angle, axis)
    }

    /// Converts this quaternion into its canonical `[r, ix, iy, iz]` flattening.
    pub fn into_array(self) -> [T; 4] {
        let [ix, iy, iz] = self.i.into_array();
        [self.r, ix, iy, iz]
    }

    /// The first imaginary component.
    #[inline]
    pub fn ix(&self) -> T
    where
        T: Copy,
    {
        self.i[0]
    }

    /// The second imaginary component.
    #[inline]
    pub fn iy(&self) -> T
    where
        T: Copy,
    {
        self.i[1]
    }

    /// The third imaginary component.
    #[inline]
    pub fn iz(&self) -> T
    where
        T: Copy,
    {
        self.i[2]
    }

    /// The length of the imaginary part of this quaternion.
    ///
    /// Note that this ignores the real part; it is not the 4-component Euclidean norm
    /// (for the squared 4-component norm, see [`norm`][Self::norm]).
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.i.length()
    }

    /// The conjugate of this quaternion: the imaginary part is negated, the real part
    /// kept.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::new(self.r, -self.i)
    }

    /// The *squared* norm of this quaternion: the sum of the squares of all four
    /// components of the `[r, ix, iy, iz]` flattening.
    ///
    /// Despite the name, no square root is applied.
    pub fn norm(&self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .fold(T::ZERO, |acc, c| acc + c * c)
    }

    /// The multiplicative inverse of this quaternion:
    /// `conjugate() * (1 / norm())`.
    ///
    /// `q * q.inverse()` is the identity quaternion `(1, 0, 0, 0)` up to rounding.
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.conjugate() * (T::ONE / self.norm())
    }

    /// The 4-component dot product of `self` and `other`, computed as the product of
    /// the real parts plus the dot product of the imaginary vectors.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.r * other.r + self.i.dot(other.i)
    }
}

/// One-way adapter from the SIMD quaternion type.
#[cfg(feature = "glam")]
impl From<glam::Quat> for Quat<f32> {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.w, vec3(q.x, q.y, q.z))
    }
}

/// One-way adapter from the SIMD quaternion type.
#[cfg(feature = "glam")]
impl From<glam::DQuat> for Quat<f64> {
    fn from(q: glam::DQuat) -> Self {
        Self::new(q.w, vec3(q.x, q.y, q.z))
    }
}
