//! Small, stack-friendly linear algebra primitives for geometry, graphics, and physics
//! code: fixed-dimension vectors (2D, 3D), fixed-dimension square matrices (2x2, 3x3,
//! and a homogeneous 4x4 storage type), and quaternions, generic over a floating-point
//! element type.
//!
//! # Goals & Non-Goals
//!
//! - Fixed dimensions only. Vector and matrix sizes are part of the type, so there is
//!   nothing to check at runtime and every value lives on the stack. Dynamically-sized
//!   or sparse objects are out of scope.
//! - Exact, well-defined arithmetic and decomposition semantics: determinant and
//!   inverse via cofactor expansion for the 2x2 and 3x3 cases, transpose, the Hamilton
//!   product, and the structural predicates derived from them. Decompositions beyond
//!   that (LU, SVD, eigen) are out of scope, as is SIMD-level performance tuning.
//! - Shape mismatches (wrong-length input slices, out-of-range indices) and inversion
//!   of an exactly-singular matrix are programmer errors and panic; they are never
//!   reported as recoverable results.
//! - Equality is exact and component-wise. Tolerance-based comparison is available
//!   through the [`approx`] crate's traits, which every algebraic type implements.
//!
//! # Example
//!
//! ```
//! use linmath::*;
//!
//! let m = Matrix3x3::from_rows(&[
//!     vec3(1.0, 2.0, 3.0),
//!     vec3(0.0, 1.0, 4.0),
//!     vec3(5.0, 6.0, 0.0),
//! ]);
//! assert_eq!(m.determinant(), 1.0);
//! assert_eq!(m.invert() * m, Matrix3x3::IDENTITY);
//! ```

mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
