//! # Fulcrum - fixed-dimension points and vectors
//!
//! Stack-allocated, `Copy` value types for geometric and graphics code:
//!
//! - [`FixedPoint<T, N>`]: coordinates with point/point and point/scalar arithmetic
//! - [`FixedVector<T, N>`]: displacements with scalar scaling, dot product and
//!   (for `N == 3`) cross product
//!
//! Both compare with an absolute per-component tolerance of `1e-4`, print as
//! `(c0, c1, ...)` and parse from whitespace-separated tokens.
//!
//! ```rust
//! use fulcrum::{Point3, Vector3};
//!
//! # fn main() -> Result<(), fulcrum::NumericsError> {
//! let p: Point3 = "100 200 356".parse()?;
//! assert_eq!(p.to_string(), "(100, 200, 356)");
//!
//! let a: Vector3 = Vector3::new([1.0, 2.0, 3.0]);
//! let b: Vector3 = Vector3::new([4.0, 5.0, 6.0]);
//! assert_eq!(a * a, 14.0);
//! assert_eq!(a.cross(&b), Vector3::new([-3.0, 6.0, -3.0]));
//! # Ok(())
//! # }
//! ```

pub mod numerics;

pub use numerics::types::error::NumericsError;
pub use numerics::types::point::{FixedPoint, Point3};
pub use numerics::types::tolerance::{Tolerance, DEFAULT_TOLERANCE};
pub use numerics::types::traits::Scalar;
pub use numerics::types::vector::{FixedVector, Vector3};
