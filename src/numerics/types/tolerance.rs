// src/numerics/types/tolerance.rs
// Approximate component-wise equality used by both FixedPoint and FixedVector.

use super::traits::Scalar;

/// Absolute tolerance used by `==` on points and vectors.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-4;

/// Configuration for tolerance-based equality.
///
/// Two component sequences are equal under a tolerance when every pair of
/// components differs by at most `epsilon`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest absolute per-component difference still considered equal
    pub epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_TOLERANCE,
        }
    }
}

impl Tolerance {
    /// Create a tolerance from an absolute epsilon. Negative values are
    /// treated as their magnitude.
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    /// Zero tolerance: components must match exactly.
    pub fn exact() -> Self {
        Self { epsilon: 0.0 }
    }

    /// Compare two scalars.
    pub fn scalars_eq<T: Scalar>(&self, a: T, b: T) -> bool {
        a.within_tolerance(b, self.epsilon)
    }

    /// Compare two component arrays index by index.
    pub fn components_eq<T: Scalar, const N: usize>(&self, a: &[T; N], b: &[T; N]) -> bool {
        a.iter().zip(b.iter()).all(|(&x, &y)| self.scalars_eq(x, y))
    }
}
