// src/numerics/types/traits.rs
// Scalar element bound shared by the point and vector types.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Scalar is the element trait for the fixed-size numeric types.
///
/// We require Copy, PartialOrd and the basic arithmetic ops on Self, both in
/// their value-returning and compound-assignment forms.
pub trait Scalar:
    Copy
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    fn zero() -> Self;

    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Parse a single whitespace-free token.
    fn parse_token(token: &str) -> Result<Self, String>;

    /// Division that reports a zero divisor or integer overflow as `None`.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Returns true when `|self - other| <= epsilon`.
    ///
    /// Identical values always match, infinities included. NaN matches only
    /// another NaN.
    fn within_tolerance(self, other: Self, epsilon: f64) -> bool;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn zero() -> Self { 0.0 }

            fn parse_token(token: &str) -> Result<Self, String> {
                token.parse::<$t>().map_err(|e| e.to_string())
            }

            fn checked_div(self, rhs: Self) -> Option<Self> {
                if rhs == 0.0 {
                    None
                } else {
                    Some(self / rhs)
                }
            }

            fn within_tolerance(self, other: Self, epsilon: f64) -> bool {
                self == other
                    || (self.is_nan() && other.is_nan())
                    || ((self - other).abs() as f64) <= epsilon
            }
        }
    )*};
}

// Integer differences go through abs_diff so extreme values cannot overflow.
macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn zero() -> Self { 0 }

            fn parse_token(token: &str) -> Result<Self, String> {
                token.parse::<$t>().map_err(|e| e.to_string())
            }

            fn checked_div(self, rhs: Self) -> Option<Self> {
                <$t>::checked_div(self, rhs)
            }

            fn within_tolerance(self, other: Self, epsilon: f64) -> bool {
                (self.abs_diff(other) as f64) <= epsilon
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(f32::zero(), 0.0);
        assert_eq!(i32::zero(), 0);
        assert!(0.0f64.is_zero());
        assert!(!1u16.is_zero());
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(f32::parse_token("3.5"), Ok(3.5));
        assert_eq!(i64::parse_token("-42"), Ok(-42));
        assert!(u8::parse_token("-1").is_err());
        assert!(f64::parse_token("abc").is_err());
    }

    #[test]
    fn test_float_tolerance() {
        assert!(1.0f64.within_tolerance(1.00005, 1e-4));
        assert!(!1.0f64.within_tolerance(1.01, 1e-4));
    }

    #[test]
    fn test_float_tolerance_non_finite() {
        assert!(f32::INFINITY.within_tolerance(f32::INFINITY, 1e-4));
        assert!(f64::NEG_INFINITY.within_tolerance(f64::NEG_INFINITY, 0.0));
        assert!(!f32::INFINITY.within_tolerance(f32::NEG_INFINITY, 1e-4));
        assert!(!f64::INFINITY.within_tolerance(1.0e300, 1e-4));
        assert!(f32::NAN.within_tolerance(f32::NAN, 1e-4));
        assert!(!f32::NAN.within_tolerance(1.0, 1e-4));
        assert!(!2.0f64.within_tolerance(f64::NAN, 1e-4));
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(Scalar::checked_div(6.0f32, 2.0), Some(3.0));
        assert_eq!(Scalar::checked_div(1.0f64, 0.0), None);
        assert_eq!(Scalar::checked_div(7i32, 2), Some(3));
        assert_eq!(Scalar::checked_div(7u8, 0), None);
        assert_eq!(Scalar::checked_div(i32::MIN, -1), None);
    }

    #[test]
    fn test_integer_tolerance_is_exact_by_default() {
        assert!(5i32.within_tolerance(5, 1e-4));
        assert!(!5i32.within_tolerance(6, 1e-4));
        assert!(5i32.within_tolerance(6, 1.0));
        assert!(!i8::MIN.within_tolerance(i8::MAX, 1e-4));
        assert!(3u32.within_tolerance(1, 2.0));
    }
}
