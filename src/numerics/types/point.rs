// src/numerics/types/point.rs
// FixedPoint<T, N>: an N-dimensional point with stack-resident coordinates.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::components;
use super::error::NumericsError;
use super::tolerance::Tolerance;
use super::traits::Scalar;

/// FixedPoint is a point in N-dimensional space.
///
/// Coordinates live in a `[T; N]` array, so the dimension is fixed by the type
/// and never changes. Equality (`==`) is approximate, see [`Tolerance`].
#[derive(Copy, Clone, Debug)]
pub struct FixedPoint<T: Scalar, const N: usize> {
    coords: [T; N],
}

/// Three-dimensional point, `f32` by default.
pub type Point3<T = f32> = FixedPoint<T, 3>;

impl<T: Scalar, const N: usize> FixedPoint<T, N> {
    pub const DIMENSION: usize = N;

    /// Construct a point from an array of exactly N coordinates
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    /// The origin
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Every coordinate set to `value`
    pub fn splat(value: T) -> Self {
        Self { coords: [value; N] }
    }

    /// Construct from a run-time sequence that must hold exactly N values.
    pub fn from_slice(values: &[T]) -> Result<Self, NumericsError> {
        components::exact_components(values).map(Self::new)
    }

    /// Construct from the first N values of a buffer holding at least N.
    pub fn from_buffer(buffer: &[T]) -> Result<Self, NumericsError> {
        components::leading_components(buffer).map(Self::new)
    }

    pub fn dimension(&self) -> usize {
        N
    }

    /// Move the coordinates out, leaving the origin behind.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Overwrite `self` with `source` and reset `source` to the origin.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.coords.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.coords.get_mut(index)
    }

    /// Bounds-checked read
    pub fn try_get(&self, index: usize) -> Result<T, NumericsError> {
        self.get(index)
            .copied()
            .ok_or(NumericsError::IndexOutOfBounds { index, dimension: N })
    }

    /// Bounds-checked write; leaves the point untouched on error
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), NumericsError> {
        let slot = self
            .get_mut(index)
            .ok_or(NumericsError::IndexOutOfBounds { index, dimension: N })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.coords.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.coords.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.coords
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.coords
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.coords
    }

    pub fn into_array(self) -> [T; N] {
        self.coords
    }

    /// Divide every coordinate by `scalar`, refusing a zero divisor and
    /// integer overflow instead of panicking.
    pub fn checked_div(self, scalar: T) -> Result<Self, NumericsError> {
        components::checked_div_components(&self.coords, scalar).map(Self::new)
    }

    /// Equality under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.components_eq(&self.coords, &other.coords)
    }

    /// Stream-style extraction: consume N tokens and overwrite the coordinates.
    ///
    /// Tokens after the N-th are left in `tokens`. On error the point keeps
    /// its previous coordinates.
    pub fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<(), NumericsError>
    where
        I: Iterator<Item = &'a str>,
    {
        self.coords = components::read_components(tokens)?;
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Default for FixedPoint<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> PartialEq for FixedPoint<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::default())
    }
}

impl<T: Scalar, const N: usize> Index<usize> for FixedPoint<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for FixedPoint<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.coords[index]
    }
}

// Compound operators, element-wise in index order

impl<T: Scalar, const N: usize> AddAssign for FixedPoint<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (c, r) in self.coords.iter_mut().zip(rhs.coords) {
            *c += r;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for FixedPoint<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (c, r) in self.coords.iter_mut().zip(rhs.coords) {
            *c -= r;
        }
    }
}

impl<T: Scalar, const N: usize> AddAssign<T> for FixedPoint<T, N> {
    fn add_assign(&mut self, rhs: T) {
        for c in self.coords.iter_mut() {
            *c += rhs;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign<T> for FixedPoint<T, N> {
    fn sub_assign(&mut self, rhs: T) {
        for c in self.coords.iter_mut() {
            *c -= rhs;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for FixedPoint<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for c in self.coords.iter_mut() {
            *c *= rhs;
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for FixedPoint<T, N> {
    fn div_assign(&mut self, rhs: T) {
        for c in self.coords.iter_mut() {
            *c /= rhs;
        }
    }
}

// Value operators, built on the compound forms

impl<T: Scalar, const N: usize> Add for FixedPoint<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Sub for FixedPoint<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Add<T> for FixedPoint<T, N> {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Sub<T> for FixedPoint<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Mul<T> for FixedPoint<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Div<T> for FixedPoint<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> fmt::Display for FixedPoint<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        components::fmt_components(&self.coords, f)
    }
}

impl<T: Scalar, const N: usize> FromStr for FixedPoint<T, N> {
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        components::parse_components(s).map(Self::new)
    }
}

// Iteration

impl<T: Scalar, const N: usize> IntoIterator for FixedPoint<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a FixedPoint<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a mut FixedPoint<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Conversions

impl<T: Scalar, const N: usize> From<[T; N]> for FixedPoint<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self::new(coords)
    }
}

impl<T: Scalar, const N: usize> From<FixedPoint<T, N>> for [T; N] {
    fn from(p: FixedPoint<T, N>) -> Self {
        p.coords
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for FixedPoint<T, N> {
    type Error = NumericsError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for FixedPoint<T, N> {
    type Error = NumericsError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for FixedPoint<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.coords
    }
}

impl<T: Scalar, const N: usize> AsMut<[T]> for FixedPoint<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.coords
    }
}

// Serde, as a fixed-length tuple

impl<T, const N: usize> Serialize for FixedPoint<T, N>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        components::serialize_components(&self.coords, serializer)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedPoint<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        components::deserialize_components(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EQTOL: f32 = 1e-4;

    fn pt(coords: [f32; 3]) -> Point3 {
        Point3::new(coords)
    }

    fn assert_coords(p: &Point3, expected: [f32; 3]) {
        for (i, e) in expected.iter().enumerate() {
            assert!((p[i] - e).abs() < EQTOL, "coordinate {i}: {} != {e}", p[i]);
        }
    }

    #[test]
    fn test_default_constructor() {
        let p = Point3::default();
        assert_coords(&p, [0.0, 0.0, 0.0]);
        assert_eq!(p.dimension(), 3);
        assert_eq!(Point3::<f32>::DIMENSION, 3);
    }

    #[test]
    fn test_literal_constructors() {
        let p = pt([1.0, 2.0, 3.0]);
        assert_coords(&p, [1.0, 2.0, 3.0]);

        let p = Point3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_coords(&p, [1.0, 2.0, 3.0]);

        assert_eq!(
            Point3::<f32>::from_slice(&[1.0, 2.0]),
            Err(NumericsError::SizeMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            Point3::<f32>::try_from(vec![1.0, 2.0, 3.0, 4.0]),
            Err(NumericsError::SizeMismatch { expected: 3, actual: 4 })
        );
    }

    #[test]
    fn test_buffer_constructor() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0];
        let p = Point3::from_buffer(&data).unwrap();
        assert_coords(&p, [1.0, 2.0, 3.0]);

        assert!(matches!(
            Point3::<f32>::from_buffer(&data[..2]),
            Err(NumericsError::SizeMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_single_value_constructor() {
        assert_coords(&Point3::splat(10.0), [10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_copy_and_assignment() {
        let p2 = pt([2.0, 5.0, 7.0]);
        let p = p2;
        assert_coords(&p, [2.0, 5.0, 7.0]);

        let mut q = pt([20.0, 50.0, 70.0]);
        assert_coords(&q, [20.0, 50.0, 70.0]);
        q = p2;
        assert_coords(&q, [2.0, 5.0, 7.0]);
        assert_coords(&p2, [2.0, 5.0, 7.0]);
    }

    #[test]
    fn test_move_zeroes_source() {
        let mut src = pt([2.0, 5.0, 7.0]);
        let mut dst = pt([20.0, 50.0, 70.0]);
        dst.move_from(&mut src);
        assert_coords(&dst, [2.0, 5.0, 7.0]);
        assert!(src.iter().all(|&c| c == 0.0));

        let mut src = pt([1.0, 1.0, 1.0]);
        let taken = src.take();
        assert_coords(&taken, [1.0, 1.0, 1.0]);
        assert_coords(&src, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_point_arithmetic() {
        let p1 = pt([6.0, 5.0, 4.0]);
        let p2 = pt([1.0, 2.0, 3.0]);
        assert_coords(&(p1 + p2), [7.0, 7.0, 7.0]);
        assert_coords(&(p1 - p2), [5.0, 3.0, 1.0]);
        // operands are untouched
        assert_coords(&p1, [6.0, 5.0, 4.0]);
        assert_coords(&p2, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_scalar_arithmetic() {
        assert_coords(&(pt([1.0, 2.0, 3.0]) + 1.0), [2.0, 3.0, 4.0]);
        assert_coords(&(pt([6.0, 5.0, 4.0]) - 1.0), [5.0, 4.0, 3.0]);
        assert_coords(&(pt([6.0, 5.0, 4.0]) * 2.0), [12.0, 10.0, 8.0]);
        assert_coords(&(pt([6.0, 5.0, 1.0]) / 2.0), [3.0, 2.5, 0.5]);

        let mut p = pt([1.0, 2.0, 3.0]);
        p += 1.0;
        p *= 3.0;
        p -= 2.0;
        p /= 2.0;
        assert_coords(&p, [2.0, 3.5, 5.0]);
    }

    #[test]
    fn test_division_by_zero() {
        let p = pt([1.0, -1.0, 0.0]) / 0.0;
        assert!(p[0].is_infinite() && p[0] > 0.0);
        assert!(p[1].is_infinite() && p[1] < 0.0);
        assert!(p[2].is_nan());

        assert_eq!(
            pt([1.0, 2.0, 3.0]).checked_div(0.0),
            Err(NumericsError::DivisionByZero)
        );
        assert_eq!(
            FixedPoint::<i32, 2>::new([4, 6]).checked_div(2),
            Ok(FixedPoint::new([2, 3]))
        );
    }

    #[test]
    fn test_checked_div_integer_overflow() {
        assert_eq!(
            FixedPoint::<i32, 1>::new([i32::MIN]).checked_div(-1),
            Err(NumericsError::DivisionOverflow { index: 0 })
        );
        assert_eq!(
            FixedPoint::<i8, 3>::new([6, -4, i8::MIN]).checked_div(-1),
            Err(NumericsError::DivisionOverflow { index: 2 })
        );
        assert_eq!(
            FixedPoint::<i8, 2>::new([6, -4]).checked_div(-1),
            Ok(FixedPoint::new([-6, 4]))
        );
        assert_eq!(
            FixedPoint::<u32, 2>::new([9, 3]).checked_div(0),
            Err(NumericsError::DivisionByZero)
        );
    }

    #[test]
    fn test_equality_non_finite() {
        let inf = Point3::splat(f32::INFINITY);
        assert!(inf == inf);
        assert!(inf != Point3::splat(f32::NEG_INFINITY));
        assert!(inf != Point3::splat(f32::MAX));

        let p = pt([1.0, -1.0, 0.0]) / 0.0;
        assert!(p == p);
        assert!(p == pt([f32::INFINITY, f32::NEG_INFINITY, f32::NAN]));
        assert!(p != pt([f32::INFINITY, f32::NEG_INFINITY, 0.0]));
        assert!(pt([1.0, 2.0, 3.0]) != pt([1.0, f32::NAN, 3.0]));
    }

    #[test]
    fn test_equality() {
        let p1 = pt([2.7, 3.11, 6.65]);
        let p2 = pt([2.7, 3.11, 6.65]);
        assert!(p1 == p2);
        assert!(p1 == p1);

        let p3 = pt([2.7, 3.12, 6.67]);
        assert!(p1 != p3);
        assert!(p3 != p1);

        assert!(p1.approx_eq(&p3, Tolerance::new(0.05)));
        assert!(!p1.approx_eq(&(p1 + 1e-5), Tolerance::exact()));
    }

    #[test]
    fn test_indexing() {
        let mut p = pt([1.0, 2.0, 3.0]);
        p[1] = 9.0;
        assert_eq!(p[1], 9.0);
        assert_eq!(p.get(3), None);
        assert_eq!(p.try_get(2), Ok(3.0));
        assert_eq!(
            p.try_set(3, 1.0),
            Err(NumericsError::IndexOutOfBounds { index: 3, dimension: 3 })
        );
        assert_coords(&p, [1.0, 9.0, 3.0]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let p = Point3::<f32>::zeros();
        let i = p.dimension();
        let _coord: f32 = p[i];
    }

    #[test]
    fn test_display() {
        let p = pt([10.0, 20.0, 30.0]);
        assert_eq!(p.to_string(), "(10, 20, 30)");
        assert_eq!(FixedPoint::<f64, 1>::new([1.5]).to_string(), "(1.5)");
        assert_eq!(FixedPoint::<f64, 0>::zeros().to_string(), "()");
    }

    #[test]
    fn test_read_then_display() {
        let mut p: Point3 = Point3::default();
        p.read_tokens(&mut "100 200 356".split_whitespace()).unwrap();
        assert_eq!(p.to_string(), "(100, 200, 356)");
    }

    #[test]
    fn test_from_str_and_data() {
        let p: Point3 = "1.1 2.71 3.9234".parse().unwrap();
        assert_coords(&p, [1.1, 2.71, 3.9234]);

        let data = p.as_slice();
        assert!((data[0] - 1.1).abs() < EQTOL);
        assert!((data[1] - 2.71).abs() < EQTOL);
        assert!((data[2] - 3.9234).abs() < EQTOL);
    }

    #[test]
    fn test_failed_read_keeps_point() {
        let mut p = pt([1.0, 2.0, 3.0]);
        let err = p.read_tokens(&mut "4 5".split_whitespace()).unwrap_err();
        assert_eq!(err, NumericsError::MissingComponent { index: 2, expected: 3 });
        assert_coords(&p, [1.0, 2.0, 3.0]);

        assert!("4 x 6".parse::<Point3>().is_err());
    }

    #[test]
    fn test_iteration() {
        let mut p = pt([1.0, 2.0, 3.0]);
        let collected: Vec<f32> = p.iter().copied().collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0]);
        // traversal can be restarted
        assert_eq!(p.iter().count(), 3);

        for c in &mut p {
            *c *= 10.0;
        }
        assert_eq!(p.into_iter().sum::<f32>(), 60.0);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let p: Point3<f64> = Point3::new([1.1, 2.2, 3.3]);

        let encoded = bincode::serde::encode_to_vec(p, config).unwrap();
        let (decoded, _len): (Point3<f64>, _) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(p.into_array(), decoded.into_array());
    }
}
