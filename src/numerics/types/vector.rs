// src/numerics/types/vector.rs
// FixedVector<T, N>: an N-dimensional displacement with dot and cross products.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::components;
use super::error::NumericsError;
use super::tolerance::Tolerance;
use super::traits::Scalar;

/// FixedVector is a vector in N-dimensional space.
///
/// Scalar arithmetic is limited to multiplication and division; `a * b`
/// between two vectors is the dot product. The cross product is only
/// available on `FixedVector<T, 3>`, with [`FixedVector::try_cross`] as the
/// dimension-checked form for generic code.
#[derive(Copy, Clone, Debug)]
pub struct FixedVector<T: Scalar, const N: usize> {
    comps: [T; N],
}

/// Three-dimensional vector, `f32` by default.
pub type Vector3<T = f32> = FixedVector<T, 3>;

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    pub const DIMENSION: usize = N;

    /// Construct a vector from an array of exactly N components
    pub fn new(comps: [T; N]) -> Self {
        Self { comps }
    }

    /// Vector of all zeros
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Every component set to `value`
    pub fn splat(value: T) -> Self {
        Self { comps: [value; N] }
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

    /// Move the components out, leaving a zero vector behind.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Overwrite `self` with `source` and reset `source` to zero.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.comps.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.comps.get_mut(index)
    }

    pub fn try_get(&self, index: usize) -> Result<T, NumericsError> {
        self.get(index)
            .copied()
            .ok_or(NumericsError::IndexOutOfBounds { index, dimension: N })
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), NumericsError> {
        let slot = self
            .get_mut(index)
            .ok_or(NumericsError::IndexOutOfBounds { index, dimension: N })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.comps.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.comps.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.comps
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.comps
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.comps
    }

    pub fn into_array(self) -> [T; N] {
        self.comps
    }

    /// Dot product: sum of the element-wise products
    pub fn dot(&self, other: &Self) -> T {
        self.comps
            .iter()
            .zip(other.comps.iter())
            .fold(T::zero(), |sum, (&a, &b)| sum + a * b)
    }

    /// Cross product for vectors whose dimension is only known generically.
    ///
    /// Fails with [`NumericsError::Dimensionality`] unless `N == 3`.
    pub fn try_cross(&self, other: &Self) -> Result<Self, NumericsError> {
        if N != 3 {
            tracing::debug!(dimension = N, "cross product requested outside 3D");
            return Err(NumericsError::Dimensionality { dimension: N });
        }
        let crossed = cross_components(self.as_slice(), other.as_slice());
        Self::from_slice(&crossed)
    }

    pub fn checked_div(self, scalar: T) -> Result<Self, NumericsError> {
        components::checked_div_components(&self.comps, scalar).map(Self::new)
    }

    /// Equality under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.components_eq(&self.comps, &other.comps)
    }

    /// Stream-style extraction: consume N tokens and overwrite the components.
    ///
    /// On error the vector keeps its previous components.
    pub fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<(), NumericsError>
    where
        I: Iterator<Item = &'a str>,
    {
        self.comps = components::read_components(tokens)?;
        Ok(())
    }
}

impl<T: Scalar> FixedVector<T, 3> {
    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(cross_components(&self.comps, &other.comps))
    }
}

// Callers guarantee both slices hold three components.
fn cross_components<T: Scalar>(a: &[T], b: &[T]) -> [T; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

impl<T: Scalar, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> PartialEq for FixedVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::default())
    }
}

impl<T: Scalar, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.comps[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.comps[index]
    }
}

impl<T: Scalar, const N: usize> AddAssign for FixedVector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (c, r) in self.comps.iter_mut().zip(rhs.comps) {
            *c += r;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for FixedVector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (c, r) in self.comps.iter_mut().zip(rhs.comps) {
            *c -= r;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for FixedVector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for c in self.comps.iter_mut() {
            *c *= rhs;
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for FixedVector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        for c in self.comps.iter_mut() {
            *c /= rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Add for FixedVector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Sub for FixedVector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Mul<T> for FixedVector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

// Vector * vector is the dot product
impl<T: Scalar, const N: usize> Mul for FixedVector<T, N> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for FixedVector<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> fmt::Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        components::fmt_components(&self.comps, f)
    }
}

impl<T: Scalar, const N: usize> FromStr for FixedVector<T, N> {
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        components::parse_components(s).map(Self::new)
    }
}

impl<T: Scalar, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.comps.into_iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Conversions between FixedVector<T, N> and arrays [T; N]

impl<T: Scalar, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(comps: [T; N]) -> Self {
        Self::new(comps)
    }
}

impl<T: Scalar, const N: usize> From<FixedVector<T, N>> for [T; N] {
    fn from(v: FixedVector<T, N>) -> Self {
        v.comps
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for FixedVector<T, N> {
    type Error = NumericsError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for FixedVector<T, N> {
    type Error = NumericsError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for FixedVector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.comps
    }
}

impl<T: Scalar, const N: usize> AsMut<[T]> for FixedVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.comps
    }
}

impl<T, const N: usize> Serialize for FixedVector<T, N>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        components::serialize_components(&self.comps, serializer)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedVector<T, N>
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
