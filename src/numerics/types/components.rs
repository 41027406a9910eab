// src/numerics/types/components.rs
// Text and serde plumbing over `[T; N]` shared by FixedPoint and FixedVector.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;

use super::error::NumericsError;
use super::traits::Scalar;

/// Write components as `(c0, c1, ..., cN-1)`.
pub(crate) fn fmt_components<T: Scalar, const N: usize>(
    components: &[T; N],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(c, f)?;
    }
    f.write_str(")")
}

/// Read exactly N tokens from `tokens`, leaving the remainder untouched.
///
/// Nothing is returned unless all N tokens parse, so callers can commit the
/// result atomically.
pub(crate) fn read_components<'a, T, I, const N: usize>(tokens: &mut I) -> Result<[T; N], NumericsError>
where
    T: Scalar,
    I: Iterator<Item = &'a str>,
{
    let mut out = [T::zero(); N];
    for (index, slot) in out.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or(NumericsError::MissingComponent { index, expected: N })?;
        *slot = T::parse_token(token).map_err(|reason| NumericsError::InvalidComponent {
            index,
            token: token.to_owned(),
            reason,
        })?;
    }
    Ok(out)
}

/// Parse a whole string of exactly N whitespace-separated tokens.
pub(crate) fn parse_components<T: Scalar, const N: usize>(s: &str) -> Result<[T; N], NumericsError> {
    let mut tokens = s.split_whitespace();
    let components = read_components(&mut tokens).map_err(|e| {
        tracing::debug!(input = s, error = %e, "rejected component text");
        e
    })?;
    if let Some(token) = tokens.next() {
        tracing::debug!(input = s, token, "trailing input after components");
        return Err(NumericsError::TrailingInput {
            token: token.to_owned(),
            expected: N,
        });
    }
    Ok(components)
}

/// Copy a slice of exactly N values.
pub(crate) fn exact_components<T: Scalar, const N: usize>(values: &[T]) -> Result<[T; N], NumericsError> {
    <[T; N]>::try_from(values).map_err(|_| {
        tracing::debug!(expected = N, actual = values.len(), "literal size mismatch");
        NumericsError::SizeMismatch {
            expected: N,
            actual: values.len(),
        }
    })
}

/// Copy the first N values of a buffer holding at least N.
pub(crate) fn leading_components<T: Scalar, const N: usize>(buffer: &[T]) -> Result<[T; N], NumericsError> {
    match buffer.get(..N) {
        Some(head) => exact_components(head),
        None => {
            tracing::debug!(required = N, available = buffer.len(), "buffer too short");
            Err(NumericsError::SizeMismatch {
                expected: N,
                actual: buffer.len(),
            })
        }
    }
}

/// Divide every component by `divisor` without panicking.
///
/// A zero divisor is reported before any component is touched; integer
/// overflow (`MIN / -1`) reports the first offending index.
pub(crate) fn checked_div_components<T: Scalar, const N: usize>(
    components: &[T; N],
    divisor: T,
) -> Result<[T; N], NumericsError> {
    if divisor.is_zero() {
        tracing::debug!(dimension = N, "division by zero");
        return Err(NumericsError::DivisionByZero);
    }
    let mut out = *components;
    for (index, slot) in out.iter_mut().enumerate() {
        *slot = slot.checked_div(divisor).ok_or_else(|| {
            tracing::debug!(index, "division overflow");
            NumericsError::DivisionOverflow { index }
        })?;
    }
    Ok(out)
}

/// Serialize components as a fixed-length tuple.
pub(crate) fn serialize_components<S, T, const N: usize>(
    components: &[T; N],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: Scalar + serde::Serialize,
{
    let mut tuple = serializer.serialize_tuple(N)?;
    for c in components {
        tuple.serialize_element(c)?;
    }
    tuple.end()
}

/// Deserialize a fixed-length tuple of N components.
pub(crate) fn deserialize_components<'de, D, T, const N: usize>(deserializer: D) -> Result<[T; N], D::Error>
where
    D: serde::Deserializer<'de>,
    T: Scalar + serde::Deserialize<'de>,
{
    deserializer.deserialize_tuple(N, ComponentsVisitor::<T, N>(PhantomData))
}

struct ComponentsVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for ComponentsVisitor<T, N>
where
    T: Scalar + serde::Deserialize<'de>,
{
    type Value = [T; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {N} components")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = [T::zero(); N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(out)
    }
}
