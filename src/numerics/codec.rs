// src/numerics/codec.rs
// Compact binary encoding for points and vectors, via serde and bincode.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::numerics::types::error::NumericsError;

/// Encode any serde value (points and vectors included) with bincode's
/// standard configuration.
///
/// ```
/// use fulcrum::numerics::codec;
/// use fulcrum::Vector3;
///
/// let v: Vector3 = Vector3::new([1.0, 2.0, 3.0]);
/// let bytes = codec::encode(&v)?;
/// let back: Vector3 = codec::decode(&bytes)?;
/// assert_eq!(v, back);
/// # Ok::<(), fulcrum::NumericsError>(())
/// ```
pub fn encode<V: Serialize>(value: &V) -> Result<Vec<u8>, NumericsError> {
    let bytes = bincode::serde::encode_to_vec(value, bincode::config::standard())
        .map_err(|e| NumericsError::Codec(e.to_string()))?;
    tracing::trace!(len = bytes.len(), "encoded value");
    Ok(bytes)
}

/// Decode a value produced by [`encode`]. Trailing bytes are rejected.
pub fn decode<V: DeserializeOwned>(bytes: &[u8]) -> Result<V, NumericsError> {
    let (value, read) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())
        .map_err(|e| NumericsError::Codec(e.to_string()))?;
    if read != bytes.len() {
        tracing::debug!(read, len = bytes.len(), "trailing bytes after decoded value");
        return Err(NumericsError::Codec(format!(
            "{} trailing bytes after decoded value",
            bytes.len() - read
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::point::{FixedPoint, Point3};
    use crate::numerics::types::vector::FixedVector;

    #[test]
    fn test_point_roundtrip() {
        let p: Point3<f64> = Point3::new([1.1, 2.2, 3.3]);
        let decoded: Point3<f64> = decode(&encode(&p).unwrap()).unwrap();
        assert_eq!(p.into_array(), decoded.into_array());
    }

    #[test]
    fn test_integer_vector_roundtrip() {
        let v = FixedVector::<i32, 5>::new([-2, -1, 0, 1, 2]);
        let decoded: FixedVector<i32, 5> = decode(&encode(&v).unwrap()).unwrap();
        assert_eq!(v.into_array(), decoded.into_array());
    }

    #[test]
    fn test_decode_wrong_dimension_fails() {
        let bytes = encode(&FixedPoint::<f32, 2>::new([1.0, 2.0])).unwrap();
        let result: Result<FixedPoint<f32, 3>, _> = decode(&bytes);
        assert!(matches!(result, Err(NumericsError::Codec(_))));

        let bytes = encode(&FixedPoint::<f32, 3>::new([1.0, 2.0, 3.0])).unwrap();
        let result: Result<FixedPoint<f32, 2>, _> = decode(&bytes);
        assert!(matches!(result, Err(NumericsError::Codec(_))));
    }
}
