//! Canonical packed buffers.
//!
//! Every numeric array entering the pipeline is converted to a packed,
//! type-exact buffer: `f32` for geometric data, `u32` for indices.
//! Conversions are value-preserving casts, never reinterpretation; the
//! source slice is left untouched.

use cortica_types::{CorticaError, CorticaResult};
use num_traits::ToPrimitive;

/// Converts any numeric slice into a packed `f32` buffer.
pub fn packed_f32<T: ToPrimitive + Copy>(data: &[T]) -> CorticaResult<Vec<f32>> {
    data.iter()
        .map(|v| {
            v.to_f32()
                .ok_or_else(|| CorticaError::InvalidInput("value not representable as f32".into()))
        })
        .collect()
}

/// Converts any numeric slice into a packed `u32` index buffer.
///
/// Fails with `InvalidInput` for values outside the `u32` range
/// (negative or too large).
pub fn packed_u32<T: ToPrimitive + Copy>(data: &[T]) -> CorticaResult<Vec<u32>> {
    data.iter()
        .map(|v| {
            v.to_u32()
                .ok_or_else(|| CorticaError::InvalidInput("index not representable as u32".into()))
        })
        .collect()
}

/// Converts any numeric slice into a packed `i64` buffer.
///
/// Used for face indices before the zero-base shift, where 1-based or
/// otherwise offset input is still legitimate.
pub fn packed_i64<T: ToPrimitive + Copy>(data: &[T]) -> CorticaResult<Vec<i64>> {
    data.iter()
        .map(|v| {
            v.to_i64()
                .ok_or_else(|| CorticaError::InvalidInput("index not representable as i64".into()))
        })
        .collect()
}

/// Checks that a flat buffer is a list of 3-component rows.
///
/// This is the rank-2 precondition on point/index lists; violation is a
/// caller error, not a recoverable case.
pub fn check_stride3(len: usize, what: &str) -> CorticaResult<()> {
    if len % 3 != 0 {
        return Err(CorticaError::InvalidInput(format!(
            "{what} buffer length ({len}) is not divisible by 3"
        )));
    }
    Ok(())
}
