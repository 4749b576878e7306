//! Named numeric conversions.
//!
//! Each operation takes any [`Numeric`] source, nullable (`Option<S>`) or not
//! (`S`), and converts to one target. The source type is fixed at the call
//! site; there is no runtime dispatch beyond the [`Number`](super::Number)
//! variant match.
//!
//! ```
//! use rill_coerce::number::{to_i32, to_i8_or_default, to_decimal};
//!
//! assert_eq!(to_i32(3.99_f64), Some(3));
//! assert_eq!(to_i32(f64::NAN), None);
//! assert_eq!(to_i8_or_default(None::<i64>), 0);
//! assert_eq!(to_decimal(0.1_f64).unwrap().unwrap().to_string(), "0.1");
//! ```

use bigdecimal::BigDecimal;

use super::{Numeric, NumericSource};
use crate::defaults;
use crate::error::CoerceResult;

#[inline]
fn present<S: NumericSource>(value: S) -> Option<S::Value> {
    value.into_numeric().filter(|v| !v.is_nan())
}

// ==================== i8 ====================

/// Nullable `i8` from any numeric source
pub fn to_i8(value: impl NumericSource) -> Option<i8> {
    present(value).map(Numeric::as_i8)
}

/// `i8` from any numeric source, zero when absent or NaN
pub fn to_i8_or_default(value: impl NumericSource) -> i8 {
    to_i8(value).unwrap_or(defaults::I8)
}

/// `true` is 1, `false` is 0
pub fn bool_to_i8(value: impl Into<Option<bool>>) -> Option<i8> {
    value.into().map(i8::from)
}

pub fn bool_to_i8_or_default(value: impl Into<Option<bool>>) -> i8 {
    bool_to_i8(value).unwrap_or(defaults::I8)
}

// ==================== i16 ====================

/// Nullable `i16` from any numeric source
pub fn to_i16(value: impl NumericSource) -> Option<i16> {
    present(value).map(Numeric::as_i16)
}

pub fn to_i16_or_default(value: impl NumericSource) -> i16 {
    to_i16(value).unwrap_or(defaults::I16)
}

// ==================== i32 ====================

/// Nullable `i32` from any numeric source
pub fn to_i32(value: impl NumericSource) -> Option<i32> {
    present(value).map(Numeric::as_i32)
}

pub fn to_i32_or_default(value: impl NumericSource) -> i32 {
    to_i32(value).unwrap_or(defaults::I32)
}

// ==================== i64 ====================

/// Nullable `i64` from any numeric source
pub fn to_i64(value: impl NumericSource) -> Option<i64> {
    present(value).map(Numeric::as_i64)
}

pub fn to_i64_or_default(value: impl NumericSource) -> i64 {
    to_i64(value).unwrap_or(defaults::I64)
}

// ==================== f32 ====================

/// Nullable `f32` from any numeric source; a NaN source is absent
pub fn to_f32(value: impl NumericSource) -> Option<f32> {
    present(value).map(Numeric::as_f32)
}

pub fn to_f32_or_default(value: impl NumericSource) -> f32 {
    to_f32(value).unwrap_or(defaults::F32)
}

// ==================== f64 ====================

/// Nullable `f64` from any numeric source; a NaN source is absent
pub fn to_f64(value: impl NumericSource) -> Option<f64> {
    present(value).map(Numeric::as_f64)
}

pub fn to_f64_or_default(value: impl NumericSource) -> f64 {
    to_f64(value).unwrap_or(defaults::F64)
}

// ==================== Decimal ====================

/// Nullable decimal from any numeric source.
///
/// Floats go through their shortest decimal rendering, so every finite float
/// keeps its magnitude. Infinite floats fail with
/// [`CoerceError::DecimalOutOfRange`](crate::CoerceError::DecimalOutOfRange).
pub fn to_decimal(value: impl NumericSource) -> CoerceResult<Option<BigDecimal>> {
    present(value).map(Numeric::as_decimal).transpose()
}

// ==================== bool / char ====================

/// Unbox a nullable boolean, `false` when absent
pub fn to_bool_or_default(value: impl Into<Option<bool>>) -> bool {
    value.into().unwrap_or(defaults::BOOL)
}

/// Unbox a nullable char, a space when absent
pub fn to_char_or_default(value: impl Into<Option<char>>) -> char {
    value.into().unwrap_or(defaults::CHAR)
}
