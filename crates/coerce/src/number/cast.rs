//! Narrowing rules shared by the matrix.
//!
//! Float to integer truncates toward zero and saturates to `i32`/`i64`; for
//! `i16`/`i8` it saturates to `i32` first and then keeps the low-order bits.
//! Rust's `as` already saturates float to integer, so the helpers only fix
//! the order of the two steps.

use std::str::FromStr;

use bigdecimal::num_bigint::Sign;
use bigdecimal::{BigDecimal, ToPrimitive};

use crate::error::{CoerceError, CoerceResult};
use crate::text::render;

/// Truncating, saturating float to `i32` (NaN maps to 0).
#[inline]
pub fn f64_to_i32(value: f64) -> i32 {
    value as i32
}

/// Truncating, saturating float to `i64` (NaN maps to 0).
#[inline]
pub fn f64_to_i64(value: f64) -> i64 {
    value as i64
}

/// Low-order 64 bits of the integral part of a decimal, in two's complement.
///
/// Narrower targets take their own low bits from this with a plain `as`
/// cast, so every integer target wraps the same way.
pub fn decimal_low_bits(value: &BigDecimal) -> i64 {
    let (_, scale) = value.as_bigint_and_exponent();
    // |value| < 1
    if scale >= value.digits() as i64 {
        return 0;
    }
    // a multiple of 10^64 is a multiple of 2^64
    if scale <= -64 {
        return 0;
    }

    let (integral, _) = value.with_scale(0).into_bigint_and_exponent();
    let (sign, digits) = integral.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0);
    let low = if sign == Sign::Minus { low.wrapping_neg() } else { low };
    low as i64
}

/// Nearest `f64` to a decimal; magnitudes past `f64::MAX` become infinities.
pub fn decimal_to_f64(value: &BigDecimal) -> f64 {
    value
        .to_f64()
        .or_else(|| value.to_string().parse().ok())
        .unwrap_or_default()
}

/// Decimal built from the shortest rendering of `value`, so `0.1` becomes
/// `0.1` and not the 50-odd digits of its binary expansion.
///
/// Every finite float is representable; infinities are an error.
pub fn decimal_from_f64(value: f64) -> CoerceResult<BigDecimal> {
    if !value.is_finite() {
        return Err(CoerceError::decimal_out_of_range(render::format_f64(value)));
    }
    decimal_from_rendering(&format!("{value}"))
}

/// Same as [`decimal_from_f64`], starting from the `f32` rendering.
pub fn decimal_from_f32(value: f32) -> CoerceResult<BigDecimal> {
    if !value.is_finite() {
        return Err(CoerceError::decimal_out_of_range(render::format_f32(value)));
    }
    decimal_from_rendering(&format!("{value}"))
}

fn decimal_from_rendering(rendered: &str) -> CoerceResult<BigDecimal> {
    BigDecimal::from_str(rendered).map_err(|e| {
        tracing::debug!(input = rendered, error = %e, "float rendering is not a decimal");
        CoerceError::decimal_out_of_range(rendered)
    })
}
