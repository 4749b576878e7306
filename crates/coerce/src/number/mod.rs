//! Numeric Coercion Matrix
//!
//! Pairwise conversions among `i8`, `i16`, `i32`, `i64`, `f32`, `f64`,
//! [`BigDecimal`] and the width-erased [`Number`]. Every source implements
//! [`Numeric`]; every target has one named operation returning `Option<T>`
//! (the nullable form) and one `*_or_default` operation returning the zero
//! default (the primitive form). See [`matrix`] for the operations.
//!
//! ## Policies
//!
//! - absent source: `None` / zero default
//! - NaN source: `None` / zero default, for every target kind
//! - float or decimal to integer: truncation toward zero, then the cast rules
//!   in [`cast`] (saturate to 32/64 bits, wrap below that)
//! - integer to narrower integer: low-order bits kept
//! - float to decimal: built from the float's shortest decimal rendering

pub mod cast;
pub mod matrix;

use core::fmt;

use bigdecimal::BigDecimal;

use crate::error::CoerceResult;

pub use matrix::*;

mod sealed {
    pub trait Sealed {}
}

/// A numeric source of the coercion matrix.
///
/// The `as_*` methods are raw casts; they are only called after the NaN
/// check, so float implementations never see NaN there.
pub trait Numeric: sealed::Sealed {
    /// Short type name used in diagnostics
    const KIND: &'static str;

    /// `true` only for a float holding NaN
    #[inline]
    fn is_nan(&self) -> bool {
        false
    }

    fn as_i8(self) -> i8;
    fn as_i16(self) -> i16;
    fn as_i32(self) -> i32;
    fn as_i64(self) -> i64;
    fn as_f32(self) -> f32;
    fn as_f64(self) -> f64;

    /// Decimal value; fails only for infinite floats
    fn as_decimal(self) -> CoerceResult<BigDecimal>;
}

/// Anything a matrix operation accepts: a [`Numeric`] value or an
/// `Option` of one, where `None` is the absent source.
pub trait NumericSource: sealed::Sealed {
    type Value: Numeric;

    fn into_numeric(self) -> Option<Self::Value>;
}

macro_rules! impl_numeric_source {
    ($($t:ty),* $(,)?) => {
        $(
            impl NumericSource for $t {
                type Value = $t;

                #[inline]
                fn into_numeric(self) -> Option<$t> {
                    Some(self)
                }
            }

            impl sealed::Sealed for Option<$t> {}

            impl NumericSource for Option<$t> {
                type Value = $t;

                #[inline]
                fn into_numeric(self) -> Option<$t> {
                    self
                }
            }
        )*
    };
}

impl_numeric_source!(i8, i16, i32, i64, f32, f64, BigDecimal, Number);

macro_rules! impl_numeric_for_int {
    ($($t:ty => $kind:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            // the same-width cast is the identity
            #[allow(trivial_numeric_casts, clippy::unnecessary_cast)]
            impl Numeric for $t {
                const KIND: &'static str = $kind;

                #[inline]
                fn as_i8(self) -> i8 {
                    self as i8
                }

                #[inline]
                fn as_i16(self) -> i16 {
                    self as i16
                }

                #[inline]
                fn as_i32(self) -> i32 {
                    self as i32
                }

                #[inline]
                fn as_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn as_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn as_decimal(self) -> CoerceResult<BigDecimal> {
                    Ok(BigDecimal::from(self))
                }
            }
        )*
    };
}

impl_numeric_for_int!(i8 => "i8", i16 => "i16", i32 => "i32", i64 => "i64");

impl sealed::Sealed for f64 {}

impl Numeric for f64 {
    const KIND: &'static str = "f64";

    #[inline]
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }

    #[inline]
    fn as_i8(self) -> i8 {
        cast::f64_to_i32(self) as i8
    }

    #[inline]
    fn as_i16(self) -> i16 {
        cast::f64_to_i32(self) as i16
    }

    #[inline]
    fn as_i32(self) -> i32 {
        cast::f64_to_i32(self)
    }

    #[inline]
    fn as_i64(self) -> i64 {
        cast::f64_to_i64(self)
    }

    #[inline]
    fn as_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    fn as_decimal(self) -> CoerceResult<BigDecimal> {
        cast::decimal_from_f64(self)
    }
}

impl sealed::Sealed for f32 {}

impl Numeric for f32 {
    const KIND: &'static str = "f32";

    #[inline]
    fn is_nan(&self) -> bool {
        f32::is_nan(*self)
    }

    #[inline]
    fn as_i8(self) -> i8 {
        cast::f64_to_i32(f64::from(self)) as i8
    }

    #[inline]
    fn as_i16(self) -> i16 {
        cast::f64_to_i32(f64::from(self)) as i16
    }

    #[inline]
    fn as_i32(self) -> i32 {
        cast::f64_to_i32(f64::from(self))
    }

    #[inline]
    fn as_i64(self) -> i64 {
        cast::f64_to_i64(f64::from(self))
    }

    #[inline]
    fn as_f32(self) -> f32 {
        self
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    fn as_decimal(self) -> CoerceResult<BigDecimal> {
        cast::decimal_from_f32(self)
    }
}

impl sealed::Sealed for BigDecimal {}

impl Numeric for BigDecimal {
    const KIND: &'static str = "decimal";

    fn as_i8(self) -> i8 {
        cast::decimal_low_bits(&self) as i8
    }

    fn as_i16(self) -> i16 {
        cast::decimal_low_bits(&self) as i16
    }

    fn as_i32(self) -> i32 {
        cast::decimal_low_bits(&self) as i32
    }

    fn as_i64(self) -> i64 {
        cast::decimal_low_bits(&self)
    }

    fn as_f32(self) -> f32 {
        cast::decimal_to_f64(&self) as f32
    }

    fn as_f64(self) -> f64 {
        cast::decimal_to_f64(&self)
    }

    #[inline]
    fn as_decimal(self) -> CoerceResult<BigDecimal> {
        Ok(self)
    }
}

/// A numeric of statically unknown width.
///
/// Stands in for "some number" when a record field can carry any numeric
/// kind; the matrix treats each variant exactly like the bare value.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(BigDecimal),
}

impl Number {
    /// Name of the wrapped kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Byte(_) => i8::KIND,
            Self::Short(_) => i16::KIND,
            Self::Int(_) => i32::KIND,
            Self::Long(_) => i64::KIND,
            Self::Float(_) => f32::KIND,
            Self::Double(_) => f64::KIND,
            Self::Decimal(_) => BigDecimal::KIND,
        }
    }
}

macro_rules! delegate {
    ($self:ident, $v:ident => $body:expr) => {
        match $self {
            Number::Byte($v) => $body,
            Number::Short($v) => $body,
            Number::Int($v) => $body,
            Number::Long($v) => $body,
            Number::Float($v) => $body,
            Number::Double($v) => $body,
            Number::Decimal($v) => $body,
        }
    };
}

impl sealed::Sealed for Number {}

impl Numeric for Number {
    const KIND: &'static str = "number";

    fn is_nan(&self) -> bool {
        delegate!(self, v => v.is_nan())
    }

    fn as_i8(self) -> i8 {
        delegate!(self, v => v.as_i8())
    }

    fn as_i16(self) -> i16 {
        delegate!(self, v => v.as_i16())
    }

    fn as_i32(self) -> i32 {
        delegate!(self, v => v.as_i32())
    }

    fn as_i64(self) -> i64 {
        delegate!(self, v => v.as_i64())
    }

    fn as_f32(self) -> f32 {
        delegate!(self, v => v.as_f32())
    }

    fn as_f64(self) -> f64 {
        delegate!(self, v => v.as_f64())
    }

    fn as_decimal(self) -> CoerceResult<BigDecimal> {
        delegate!(self, v => v.as_decimal())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => f.write_str(&crate::text::render::format_f32(*v)),
            Self::Double(v) => f.write_str(&crate::text::render::format_f64(*v)),
            other => delegate!(other, v => write!(f, "{v}")),
        }
    }
}

macro_rules! impl_from_for_number {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_number!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    BigDecimal => Decimal,
);
