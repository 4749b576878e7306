//! Textual Parser/Formatter
//!
//! Text to typed values, and typed values back to text ([`render`]).
//!
//! Every parser gates on [`is_blank`](crate::is_blank) first: blank text is
//! `Ok(None)` for the nullable form and the zero default for the
//! `*_or_default` form. Only non-blank text that is not a numeral for the
//! target fails.
//!
//! | Target | Grammar |
//! |--------|---------|
//! | `i8` | [`Grammar::Decode`] unless chosen with [`parse_i8_with`] |
//! | `i16`, `i32`, `i64` | [`Grammar::Strict`] unless chosen with `parse_*_with` |
//! | `f32`, `f64` | float literal, surrounding whitespace ignored |
//! | [`BigDecimal`] | decimal literal, no whitespace |
//! | `bool` | `"1"` or `true` (any case) |
//! | `char` | first character |

mod grouping;
mod numeral;
pub mod render;

use std::fmt::Display;

use bigdecimal::BigDecimal;

use crate::blank::non_blank;
use crate::defaults;
use crate::error::CoerceResult;

pub use grouping::parse_number;
pub use numeral::Grammar;

macro_rules! integer_parsers {
    ($(
        $t:ty {
            parse: $parse:ident,
            or_default: $or_default:ident,
            with: $with:ident,
            grammar: $grammar:expr,
            default: $default:expr $(,)?
        }
    )*) => {
        $(
            #[doc = concat!("Nullable `", stringify!($t), "` from text")]
            pub fn $parse<'a>(text: impl Into<Option<&'a str>>) -> CoerceResult<Option<$t>> {
                $with(text, $grammar)
            }

            #[doc = concat!("`", stringify!($t), "` from text, zero when blank")]
            pub fn $or_default<'a>(text: impl Into<Option<&'a str>>) -> CoerceResult<$t> {
                $parse(text).map(|v| v.unwrap_or($default))
            }

            #[doc = concat!("Nullable `", stringify!($t), "` from text with an explicit grammar")]
            pub fn $with<'a>(
                text: impl Into<Option<&'a str>>,
                grammar: Grammar,
            ) -> CoerceResult<Option<$t>> {
                non_blank(text.into())
                    .map(|s| numeral::parse_integer::<$t>(s, grammar))
                    .transpose()
            }
        )*
    };
}

integer_parsers! {
    i8 {
        parse: parse_i8,
        or_default: parse_i8_or_default,
        with: parse_i8_with,
        grammar: Grammar::Decode,
        default: defaults::I8,
    }
    i16 {
        parse: parse_i16,
        or_default: parse_i16_or_default,
        with: parse_i16_with,
        grammar: Grammar::Strict,
        default: defaults::I16,
    }
    i32 {
        parse: parse_i32,
        or_default: parse_i32_or_default,
        with: parse_i32_with,
        grammar: Grammar::Strict,
        default: defaults::I32,
    }
    i64 {
        parse: parse_i64,
        or_default: parse_i64_or_default,
        with: parse_i64_with,
        grammar: Grammar::Strict,
        default: defaults::I64,
    }
}

// ==================== Floats ====================

/// Nullable `f32` from text
pub fn parse_f32<'a>(text: impl Into<Option<&'a str>>) -> CoerceResult<Option<f32>> {
    non_blank(text.into())
        .map(numeral::parse_float::<f32>)
        .transpose()
}

pub fn parse_f32_or_default<'a>(text: impl Into<Option<&'a str>>) -> CoerceResult<f32> {
    parse_f32(text).map(|v| v.unwrap_or(defaults::F32))
}

/// Nullable `f64` from text
///
/// ```
/// use rill_coerce::text::parse_f64;
///
/// assert_eq!(parse_f64(" 3.5 ").unwrap(), Some(3.5));
/// assert_eq!(parse_f64("1e3d").unwrap(), Some(1000.0));
/// assert_eq!(parse_f64("").unwrap(), None);
/// assert!(parse_f64("three").is_err());
/// ```
pub fn parse_f64<'a>(text: impl Into<Option<&'a str>>) -> CoerceResult<Option<f64>> {
    non_blank(text.into())
        .map(numeral::parse_float::<f64>)
        .transpose()
}

pub fn parse_f64_or_default<'a>(text: impl Into<Option<&'a str>>) -> CoerceResult<f64> {
    parse_f64(text).map(|v| v.unwrap_or(defaults::F64))
}

// ==================== Decimal ====================

/// Nullable decimal from text.
///
/// A rejected literal fails with
/// [`CoerceError::MalformedDecimal`](crate::CoerceError::MalformedDecimal),
/// whose message always quotes the text.
pub fn parse_decimal<'a>(text: impl Into<Option<&'a str>>) -> CoerceResult<Option<BigDecimal>> {
    non_blank(text.into())
        .map(numeral::parse_decimal)
        .transpose()
}

pub fn parse_decimal_or_default<'a>(text: impl Into<Option<&'a str>>) -> CoerceResult<BigDecimal> {
    parse_decimal(text).map(Option::unwrap_or_default)
}

// ==================== bool / char ====================

/// Nullable boolean from text: `"1"` and any casing of `"true"` are `true`,
/// every other non-blank text is `false`.
pub fn parse_bool<'a>(text: impl Into<Option<&'a str>>) -> Option<bool> {
    non_blank(text.into()).map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
}

pub fn parse_bool_or_default<'a>(text: impl Into<Option<&'a str>>) -> bool {
    parse_bool(text).unwrap_or(defaults::BOOL)
}

/// First character of non-blank text
pub fn parse_char<'a>(text: impl Into<Option<&'a str>>) -> Option<char> {
    non_blank(text.into()).and_then(|s| s.chars().next())
}

pub fn parse_char_or_default<'a>(text: impl Into<Option<&'a str>>) -> char {
    parse_char(text).unwrap_or(defaults::CHAR)
}

// ==================== Display sources ====================
//
// An arbitrary value is rendered with `Display` and the rendering goes
// through the primitive parser, so an absent value is absent but a value
// rendering as blank text is the zero default.

fn display_then<T, R>(
    value: Option<&T>,
    parse: impl FnOnce(&str) -> CoerceResult<R>,
) -> CoerceResult<Option<R>>
where
    T: Display + ?Sized,
{
    value.map(|v| parse(&v.to_string())).transpose()
}

/// Nullable `i16` from any displayable value
pub fn parse_i16_display<T: Display + ?Sized>(value: Option<&T>) -> CoerceResult<Option<i16>> {
    display_then(value, |s| parse_i16_or_default(s))
}

/// Nullable `i32` from any displayable value
///
/// ```
/// use rill_coerce::text::parse_i32_display;
///
/// assert_eq!(parse_i32_display(Some(&42_u64)).unwrap(), Some(42));
/// assert_eq!(parse_i32_display(Some(" ")).unwrap(), Some(0));
/// assert_eq!(parse_i32_display::<str>(None).unwrap(), None);
/// ```
pub fn parse_i32_display<T: Display + ?Sized>(value: Option<&T>) -> CoerceResult<Option<i32>> {
    display_then(value, |s| parse_i32_or_default(s))
}

/// Nullable `i64` from any displayable value
pub fn parse_i64_display<T: Display + ?Sized>(value: Option<&T>) -> CoerceResult<Option<i64>> {
    display_then(value, |s| parse_i64_or_default(s))
}

/// Nullable `f32` from any displayable value
pub fn parse_f32_display<T: Display + ?Sized>(value: Option<&T>) -> CoerceResult<Option<f32>> {
    display_then(value, |s| parse_f32_or_default(s))
}

/// Nullable `f64` from any displayable value
pub fn parse_f64_display<T: Display + ?Sized>(value: Option<&T>) -> CoerceResult<Option<f64>> {
    display_then(value, |s| parse_f64_or_default(s))
}

/// Boolean from any displayable value, `false` when absent
pub fn parse_bool_display<T: Display + ?Sized>(value: Option<&T>) -> bool {
    value.is_some_and(|v| parse_bool_or_default(v.to_string().as_str()))
}
