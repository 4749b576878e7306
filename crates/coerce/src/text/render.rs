//! Typed value to text.
//!
//! Integers, characters, booleans and decimals always have a rendering.
//! Floats render their shortest round-trip form, except NaN which renders as
//! absence. Instants are rendered by
//! [`temporal::format_date`](crate::temporal::format_date).

use std::fmt::Display;

use crate::config::{self, Charset};

/// Shortest round-trip rendering of an `f64`, with `Infinity` and
/// `-Infinity` for the infinities and `NaN` for NaN.
///
/// Use [`f64_to_string`] when NaN should be absent.
pub fn format_f64(value: f64) -> String {
    if value.is_infinite() {
        infinity(value.is_sign_negative())
    } else if value.is_nan() {
        "NaN".to_owned()
    } else {
        value.to_string()
    }
}

/// `f32` counterpart of [`format_f64`]
pub fn format_f32(value: f32) -> String {
    if value.is_infinite() {
        infinity(value.is_sign_negative())
    } else if value.is_nan() {
        "NaN".to_owned()
    } else {
        value.to_string()
    }
}

fn infinity(negative: bool) -> String {
    if negative { "-Infinity" } else { "Infinity" }.to_owned()
}

/// Text of an `f64`, absent for NaN
///
/// ```
/// use rill_coerce::text::render::f64_to_string;
///
/// assert_eq!(f64_to_string(3.5).as_deref(), Some("3.5"));
/// assert_eq!(f64_to_string(f64::NAN), None);
/// ```
pub fn f64_to_string(value: f64) -> Option<String> {
    (!value.is_nan()).then(|| format_f64(value))
}

/// Text of an `f32`, absent for NaN
pub fn f32_to_string(value: f32) -> Option<String> {
    (!value.is_nan()).then(|| format_f32(value))
}

macro_rules! display_renderers {
    ($($name:ident($t:ty)),* $(,)?) => {
        $(
            #[doc = concat!("Canonical text of a `", stringify!($t), "`")]
            #[inline]
            pub fn $name(value: $t) -> String {
                value.to_string()
            }
        )*
    };
}

display_renderers!(
    i8_to_string(i8),
    i16_to_string(i16),
    i32_to_string(i32),
    i64_to_string(i64),
    char_to_string(char),
    bool_to_string(bool),
);

/// Text of any displayable value, absent when the value is
pub fn display_to_string<T: Display + ?Sized>(value: Option<&T>) -> Option<String> {
    value.map(ToString::to_string)
}

/// Decode a byte buffer with the installed [`Charset`].
pub fn bytes_to_string<B: AsRef<[u8]>>(bytes: Option<B>) -> Option<String> {
    let charset = config::current().charset;
    bytes_to_string_with(bytes, charset)
}

/// Decode a byte buffer with an explicit [`Charset`].
pub fn bytes_to_string_with<B: AsRef<[u8]>>(bytes: Option<B>, charset: Charset) -> Option<String> {
    bytes.map(|b| charset.decode(b.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn test_float_rendering() {
        assert_eq!(format_f64(3.5), "3.5");
        assert_eq!(format_f64(-0.1), "-0.1");
        assert_eq!(format_f64(1.0), "1");
        assert_eq!(format_f64(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_f32(0.1), "0.1");
        assert_eq!(format_f32(f32::INFINITY), "Infinity");
    }

    #[test]
    fn test_nan_renders_absent() {
        assert_eq!(f64_to_string(f64::NAN), None);
        assert_eq!(f32_to_string(f32::NAN), None);
        assert_eq!(f32_to_string(2.5).as_deref(), Some("2.5"));
    }

    #[test]
    fn test_display_renderers() {
        assert_eq!(i8_to_string(-128), "-128");
        assert_eq!(i64_to_string(i64::MAX), "9223372036854775807");
        assert_eq!(char_to_string('é'), "é");
        assert_eq!(bool_to_string(true), "true");
    }

    #[test]
    fn test_display_to_string() {
        let d = BigDecimal::from_str("1.50").unwrap();
        assert_eq!(display_to_string(Some(&d)).as_deref(), Some("1.50"));
        assert_eq!(display_to_string(Some("text")).as_deref(), Some("text"));
        assert_eq!(display_to_string::<BigDecimal>(None), None);
    }

    #[test]
    fn test_bytes_with_charset() {
        assert_eq!(
            bytes_to_string_with(Some(b"caf\xc3\xa9"), Charset::Utf8).as_deref(),
            Some("café")
        );
        assert_eq!(
            bytes_to_string_with(Some(vec![0x63, 0x61, 0x66, 0xE9]), Charset::Latin1).as_deref(),
            Some("café")
        );
        assert_eq!(bytes_to_string_with(None::<&[u8]>, Charset::Utf8), None);
    }
}
