//! Temporal Parser
//!
//! Text to UTC instants through letter-coded patterns (see [`pattern`] for
//! the grammar), and instants back to text with [`format_date`].
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use rill_coerce::temporal::{parse_date, parse_date_lenient};
//!
//! let parsed = parse_date("2020-01-02T03:04:05000Z", "yyyy-MM-dd'T'HH:mm:ss'000Z'").unwrap();
//! assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()));
//!
//! assert!(parse_date("2020-13-01", "yyyy-MM-dd").is_err());
//! let rolled = parse_date_lenient("2020-13-01", "yyyy-MM-dd", true).unwrap();
//! assert_eq!(rolled, Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()));
//! ```

pub mod cache;
pub mod pattern;

use std::borrow::Cow;
use std::fmt::Display;

use chrono::{DateTime, Utc};

use crate::blank::{is_blank, non_blank};
use crate::config;
use crate::error::{CoerceError, CoerceResult};

pub use pattern::DatePattern;

/// Pattern whose trailing `000Z` is a fixed placeholder rather than a field
pub const ZERO_MILLIS_ZULU_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss'000Z'";

const ZERO_MILLIS_ZULU_SUFFIX: &str = "000Z";

const ZERO_MILLIS_ZULU_REWRITE: &str = "yyyy-MM-dd'T'HH:mm:ss";

/// Strict [`parse_date_lenient`].
pub fn parse_date<'a, 'p>(
    text: impl Into<Option<&'a str>>,
    pattern: impl Into<Option<&'p str>>,
) -> CoerceResult<Option<DateTime<Utc>>> {
    parse_date_lenient(text, pattern, false)
}

/// Parse `text` as a UTC instant with `pattern`.
///
/// Blank text is absent. The text is trimmed and a blank pattern is replaced
/// by the configured default. For [`ZERO_MILLIS_ZULU_PATTERN`] the text must
/// end in `000Z`, which is cut off before parsing with the pattern minus
/// that suffix. The whole working text has to be consumed.
pub fn parse_date_lenient<'a, 'p>(
    text: impl Into<Option<&'a str>>,
    pattern: impl Into<Option<&'p str>>,
    lenient: bool,
) -> CoerceResult<Option<DateTime<Utc>>> {
    let Some(text) = non_blank(text.into()) else {
        return Ok(None);
    };
    let mut working = text.trim();
    let mut pattern = effective_pattern(pattern.into());

    if pattern == ZERO_MILLIS_ZULU_PATTERN {
        let Some(stripped) = working.strip_suffix(ZERO_MILLIS_ZULU_SUFFIX) else {
            tracing::debug!(input = working, "missing 000Z suffix");
            return Err(CoerceError::unparseable_date(working));
        };
        working = stripped;
        pattern = Cow::Borrowed(ZERO_MILLIS_ZULU_REWRITE);
    }

    let compiled = cache::compiled(&pattern, lenient)?;
    match compiled.parse(working) {
        Some(instant) => Ok(Some(instant)),
        None => {
            tracing::debug!(
                input = working,
                pattern = compiled.source(),
                lenient,
                "unparseable date"
            );
            Err(CoerceError::unparseable_date(working))
        }
    }
}

/// Identity on an already-parsed instant
#[inline]
pub fn parse_date_identity(instant: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    instant
}

/// Render `value` with `Display`, then parse it strictly with `pattern`.
pub fn parse_date_display<'p, T: Display + ?Sized>(
    value: Option<&T>,
    pattern: impl Into<Option<&'p str>>,
) -> CoerceResult<Option<DateTime<Utc>>> {
    match value {
        Some(v) => parse_date(v.to_string().as_str(), pattern),
        None => Ok(None),
    }
}

/// Render `instant` in UTC with `pattern` (blank pattern: configured
/// default).
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rill_coerce::temporal::format_date;
///
/// let instant = Utc.with_ymd_and_hms(2020, 3, 7, 15, 4, 5).unwrap();
/// assert_eq!(
///     format_date(Some(instant), "yyyy-MM-dd HH:mm").unwrap().as_deref(),
///     Some("2020-03-07 15:04")
/// );
/// ```
pub fn format_date<'p>(
    instant: Option<DateTime<Utc>>,
    pattern: impl Into<Option<&'p str>>,
) -> CoerceResult<Option<String>> {
    let Some(instant) = instant else {
        return Ok(None);
    };
    let pattern = effective_pattern(pattern.into());
    let compiled = cache::compiled(&pattern, false)?;
    Ok(Some(compiled.format(&instant)))
}

fn effective_pattern(pattern: Option<&str>) -> Cow<'_, str> {
    if is_blank(pattern) {
        Cow::Owned(config::current().default_date_pattern.clone())
    } else {
        Cow::Borrowed(pattern.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_blank_text_is_absent() {
        assert_eq!(parse_date(None, "yyyy").unwrap(), None);
        assert_eq!(parse_date("  ", "yyyy").unwrap(), None);
        // even with a broken pattern
        assert_eq!(parse_date("", "qqq").unwrap(), None);
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(
            parse_date("  2020-05-06 ", "yyyy-MM-dd").unwrap(),
            Some(utc(2020, 5, 6, 0, 0, 0))
        );
    }

    #[test]
    fn test_blank_pattern_uses_default() {
        assert_eq!(
            parse_date("31-12-1999", None).unwrap(),
            Some(utc(1999, 12, 31, 0, 0, 0))
        );
        assert_eq!(
            parse_date("31-12-1999", " ").unwrap(),
            Some(utc(1999, 12, 31, 0, 0, 0))
        );
    }

    #[test]
    fn test_zero_millis_zulu_rewrite() {
        assert_eq!(
            parse_date("2020-01-02T03:04:05000Z", ZERO_MILLIS_ZULU_PATTERN).unwrap(),
            Some(utc(2020, 1, 2, 3, 4, 5))
        );
        assert_eq!(
            parse_date(" 2020-01-02T03:04:05000Z ", ZERO_MILLIS_ZULU_PATTERN).unwrap(),
            Some(utc(2020, 1, 2, 3, 4, 5))
        );

        let err = parse_date("2020-01-02T03:04:05", ZERO_MILLIS_ZULU_PATTERN).unwrap_err();
        assert_eq!(err, CoerceError::unparseable_date("2020-01-02T03:04:05"));
    }

    #[test]
    fn test_only_the_exact_pattern_is_rewritten() {
        // the same suffix under another pattern is an ordinary literal
        assert_eq!(
            parse_date("2020-01-02 000Z", "yyyy-MM-dd '000Z'").unwrap(),
            Some(utc(2020, 1, 2, 0, 0, 0))
        );
        assert!(parse_date("2020-01-02T03:04:05.000Z", ZERO_MILLIS_ZULU_PATTERN).is_err());
    }

    #[test]
    fn test_leftover_text_fails_with_working_text() {
        let err = parse_date("2020-01-02 junk", "yyyy-MM-dd").unwrap_err();
        assert_eq!(err.input(), "2020-01-02 junk");
        assert!(err.is_parse_failure());
    }

    #[test]
    fn test_strict_and_lenient() {
        assert!(parse_date("2020-13-01", "yyyy-MM-dd").is_err());
        assert_eq!(
            parse_date_lenient("2020-13-01", "yyyy-MM-dd", true).unwrap(),
            Some(utc(2021, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_lenient_overflow_is_unparseable() {
        let err = parse_date_lenient("9223372036854775807 PM", "K a", true).unwrap_err();
        assert_eq!(err.code(), "COERCE_UNPARSEABLE_DATE");
        assert_eq!(err.input(), "9223372036854775807 PM");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = parse_date("2020", "yyyy-QQ").unwrap_err();
        assert_eq!(err.code(), "COERCE_INVALID_PATTERN");
    }

    #[test]
    fn test_identity_and_display() {
        let instant = utc(2001, 2, 3, 4, 5, 6);
        assert_eq!(parse_date_identity(Some(instant)), Some(instant));
        assert_eq!(parse_date_identity(None), None);

        assert_eq!(
            parse_date_display(Some(&20_010_203_u32), "yyyyMMdd").unwrap(),
            Some(utc(2001, 2, 3, 0, 0, 0))
        );
        assert_eq!(parse_date_display::<str>(None, "yyyy").unwrap(), None);
    }

    #[test]
    fn test_format_date() {
        let instant = utc(2001, 2, 3, 4, 5, 6);
        assert_eq!(
            format_date(Some(instant), "yyyy-MM-dd'T'HH:mm:ss").unwrap().as_deref(),
            Some("2001-02-03T04:05:06")
        );
        assert_eq!(format_date(None, "yyyy").unwrap(), None);
        assert!(format_date(Some(instant), "bogus").is_err());
    }
}
