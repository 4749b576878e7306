//! Grouped-number normalisation for numerals with locale-style separators.

use crate::blank::non_blank;

/// Normalize a human-formatted numeral to a `.` decimal point.
///
/// Every `thousands` separator is deleted first, then every `decimal`
/// separator becomes `.`. The order matters when both roles are given the
/// same character: the separator is deleted and nothing is substituted.
/// Blank text is absent.
///
/// ```
/// use rill_coerce::text::parse_number;
///
/// assert_eq!(
///     parse_number(Some("1.234.567,89"), Some('.'), Some(',')).as_deref(),
///     Some("1234567.89")
/// );
/// assert_eq!(parse_number("1 000", None, None).as_deref(), Some("1 000"));
/// ```
pub fn parse_number<'a>(
    text: impl Into<Option<&'a str>>,
    thousands: Option<char>,
    decimal: Option<char>,
) -> Option<String> {
    let text = non_blank(text.into())?;

    let mut result: String = match thousands {
        Some(sep) => text.chars().filter(|&c| c != sep).collect(),
        None => text.to_owned(),
    };
    if let Some(sep) = decimal {
        result = result.replace(sep, ".");
    }
    Some(result)
}
