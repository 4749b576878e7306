//! Blank/null classification shared by every string-sourced conversion.

/// Returns `true` when `text` is absent, empty, or made only of Unicode
/// whitespace.
///
/// ```
/// use rill_coerce::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some(" \t\u{2003}")));
/// assert!(!is_blank(Some(" x ")));
/// ```
#[inline]
pub fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|s| s.chars().all(char::is_whitespace))
}

/// Negation of [`is_blank`].
#[inline]
pub fn is_not_blank(text: Option<&str>) -> bool {
    !is_blank(text)
}

/// Returns the text when it is not blank.
#[inline]
pub(crate) fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.chars().all(char::is_whitespace))
}
