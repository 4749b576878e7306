//! Collection Splitter
//!
//! Bracket-wrapped, separator-joined text (`[a;b;c]`) to a list of text.

use crate::blank::non_blank;

/// Split `[a<sep>b<sep>...]` into its elements.
///
/// - blank text is absent
/// - with a blank separator, or when the text is not wrapped
///   in `[` and `]`, the text is a single element, unchanged
/// - otherwise exactly one leading `[` and one trailing `]` are removed and
///   the rest is split on the literal separator, keeping empty segments
///
/// The separator is matched as plain text; regex metacharacters such as
/// `.`, `|` or `*` have no special meaning.
///
/// ```
/// use rill_coerce::collection::parse_list;
///
/// assert_eq!(parse_list("[a;b;;d]", ";"), Some(vec!["a".into(), "b".into(), "".into(), "d".into()]));
/// assert_eq!(parse_list("abc", ";"), Some(vec!["abc".to_string()]));
/// assert_eq!(parse_list("", ";"), None);
/// ```
pub fn parse_list<'a, 's>(
    text: impl Into<Option<&'a str>>,
    separator: impl Into<Option<&'s str>>,
) -> Option<Vec<String>> {
    let text = non_blank(text.into())?;

    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'));

    match (non_blank(separator.into()), inner) {
        (Some(sep), Some(inner)) => Some(inner.split(sep).map(str::to_owned).collect()),
        _ => Some(vec![text.to_owned()]),
    }
}

/// Identity on an already-split list
#[inline]
pub fn list_identity<T>(list: Option<Vec<T>>) -> Option<Vec<T>> {
    list
}
