//! Numeral grammars for integers, floats and decimals.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;

use crate::error::{CoerceError, CoerceResult};
use crate::number::Numeric;

/// Integer literal grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grammar {
    /// Optional `+`/`-` followed by ASCII decimal digits
    #[default]
    Strict,
    /// Literal decoding: optional sign, then `0x`/`0X`/`#` for hexadecimal,
    /// a leading `0` for octal, decimal otherwise
    Decode,
}

/// Parse `text` as an integer of type `T` with the given grammar.
///
/// The value is range-checked for `T` after the sign is applied, so
/// `-0x80` is a valid `i8` while `0x80` is not.
pub(crate) fn parse_integer<T>(text: &str, grammar: Grammar) -> CoerceResult<T>
where
    T: Numeric + FromStr + TryFrom<i128>,
{
    let parsed = match grammar {
        Grammar::Strict => text.parse::<T>().ok(),
        Grammar::Decode => decode(text).and_then(|v| T::try_from(v).ok()),
    };

    parsed.ok_or_else(|| {
        tracing::debug!(input = text, target = T::KIND, ?grammar, "invalid numeral");
        CoerceError::invalid_numeral(T::KIND, text)
    })
}

fn decode(text: &str) -> Option<i128> {
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(hex) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .or_else(|| rest.strip_prefix('#'))
    {
        (16, hex)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    // sign in wrong position, e.g. "0x-1"
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

// ==================== Floats ====================

/// Parse a float literal.
///
/// Leading and trailing ASCII whitespace and control characters are
/// ignored. Accepts an optional sign, a mantissa with at least one digit and
/// an optional `.`, an optional exponent, and one optional `f`/`F`/`d`/`D`
/// type suffix. `NaN` and `Infinity` are accepted as exact tokens.
pub(crate) fn parse_float<T>(text: &str) -> CoerceResult<T>
where
    T: Numeric + FromStr,
{
    normalize_float(text)
        .and_then(|literal| literal.parse::<T>().ok())
        .ok_or_else(|| {
            tracing::debug!(input = text, target = T::KIND, "invalid float literal");
            CoerceError::invalid_numeral(T::KIND, text)
        })
}

/// Rewrite a float literal into a form `f64::from_str` accepts, or `None`
/// when the literal is outside the grammar.
fn normalize_float(text: &str) -> Option<String> {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let (negative, body) = split_sign(trimmed);

    match body {
        "NaN" => return Some("NaN".to_owned()),
        "Infinity" => return Some(if negative { "-inf" } else { "inf" }.to_owned()),
        _ => {}
    }

    let body = body.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(body);
    if !is_plain_numeral(body) {
        return None;
    }

    Some(if negative {
        format!("-{body}")
    } else {
        body.to_owned()
    })
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

/// Digits with at most one `.` and at least one digit, then an optional
/// `e`/`E` exponent with an optional sign and at least one digit.
fn is_plain_numeral(body: &str) -> bool {
    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (body, None),
    };

    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    if digits == 0 || dots > 1 {
        return false;
    }

    exponent.is_none_or(|exp| {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !exp.is_empty() && exp.bytes().all(|b| b.is_ascii_digit())
    })
}

// ==================== Decimal ====================

/// Parse a decimal literal: optional sign, digits with an optional `.`,
/// optional exponent. No surrounding whitespace.
///
/// The value is exact at any magnitude; only an exponent that does not fit
/// the scale is rejected.
pub(crate) fn parse_decimal(text: &str) -> CoerceResult<BigDecimal> {
    let malformed = |reason: &str| {
        tracing::debug!(input = text, reason, "malformed decimal");
        CoerceError::malformed_decimal(text, reason)
    };

    let (negative, body) = split_sign(text);
    if !is_plain_numeral(body) {
        return Err(malformed("not a decimal literal"));
    }

    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i64>().map_err(|_| malformed("exponent out of range"))?),
        None => (body, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let scale = i64::try_from(frac_part.len())
        .ok()
        .and_then(|frac| frac.checked_sub(exponent))
        .ok_or_else(|| malformed("exponent out of range"))?;

    let digits = format!("{}{int_part}{frac_part}", if negative { "-" } else { "" });
    let unscaled = BigInt::from_str(&digits).map_err(|e| malformed(&e.to_string()))?;

    Ok(BigDecimal::new(unscaled, scale))
}
