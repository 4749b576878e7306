//! Letter-coded date patterns.
//!
//! | Letter | Field | Notes |
//! |--------|-------|-------|
//! | `y` | year | `yy` with exactly two digits uses an 80/20 century window |
//! | `M` | month | numeric below three letters, names from `MMM` |
//! | `d` | day of month | |
//! | `H` | hour 0-23 | |
//! | `k` | hour 1-24 | 24 is midnight |
//! | `K` | hour 0-11 | with `a` |
//! | `h` | hour 1-12 | with `a`, 12 is zero |
//! | `m` | minute | |
//! | `s` | second | |
//! | `S` | millisecond | |
//! | `a` | `AM`/`PM` | |
//! | `E` | day-of-week name | parsed and ignored |
//! | `D` | day of year | used when neither `M` nor `d` is present |
//! | `Z` | RFC 822 offset | `+0100` |
//! | `X` | ISO 8601 offset | `Z`, `+01`, `+0100`, `+01:00` |
//! | `z` | general zone | `UTC`, `GMT`, `GMT+01:00` |
//!
//! Text between single quotes is literal and `''` is a single quote. Any
//! other non-letter is literal too.

use std::fmt::Write as _;
use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Timelike, Utc};

use crate::error::{CoerceError, CoerceResult};

const MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Indexed from Sunday
const DAYS_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const DAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MERIDIEM: [&str; 2] = ["AM", "PM"];

const EPOCH_YEAR: i64 = 1970;

/// How many years back the two-digit year window starts
const CENTURY_WINDOW_BACK: i64 = 80;

// ============================================================================
// TOKENS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    HourOfDay,
    HourOfDayFromOne,
    HalfDayHour,
    HalfDayHourFromOne,
    Minute,
    Second,
    Millisecond,
    Meridiem,
    DayOfWeek,
    DayOfYear,
    Rfc822Zone,
    IsoZone,
    GeneralZone,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'y' => Self::Year,
            'M' => Self::Month,
            'd' => Self::Day,
            'H' => Self::HourOfDay,
            'k' => Self::HourOfDayFromOne,
            'K' => Self::HalfDayHour,
            'h' => Self::HalfDayHourFromOne,
            'm' => Self::Minute,
            's' => Self::Second,
            'S' => Self::Millisecond,
            'a' => Self::Meridiem,
            'E' => Self::DayOfWeek,
            'D' => Self::DayOfYear,
            'Z' => Self::Rfc822Zone,
            'X' => Self::IsoZone,
            'z' => Self::GeneralZone,
            _ => return None,
        })
    }

    fn is_numeric(self, width: usize) -> bool {
        match self {
            Self::Month => width < 3,
            Self::Meridiem
            | Self::DayOfWeek
            | Self::Rfc822Zone
            | Self::IsoZone
            | Self::GeneralZone => false,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field(Field, usize),
}

// ============================================================================
// COMPILED PATTERN
// ============================================================================

/// A compiled date pattern.
///
/// Immutable once built; parsing always happens in UTC, so one instance can
/// be shared by any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
    lenient: bool,
}

impl DatePattern {
    /// Compile `pattern`.
    ///
    /// With `lenient`, out-of-range fields roll over into the next larger
    /// field (month 13 is January of the following year); otherwise they are
    /// rejected.
    pub fn compile(pattern: &str, lenient: bool) -> CoerceResult<Self> {
        let invalid = |reason: String| {
            tracing::debug!(pattern, %reason, "invalid date pattern");
            CoerceError::invalid_pattern(pattern, reason)
        };

        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' => {
                    if chars.next_if_eq(&'\'').is_some() {
                        literal.push('\'');
                        continue;
                    }
                    loop {
                        match chars.next() {
                            Some('\'') if chars.next_if_eq(&'\'').is_some() => literal.push('\''),
                            Some('\'') => break,
                            Some(quoted) => literal.push(quoted),
                            None => return Err(invalid("unterminated quote".to_owned())),
                        }
                    }
                }
                letter if letter.is_ascii_alphabetic() => {
                    let field = Field::from_letter(letter)
                        .ok_or_else(|| invalid(format!("illegal pattern character '{letter}'")))?;
                    let mut width = 1;
                    while chars.next_if_eq(&letter).is_some() {
                        width += 1;
                    }
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Field(field, width));
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        tracing::trace!(pattern, lenient, tokens = tokens.len(), "compiled date pattern");

        Ok(Self {
            source: pattern.to_owned(),
            tokens,
            lenient,
        })
    }

    /// Pattern text this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_lenient(&self) -> bool {
        self.lenient
    }

    /// Parse the whole of `text` as a UTC instant.
    ///
    /// Returns `None` when a field does not match, when a field is out of
    /// range in strict mode, or when text is left over.
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let mut cursor = Cursor { rest: text };
        let mut fields = Fields::default();

        for (i, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Literal(literal) => {
                    if !cursor.eat(literal) {
                        return None;
                    }
                }
                &Token::Field(field, width) => {
                    cursor.skip_blanks();
                    // a numeric field directly followed by another numeric
                    // field reads exactly `width` digits
                    let abutting = matches!(
                        self.tokens.get(i + 1),
                        Some(&Token::Field(next, next_width)) if next.is_numeric(next_width)
                    );
                    let max_digits = (abutting && field.is_numeric(width)).then_some(width);
                    parse_field(&mut cursor, &mut fields, field, width, max_digits)?;
                }
            }
        }

        if !cursor.rest.is_empty() {
            return None;
        }
        fields.resolve(self.lenient)
    }

    /// Render `instant` in UTC.
    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for token in &self.tokens {
            match token {
                Token::Literal(literal) => out.push_str(literal),
                &Token::Field(field, width) => render_field(&mut out, instant, field, width),
            }
        }
        out
    }
}

// ============================================================================
// PARSING
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn eat(&mut self, literal: &str) -> bool {
        match self.rest.strip_prefix(literal) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn skip_blanks(&mut self) {
        self.rest = self.rest.trim_start_matches([' ', '\t']);
    }

    /// Unsigned decimal number of at most `max` digits (unbounded when
    /// `None`); returns the value and the digit count
    fn digits(&mut self, max: Option<usize>) -> Option<(i64, usize)> {
        let len = self
            .rest
            .bytes()
            .take(max.unwrap_or(usize::MAX))
            .take_while(u8::is_ascii_digit)
            .count();
        if len == 0 {
            return None;
        }
        let (digits, rest) = self.rest.split_at(len);
        let value = digits.parse().ok()?;
        self.rest = rest;
        Some((value, len))
    }

    fn exact_digits(&mut self, count: usize) -> Option<i64> {
        let mut ahead = *self;
        let (value, len) = ahead.digits(Some(count))?;
        (len == count).then(|| {
            *self = ahead;
            value
        })
    }

    fn sign(&mut self) -> Option<i64> {
        if self.eat("+") {
            Some(1)
        } else if self.eat("-") {
            Some(-1)
        } else {
            None
        }
    }

    /// Index of the longest case-insensitive match among `lists`, which all
    /// share the same indexing
    fn name(&mut self, lists: &[&[&str]]) -> Option<usize> {
        let (index, len) = lists
            .iter()
            .flat_map(|list| list.iter().enumerate())
            .filter(|(_, name)| {
                self.rest
                    .get(..name.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(name))
            })
            .map(|(index, name)| (index, name.len()))
            .max_by_key(|&(_, len)| len)?;
        self.rest = &self.rest[len..];
        Some(index)
    }

    /// Run `parse` on a copy and commit only on success
    fn attempt<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mut ahead = *self;
        let value = parse(&mut ahead)?;
        *self = ahead;
        Some(value)
    }
}

fn parse_field(
    cursor: &mut Cursor<'_>,
    fields: &mut Fields,
    field: Field,
    width: usize,
    max_digits: Option<usize>,
) -> Option<()> {
    match field {
        Field::Year => {
            let (value, len) = cursor.digits(max_digits)?;
            fields.year = Some(if width <= 2 && len == 2 {
                two_digit_year(value)
            } else {
                value
            });
        }
        Field::Month if width >= 3 => {
            let index = cursor.name(&[&MONTHS_FULL, &MONTHS_SHORT])?;
            fields.month = Some(index as i64 + 1);
        }
        Field::Month => fields.month = Some(cursor.digits(max_digits)?.0),
        Field::Day => fields.day = Some(cursor.digits(max_digits)?.0),
        Field::HourOfDay => fields.hour_of_day = Some(cursor.digits(max_digits)?.0),
        Field::HourOfDayFromOne => {
            fields.hour_of_day_from_one = Some(cursor.digits(max_digits)?.0);
        }
        Field::HalfDayHour => fields.half_day_hour = Some(cursor.digits(max_digits)?.0),
        Field::HalfDayHourFromOne => {
            fields.half_day_hour_from_one = Some(cursor.digits(max_digits)?.0);
        }
        Field::Minute => fields.minute = Some(cursor.digits(max_digits)?.0),
        Field::Second => fields.second = Some(cursor.digits(max_digits)?.0),
        Field::Millisecond => fields.millisecond = Some(cursor.digits(max_digits)?.0),
        Field::Meridiem => fields.pm = Some(cursor.name(&[&MERIDIEM])? == 1),
        Field::DayOfWeek => {
            cursor.name(&[&DAYS_FULL, &DAYS_SHORT])?;
        }
        Field::DayOfYear => fields.day_of_year = Some(cursor.digits(max_digits)?.0),
        Field::Rfc822Zone => {
            let offset = cursor
                .attempt(rfc822_offset)
                .or_else(|| cursor.attempt(general_offset))?;
            fields.offset = Some(offset);
        }
        Field::IsoZone => fields.offset = Some(cursor.attempt(iso_offset)?),
        Field::GeneralZone => {
            let offset = cursor
                .attempt(general_offset)
                .or_else(|| cursor.attempt(rfc822_offset))?;
            fields.offset = Some(offset);
        }
    }
    Some(())
}

fn two_digit_year(yy: i64) -> i64 {
    let start = i64::from(Utc::now().year()) - CENTURY_WINDOW_BACK;
    let candidate = start.div_euclid(100) * 100 + yy;
    if candidate < start {
        candidate + 100
    } else {
        candidate
    }
}

/// Offset in seconds from hours and minutes, both range-checked
fn offset_seconds(sign: i64, hours: i64, minutes: i64) -> Option<i64> {
    ((0..=23).contains(&hours) && (0..=59).contains(&minutes))
        .then_some(sign * (hours * 3600 + minutes * 60))
}

/// `+hhmm` / `-hhmm`
fn rfc822_offset(cursor: &mut Cursor<'_>) -> Option<i64> {
    let sign = cursor.sign()?;
    let hours = cursor.exact_digits(2)?;
    let minutes = cursor.exact_digits(2)?;
    offset_seconds(sign, hours, minutes)
}

/// `Z`, `+hh`, `+hhmm` or `+hh:mm`
fn iso_offset(cursor: &mut Cursor<'_>) -> Option<i64> {
    if cursor.eat("Z") {
        return Some(0);
    }
    let sign = cursor.sign()?;
    let hours = cursor.exact_digits(2)?;
    let minutes = cursor
        .attempt(|c| {
            c.eat(":");
            c.exact_digits(2)
        })
        .unwrap_or(0);
    offset_seconds(sign, hours, minutes)
}

/// `GMT`, `UTC` or `UT`, optionally followed by `+h`, `+hh`, `+hh:mm` or
/// `+hhmm`
fn general_offset(cursor: &mut Cursor<'_>) -> Option<i64> {
    cursor.name(&[&["GMT", "UTC", "UT"]])?;
    let Some(sign) = cursor.sign() else {
        return Some(0);
    };
    let (value, len) = cursor.digits(Some(4))?;
    let (hours, minutes) = match len {
        1 | 2 => {
            let minutes = cursor.attempt(|c| {
                c.eat(":").then_some(())?;
                c.exact_digits(2)
            });
            (value, minutes.unwrap_or(0))
        }
        _ => (value / 100, value % 100),
    };
    offset_seconds(sign, hours, minutes)
}

// ============================================================================
// FIELD RESOLUTION
// ============================================================================

#[derive(Debug, Default)]
struct Fields {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    day_of_year: Option<i64>,
    hour_of_day: Option<i64>,
    hour_of_day_from_one: Option<i64>,
    half_day_hour: Option<i64>,
    half_day_hour_from_one: Option<i64>,
    pm: Option<bool>,
    minute: Option<i64>,
    second: Option<i64>,
    millisecond: Option<i64>,
    offset: Option<i64>,
}

fn within(value: Option<i64>, range: RangeInclusive<i64>) -> bool {
    value.is_none_or(|v| range.contains(&v))
}

impl Fields {
    fn in_strict_range(&self) -> bool {
        within(self.year, 1..=i64::from(i32::MAX))
            && within(self.month, 1..=12)
            && within(self.day, 1..=31)
            && within(self.day_of_year, 1..=366)
            && within(self.hour_of_day, 0..=23)
            && within(self.hour_of_day_from_one, 1..=24)
            && within(self.half_day_hour, 0..=11)
            && within(self.half_day_hour_from_one, 1..=12)
            && within(self.minute, 0..=59)
            && within(self.second, 0..=59)
            && within(self.millisecond, 0..=999)
    }

    /// Hour of day; 24-hour fields win over 12-hour ones.
    ///
    /// `None` when a lenient 12-hour value overflows once the meridiem is
    /// added.
    fn hour(&self) -> Option<i64> {
        if let Some(hour) = self.hour_of_day {
            return Some(hour);
        }
        if let Some(hour) = self.hour_of_day_from_one {
            return Some(if hour == 24 { 0 } else { hour });
        }
        let half = if self.pm == Some(true) { 12 } else { 0 };
        match (self.half_day_hour, self.half_day_hour_from_one) {
            (Some(hour), _) => hour.checked_add(half),
            (None, Some(12) | None) => Some(half),
            (None, Some(hour)) => hour.checked_add(half),
        }
    }

    fn date(&self, year: i32, lenient: bool) -> Option<NaiveDate> {
        if let (Some(day_of_year), None, None) = (self.day_of_year, self.month, self.day) {
            return if lenient {
                NaiveDate::from_yo_opt(year, 1)?.checked_add_signed(TimeDelta::try_days(day_of_year - 1)?)
            } else {
                NaiveDate::from_yo_opt(year, u32::try_from(day_of_year).ok()?)
            };
        }

        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);
        if lenient {
            let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
            let months = Months::new(u32::try_from((month - 1).unsigned_abs()).ok()?);
            let shifted = if month >= 1 {
                first.checked_add_months(months)?
            } else {
                first.checked_sub_months(months)?
            };
            shifted.checked_add_signed(TimeDelta::try_days(day - 1)?)
        } else {
            NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
        }
    }

    fn resolve(&self, lenient: bool) -> Option<DateTime<Utc>> {
        if !lenient && !self.in_strict_range() {
            return None;
        }

        let year = i32::try_from(self.year.unwrap_or(EPOCH_YEAR)).ok()?;
        let local = self
            .date(year, lenient)?
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(TimeDelta::try_hours(self.hour()?)?)?
            .checked_add_signed(TimeDelta::try_minutes(self.minute.unwrap_or(0))?)?
            .checked_add_signed(TimeDelta::try_seconds(self.second.unwrap_or(0))?)?
            .checked_add_signed(TimeDelta::try_milliseconds(self.millisecond.unwrap_or(0))?)?;

        let utc = local.checked_sub_signed(TimeDelta::try_seconds(self.offset.unwrap_or(0))?)?;
        Some(utc.and_utc())
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

fn pad(out: &mut String, value: i64, width: usize) {
    let _ = write!(out, "{value:0width$}");
}

fn render_field(out: &mut String, instant: &DateTime<Utc>, field: Field, width: usize) {
    let hour = i64::from(instant.hour());
    match field {
        Field::Year if width == 2 => pad(out, i64::from(instant.year()).rem_euclid(100), 2),
        Field::Year => pad(out, i64::from(instant.year()), width),
        Field::Month => {
            let index = instant.month0() as usize;
            match width {
                1 | 2 => pad(out, i64::from(instant.month()), width),
                3 => out.push_str(MONTHS_SHORT[index]),
                _ => out.push_str(MONTHS_FULL[index]),
            }
        }
        Field::Day => pad(out, i64::from(instant.day()), width),
        Field::HourOfDay => pad(out, hour, width),
        Field::HourOfDayFromOne => pad(out, if hour == 0 { 24 } else { hour }, width),
        Field::HalfDayHour => pad(out, hour % 12, width),
        Field::HalfDayHourFromOne => {
            let half = hour % 12;
            pad(out, if half == 0 { 12 } else { half }, width);
        }
        Field::Minute => pad(out, i64::from(instant.minute()), width),
        Field::Second => pad(out, i64::from(instant.second()), width),
        Field::Millisecond => pad(out, i64::from(instant.timestamp_subsec_millis()), width),
        Field::Meridiem => out.push_str(MERIDIEM[usize::from(hour >= 12)]),
        Field::DayOfWeek => {
            let index = instant.weekday().num_days_from_sunday() as usize;
            out.push_str(if width >= 4 {
                DAYS_FULL[index]
            } else {
                DAYS_SHORT[index]
            });
        }
        Field::DayOfYear => pad(out, i64::from(instant.ordinal()), width),
        Field::Rfc822Zone => out.push_str("+0000"),
        Field::IsoZone => out.push('Z'),
        Field::GeneralZone => out.push_str(if width >= 4 {
            "Coordinated Universal Time"
        } else {
            "UTC"
        }),
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

    fn strict(pattern: &str) -> DatePattern {
        DatePattern::compile(pattern, false).unwrap()
    }

    fn lenient(pattern: &str) -> DatePattern {
        DatePattern::compile(pattern, true).unwrap()
    }

    #[test]
    fn test_compile_tokens() {
        let p = strict("yyyy-MM-dd'T'HH");
        assert_eq!(
            p.tokens,
            vec![
                Token::Field(Field::Year, 4),
                Token::Literal("-".into()),
                Token::Field(Field::Month, 2),
                Token::Literal("-".into()),
                Token::Field(Field::Day, 2),
                Token::Literal("T".into()),
                Token::Field(Field::HourOfDay, 2),
            ]
        );
    }

    #[test]
    fn test_compile_quotes() {
        let p = strict("hh 'o''clock' a, ''yy");
        assert_eq!(
            p.tokens,
            vec![
                Token::Field(Field::HalfDayHourFromOne, 2),
                Token::Literal(" o'clock ".into()),
                Token::Field(Field::Meridiem, 1),
                Token::Literal(", '".into()),
                Token::Field(Field::Year, 2),
            ]
        );
    }

    #[test]
    fn test_compile_rejects() {
        let err = DatePattern::compile("yyyy-QQ", false).unwrap_err();
        assert_eq!(err.code(), "COERCE_INVALID_PATTERN");
        assert_eq!(err.input(), "yyyy-QQ");
        assert!(err.to_string().contains("'Q'"));

        assert!(DatePattern::compile("yyyy 'open", false).is_err());
    }

    #[test]
    fn test_parse_iso_like() {
        let p = strict("yyyy-MM-dd'T'HH:mm:ss");
        assert_eq!(p.parse("2020-01-02T03:04:05"), Some(utc(2020, 1, 2, 3, 4, 5)));
        assert_eq!(p.parse("2020-01-02T03:04:05Z"), None);
        assert_eq!(p.parse("2020-01-02T03:04"), None);
    }

    #[test]
    fn test_missing_fields_default_to_epoch() {
        assert_eq!(strict("HH:mm").parse("13:45"), Some(utc(1970, 1, 1, 13, 45, 0)));
        assert_eq!(strict("yyyy").parse("2001"), Some(utc(2001, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let p = strict("yyyy-MM-dd");
        assert_eq!(p.parse("2020-13-01"), None);
        assert_eq!(p.parse("2020-02-30"), None);
        assert_eq!(p.parse("2020-00-10"), None);
        assert_eq!(strict("HH:mm").parse("24:00"), None);
        assert_eq!(strict("HH:mm:ss").parse("10:00:60"), None);
    }

    #[test]
    fn test_lenient_rolls_over() {
        let p = lenient("yyyy-MM-dd");
        assert_eq!(p.parse("2020-13-01"), Some(utc(2021, 1, 1, 0, 0, 0)));
        assert_eq!(p.parse("2020-01-32"), Some(utc(2020, 2, 1, 0, 0, 0)));
        assert_eq!(p.parse("2020-02-30"), Some(utc(2020, 3, 1, 0, 0, 0)));
        assert_eq!(p.parse("2020-00-10"), Some(utc(2019, 12, 10, 0, 0, 0)));
        assert_eq!(
            lenient("yyyy-MM-dd HH:mm").parse("2020-12-31 24:30"),
            Some(utc(2021, 1, 1, 0, 30, 0))
        );
    }

    #[test]
    fn test_abutting_numeric_fields() {
        let p = strict("yyyyMMddHHmmss");
        assert_eq!(p.parse("20200102030405"), Some(utc(2020, 1, 2, 3, 4, 5)));
        // the last field of the run is greedy
        assert_eq!(strict("yyyyMMdd").parse("2020012"), Some(utc(2020, 1, 2, 0, 0, 0)));
        assert_eq!(strict("yyyyMMdd").parse("20200131"), Some(utc(2020, 1, 31, 0, 0, 0)));
    }

    #[test]
    fn test_greedy_fields_between_literals() {
        assert_eq!(
            strict("d/M/yyyy").parse("7/3/2021"),
            Some(utc(2021, 3, 7, 0, 0, 0))
        );
    }

    #[test]
    fn test_blanks_before_fields() {
        assert_eq!(
            strict("dd-MM-yyyy").parse(" 05- \t06-2010"),
            Some(utc(2010, 6, 5, 0, 0, 0))
        );
    }

    #[test]
    fn test_month_and_day_names() {
        let p = strict("EEE, d MMM yyyy");
        assert_eq!(p.parse("Tue, 3 Mar 2020"), Some(utc(2020, 3, 3, 0, 0, 0)));
        assert_eq!(p.parse("tuesday, 3 MARCH 2020"), Some(utc(2020, 3, 3, 0, 0, 0)));
        assert_eq!(p.parse("Tue, 3 Mrz 2020"), None);
    }

    #[test]
    fn test_twelve_hour_clock() {
        let p = strict("hh:mm a");
        assert_eq!(p.parse("12:15 AM"), Some(utc(1970, 1, 1, 0, 15, 0)));
        assert_eq!(p.parse("12:15 PM"), Some(utc(1970, 1, 1, 12, 15, 0)));
        assert_eq!(p.parse("03:00 pm"), Some(utc(1970, 1, 1, 15, 0, 0)));
        assert_eq!(p.parse("13:00 PM"), None);
        assert_eq!(strict("kk:mm").parse("24:00"), Some(utc(1970, 1, 1, 0, 0, 0)));
        assert_eq!(strict("K a").parse("11 PM"), Some(utc(1970, 1, 1, 23, 0, 0)));
    }

    #[test]
    fn test_lenient_hour_overflow_is_unparseable() {
        assert_eq!(lenient("K a").parse("9223372036854775807 PM"), None);
        assert_eq!(lenient("h a").parse("9223372036854775807 PM"), None);
        assert_eq!(lenient("H").parse("9223372036854775807"), None);
        assert_eq!(lenient("yyyy-MM-dd").parse("2020-01-9223372036854775807"), None);
        // still rolls over inside the representable range
        assert_eq!(lenient("K a").parse("13 PM"), Some(utc(1970, 1, 2, 1, 0, 0)));
    }

    #[test]
    fn test_source_is_kept() {
        assert_eq!(strict("dd-MM-yyyy").source(), "dd-MM-yyyy");
        assert!(!strict("dd-MM-yyyy").is_lenient());
        assert!(lenient("HH").is_lenient());
    }

    #[test]
    fn test_milliseconds() {
        let p = strict("HH:mm:ss.SSS");
        let parsed = p.parse("00:00:01.250").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_250);
        assert_eq!(p.parse("00:00:01.1000"), None);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(strict("yyyy-DDD").parse("2020-060"), Some(utc(2020, 2, 29, 0, 0, 0)));
        assert_eq!(strict("yyyy-DDD").parse("2019-366"), None);
        assert_eq!(lenient("yyyy-DDD").parse("2019-366"), Some(utc(2020, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_offsets_shift_to_utc() {
        let p = strict("yyyy-MM-dd HH:mm Z");
        assert_eq!(p.parse("2020-06-01 12:00 +0200"), Some(utc(2020, 6, 1, 10, 0, 0)));
        assert_eq!(p.parse("2020-06-01 12:00 -0130"), Some(utc(2020, 6, 1, 13, 30, 0)));

        let p = strict("yyyy-MM-dd'T'HH:mmX");
        assert_eq!(p.parse("2020-06-01T12:00Z"), Some(utc(2020, 6, 1, 12, 0, 0)));
        assert_eq!(p.parse("2020-06-01T12:00+01"), Some(utc(2020, 6, 1, 11, 0, 0)));
        assert_eq!(p.parse("2020-06-01T12:00+01:30"), Some(utc(2020, 6, 1, 10, 30, 0)));
        assert_eq!(p.parse("2020-06-01T12:00+0130"), Some(utc(2020, 6, 1, 10, 30, 0)));

        let p = strict("HH:mm z");
        assert_eq!(p.parse("12:00 UTC"), Some(utc(1970, 1, 1, 12, 0, 0)));
        assert_eq!(p.parse("12:00 GMT+01:00"), Some(utc(1970, 1, 1, 11, 0, 0)));
        assert_eq!(p.parse("12:00 GMT-3"), Some(utc(1970, 1, 1, 15, 0, 0)));
        assert_eq!(p.parse("12:00 PST"), None);
    }

    #[test]
    fn test_two_digit_year_window() {
        let p = strict("dd/MM/yy");
        let now = Utc::now().year();
        let parsed = p.parse("01/01/05").unwrap().year();
        assert!(parsed % 100 == 5);
        assert!(parsed > now - 80 && parsed <= now + 20);
        // more than two digits is taken literally
        assert_eq!(p.parse("01/01/1905").unwrap().year(), 1905);
    }

    #[test]
    fn test_format() {
        let instant = utc(2020, 3, 7, 15, 4, 5);
        assert_eq!(strict("yyyy-MM-dd'T'HH:mm:ss").format(&instant), "2020-03-07T15:04:05");
        assert_eq!(strict("dd-MM-yy").format(&instant), "07-03-20");
        assert_eq!(strict("EEEE d MMMM yyyy").format(&instant), "Saturday 7 March 2020");
        assert_eq!(strict("EEE, MMM d").format(&instant), "Sat, Mar 7");
        assert_eq!(strict("h:mm a").format(&instant), "3:04 PM");
        assert_eq!(strict("HH:mm:ss.SSS Z").format(&instant), "15:04:05.000 +0000");
        assert_eq!(strict("HH:mmX z").format(&instant), "15:04Z UTC");
        assert_eq!(strict("D k K").format(&utc(2020, 12, 31, 0, 0, 0)), "366 24 0");
        assert_eq!(strict("'quoted '' text'").format(&instant), "quoted ' text");
    }

    #[test]
    fn test_format_then_parse() {
        let instant = utc(1999, 12, 31, 23, 59, 58);
        for pattern in ["yyyy-MM-dd HH:mm:ss", "EEE MMM dd HH:mm:ss z yyyy", "yyyyMMddHHmmss"] {
            let p = strict(pattern);
            assert_eq!(p.parse(&p.format(&instant)), Some(instant), "{pattern}");
        }
    }
}
