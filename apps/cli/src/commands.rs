//! One function per subcommand. Each returns the line to print.

use std::fmt::Display;
use std::io::Read;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rill_coerce::collection::parse_list;
use rill_coerce::temporal::{format_date, parse_date_lenient};
use rill_coerce::text::{self, render};
use rill_coerce::{CoerceResult, Grammar, defaults};

use crate::cli::{Command, DateArgs, FormatDateArgs, IntegerArgs, ListArgs, NumberArgs, ValueArgs};

const NULL: &str = "null";

pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Int(args) => integer(args, Grammar::Strict, defaults::I32, |s, g| {
            text::parse_i32_with(s, g)
        }),
        Command::Long(args) => integer(args, Grammar::Strict, defaults::I64, |s, g| {
            text::parse_i64_with(s, g)
        }),
        Command::Short(args) => integer(args, Grammar::Strict, defaults::I16, |s, g| {
            text::parse_i16_with(s, g)
        }),
        Command::Byte(args) => integer(args, Grammar::Decode, defaults::I8, |s, g| {
            text::parse_i8_with(s, g)
        }),
        Command::Double(args) => {
            let value = parsed(args, defaults::F64, |s| text::parse_f64(s))?;
            Ok(show(value.and_then(render::f64_to_string)))
        }
        Command::Float(args) => {
            let value = parsed(args, defaults::F32, |s| text::parse_f32(s))?;
            Ok(show(value.and_then(render::f32_to_string)))
        }
        Command::Decimal(args) => {
            let value = parsed(args, Default::default(), |s| text::parse_decimal(s))?;
            Ok(show(value.map(|d| d.to_string())))
        }
        Command::Bool(args) => {
            let value = parsed(args, defaults::BOOL, |s| Ok(text::parse_bool(s)))?;
            Ok(show(value.map(render::bool_to_string)))
        }
        Command::Char(args) => {
            let value = parsed(args, defaults::CHAR, |s| Ok(text::parse_char(s)))?;
            Ok(show(value.map(render::char_to_string)))
        }
        Command::Date(args) => date(args),
        Command::FormatDate(args) => format_instant(args),
        Command::Number(args) => Ok(number(args)),
        Command::List(args) => list(args),
        Command::Decode => decode(),
    }
}

fn show(value: Option<String>) -> String {
    value.unwrap_or_else(|| NULL.to_string())
}

fn parsed<T>(
    args: &ValueArgs,
    zero: T,
    parse: impl Fn(Option<&str>) -> CoerceResult<Option<T>>,
) -> Result<Option<T>> {
    let value = parse(args.text.as_deref())?;
    Ok(if args.or_default {
        Some(value.unwrap_or(zero))
    } else {
        value
    })
}

fn integer<T: Display>(
    args: &IntegerArgs,
    grammar: Grammar,
    zero: T,
    parse: impl Fn(Option<&str>, Grammar) -> CoerceResult<Option<T>>,
) -> Result<String> {
    let grammar = args.grammar.map_or(grammar, Grammar::from);
    let value = parsed(&args.value, zero, |s| parse(s, grammar))?;
    Ok(show(value.map(|v| v.to_string())))
}

fn date(args: &DateArgs) -> Result<String> {
    let instant = parse_date_lenient(
        args.text.as_deref(),
        args.pattern.as_deref(),
        args.lenient,
    )?;
    Ok(show(
        instant.map(|i| i.to_rfc3339_opts(SecondsFormat::Millis, true)),
    ))
}

fn format_instant(args: &FormatDateArgs) -> Result<String> {
    let instant = args
        .instant
        .as_deref()
        .filter(|&s| rill_coerce::is_not_blank(Some(s)))
        .map(|s| {
            DateTime::parse_from_rfc3339(s.trim())
                .with_context(|| format!("not an RFC 3339 instant: {s:?}"))
        })
        .transpose()?
        .map(|i| i.with_timezone(&Utc));
    Ok(show(format_date(instant, args.pattern.as_deref())?))
}

fn number(args: &NumberArgs) -> String {
    show(text::parse_number(
        args.text.as_deref(),
        args.thousands,
        args.decimal,
    ))
}

fn list(args: &ListArgs) -> Result<String> {
    match parse_list(args.text.as_deref(), args.separator.as_deref()) {
        Some(items) => Ok(serde_json::to_string(&items)?),
        None => Ok(NULL.to_string()),
    }
}

fn decode() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("reading stdin")?;
    Ok(show(render::bytes_to_string(Some(bytes))))
}
