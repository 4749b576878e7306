//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use rill_coerce::{Charset, Grammar};
use rill_log::Format;

#[derive(Debug, Parser)]
#[command(
    name = "rill",
    version,
    about = "Coerce a single value the way a rill transform would",
    long_about = "Coerce a single value the way a rill transform would.\n\n\
                  The converted value is printed on stdout, `null` when absent. \
                  A value that cannot be converted exits with status 1."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pattern used when a date pattern is blank.
    #[arg(long, global = true, env = "RILL_DATE_PATTERN", value_name = "PATTERN")]
    pub date_pattern: Option<String>,

    /// Character set for decoding bytes (utf-8, iso-8859-1).
    #[arg(long, global = true, env = "RILL_CHARSET", value_name = "NAME")]
    pub charset: Option<Charset>,

    /// Log filter directives (overrides RILL_LOG / RUST_LOG).
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log line format.
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<Format>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Text to a 32-bit integer.
    Int(IntegerArgs),
    /// Text to a 64-bit integer.
    Long(IntegerArgs),
    /// Text to a 16-bit integer.
    Short(IntegerArgs),
    /// Text to an 8-bit integer (decode grammar unless --grammar strict).
    Byte(IntegerArgs),
    /// Text to a 64-bit float.
    Double(ValueArgs),
    /// Text to a 32-bit float.
    Float(ValueArgs),
    /// Text to an arbitrary-precision decimal.
    Decimal(ValueArgs),
    /// Text to a boolean ("1" or "true", any case).
    Bool(ValueArgs),
    /// Text to its first character.
    Char(ValueArgs),
    /// Text to a UTC instant, printed as RFC 3339.
    Date(DateArgs),
    /// RFC 3339 instant to text with a pattern.
    FormatDate(FormatDateArgs),
    /// Normalise a grouped number ("1.234,5" to "1234.5").
    Number(NumberArgs),
    /// Bracketed separated text to a JSON array.
    List(ListArgs),
    /// Decode stdin bytes with the configured charset.
    Decode,
}

#[derive(Debug, Args)]
pub struct ValueArgs {
    /// Input text; absent when omitted.
    pub text: Option<String>,

    /// Print the zero default instead of null for blank input.
    #[arg(long)]
    pub or_default: bool,
}

#[derive(Debug, Args)]
pub struct IntegerArgs {
    #[command(flatten)]
    pub value: ValueArgs,

    /// Numeral grammar.
    #[arg(long, value_enum)]
    pub grammar: Option<GrammarArg>,
}

#[derive(Debug, Args)]
pub struct DateArgs {
    pub text: Option<String>,

    /// Date pattern, e.g. yyyy-MM-dd'T'HH:mm:ss.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Roll out-of-range fields over instead of rejecting them.
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Debug, Args)]
pub struct FormatDateArgs {
    /// RFC 3339 instant, e.g. 2020-01-02T03:04:05Z.
    pub instant: Option<String>,

    #[arg(short, long)]
    pub pattern: Option<String>,
}

#[derive(Debug, Args)]
pub struct NumberArgs {
    pub text: Option<String>,

    /// Thousands separator to remove.
    #[arg(long, value_name = "CHAR")]
    pub thousands: Option<char>,

    /// Decimal separator to replace with '.'.
    #[arg(long, value_name = "CHAR")]
    pub decimal: Option<char>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    pub text: Option<String>,

    #[arg(short, long)]
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GrammarArg {
    Strict,
    Decode,
}

impl From<GrammarArg> for Grammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Strict => Self::Strict,
            GrammarArg::Decode => Self::Decode,
        }
    }
}
