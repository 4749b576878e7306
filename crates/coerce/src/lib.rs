//! # rill-coerce
//!
//! Total value coercion for record-at-a-time data transforms.
//!
//! Every conversion is a named, synchronous, pure function whose source and
//! target types are fixed at the call site. The engine is split into:
//!
//! - [`blank`]: what counts as absent text
//! - [`number`]: the numeric matrix (`i8` .. `i64`, `f32`, `f64`, decimal)
//! - [`text`]: text to typed values and back ([`text::render`])
//! - [`temporal`]: pattern-driven text to UTC instants
//! - [`collection`]: bracketed text to lists
//!
//! ## Absence
//!
//! Absence is never an error. Blank text and `None` sources give `None` for
//! the nullable operations and the zero default ([`defaults`]) for the
//! `*_or_default` ones. A NaN float counts as absent for every numeric
//! target.
//!
//! ```
//! use rill_coerce::prelude::*;
//!
//! assert_eq!(parse_i32("42").unwrap(), Some(42));
//! assert_eq!(parse_i32("   ").unwrap(), None);
//! assert_eq!(parse_i32_or_default(None).unwrap(), 0);
//! assert_eq!(to_i32(f64::NAN), None);
//! assert!(parse_i32("abc").is_err());
//! ```
//!
//! ## Shared state
//!
//! Compiled date patterns are memoised in [`temporal::cache`], and the
//! installed [`CoerceConfig`] is read through [`config::current`]. Both are
//! safe to use from any number of threads.

pub mod blank;
pub mod collection;
pub mod config;
pub mod defaults;
pub mod error;
pub mod number;
pub mod temporal;
pub mod text;

pub use bigdecimal::BigDecimal;
pub use blank::{is_blank, is_not_blank};
pub use config::{Charset, CoerceConfig};
pub use error::{CoerceError, CoerceResult};
pub use number::{Number, Numeric, NumericSource};
pub use text::Grammar;

/// Prelude for common imports
pub mod prelude {
    pub use crate::collection::{list_identity, parse_list};
    pub use crate::number::{
        bool_to_i8, bool_to_i8_or_default, to_bool_or_default, to_char_or_default, to_decimal,
        to_f32, to_f32_or_default, to_f64, to_f64_or_default, to_i8, to_i8_or_default, to_i16,
        to_i16_or_default, to_i32, to_i32_or_default, to_i64, to_i64_or_default,
    };
    pub use crate::temporal::{format_date, parse_date, parse_date_lenient};
    pub use crate::text::{
        parse_bool, parse_bool_or_default, parse_char, parse_char_or_default, parse_decimal,
        parse_f32, parse_f32_or_default, parse_f64, parse_f64_or_default, parse_i8,
        parse_i8_or_default, parse_i8_with, parse_i16, parse_i16_or_default, parse_i16_with,
        parse_i32, parse_i32_or_default, parse_i32_with, parse_i64, parse_i64_or_default,
        parse_i64_with, parse_number,
    };
    pub use crate::{
        BigDecimal, CoerceError, CoerceResult, Grammar, Number, Numeric, NumericSource, is_blank,
        is_not_blank,
    };
}
