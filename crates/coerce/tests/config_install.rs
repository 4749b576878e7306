//! Installed configuration changes the blank-pattern default and the byte
//! buffer charset.
//!
//! Kept in its own test binary, and in a single test, because the
//! configuration is process-wide.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rill_coerce::config::{self, Charset, CoerceConfig};
use rill_coerce::temporal::{format_date, parse_date};
use rill_coerce::text::render::bytes_to_string;

#[test]
fn installed_config_is_used_and_reset() {
    let latin1 = [0x63_u8, 0x61, 0x66, 0xE9];
    let instant = Utc.with_ymd_and_hms(2022, 8, 9, 0, 0, 0).unwrap();

    // defaults
    assert_eq!(config::current().default_date_pattern, "dd-MM-yyyy");
    assert_eq!(parse_date("09-08-2022", None).unwrap(), Some(instant));
    assert_eq!(bytes_to_string(Some(&latin1)).as_deref(), Some("caf\u{FFFD}"));

    config::install(
        CoerceConfig::default()
            .with_default_date_pattern("yyyy/MM/dd")
            .with_charset(Charset::Latin1),
    );

    assert_eq!(parse_date("2022/08/09", "").unwrap(), Some(instant));
    assert!(parse_date("09-08-2022", None).is_err());
    assert_eq!(
        format_date(Some(instant), None).unwrap().as_deref(),
        Some("2022/08/09")
    );
    assert_eq!(bytes_to_string(Some(&latin1)).as_deref(), Some("café"));
    // an explicit pattern is unaffected
    assert_eq!(parse_date("09-08-2022", "dd-MM-yyyy").unwrap(), Some(instant));

    config::reset();
    assert_eq!(*config::current(), CoerceConfig::default());
    assert_eq!(parse_date("09-08-2022", " ").unwrap(), Some(instant));
}
