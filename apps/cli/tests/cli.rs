//! End-to-end runs of the `rill` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn rill() -> Command {
    let mut cmd = Command::cargo_bin("rill").unwrap();
    cmd.env_remove("RILL_DATE_PATTERN")
        .env_remove("RILL_CHARSET")
        .env_remove("RILL_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn int_parses_and_prints() {
    rill().args(["int", "42"]).assert().success().stdout("42\n");
    rill().args(["int", "--", "-7"]).assert().success().stdout("-7\n");
}

#[test]
fn blank_is_null_or_zero() {
    rill().args(["int", "  "]).assert().success().stdout("null\n");
    rill().arg("long").assert().success().stdout("null\n");
    rill()
        .args(["int", "--or-default", ""])
        .assert()
        .success()
        .stdout("0\n");
    rill()
        .args(["char", "--or-default"])
        .assert()
        .success()
        .stdout(" \n");
}

#[test]
fn invalid_numeral_fails_with_message() {
    rill()
        .args(["int", "abc"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn byte_grammar_selection() {
    rill().args(["byte", "0x1F"]).assert().success().stdout("31\n");
    rill().args(["byte", "010"]).assert().success().stdout("8\n");
    rill()
        .args(["byte", "--grammar", "strict", "0x1F"])
        .assert()
        .failure();
    rill()
        .args(["int", "--grammar", "decode", "#ff"])
        .assert()
        .success()
        .stdout("255\n");
}

#[test]
fn floats_and_decimals() {
    rill().args(["double", " 3.5 "]).assert().success().stdout("3.5\n");
    rill().args(["double", "NaN"]).assert().success().stdout("null\n");
    rill().args(["float", "1e2"]).assert().success().stdout("100\n");
    rill()
        .args(["decimal", "1.50"])
        .assert()
        .success()
        .stdout("1.50\n");
    rill()
        .args(["decimal", "123456789012345678901234567890"])
        .assert()
        .success()
        .stdout("123456789012345678901234567890\n");
    rill()
        .args(["decimal", "12,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"12,5\""));
}

#[test]
fn bool_values() {
    rill().args(["bool", "TRUE"]).assert().success().stdout("true\n");
    rill().args(["bool", "1"]).assert().success().stdout("true\n");
    rill().args(["bool", "yes"]).assert().success().stdout("false\n");
}

#[test]
fn date_parse_and_format() {
    rill()
        .args(["date", "2020-01-02T03:04:05000Z", "-p", "yyyy-MM-dd'T'HH:mm:ss'000Z'"])
        .assert()
        .success()
        .stdout("2020-01-02T03:04:05.000Z\n");
    rill()
        .args(["date", "2020-13-01", "-p", "yyyy-MM-dd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2020-13-01"));
    rill()
        .args(["date", "--lenient", "2020-13-01", "-p", "yyyy-MM-dd"])
        .assert()
        .success()
        .stdout("2021-01-01T00:00:00.000Z\n");
    rill()
        .args(["format-date", "2020-03-07T15:04:05+01:00", "-p", "dd/MM/yyyy HH:mm"])
        .assert()
        .success()
        .stdout("07/03/2020 14:04\n");
}

#[test]
fn default_date_pattern_from_flag_and_env() {
    rill()
        .args(["date", "09-08-2022"])
        .assert()
        .success()
        .stdout("2022-08-09T00:00:00.000Z\n");
    rill()
        .args(["--date-pattern", "yyyy/MM/dd", "date", "2022/08/09"])
        .assert()
        .success()
        .stdout("2022-08-09T00:00:00.000Z\n");
    rill()
        .env("RILL_DATE_PATTERN", "yyyyMMdd")
        .args(["date", "20220809"])
        .assert()
        .success()
        .stdout("2022-08-09T00:00:00.000Z\n");
}

#[test]
fn number_and_list() {
    rill()
        .args(["number", "1.234.567,89", "--thousands", ".", "--decimal", ","])
        .assert()
        .success()
        .stdout("1234567.89\n");
    rill()
        .args(["list", "[a;b;;d]", "-s", ";"])
        .assert()
        .success()
        .stdout("[\"a\",\"b\",\"\",\"d\"]\n");
    rill()
        .args(["list", "abc", "-s", ";"])
        .assert()
        .success()
        .stdout("[\"abc\"]\n");
    rill()
        .args(["list", "", "-s", ";"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn decode_uses_charset() {
    rill()
        .args(["--charset", "latin1", "decode"])
        .write_stdin(vec![0x63, 0x61, 0x66, 0xE9])
        .assert()
        .success()
        .stdout("café\n");
    rill()
        .arg("decode")
        .write_stdin("plain")
        .assert()
        .success()
        .stdout("plain\n");
    rill()
        .args(["--charset", "ebcdic", "decode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ebcdic"));
}
