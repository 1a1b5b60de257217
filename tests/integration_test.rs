//! Integration tests for the cash register CLI.
//!
//! These tests run the actual binary against the files in `tests/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_register(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("cash-register").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_sample_a_matches_expected_output() {
    let output = run_register(&[&test_data_path("sample_a.txt")]);
    let expected = fs::read_to_string(test_data_path("expected_a.txt")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_sample_a_with_config() {
    let output = run_register(&[
        &test_data_path("sample_a.txt"),
        "--config",
        &test_data_path("config_divisor_97.json"),
    ]);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "3 quarters,1 dime,3 pennies");
    assert_eq!(lines[1], "3 pennies");
    assert_eq!(lines[2], "1 dollar,2 quarters,1 dime,1 nickel,2 pennies");
}

#[test]
fn test_sample_b_blank_lines_and_crlf() {
    let output = run_register(&[
        &test_data_path("sample_b_blank_lines.txt"),
        "--config",
        &test_data_path("config_divisor_97.json"),
    ]);

    assert_eq!(output, "3 quarters,1 dime,3 pennies\n\n3 pennies\nno change\n");
}

#[test]
fn test_sample_c_underpayment_fails_without_output() {
    let mut cmd = Command::cargo_bin("cash-register").unwrap();
    cmd.arg(test_data_path("sample_c_underpaid.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Line 2: paid amount is less than owed amount",
        ));
}

#[test]
fn test_sample_d_malformed_amount() {
    let mut cmd = Command::cargo_bin("cash-register").unwrap();
    cmd.arg(test_data_path("sample_d_malformed.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2: invalid amount \"1.2.3\""));
}

#[test]
fn test_sample_e_exchange_rate_conversion() {
    let output = run_register(&[
        &test_data_path("sample_e_foreign.txt"),
        "--config",
        &test_data_path("config_half_rate.json"),
    ]);

    assert_eq!(output, "2 quarters\n1 quarter\n\n");
}

#[test]
fn test_report_output() {
    let output = run_register(&[
        &test_data_path("sample_a.txt"),
        "--config",
        &test_data_path("config_divisor_97.json"),
        "--report",
    ]);

    assert!(output.starts_with("line,owed,paid,change,random_mode,breakdown"));
    assert!(output.contains("1,2.12,3.00,0.88,false,\"3 quarters,1 dime,3 pennies\""));
    assert!(output.contains("2,1.97,2.00,0.03,false,3 pennies"));
    assert!(output.contains("4,,,,,"));
}

#[test]
fn test_random_mode_is_reported() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    writeln!(input, "1.01,2.00").unwrap();

    let output = run_register(&[
        input.path().to_str().unwrap(),
        "--report",
    ]);

    let row = output.lines().nth(1).unwrap();
    assert!(row.starts_with("1,1.01,2.00,0.99,true,"));
}

#[test]
fn test_invalid_denomination_config() {
    let mut cmd = Command::cargo_bin("cash-register").unwrap();
    cmd.arg(test_data_path("sample_a.txt"))
        .arg("--config")
        .arg(test_data_path("config_no_unit.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unit"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("cash-register").unwrap();
    cmd.arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("cash-register").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_config_flag_without_path() {
    let mut cmd = Command::cargo_bin("cash-register").unwrap();
    cmd.arg(test_data_path("sample_a.txt"))
        .arg("--config")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing value for --config"))
        .stderr(predicate::str::contains("Missing input file").not());
}

#[test]
fn test_unknown_flag_error() {
    let mut cmd = Command::cargo_bin("cash-register").unwrap();
    cmd.arg(test_data_path("sample_a.txt"))
        .arg("--verbose")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown argument: --verbose"));
}
