//! CLI integration tests for quartet
//!
//! Tests the binary as a user would interact with it.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn quartet() -> Command {
    Command::cargo_bin("quartet").unwrap()
}

#[test]
fn test_help() {
    quartet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base64 encode or decode files"));
}

#[test]
fn test_version() {
    quartet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quartet"));
}

#[test]
fn test_missing_arguments_exit_one() {
    quartet().assert().failure().code(1);
    quartet().args(["encode", "-"]).assert().failure().code(1);
}

#[test]
fn test_unknown_subcommand_exit_one() {
    quartet()
        .args(["transcode", "-", "-"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_encode_stdin_to_stdout() {
    quartet()
        .args(["encode", "-", "-"])
        .write_stdin("Man")
        .assert()
        .success()
        .stdout("TWFu");
}

#[test]
fn test_encode_stdout_has_no_completion_message() {
    quartet()
        .args(["encode", "-", "-"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=");
}

#[test]
fn test_decode_stdin_to_stdout() {
    quartet()
        .args(["decode", "-", "-"])
        .write_stdin("TWFu")
        .assert()
        .success()
        .stdout("Man");
}

#[test]
fn test_decode_accepts_wrapped_input() {
    quartet()
        .args(["decode", "-", "-"])
        .write_stdin("aGVsbG8g\nd29ybGQ=\n")
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_encode_wrap_flag() {
    quartet()
        .args(["encode", "-", "-", "--wrap", "4"])
        .write_stdin("Manx")
        .assert()
        .success()
        .stdout("TWFu\neA==\n");
}

#[test]
fn test_encode_empty_input() {
    quartet()
        .args(["encode", "-", "-", "--wrap", "76"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_encode_to_file_prints_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.b64");
    fs::write(&input, b"M").unwrap();

    quartet()
        .args([
            "encode",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoding finished"));

    assert_eq!(fs::read(&output).unwrap(), b"TQ==");
}

#[test]
fn test_decode_to_file_prints_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.b64");
    let output = dir.path().join("out.bin");
    fs::write(&input, b"TWE=").unwrap();

    quartet()
        .args([
            "decode",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Decoding finished"));

    assert_eq!(fs::read(&output).unwrap(), b"Ma");
}

#[test]
fn test_roundtrip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("data.bin");
    let encoded = dir.path().join("data.b64");
    let restored = dir.path().join("restored.bin");
    let data: Vec<u8> = (0..4096u32).map(|i| (i % 256) as u8).collect();
    fs::write(&original, &data).unwrap();

    quartet()
        .args([
            "encode",
            original.to_str().unwrap(),
            encoded.to_str().unwrap(),
            "--wrap",
            "76",
        ])
        .assert()
        .success();

    quartet()
        .args([
            "decode",
            encoded.to_str().unwrap(),
            restored.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn test_encode_missing_input_file() {
    quartet()
        .args(["encode", "/no/such/file", "-"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot open input file"));
}

#[test]
fn test_decode_invalid_symbol_exit_one() {
    quartet()
        .args(["decode", "-", "-"])
        .write_stdin("TWF!")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid symbol"));
}

#[test]
fn test_decode_malformed_length_exit_one() {
    quartet()
        .args(["decode", "-", "-"])
        .write_stdin("abc")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a multiple of 4"));
}

#[test]
fn test_decode_failure_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.b64");
    let output = dir.path().join("out.bin");
    fs::write(&input, b"@@@@").unwrap();

    quartet()
        .args([
            "decode",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid symbol"));

    assert!(!output.exists());
}

#[test]
fn test_decode_failure_preserves_existing_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.b64");
    let output = dir.path().join("out.bin");
    fs::write(&input, b"abc").unwrap();
    fs::write(&output, b"keep me").unwrap();

    quartet()
        .args([
            "decode",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1);

    assert_eq!(fs::read(&output).unwrap(), b"keep me");
}

#[test]
fn test_wrap_not_recognized_for_decode() {
    quartet()
        .args(["decode", "-", "-", "--wrap", "76"])
        .write_stdin("TWFu")
        .assert()
        .failure()
        .code(1);
}
