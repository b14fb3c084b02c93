//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn run_seedusers(dir: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_seedusers");
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("SEEDUSERS_SEED")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run seedusers binary")
}

#[test]
fn default_run_writes_fifty_users() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_seedusers(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.trim(), "Generated 50 unique users in users.csv");

    let text = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("username,allowedServices,defaultService"));
    assert_eq!(lines.count(), 50);
}

#[test]
fn seeded_runs_produce_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.csv", "b.csv"] {
        let output = run_seedusers(dir.path(), &["generate", "--seed", "42", "-o", name]);
        assert!(output.status.success());
    }

    let a = std::fs::read(dir.path().join("a.csv")).unwrap();
    let b = std::fs::read(dir.path().join("b.csv")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn seed_can_come_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_seedusers");
    for name in ["a.csv", "b.csv"] {
        let status = Command::new(bin)
            .args(["--count", "5", "--output", name])
            .current_dir(dir.path())
            .env("SEEDUSERS_SEED", "7")
            .status()
            .unwrap();
        assert!(status.success());
    }
    assert_eq!(
        std::fs::read(dir.path().join("a.csv")).unwrap(),
        std::fs::read(dir.path().join("b.csv")).unwrap()
    );
}

#[test]
fn zero_count_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_seedusers(dir.path(), &["generate", "--count", "0"]);
    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("users.csv")).unwrap(),
        "username,allowedServices,defaultService\r\n"
    );
}

#[test]
fn exhausted_username_space_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tiny.yaml"), "words: [apple, baker]\n").unwrap();

    let output = run_seedusers(dir.path(), &["generate", "--config", "tiny.yaml", "-n", "5"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("exhausted unique usernames after 0 of 5 users"));
    assert!(!dir.path().join("users.csv").exists());
}

#[test]
fn empty_service_list_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("none.json"), r#"{"services": []}"#).unwrap();

    let output = run_seedusers(dir.path(), &["generate", "--config", "none.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("service list is empty"));
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("blocker"), "file").unwrap();

    let output = run_seedusers(dir.path(), &["generate", "-o", "blocker/users.csv"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("failed to write"));
}

#[test]
fn check_accepts_generated_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_seedusers(dir.path(), &["generate", "--seed", "1"]).status.success());

    let output = run_seedusers(dir.path(), &["check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("50 users OK"));
}

#[test]
fn verbose_flag_before_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_seedusers(dir.path(), &["-v", "generate", "-n", "3", "--seed", "5"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("generating users"));

    let output = run_seedusers(dir.path(), &["-v", "check"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("3 users OK"));
}

#[test]
fn check_flags_edited_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("users.csv"),
        "username,allowedServices,defaultService\n\
         AppleBaker,gemini-direct,gemini-scaffolding\n",
    )
    .unwrap();

    let output = run_seedusers(dir.path(), &["check", "users.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("row 1 (AppleBaker)"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_seedusers(dir.path(), &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
