//! # faqbot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behaviour of the `faqbot` binary: standard flags, the `samples`
//! command and configuration errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    faqbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ask")
                .and(predicate::str::contains("chat"))
                .and(predicate::str::contains("srv")),
        );
}

#[test]
fn test_version_flag() {
    faqbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_samples_command() {
    faqbot_cmd()
        .arg("samples")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. What does EVA do?")
                .and(predicate::str::contains("PHIL (Payment Posting)")),
        );
}

#[test]
fn test_missing_config_file_fails() {
    faqbot_cmd()
        .args(["--config", "/no/such/faqbot.toml", "ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

#[test]
fn test_missing_knowledge_file_fails() {
    let (mut cmd, _dir) = isolated_cmd();
    cmd.args(["--knowledge", "/no/such/kb.toml", "ask", "What does EVA do?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
