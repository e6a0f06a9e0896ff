//! # faqbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and uses what it needs.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

/// # Get faqbot Command (`faqbot_cmd`)
///
/// An `assert_cmd::Command` for the compiled `faqbot` binary.
///
/// ## Panics
/// Panics if the `faqbot` binary cannot be found via `Command::cargo_bin`.
pub fn faqbot_cmd() -> Command {
    Command::cargo_bin("faqbot").expect("Failed to find faqbot binary for testing")
}

/// # Get Isolated faqbot Command (`isolated_cmd`)
///
/// A `faqbot` command that ignores any user or project configuration on the
/// machine running the tests: it points `--config` at an empty file in a
/// fresh temporary directory and disables the response delay.
///
/// The returned `TempDir` must be kept alive while the command runs.
pub fn isolated_cmd() -> (Command, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("faqbot.toml");
    std::fs::write(&config_path, "").expect("Failed to write empty config");

    let mut cmd = faqbot_cmd();
    cmd.current_dir(dir.path())
        .env_remove("FAQBOT_KNOWLEDGE")
        .env("FAQBOT_CONFIG", &config_path)
        .env("FAQBOT_DELAY_MS", "0");
    (cmd, dir)
}
