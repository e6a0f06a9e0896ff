//! # faqbot CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives `faqbot chat` through stdin and checks the transcript.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_session_transcript() {
    let (mut cmd, _dir) = isolated_cmd();
    cmd.arg("chat")
        .write_stdin("What does EVA do?\n/history\nbye\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hello! I'm your Thoughtful AI support assistant.")
                .and(predicate::str::contains("You: What does EVA do?"))
                .and(predicate::str::contains("EVA automates"))
                .and(predicate::str::contains("(2 messages)"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn test_chat_without_welcome() {
    let (mut cmd, _dir) = isolated_cmd();
    cmd.args(["chat", "--no-welcome"])
        .write_stdin("/clear\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hello! I'm your Thoughtful AI support assistant.")
                .not()
                .and(predicate::str::contains("Chat cleared!")),
        );
}
