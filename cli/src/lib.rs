//! # faqbot Library Root
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Exposes the matching engine and the command modules so the `faqbot` binary
//! and the integration tests under `tests/` share one implementation.
//!
//! - `engine`: knowledge base, text scoring, matcher, dispatcher
//! - `commands`: `ask`, `chat`, `samples`, `srv`
//! - `common`: terminal rendering helpers
//! - `core`: configuration and error types
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod engine;
