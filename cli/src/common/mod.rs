//! # faqbot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers used by more than one command, kept apart from command
//! logic (`commands::`), the matching engine (`engine::`) and core
//! infrastructure (`core::`).
//!
//! - **`ui`**: terminal rendering of chat messages.
//!

/// Utilities for terminal output of chat messages.
pub mod ui;
