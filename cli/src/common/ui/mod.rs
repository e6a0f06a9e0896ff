//! # faqbot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal rendering of chat messages, shared by `faqbot ask` and
//! `faqbot chat`. Every `ResponseRecord` is rendered the same way whether or
//! not it succeeded; only the speaker label differs.
//!
//! ```text
//! [09:30] You: What does EVA do?
//! [09:30] Thoughtful AI Assistant: EVA automates the process of ...
//! ```
//!
use crate::engine::ResponseRecord;
use chrono::{DateTime, Local};

/// Display name for assistant messages.
pub const AGENT_LABEL: &str = "Thoughtful AI Assistant";
/// Display name for user messages.
pub const USER_LABEL: &str = "You";

/// Formats a timestamp as `HH:MM`.
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Renders one message as a single terminal line.
pub fn render_record(record: &ResponseRecord) -> String {
    let speaker = if record.is_from_agent {
        AGENT_LABEL
    } else {
        USER_LABEL
    };
    format!(
        "[{}] {}: {}",
        format_timestamp(&record.timestamp),
        speaker,
        record.message
    )
}
