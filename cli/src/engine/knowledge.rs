//! # faqbot Knowledge Base
//!
//! File: cli/src/engine/knowledge.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed question/answer pairs the assistant knows about, plus the canned
//! fallback replies used when nothing matches well enough.
//!
//! The built-in data covers Thoughtful AI's automation agents (EVA, CAM, PHIL).
//! A TOML knowledge file can replace it at startup:
//!
//! ```toml
//! fallbacks = ["Sorry, I only know about our agents."]
//!
//! [[entries]]
//! question = "What does EVA do?"
//! answer = "EVA verifies eligibility."
//! ```
//!
//! Entry order matters: when two questions score the same, the earlier one wins.
//!
use crate::core::error::{FaqbotError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, info};

/// A single known question and its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
}

impl KnowledgeEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered entries plus fallback replies. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeBase {
    #[serde(default)]
    entries: Vec<KnowledgeEntry>,
    fallbacks: Vec<String>,
}

const DEFAULT_ENTRIES: [(&str, &str); 5] = [
    (
        "What does the eligibility verification agent (EVA) do?",
        "EVA automates the process of verifying a patient's eligibility and benefits information in real-time, eliminating manual data entry errors and reducing claim rejections.",
    ),
    (
        "What does the claims processing agent (CAM) do?",
        "CAM streamlines the submission and management of claims, improving accuracy, reducing manual intervention, and accelerating reimbursements.",
    ),
    (
        "How does the payment posting agent (PHIL) work?",
        "PHIL automates the posting of payments to patient accounts, ensuring fast, accurate reconciliation of payments and reducing administrative burden.",
    ),
    (
        "Tell me about Thoughtful AI's Agents.",
        "Thoughtful AI provides a suite of AI-powered automation agents designed to streamline healthcare processes. These include Eligibility Verification (EVA), Claims Processing (CAM), and Payment Posting (PHIL), among others.",
    ),
    (
        "What are the benefits of using Thoughtful AI's agents?",
        "Using Thoughtful AI's Agents can significantly reduce administrative costs, improve operational efficiency, and reduce errors in critical processes like claims management and payment posting.",
    ),
];

const DEFAULT_FALLBACKS: [&str; 4] = [
    "I'm here to help you learn about Thoughtful AI's automation agents. Could you ask me about EVA, CAM, PHIL, or our general services?",
    "I specialize in questions about Thoughtful AI's healthcare automation solutions. What would you like to know about our agents?",
    "I'm designed to help with questions about Thoughtful AI's services. Feel free to ask about our eligibility verification, claims processing, or payment posting agents!",
    "That's an interesting question! I'm focused on helping with Thoughtful AI-related inquiries. How can I assist you with our automation agents?",
];

impl KnowledgeBase {
    /// Builds a knowledge base from explicit data. No validation is applied;
    /// use `from_toml_str` or `load_from_path` for user-supplied data.
    pub fn new(entries: Vec<KnowledgeEntry>, fallbacks: Vec<String>) -> Self {
        Self { entries, fallbacks }
    }

    /// Entries in tie-break order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// # Parse Knowledge TOML (`from_toml_str`)
    ///
    /// Parses and validates a knowledge document. Fails if there are no
    /// fallbacks, or if any question, answer or fallback is blank.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let kb: KnowledgeBase =
            toml::from_str(content).context("Failed to parse knowledge base TOML")?;
        kb.validate()?;
        Ok(kb)
    }

    /// Reads and validates a knowledge file from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        info!("Loading knowledge base from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge file: {}", path.display()))?;
        let kb = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid knowledge file: {}", path.display()))?;
        debug!(
            "Loaded {} entries and {} fallbacks from {}",
            kb.entries.len(),
            kb.fallbacks.len(),
            path.display()
        );
        Ok(kb)
    }

    fn validate(&self) -> Result<()> {
        if self.fallbacks.is_empty() {
            return Err(FaqbotError::Knowledge(
                "at least one fallback response is required".to_string(),
            )
            .into());
        }
        if let Some(i) = self.fallbacks.iter().position(|f| f.trim().is_empty()) {
            return Err(FaqbotError::Knowledge(format!("fallback #{} is empty", i + 1)).into());
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.question.trim().is_empty() || entry.answer.trim().is_empty() {
                return Err(FaqbotError::Knowledge(format!(
                    "entry #{} must have a non-empty question and answer",
                    i + 1
                ))
                .into());
            }
        }
        Ok(())
    }
}

impl Default for KnowledgeBase {
    /// The built-in Thoughtful AI data set.
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(q, a)| KnowledgeEntry::new(*q, *a))
                .collect(),
            fallbacks: DEFAULT_FALLBACKS.iter().map(|f| f.to_string()).collect(),
        }
    }
}
