//! # faqbot Response Dispatcher
//!
//! File: cli/src/engine/dispatcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `Dispatcher` turns raw user text into a `ResponseRecord`. It is the only
//! entry point callers (the `ask`/`chat` commands and the `srv` HTTP handler)
//! need:
//!
//! - `create_user_message`: echoes what the user typed, unchanged.
//! - `process_user_input`: validates, matches, and answers.
//!
//! ## Flow
//!
//! 1. Validate: blank input and input longer than `MAX_INPUT_CHARS` (after
//!    trimming) are rejected with a corrective message.
//! 2. Match the trimmed input with `matcher::find_best_match`.
//! 3. Wait for the configured response delay.
//! 4. Reply with the matched answer if its score is above
//!    `SIMILARITY_THRESHOLD`, otherwise with a fallback picked by the
//!    `FallbackPicker`.
//!
//! Failures never escape: every call produces a record, and `success: false`
//! marks validation or internal errors.
//!
//! ## Examples
//!
//! ```rust,no_run
//! # async fn demo() {
//! use faqbot::engine::{Dispatcher, KnowledgeBase};
//! use std::time::Duration;
//!
//! let dispatcher = Dispatcher::new(KnowledgeBase::default()).with_delay(Duration::ZERO);
//! let echo = dispatcher.create_user_message("What does EVA do?");
//! let reply = dispatcher.process_user_input("What does EVA do?").await;
//! assert!(reply.success);
//! # }
//! ```
//!
use super::knowledge::KnowledgeBase;
use super::matcher::find_best_match;
use chrono::{DateTime, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// A match must score strictly above this to be used.
pub const SIMILARITY_THRESHOLD: f64 = 0.1;

/// Maximum length of a question, in characters, after trimming.
pub const MAX_INPUT_CHARS: usize = 500;

/// Default pause before a processed reply is returned.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(500);

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a valid question.";
pub const INPUT_TOO_LONG_MESSAGE: &str = "Please keep your question under 500 characters.";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "I encountered an error processing your request. Please try again.";

/// One chat message, from the user or from the assistant.
///
/// Serialized in camelCase (`isFromAgent`) for the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub message: String,
    pub is_from_agent: bool,
    pub timestamp: DateTime<Local>,
    pub success: bool,
}

/// Why a question could not be answered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Rejected by validation. The message is shown to the user as-is.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Anything else. The detail is logged, never shown.
    #[error("Internal dispatch error: {0}")]
    Internal(String),
}

impl DispatchError {
    /// Text placed in the failed `ResponseRecord`.
    pub fn user_message(&self) -> &'static str {
        match self {
            DispatchError::InvalidInput(message) => *message,
            DispatchError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

/// Source of record timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Chooses which fallback reply to use.
pub trait FallbackPicker: Send + Sync {
    /// Returns an index in `0..len`, or `None` if no choice can be made.
    fn pick(&self, len: usize) -> Option<usize>;
}

/// Uniform random choice.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl FallbackPicker for RandomPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..len))
    }
}

/// # Validate Input (`validate_input`)
///
/// Returns the trimmed input, or the `InvalidInput` error describing why it
/// cannot be processed.
pub fn validate_input(user_input: &str) -> Result<&str, DispatchError> {
    let trimmed = user_input.trim();
    if trimmed.is_empty() {
        return Err(DispatchError::InvalidInput(EMPTY_INPUT_MESSAGE));
    }
    if trimmed.chars().count() > MAX_INPUT_CHARS {
        return Err(DispatchError::InvalidInput(INPUT_TOO_LONG_MESSAGE));
    }
    Ok(trimmed)
}

/// Answers questions from a `KnowledgeBase`. Holds no per-conversation state.
pub struct Dispatcher {
    knowledge: KnowledgeBase,
    clock: Box<dyn Clock>,
    picker: Box<dyn FallbackPicker>,
    delay: Duration,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("entries", &self.knowledge.entries().len())
            .field("fallbacks", &self.knowledge.fallbacks().len())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Dispatcher with the system clock, random fallbacks and the default delay.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            clock: Box::new(SystemClock),
            picker: Box::new(RandomPicker),
            delay: DEFAULT_RESPONSE_DELAY,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_picker(mut self, picker: impl FallbackPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Sets the pause applied to validated questions. `Duration::ZERO` disables it.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current time according to the dispatcher's clock.
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// # Create User Message (`create_user_message`)
    ///
    /// Wraps `user_input` verbatim as a user-authored, successful record.
    pub fn create_user_message(&self, user_input: &str) -> ResponseRecord {
        ResponseRecord {
            message: user_input.to_string(),
            is_from_agent: false,
            timestamp: self.clock.now(),
            success: true,
        }
    }

    /// # Process User Input (`process_user_input`)
    ///
    /// Produces the assistant's reply to `user_input`. Never fails: errors are
    /// reported through `success: false` and a user-facing message.
    pub async fn process_user_input(&self, user_input: &str) -> ResponseRecord {
        let outcome = match validate_input(user_input) {
            Ok(trimmed) => {
                let reply = self.answer(trimmed);
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
                reply
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(message) => self.agent_record(message, true),
            Err(e) => {
                match &e {
                    DispatchError::InvalidInput(reason) => info!("Rejected input: {}", reason),
                    DispatchError::Internal(_) => error!("Failed to process input: {}", e),
                }
                self.agent_record(e.user_message().to_string(), false)
            }
        }
    }

    fn answer(&self, trimmed: &str) -> Result<String, DispatchError> {
        let best = find_best_match(&self.knowledge, trimmed);
        match best.entry {
            Some(entry) if best.score > SIMILARITY_THRESHOLD => {
                debug!("Matched {:?} with score {:.3}", entry.question, best.score);
                Ok(entry.answer.clone())
            }
            _ => {
                debug!(
                    "No confident match (best score {:.3}), using a fallback reply",
                    best.score
                );
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> Result<String, DispatchError> {
        let fallbacks = self.knowledge.fallbacks();
        self.picker
            .pick(fallbacks.len())
            .and_then(|i| fallbacks.get(i))
            .cloned()
            .ok_or_else(|| {
                DispatchError::Internal(format!(
                    "no usable fallback among {} configured",
                    fallbacks.len()
                ))
            })
    }

    fn agent_record(&self, message: String, success: bool) -> ResponseRecord {
        ResponseRecord {
            message,
            is_from_agent: true,
            timestamp: self.clock.now(),
            success,
        }
    }
}
