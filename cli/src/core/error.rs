//! # faqbot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Error types for the application shell: configuration loading and knowledge
//! file handling. The matching engine has its own `DispatchError`, which never
//! leaves the dispatcher (it is turned into a failed `ResponseRecord`).
//!
//! ## Architecture
//!
//! - `FaqbotError`: a `thiserror` enum for the failures we raise ourselves.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so callers can add context.
//!
//! ## Examples
//!
//! ```rust
//! use anyhow::Context;
//! use faqbot::core::error::{FaqbotError, Result};
//!
//! fn check(path: &std::path::Path) -> Result<()> {
//!     if !path.is_file() {
//!         return Err(FaqbotError::Config(format!("Not a file: {}", path.display())).into());
//!     }
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read {}", path.display()))?;
//!     Ok(())
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the faqbot application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaqbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = FaqbotError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        let kb_err = FaqbotError::Knowledge("entry #2 is empty".into());
        assert_eq!(kb_err.to_string(), "Knowledge base error: entry #2 is empty");
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = FaqbotError::Knowledge("no fallbacks".into()).into();
        let err = err.context("Invalid knowledge file: kb.toml");
        assert_eq!(
            err.downcast_ref::<FaqbotError>(),
            Some(&FaqbotError::Knowledge("no fallbacks".into()))
        );
    }
}
