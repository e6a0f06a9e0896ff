//! # faqbot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by the commands:
//! - `config`: layered configuration loading, merging and validation
//! - `error`: error types and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use faqbot::core::config; // For loading configuration
//! use faqbot::core::error::{FaqbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
