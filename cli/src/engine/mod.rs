//! # faqbot Matching Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The question-answering core. Everything here is free of I/O apart from the
//! dispatcher's optional response delay.
//!
//! ## Architecture
//!
//! - `knowledge`: known question/answer pairs and fallback replies.
//! - `text`: normalization, Jaccard similarity and key-term boosting.
//! - `matcher`: picks the best-scoring knowledge entry.
//! - `dispatcher`: validation, threshold decision and error-to-message mapping.
//!
//! Callers only need the `Dispatcher`; the lower layers are public so they can
//! be tested and reused on their own.
//!
pub mod dispatcher;
pub mod knowledge;
pub mod matcher;
pub mod text;

pub use dispatcher::{
    Clock, DispatchError, Dispatcher, FallbackPicker, RandomPicker, ResponseRecord, SystemClock,
};
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use matcher::{find_best_match, MatchResult};
