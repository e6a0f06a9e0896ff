//! # faqbot Best-Match Selection
//!
//! File: cli/src/engine/matcher.rs
//! Author: Christi Mahu
//!
//! Scores every knowledge entry against the user's input and keeps the best.
//!
use super::knowledge::{KnowledgeBase, KnowledgeEntry};
use super::text::boosted_similarity;
use tracing::trace;

/// Outcome of one `find_best_match` call. `entry` borrows from the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    pub entry: Option<&'a KnowledgeEntry>,
    pub score: f64,
}

impl MatchResult<'static> {
    /// The empty result: no entry, score `0.0`.
    pub const NONE: Self = MatchResult {
        entry: None,
        score: 0.0,
    };
}

/// # Find Best Match (`find_best_match`)
///
/// Returns the entry with the highest `boosted_similarity` to `user_input`.
///
/// Blank input returns `MatchResult::NONE` without scoring anything. Entries
/// are visited in order and only a strictly higher score replaces the current
/// best, so the earliest of several equal maxima wins. An entry has to score
/// above `0.0` to be selected at all.
pub fn find_best_match<'a>(kb: &'a KnowledgeBase, user_input: &str) -> MatchResult<'a> {
    if user_input.trim().is_empty() {
        return MatchResult::NONE;
    }

    let mut best = MatchResult::NONE;
    for entry in kb.entries() {
        let score = boosted_similarity(user_input, &entry.question);
        trace!("score {:.4} for {:?}", score, entry.question);
        if score > best.score {
            best = MatchResult {
                entry: Some(entry),
                score,
            };
        }
    }
    best
}
