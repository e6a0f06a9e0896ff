//! # faqbot Text Scoring
//!
//! File: cli/src/engine/text.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Pure text functions used by the matcher:
//! - `normalize`: lower-cases, strips punctuation and drops short tokens.
//! - `similarity`: Jaccard overlap of the unique normalized tokens.
//! - `boosted_similarity`: `similarity` plus a fixed bonus for each domain key
//!   term found in both strings.
//!
//! ## Key-term boosting
//!
//! The boost looks for key terms as *substrings* of the raw lower-cased text,
//! not as tokens. A term embedded in a longer word (`"evaluate"` contains
//! `"eva"`) therefore still earns the bonus. Existing answers depend on this,
//! so it is kept as-is.
//!
use std::collections::HashSet;

/// Domain vocabulary that earns a bonus when present in both input and question.
pub const KEY_TERMS: [&str; 9] = [
    "eva",
    "cam",
    "phil",
    "agent",
    "eligibility",
    "claims",
    "payment",
    "benefits",
    "thoughtful",
];

/// Score added per key term shared by both strings.
pub const KEY_TERM_BOOST: f64 = 0.2;

/// Tokens with this many characters or fewer are discarded.
const MIN_TOKEN_CHARS: usize = 2;

/// # Normalize Text (`normalize`)
///
/// Splits `text` into lower-case tokens. Any character that is not a letter,
/// digit or whitespace becomes a space, so `"agent(EVA)"` yields `agent` and
/// `eva` rather than one merged word. Tokens of two characters or fewer are
/// dropped. Order is preserved and duplicates are kept.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// # Jaccard Similarity (`similarity`)
///
/// Returns `|A ∩ B| / |A ∪ B|` over the unique normalized tokens of `a` and `b`.
/// Returns `0.0` when either side has no tokens.
pub fn similarity(a: &str, b: &str) -> f64 {
    let words_a: HashSet<String> = normalize(a).into_iter().collect();
    let words_b: HashSet<String> = normalize(b).into_iter().collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();

    intersection as f64 / union as f64
}

/// # Boosted Similarity (`boosted_similarity`)
///
/// `similarity(user_input, question)` plus `KEY_TERM_BOOST` for every entry of
/// `KEY_TERMS` contained in both lower-cased raw strings, clamped to `1.0`.
pub fn boosted_similarity(user_input: &str, question: &str) -> f64 {
    let base = similarity(user_input, question);

    let user_lower = user_input.to_lowercase();
    let question_lower = question.to_lowercase();

    // Boost is summed on its own, then added to `base` once.
    let mut boost = 0.0;
    for term in KEY_TERMS {
        if user_lower.contains(term) && question_lower.contains(term) {
            boost += KEY_TERM_BOOST;
        }
    }

    (base + boost).min(1.0)
}
