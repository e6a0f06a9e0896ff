//! # faqbot Samples Command
//!
//! File: cli/src/commands/samples.rs
//! Author: Christi Mahu
//!
//! Lists example questions that the built-in knowledge base answers.
//!
use crate::core::error::Result;
use clap::Parser;

/// Example questions offered to new users.
pub const SAMPLE_QUESTIONS: [&str; 4] = [
    "What does EVA do?",
    "Tell me about CAM",
    "How does PHIL work?",
    "What are the benefits of using Thoughtful AI's agents?",
];

/// Topics the assistant covers, shown alongside the samples.
pub const TOPICS: [&str; 4] = [
    "EVA (Eligibility Verification)",
    "CAM (Claims Processing)",
    "PHIL (Payment Posting)",
    "General Thoughtful AI Services",
];

#[derive(Parser, Debug)]
pub struct SamplesArgs {}

/// Numbered sample list, as shown by `faqbot samples` and `/samples`.
pub fn format_samples() -> String {
    SAMPLE_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| format!("  {}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle_samples(_args: SamplesArgs) -> Result<()> {
    println!("Available topics:");
    for topic in TOPICS {
        println!("  - {}", topic);
    }
    println!("\nSample questions:");
    println!("{}", format_samples());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_samples_is_numbered() {
        let text = format_samples();
        assert!(text.starts_with("  1. What does EVA do?"));
        assert!(text.contains("  4. What are the benefits"));
        assert_eq!(text.lines().count(), SAMPLE_QUESTIONS.len());
    }
}
