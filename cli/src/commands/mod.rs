//! # faqbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The presentation shell around the matching engine. Each command is a thin
//! caller of the two dispatcher operations (`create_user_message` then
//! `process_user_input`), differing only in how input arrives and output is
//! shown.
//!
//! ## Commands
//!
//! - `ask`: answer one question given on the command line
//! - `chat`: interactive session with history
//! - `samples`: list sample questions
//! - `srv`: JSON HTTP endpoint
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::engine::{Dispatcher, KnowledgeBase, ResponseRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One-shot question command.
pub mod ask;
/// Interactive chat session command.
pub mod chat;
/// Sample question listing.
pub mod samples;
/// HTTP server command.
pub mod srv;

/// A user message and the assistant's reply to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub user: ResponseRecord,
    pub agent: ResponseRecord,
}

/// Echoes `input` and asks the dispatcher to answer it.
pub async fn exchange(dispatcher: &Dispatcher, input: &str) -> Exchange {
    let user = dispatcher.create_user_message(input);
    let agent = dispatcher.process_user_input(input).await;
    Exchange { user, agent }
}

/// # Build Dispatcher (`build_dispatcher`)
///
/// Creates the dispatcher described by `config`: knowledge from the configured
/// file (or the built-in data) and the configured response delay.
pub fn build_dispatcher(config: &Config) -> Result<Dispatcher> {
    let knowledge = match &config.knowledge.path {
        Some(path) => KnowledgeBase::load_from_path(Path::new(path))?,
        None => KnowledgeBase::default(),
    };
    info!(
        "Knowledge base ready: {} entries, {} fallbacks",
        knowledge.entries().len(),
        knowledge.fallbacks().len()
    );
    Ok(Dispatcher::new(knowledge).with_delay(config.dispatcher.response_delay()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DispatcherConfig, KnowledgeConfig};
    use std::time::Duration;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_exchange_echoes_then_answers() {
        let dispatcher = Dispatcher::new(KnowledgeBase::default()).with_delay(Duration::ZERO);
        let ex = exchange(&dispatcher, "How does PHIL work?").await;
        assert_eq!(ex.user.message, "How does PHIL work?");
        assert!(!ex.user.is_from_agent);
        assert!(ex.agent.is_from_agent);
        assert!(ex.agent.message.starts_with("PHIL automates"));
    }

    #[test]
    fn test_build_dispatcher_defaults() {
        let dispatcher = build_dispatcher(&Config::default()).unwrap();
        assert_eq!(dispatcher.knowledge(), &KnowledgeBase::default());
        assert_eq!(dispatcher.delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_build_dispatcher_from_knowledge_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kb.toml");
        std::fs::write(
            &path,
            "fallbacks = [\"fb\"]\n[[entries]]\nquestion = \"opening hours\"\nanswer = \"9 to 5\"\n",
        )
        .unwrap();
        let config = Config {
            dispatcher: DispatcherConfig {
                response_delay_ms: 0,
            },
            knowledge: KnowledgeConfig {
                path: Some(path.to_string_lossy().into_owned()),
            },
            ..Default::default()
        };

        let dispatcher = build_dispatcher(&config).unwrap();
        assert_eq!(dispatcher.knowledge().entries().len(), 1);
        assert_eq!(dispatcher.delay(), Duration::ZERO);
    }
}
