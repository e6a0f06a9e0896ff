//! # faqbot Chat Session
//!
//! File: cli/src/commands/chat/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! In-memory history for one interactive conversation. The dispatcher keeps no
//! history of its own, so the session stores every record it is handed and
//! counts the messages exchanged.
//!
//! Nothing is persisted; dropping the session forgets the conversation.
//!
use crate::commands::exchange;
use crate::engine::{Dispatcher, ResponseRecord};
use tracing::debug;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Thoughtful AI support assistant. I can help you learn about our automation agents like EVA (Eligibility Verification), CAM (Claims Processing), and PHIL (Payment Posting). What would you like to know?";

pub const CLEARED_MESSAGE: &str = "Chat cleared! I'm here to help you learn about Thoughtful AI's automation agents. What would you like to know?";

/// Conversation history bound to a dispatcher.
#[derive(Debug)]
pub struct ChatSession<'d> {
    dispatcher: &'d Dispatcher,
    messages: Vec<ResponseRecord>,
    message_count: usize,
}

impl<'d> ChatSession<'d> {
    /// Starts a session, optionally opening with the welcome message.
    /// The welcome message is not counted as an exchanged message.
    pub fn new(dispatcher: &'d Dispatcher, show_welcome: bool) -> Self {
        let mut session = Self {
            dispatcher,
            messages: Vec::new(),
            message_count: 0,
        };
        if show_welcome {
            let welcome = session.agent_notice(WELCOME_MESSAGE);
            session.messages.push(welcome);
        }
        session
    }

    pub fn history(&self) -> &[ResponseRecord] {
        &self.messages
    }

    /// Number of user and assistant messages exchanged since the last clear.
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// # Submit Input (`submit`)
    ///
    /// Records the user's message and the assistant's reply, returning the two
    /// new records. Blank input is ignored and returns an empty slice.
    pub async fn submit(&mut self, input: &str) -> &[ResponseRecord] {
        if input.trim().is_empty() {
            debug!("Ignoring blank chat input");
            return &[];
        }
        let ex = exchange(self.dispatcher, input).await;
        let start = self.messages.len();
        self.messages.push(ex.user);
        self.messages.push(ex.agent);
        self.message_count += 2;
        &self.messages[start..]
    }

    /// Forgets the conversation and leaves a single "chat cleared" notice.
    pub fn clear(&mut self) -> &ResponseRecord {
        self.messages.clear();
        self.message_count = 0;
        let notice = self.agent_notice(CLEARED_MESSAGE);
        self.messages.push(notice);
        &self.messages[0]
    }

    /// Assistant notice stamped by the dispatcher's clock.
    fn agent_notice(&self, message: &str) -> ResponseRecord {
        ResponseRecord {
            message: message.to_string(),
            is_from_agent: true,
            timestamp: self.dispatcher.now(),
            success: true,
        }
    }
}
