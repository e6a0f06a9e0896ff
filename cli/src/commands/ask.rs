//! # faqbot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Answers a single question and exits. The question is echoed first, then the
//! assistant's reply, exactly as they would appear in a chat session.
//!
//! ```bash
//! faqbot ask What does EVA do?
//! faqbot --delay-ms 0 ask --json "Tell me about CAM"
//! ```
//!
//! The command succeeds even when the reply is a validation message: the
//! reply is the result.
//!
use super::exchange;
use crate::common::ui::render_record;
use crate::core::error::Result;
use crate::engine::Dispatcher;
use anyhow::Context;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to ask. Multiple words are joined with single spaces.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub question: Vec<String>,

    /// Print both records as JSON instead of chat lines.
    #[arg(long)]
    pub json: bool,
}

pub async fn handle_ask(args: AskArgs, dispatcher: &Dispatcher) -> Result<()> {
    let question = args.question.join(" ");
    debug!("Asking: {:?}", question);

    let ex = exchange(dispatcher, &question).await;

    if args.json {
        let json =
            serde_json::to_string_pretty(&ex).context("Failed to serialize response as JSON")?;
        println!("{}", json);
    } else {
        println!("{}", render_record(&ex.user));
        println!("{}", render_record(&ex.agent));
    }
    Ok(())
}
