//! # faqbot Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An interactive, line-based chat with the assistant. Each line typed is
//! echoed and answered; lines starting with `/` are session commands.
//!
//! ```text
//! /help          show this list
//! /samples       list sample questions
//! /sample <n>    ask sample question n
//! /history       reprint the conversation
//! /clear         start over
//! bye | quit | exit
//! ```
//!
//! ## Architecture
//!
//! - `session.rs`: the `ChatSession` history
//! - `run_repl`: the read/dispatch/print loop, generic over input and output
//!   so tests can drive it with in-memory buffers
//!
use super::samples::{format_samples, SAMPLE_QUESTIONS};
use crate::common::ui::{render_record, AGENT_LABEL};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::engine::Dispatcher;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

pub mod session;

pub use session::ChatSession;

const HELP_TEXT: &str = "Commands:
  /help          show this list
  /samples       list sample questions
  /sample <n>    ask sample question n
  /history       reprint the conversation
  /clear         start over
  bye | quit | exit";

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Do not open the session with the welcome message.
    #[arg(long)]
    pub no_welcome: bool,
}

pub async fn handle_chat(args: ChatArgs, config: &Config, dispatcher: &Dispatcher) -> Result<()> {
    let show_welcome = config.session.show_welcome && !args.no_welcome;
    let mut session = ChatSession::new(dispatcher, show_welcome);
    info!("Starting chat session");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_repl(&mut session, stdin, &mut stdout).await?;

    info!(
        "Chat session ended after {} messages",
        session.message_count()
    );
    Ok(())
}

/// # Run REPL (`run_repl`)
///
/// Reads lines from `input` until end of input or a quit word, writing every
/// new message to `output`.
pub async fn run_repl<R, W>(session: &mut ChatSession<'_>, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "Chat with the {}. Type /help for commands, 'bye' to quit.", AGENT_LABEL)?;
    for record in session.history() {
        writeln!(output, "{}", render_record(record))?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush().context("Failed to flush output")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            debug!("End of input, leaving chat");
            break;
        };
        let command = line.trim();

        if ["bye", "quit", "exit"]
            .iter()
            .any(|word| command.eq_ignore_ascii_case(word))
        {
            writeln!(output, "{}: Goodbye!", AGENT_LABEL)?;
            break;
        }

        match command.split_once(' ').unwrap_or((command, "")) {
            ("/help", _) => writeln!(output, "{}", HELP_TEXT)?,
            ("/samples", _) => writeln!(output, "{}", format_samples())?,
            ("/history", _) => {
                for record in session.history() {
                    writeln!(output, "{}", render_record(record))?;
                }
                writeln!(output, "({} messages)", session.message_count())?;
            }
            ("/clear", _) => {
                let notice = session.clear();
                writeln!(output, "{}", render_record(notice))?;
            }
            ("/sample", n) => match sample_question(n) {
                Some(question) => {
                    for record in session.submit(question).await {
                        writeln!(output, "{}", render_record(record))?;
                    }
                }
                None => writeln!(
                    output,
                    "Pick a sample between 1 and {}.",
                    SAMPLE_QUESTIONS.len()
                )?,
            },
            (other, _) if other.starts_with('/') => {
                writeln!(output, "Unknown command '{}'. Type /help.", other)?
            }
            _ => {
                // Submit the raw line; the dispatcher does its own trimming.
                for record in session.submit(&line).await {
                    writeln!(output, "{}", render_record(record))?;
                }
            }
        }
    }
    Ok(())
}

fn sample_question(n: &str) -> Option<&'static str> {
    let index: usize = n.trim().parse().ok()?;
    SAMPLE_QUESTIONS.get(index.checked_sub(1)?).copied()
}
