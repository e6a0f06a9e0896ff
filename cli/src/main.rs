//! # faqbot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point for the `faqbot` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once and building the dispatcher
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # One question
//! faqbot ask What does EVA do?
//!
//! # Interactive chat without the artificial delay
//! faqbot --delay-ms 0 chat
//!
//! # HTTP API with debug logging
//! faqbot -vv srv --port 9000
//! ```
//!
use clap::Parser;
use faqbot::commands;
use faqbot::core::config::{self, Config, Overrides};
use faqbot::engine::Dispatcher;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "faqbot",
    about = "🤖 faqbot: Thoughtful AI support assistant",
    long_about = "Answers questions about Thoughtful AI's automation agents (EVA, CAM, PHIL)\n\
                  by matching them against a fixed set of known questions.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read configuration from this file instead of the user/project files.
    #[arg(long, global = true, env = "FAQBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Response delay in milliseconds (0 disables it).
    #[arg(long, global = true, env = "FAQBOT_DELAY_MS")]
    delay_ms: Option<u64>,

    /// TOML knowledge file replacing the built-in questions and answers.
    #[arg(long, global = true, env = "FAQBOT_KNOWLEDGE")]
    knowledge: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    Samples(commands::samples::SamplesArgs),
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = Overrides {
        delay_ms: cli.delay_ms,
        knowledge: cli.knowledge,
    };
    let config_path = cli.config;
    let load = || -> anyhow::Result<(Config, Dispatcher)> {
        let cfg = config::load_config(config_path.as_deref())?.apply_overrides(&overrides)?;
        let dispatcher = commands::build_dispatcher(&cfg)?;
        Ok((cfg, dispatcher))
    };

    match cli.command {
        Commands::Ask(args) => {
            let (_, dispatcher) = load()?;
            commands::ask::handle_ask(args, &dispatcher).await
        }
        Commands::Chat(args) => {
            let (cfg, dispatcher) = load()?;
            commands::chat::handle_chat(args, &cfg, &dispatcher).await
        }
        // Needs neither configuration nor a knowledge base.
        Commands::Samples(args) => commands::samples::handle_samples(args),
        Commands::Srv(args) => {
            let (_, dispatcher) = load()?;
            commands::srv::handle_srv(args, dispatcher).await
        }
    }
}
