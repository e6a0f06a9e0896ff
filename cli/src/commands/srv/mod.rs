//! # faqbot HTTP Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Serves the assistant over a small JSON API so a web page (or `curl`) can
//! chat with it:
//!
//! - `POST /api/chat` with `{"message": "..."}` returns `{"user": ..., "agent": ...}`
//! - `GET /api/samples` returns the sample questions
//! - `GET /health` returns `ok`
//!
//! The server keeps no sessions; clients hold their own history.
//!
//! ## Examples
//!
//! ```bash
//! faqbot srv --port 9000
//! curl -s -XPOST localhost:9000/api/chat -H 'content-type: application/json' \
//!      -d '{"message":"What does EVA do?"}'
//! ```
//!
use crate::core::error::Result;
use crate::engine::Dispatcher;
use clap::Parser;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::info;

/// Contains the Axum router, handlers and server lifecycle.
pub mod server_logic;

#[derive(Parser, Debug)]
pub struct SrvArgs {
    /// Port to listen on. The next free port is used if it is taken.
    #[arg(long, short, default_value_t = 8000)]
    pub port: u16,

    /// Address to bind. Use `0.0.0.0` to accept connections from other machines.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Do not send CORS headers. CORS is permissive by default.
    #[arg(long)]
    pub no_cors: bool,
}

/// Effective server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
}

impl From<&SrvArgs> for ServerConfig {
    fn from(args: &SrvArgs) -> Self {
        Self {
            port: args.port,
            host: args.host,
            enable_cors: !args.no_cors,
        }
    }
}

/// # Handle Server Command (`handle_srv`)
///
/// Starts the HTTP server and runs it until Ctrl+C or SIGTERM.
pub async fn handle_srv(args: SrvArgs, dispatcher: Dispatcher) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);
    let config = ServerConfig::from(&args);
    server_logic::run_server(config, Arc::new(dispatcher)).await
}
