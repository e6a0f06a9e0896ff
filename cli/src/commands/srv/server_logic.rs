//! # faqbot HTTP Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The Axum server behind `faqbot srv`:
//! - JSON chat endpoint backed by a shared `Dispatcher`
//! - Port availability checking with automatic fallback
//! - Optional permissive CORS
//! - Request tracing and graceful shutdown
//!
//! Every chat request gets HTTP 200. Whether the question was answered is in
//! the `success` field of the agent record, exactly as for the CLI.
//!
use super::ServerConfig;
use crate::commands::samples::SAMPLE_QUESTIONS;
use crate::commands::{exchange, Exchange};
use crate::core::error::Result;
use crate::engine::Dispatcher;
use anyhow::Context;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, warn, Level};

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// # Run HTTP Server (`run_server`)
///
/// Binds the first free port at or after `config.port`, prints the URL and
/// serves until a shutdown signal arrives.
///
/// ## Errors
///
/// - No free port within the allowed attempts.
/// - The listener cannot be bound.
/// - The server fails while running.
pub async fn run_server(config: ServerConfig, dispatcher: Arc<Dispatcher>) -> Result<()> {
    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;

    let app = create_app(dispatcher, config.enable_cors);

    println!("\n=================================================================");
    println!("🤖 Thoughtful AI support assistant");
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port` and up to `max_attempts - 1` following ports, returning
/// the first address that can be bound.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = current_port.checked_add(1).with_context(|| {
                    format!("Ran out of ports after {} on host {}", current_port, req_host)
                })?;
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router with the chat, samples and health routes, plus tracing
/// and (optionally) CORS middleware.
pub fn create_app(dispatcher: Arc<Dispatcher>, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        debug!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        debug!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/samples", get(samples_handler))
        .route("/health", get(health_handler))
        .with_state(dispatcher)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}

async fn chat_handler(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(request): Json<ChatRequest>,
) -> Json<Exchange> {
    Json(exchange(&dispatcher, &request.message).await)
}

async fn samples_handler() -> Json<Vec<&'static str>> {
    Json(SAMPLE_QUESTIONS.to_vec())
}

async fn health_handler() -> &'static str {
    "ok"
}
