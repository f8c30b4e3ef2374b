//! Strictly Hangman - Unified CLI
//!
//! Runs the hangman server (REST and MCP) or talks to a running one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use axum::{body::Body, http::Request};
use clap::Parser;
use cli::{Cli, Command};
use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager,
    tower::{StreamableHttpServerConfig, StreamableHttpService},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strictly_hangman::{
    GameRegistry, GameServer, HangmanClient, ServerConfig, create_app, render_table,
};
use tower::util::MapRequestLayer;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            port,
            host,
            words,
        } => {
            let log = initialize_tracing(ServerConfig::default().log_filter(), false);
            let mut config = load_config(&config, words)?;
            if let Some(port) = port {
                config = config.with_port(port);
            }
            if let Some(host) = host {
                config = config.with_host(host);
            }
            apply_log_filter(&log, config.log_filter());
            run_http_server(config).await
        }
        Command::Rpc { config, words } => {
            let log = initialize_tracing(ServerConfig::default().log_filter(), true);
            let config = load_config(&config, words)?;
            apply_log_filter(&log, config.log_filter());
            run_rpc_server(config).await
        }
        Command::NewGame { server_url } => {
            initialize_tracing("warn", true);
            let response = HangmanClient::new(server_url).new_game().await?;
            println!("{}", response.message);
            Ok(())
        }
        Command::Games { server_url } => {
            initialize_tracing("warn", true);
            let games = HangmanClient::new(server_url).list_games().await?;
            println!("{}", render_table(games));
            Ok(())
        }
        Command::Guess {
            game,
            letter,
            player,
            server_url,
        } => {
            initialize_tracing("warn", true);
            let outcome = HangmanClient::new(server_url)
                .guess(&game, &letter, &player)
                .await?;
            for line in outcome.detail() {
                println!("{}", line);
            }
            println!();
            println!("{}", render_table([outcome.snapshot()]));
            Ok(())
        }
    }
}

/// Loads the server configuration, applying the word list override.
#[instrument(skip(words))]
fn load_config(path: &Path, words: Option<PathBuf>) -> Result<ServerConfig> {
    let config = ServerConfig::load_or_default(path)?;
    Ok(match words {
        Some(words) => config.with_word_list(words),
        None => config,
    })
}

/// Builds the registry every transport shares.
#[instrument(skip(config))]
fn build_registry(config: &ServerConfig) -> Result<GameRegistry> {
    let words = config
        .word_source()
        .context("Failed to load word list")?;
    info!(words = words.len(), "Word source ready");
    Ok(GameRegistry::new(Arc::new(words)))
}

/// Run the HTTP server with REST routes and MCP at /mcp
async fn run_http_server(config: ServerConfig) -> Result<()> {
    info!("Starting Strictly Hangman server on HTTP");

    let registry = build_registry(&config)?;

    let mcp_registry = registry.clone();
    let mcp_service = StreamableHttpService::new(
        move || {
            debug!("Creating GameServer instance with shared registry");
            Ok(GameServer::new(mcp_registry.clone()))
        },
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    let app = create_app(registry)
        .nest_service("/mcp", mcp_service)
        .layer(MapRequestLayer::new(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Server ready");
    info!("REST: /newgame, /games, /games/{{id}}, /guess; MCP: /mcp");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Run the MCP server (stdio mode)
async fn run_rpc_server(config: ServerConfig) -> Result<()> {
    info!("Starting Strictly Hangman MCP server on stdio");

    let registry = build_registry(&config)?;
    let service = GameServer::new(registry)
        .serve(rmcp::transport::stdio())
        .await?;

    info!("Server ready - connect via MCP protocol");
    service.waiting().await?;

    Ok(())
}

/// Completes when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server...");
}

type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// The returned handle swaps the filter once the configured one is known.
fn initialize_tracing(default_filter: &str, to_stderr: bool) -> LogHandle {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let (filter, handle) = reload::Layer::new(filter);
    let registry = tracing_subscriber::registry().with(filter);

    if to_stderr {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
    handle
}

/// Switches to the configured filter unless `RUST_LOG` is set.
fn apply_log_filter(handle: &LogHandle, log_filter: &str) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }
    match handle.reload(EnvFilter::new(log_filter)) {
        Ok(()) => debug!(log_filter, "Log filter applied"),
        Err(e) => tracing::error!(error = %e, "Failed to apply log filter"),
    }
}
