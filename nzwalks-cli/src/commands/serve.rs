//! HTTP server command
//!
//! Runs the NZWalks API against PostgreSQL, or against the in-memory store
//! with `--in-memory`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use nzwalks_server::db::{connect, MemoryStore};
use nzwalks_server::http::run_server;
use nzwalks_server::AppState;

use crate::config::{FileConfig, Overrides, Settings};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5080)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Keep all data in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Config file (default: ~/.nzwalks/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let file = FileConfig::load(args.config.as_deref())?;
    let settings = Settings::resolve(
        file,
        Overrides {
            bind: args.bind,
            cors_permissive: args.cors_permissive,
            database_url: args.database_url,
            max_connections: args.max_connections,
        },
    );

    let state = if args.in_memory {
        tracing::warn!("Using in-memory store - data is lost on shutdown");
        AppState::in_memory(MemoryStore::new())
    } else {
        let database_url = settings.require_database_url()?;
        let pool = connect(database_url, settings.max_connections)
            .await
            .context("Failed to connect to database and create schema")?;

        AppState::postgres(pool)
    };

    tracing::info!("Starting nzwalks server on {}", settings.server.bind_addr);

    // Run server (blocks until shutdown)
    run_server(state, settings.server)
        .await
        .context("Server error")?;

    Ok(())
}
