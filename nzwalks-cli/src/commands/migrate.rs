//! Schema bootstrap command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use nzwalks_server::db::connect;

use crate::config::{FileConfig, Overrides, Settings};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Config file (default: ~/.nzwalks/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Create the tables without starting the server
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let file = FileConfig::load(args.config.as_deref())?;
    let settings = Settings::resolve(
        file,
        Overrides {
            database_url: args.database_url,
            ..Overrides::default()
        },
    );

    let pool = connect(settings.require_database_url()?, settings.max_connections)
        .await
        .context("Failed to connect to database and create schema")?;
    tracing::info!("Schema is up to date");

    pool.close().await;
    Ok(())
}
