//! PostgreSQL pool for the NZWalks tables
//!
//! `connect` is the entry point for binaries: it opens the pool and makes
//! sure `regions`, `walks` and `walk_difficulty` exist before any request is
//! served.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::migrations;

/// Pool size used when neither the config file nor a flag sets one.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a pool capped at `max_connections`.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "opening postgres pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Open a pool with [`DEFAULT_MAX_CONNECTIONS`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a pool and bootstrap the schema on it.
///
/// ```ignore
/// let pool = connect("postgres://localhost/nzwalks", 5).await?;
/// let state = AppState::postgres(pool);
/// ```
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = create_pool_with_options(database_url, max_connections).await?;
    migrations::run(&pool).await?;
    Ok(pool)
}
