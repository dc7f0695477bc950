//! Idempotent schema bootstrap
//!
//! Both foreign keys on `walks` cascade, so removing a region or a
//! difficulty removes the walks that reference it.

use sqlx::PgPool;

/// Create the regions, walk_difficulty and walks tables if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS regions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            code TEXT NOT NULL,
            name TEXT NOT NULL,
            area DOUBLE PRECISION NOT NULL,
            lat DOUBLE PRECISION NOT NULL,
            long DOUBLE PRECISION NOT NULL,
            population DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS walk_difficulty (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            code UUID NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS walks (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            length DOUBLE PRECISION NOT NULL,
            region_id UUID NOT NULL REFERENCES regions(id) ON DELETE CASCADE,
            walk_difficulty_id UUID NOT NULL REFERENCES walk_difficulty(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_walks_region ON walks(region_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_walks_difficulty ON walks(walk_difficulty_id)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
