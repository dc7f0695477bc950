//! Walk difficulty repository

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DbError, Repository};

/// Walk difficulty record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub code: Uuid,
}

/// Mutable fields of a walk difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkDifficultyDraft {
    pub code: Uuid,
}

/// PostgreSQL-backed walk difficulty repository
#[derive(Clone)]
pub struct PgWalkDifficultyRepo {
    pool: PgPool,
}

impl PgWalkDifficultyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<WalkDifficulty, WalkDifficultyDraft> for PgWalkDifficultyRepo {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>, DbError> {
        let difficulties = sqlx::query_as("SELECT id, code FROM walk_difficulty")
            .fetch_all(&self.pool)
            .await?;
        Ok(difficulties)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DbError> {
        let difficulty = sqlx::query_as("SELECT id, code FROM walk_difficulty WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(difficulty)
    }

    async fn add(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty, DbError> {
        let difficulty = sqlx::query_as(
            "INSERT INTO walk_difficulty (code) VALUES ($1) RETURNING id, code",
        )
        .bind(draft.code)
        .fetch_one(&self.pool)
        .await?;
        Ok(difficulty)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: WalkDifficultyDraft,
    ) -> Result<Option<WalkDifficulty>, DbError> {
        let difficulty = sqlx::query_as(
            "UPDATE walk_difficulty SET code = $2 WHERE id = $1 RETURNING id, code",
        )
        .bind(id)
        .bind(draft.code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(difficulty)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DbError> {
        let difficulty =
            sqlx::query_as("DELETE FROM walk_difficulty WHERE id = $1 RETURNING id, code")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(difficulty)
    }
}
