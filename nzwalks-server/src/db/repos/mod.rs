//! Repository implementations for database access
//!
//! Every entity goes through the same [`Repository`] contract:
//! - one SQL statement per operation (`... RETURNING` for writes)
//! - absent rows are `Ok(None)`, never an error
//! - foreign keys are left to the database, no check-then-insert

pub mod memory;
pub mod regions;
pub mod walk_difficulties;
pub mod walks;

use async_trait::async_trait;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use regions::{PgRegionRepo, Region, RegionDraft};
pub use walk_difficulties::{PgWalkDifficultyRepo, WalkDifficulty, WalkDifficultyDraft};
pub use walks::{PgWalkRepo, Walk, WalkDetail, WalkDraft};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("constraint violation: {constraint}")]
    Constraint { constraint: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_foreign_key_violation() {
                return Self::Constraint {
                    constraint: db.constraint().unwrap_or("foreign key").to_owned(),
                };
            }
        }
        Self::Sqlx(e)
    }
}

/// CRUD contract shared by every entity.
///
/// `E` is the stored entity, `D` the draft holding its mutable fields.
#[async_trait]
pub trait Repository<E, D>: Send + Sync
where
    E: Send + 'static,
    D: Send + 'static,
{
    /// Every row, unpaginated.
    async fn get_all(&self) -> Result<Vec<E>, DbError>;

    /// Point lookup by primary key.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<E>, DbError>;

    /// Insert with a freshly generated id.
    async fn add(&self, draft: D) -> Result<E, DbError>;

    /// Overwrite the mutable fields of an existing row.
    async fn update(&self, id: Uuid, draft: D) -> Result<Option<E>, DbError>;

    /// Remove a row, returning it as it was before removal.
    async fn delete(&self, id: Uuid) -> Result<Option<E>, DbError>;
}

pub trait RegionRepository: Repository<Region, RegionDraft> {}

impl<T> RegionRepository for T where T: Repository<Region, RegionDraft> {}

pub trait WalkDifficultyRepository: Repository<WalkDifficulty, WalkDifficultyDraft> {}

impl<T> WalkDifficultyRepository for T where T: Repository<WalkDifficulty, WalkDifficultyDraft> {}

/// Walks additionally resolve their region and difficulty with a JOIN.
#[async_trait]
pub trait WalkRepository: Repository<Walk, WalkDraft> {
    async fn get_all_detailed(&self) -> Result<Vec<WalkDetail>, DbError>;

    async fn get_detailed(&self, id: Uuid) -> Result<Option<WalkDetail>, DbError>;
}
