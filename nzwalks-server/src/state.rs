//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::repos::{
    MemoryStore, PgRegionRepo, PgWalkDifficultyRepo, PgWalkRepo, RegionRepository,
    WalkDifficultyRepository, WalkRepository,
};

/// Shared application state
///
/// Repositories are injected as trait objects; handlers never see the
/// backing store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    regions: Arc<dyn RegionRepository>,
    walks: Arc<dyn WalkRepository>,
    walk_difficulties: Arc<dyn WalkDifficultyRepository>,
}

impl AppState {
    pub fn new(
        regions: Arc<dyn RegionRepository>,
        walks: Arc<dyn WalkRepository>,
        walk_difficulties: Arc<dyn WalkDifficultyRepository>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                regions,
                walks,
                walk_difficulties,
            }),
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgRegionRepo::new(pool.clone())),
            Arc::new(PgWalkRepo::new(pool.clone())),
            Arc::new(PgWalkDifficultyRepo::new(pool)),
        )
    }

    /// State backed by a single in-memory store.
    pub fn in_memory(store: MemoryStore) -> Self {
        Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    pub fn regions(&self) -> &dyn RegionRepository {
        self.inner.regions.as_ref()
    }

    pub fn walks(&self) -> &dyn WalkRepository {
        self.inner.walks.as_ref()
    }

    pub fn walk_difficulties(&self) -> &dyn WalkDifficultyRepository {
        self.inner.walk_difficulties.as_ref()
    }
}
