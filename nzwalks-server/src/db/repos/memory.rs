//! In-memory store implementing every repository
//!
//! Mirrors the PostgreSQL schema: walks must reference an existing region and
//! difficulty, and removing either removes the walks that point at it.
//! Rows keep insertion order.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::{
    DbError, Region, RegionDraft, Repository, Walk, WalkDetail, WalkDifficulty,
    WalkDifficultyDraft, WalkDraft, WalkRepository,
};

#[derive(Debug, Default)]
struct Tables {
    regions: Vec<Region>,
    walks: Vec<Walk>,
    walk_difficulties: Vec<WalkDifficulty>,
}

impl Tables {
    fn check_walk_refs(&self, draft: &WalkDraft) -> Result<(), DbError> {
        if !self.regions.iter().any(|r| r.id == draft.region_id) {
            return Err(DbError::Constraint {
                constraint: "walks_region_id_fkey".into(),
            });
        }
        if !self
            .walk_difficulties
            .iter()
            .any(|d| d.id == draft.walk_difficulty_id)
        {
            return Err(DbError::Constraint {
                constraint: "walks_walk_difficulty_id_fkey".into(),
            });
        }
        Ok(())
    }

    fn detail(&self, walk: &Walk) -> Option<WalkDetail> {
        let region = self.regions.iter().find(|r| r.id == walk.region_id)?;
        let walk_difficulty = self
            .walk_difficulties
            .iter()
            .find(|d| d.id == walk.walk_difficulty_id)?;

        Some(WalkDetail {
            walk: walk.clone(),
            region: region.clone(),
            walk_difficulty: walk_difficulty.clone(),
        })
    }
}

/// Shared in-memory tables; clones see the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // Every mutation is a single Vec operation, so poisoned tables are
        // still consistent.
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn take<T>(rows: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> Option<T> {
    let index = rows.iter().position(matches)?;
    Some(rows.remove(index))
}

#[async_trait]
impl Repository<Region, RegionDraft> for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Region>, DbError> {
        Ok(self.lock().regions.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>, DbError> {
        Ok(self.lock().regions.iter().find(|r| r.id == id).cloned())
    }

    async fn add(&self, draft: RegionDraft) -> Result<Region, DbError> {
        let region = Region::from_draft(Uuid::new_v4(), draft);
        self.lock().regions.push(region.clone());
        Ok(region)
    }

    async fn update(&self, id: Uuid, draft: RegionDraft) -> Result<Option<Region>, DbError> {
        let mut tables = self.lock();
        let Some(slot) = tables.regions.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        *slot = Region::from_draft(id, draft);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>, DbError> {
        let mut tables = self.lock();
        let removed = take(&mut tables.regions, |r| r.id == id);
        if removed.is_some() {
            tables.walks.retain(|w| w.region_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl Repository<WalkDifficulty, WalkDifficultyDraft> for MemoryStore {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>, DbError> {
        Ok(self.lock().walk_difficulties.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DbError> {
        Ok(self
            .lock()
            .walk_difficulties
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn add(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty, DbError> {
        let difficulty = WalkDifficulty {
            id: Uuid::new_v4(),
            code: draft.code,
        };
        self.lock().walk_difficulties.push(difficulty.clone());
        Ok(difficulty)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: WalkDifficultyDraft,
    ) -> Result<Option<WalkDifficulty>, DbError> {
        let mut tables = self.lock();
        let Some(slot) = tables.walk_difficulties.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        slot.code = draft.code;
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>, DbError> {
        let mut tables = self.lock();
        let removed = take(&mut tables.walk_difficulties, |d| d.id == id);
        if removed.is_some() {
            tables.walks.retain(|w| w.walk_difficulty_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl Repository<Walk, WalkDraft> for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Walk>, DbError> {
        Ok(self.lock().walks.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>, DbError> {
        Ok(self.lock().walks.iter().find(|w| w.id == id).cloned())
    }

    async fn add(&self, draft: WalkDraft) -> Result<Walk, DbError> {
        let mut tables = self.lock();
        tables.check_walk_refs(&draft)?;
        let walk = Walk::from_draft(Uuid::new_v4(), draft);
        tables.walks.push(walk.clone());
        Ok(walk)
    }

    async fn update(&self, id: Uuid, draft: WalkDraft) -> Result<Option<Walk>, DbError> {
        let mut tables = self.lock();
        if !tables.walks.iter().any(|w| w.id == id) {
            return Ok(None);
        }
        tables.check_walk_refs(&draft)?;
        let Some(slot) = tables.walks.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };
        *slot = Walk::from_draft(id, draft);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>, DbError> {
        Ok(take(&mut self.lock().walks, |w| w.id == id))
    }
}

#[async_trait]
impl WalkRepository for MemoryStore {
    async fn get_all_detailed(&self) -> Result<Vec<WalkDetail>, DbError> {
        let tables = self.lock();
        let details = tables.walks.iter().filter_map(|w| tables.detail(w)).collect();
        Ok(details)
    }

    async fn get_detailed(&self, id: Uuid) -> Result<Option<WalkDetail>, DbError> {
        let tables = self.lock();
        let detail = tables
            .walks
            .iter()
            .find(|w| w.id == id)
            .and_then(|w| tables.detail(w));
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_draft(code: &str) -> RegionDraft {
        RegionDraft {
            code: code.into(),
            name: "Otago".into(),
            area: 31990.0,
            lat: -45.48,
            long: 170.0,
            population: 245300.0,
        }
    }

    async fn seed(store: &MemoryStore) -> (Region, WalkDifficulty, Walk) {
        let region = Repository::<Region, RegionDraft>::add(store, region_draft("OTA"))
            .await
            .unwrap();
        let difficulty = Repository::<WalkDifficulty, WalkDifficultyDraft>::add(
            store,
            WalkDifficultyDraft { code: Uuid::new_v4() },
        )
        .await
        .unwrap();
        let walk = Repository::<Walk, WalkDraft>::add(
            store,
            WalkDraft {
                name: "Routeburn Track".into(),
                length: 32.0,
                region_id: region.id,
                walk_difficulty_id: difficulty.id,
            },
        )
        .await
        .unwrap();
        (region, difficulty, walk)
    }

    #[tokio::test]
    async fn add_generates_fresh_ids() {
        let store = MemoryStore::new();
        let a = Repository::<Region, RegionDraft>::add(&store, region_draft("A"))
            .await
            .unwrap();
        let b = Repository::<Region, RegionDraft>::add(&store, region_draft("B"))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);

        let all = Repository::<Region, RegionDraft>::get_all(&store).await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn update_missing_does_not_insert() {
        let store = MemoryStore::new();
        let result =
            Repository::<Region, RegionDraft>::update(&store, Uuid::new_v4(), region_draft("X"))
                .await
                .unwrap();
        assert!(result.is_none());
        assert!(Repository::<Region, RegionDraft>::get_all(&store)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn walk_requires_existing_region() {
        let store = MemoryStore::new();
        let (_, difficulty, _) = seed(&store).await;

        let err = Repository::<Walk, WalkDraft>::add(
            &store,
            WalkDraft {
                name: "Nowhere".into(),
                length: 1.0,
                region_id: Uuid::new_v4(),
                walk_difficulty_id: difficulty.id,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, DbError::Constraint { .. }));
        assert_eq!(
            Repository::<Walk, WalkDraft>::get_all(&store).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn walk_update_checks_references() {
        let store = MemoryStore::new();
        let (region, _, walk) = seed(&store).await;

        let err = Repository::<Walk, WalkDraft>::update(
            &store,
            walk.id,
            WalkDraft {
                name: walk.name.clone(),
                length: walk.length,
                region_id: region.id,
                walk_difficulty_id: Uuid::new_v4(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, DbError::Constraint { .. }));
        let unchanged = Repository::<Walk, WalkDraft>::get_by_id(&store, walk.id)
            .await
            .unwrap();
        assert_eq!(unchanged, Some(walk));
    }

    #[tokio::test]
    async fn region_delete_cascades() {
        let store = MemoryStore::new();
        let (region, _, walk) = seed(&store).await;

        let removed = Repository::<Region, RegionDraft>::delete(&store, region.id)
            .await
            .unwrap();
        assert_eq!(removed, Some(region));
        assert!(Repository::<Walk, WalkDraft>::get_by_id(&store, walk.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn difficulty_delete_cascades() {
        let store = MemoryStore::new();
        let (_, difficulty, walk) = seed(&store).await;

        Repository::<WalkDifficulty, WalkDifficultyDraft>::delete(&store, difficulty.id)
            .await
            .unwrap();
        assert!(Repository::<Walk, WalkDraft>::get_by_id(&store, walk.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn detail_joins_region_and_difficulty() {
        let store = MemoryStore::new();
        let (region, difficulty, walk) = seed(&store).await;

        let detail = store.get_detailed(walk.id).await.unwrap().unwrap();
        assert_eq!(detail.walk, walk);
        assert_eq!(detail.region, region);
        assert_eq!(detail.walk_difficulty, difficulty);

        assert_eq!(store.get_all_detailed().await.unwrap().len(), 1);
    }
}
