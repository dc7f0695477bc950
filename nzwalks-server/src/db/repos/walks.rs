//! Walk repository
//!
//! Walks carry only foreign-key ids. [`WalkDetail`] resolves the region and
//! difficulty on demand with a single JOIN instead of navigation properties.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use super::{DbError, Region, Repository, WalkDifficulty, WalkRepository};

/// Walk record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Mutable fields of a walk
#[derive(Debug, Clone, PartialEq)]
pub struct WalkDraft {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Walk with its region and difficulty resolved
#[derive(Debug, Clone, PartialEq)]
pub struct WalkDetail {
    pub walk: Walk,
    pub region: Region,
    pub walk_difficulty: WalkDifficulty,
}

impl Walk {
    pub(crate) fn from_draft(id: Uuid, draft: WalkDraft) -> Self {
        Self {
            id,
            name: draft.name,
            length: draft.length,
            region_id: draft.region_id,
            walk_difficulty_id: draft.walk_difficulty_id,
        }
    }
}

const DETAIL_SELECT: &str = r#"
    SELECT
        w.id, w.name, w.length, w.region_id, w.walk_difficulty_id,
        r.code AS region_code, r.name AS region_name, r.area AS region_area,
        r.lat AS region_lat, r.long AS region_long, r.population AS region_population,
        d.code AS difficulty_code
    FROM walks w
    JOIN regions r ON r.id = w.region_id
    JOIN walk_difficulty d ON d.id = w.walk_difficulty_id
"#;

fn detail_from_row(row: PgRow) -> WalkDetail {
    let region_id: Uuid = row.get("region_id");
    let walk_difficulty_id: Uuid = row.get("walk_difficulty_id");

    WalkDetail {
        walk: Walk {
            id: row.get("id"),
            name: row.get("name"),
            length: row.get("length"),
            region_id,
            walk_difficulty_id,
        },
        region: Region {
            id: region_id,
            code: row.get("region_code"),
            name: row.get("region_name"),
            area: row.get("region_area"),
            lat: row.get("region_lat"),
            long: row.get("region_long"),
            population: row.get("region_population"),
        },
        walk_difficulty: WalkDifficulty {
            id: walk_difficulty_id,
            code: row.get("difficulty_code"),
        },
    }
}

/// PostgreSQL-backed walk repository
#[derive(Clone)]
pub struct PgWalkRepo {
    pool: PgPool,
}

impl PgWalkRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Walk, WalkDraft> for PgWalkRepo {
    async fn get_all(&self) -> Result<Vec<Walk>, DbError> {
        let walks = sqlx::query_as(
            "SELECT id, name, length, region_id, walk_difficulty_id FROM walks",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(walks)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Walk>, DbError> {
        let walk = sqlx::query_as(
            "SELECT id, name, length, region_id, walk_difficulty_id FROM walks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(walk)
    }

    /// Fails with [`DbError::Constraint`] when the region or difficulty
    /// does not exist; nothing is persisted in that case.
    async fn add(&self, draft: WalkDraft) -> Result<Walk, DbError> {
        let walk = sqlx::query_as(
            r#"
            INSERT INTO walks (name, length, region_id, walk_difficulty_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(&draft.name)
        .bind(draft.length)
        .bind(draft.region_id)
        .bind(draft.walk_difficulty_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(walk)
    }

    async fn update(&self, id: Uuid, draft: WalkDraft) -> Result<Option<Walk>, DbError> {
        let walk = sqlx::query_as(
            r#"
            UPDATE walks
            SET name = $2,
                length = $3,
                region_id = $4,
                walk_difficulty_id = $5
            WHERE id = $1
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.length)
        .bind(draft.region_id)
        .bind(draft.walk_difficulty_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(walk)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>, DbError> {
        let walk = sqlx::query_as(
            r#"
            DELETE FROM walks
            WHERE id = $1
            RETURNING id, name, length, region_id, walk_difficulty_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(walk)
    }
}

#[async_trait]
impl WalkRepository for PgWalkRepo {
    async fn get_all_detailed(&self) -> Result<Vec<WalkDetail>, DbError> {
        let rows = sqlx::query(DETAIL_SELECT).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(detail_from_row).collect())
    }

    async fn get_detailed(&self, id: Uuid) -> Result<Option<WalkDetail>, DbError> {
        let sql = format!("{DETAIL_SELECT} WHERE w.id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(detail_from_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{
        PgRegionRepo, PgWalkDifficultyRepo, RegionDraft, WalkDifficultyDraft,
    };
    use crate::db::{create_pool, migrations};

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn region_draft() -> RegionDraft {
        RegionDraft {
            code: "WKO".into(),
            name: "Waikato".into(),
            area: 25000.0,
            lat: -37.6,
            long: 175.2,
            population: 500000.0,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_region_is_constraint_violation() {
        let pool = pool().await;
        let difficulties = PgWalkDifficultyRepo::new(pool.clone());
        let walks = PgWalkRepo::new(pool);

        let difficulty = difficulties
            .add(WalkDifficultyDraft { code: Uuid::new_v4() })
            .await
            .unwrap();

        let err = walks
            .add(WalkDraft {
                name: "Orphan Track".into(),
                length: 3.5,
                region_id: Uuid::new_v4(),
                walk_difficulty_id: difficulty.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Constraint { .. }));

        difficulties.delete(difficulty.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn region_delete_cascades_to_walks() {
        let pool = pool().await;
        let regions = PgRegionRepo::new(pool.clone());
        let difficulties = PgWalkDifficultyRepo::new(pool.clone());
        let walks = PgWalkRepo::new(pool);

        let region = regions.add(region_draft()).await.unwrap();
        let difficulty = difficulties
            .add(WalkDifficultyDraft { code: Uuid::new_v4() })
            .await
            .unwrap();
        let walk = walks
            .add(WalkDraft {
                name: "Hakarimata Summit".into(),
                length: 4.2,
                region_id: region.id,
                walk_difficulty_id: difficulty.id,
            })
            .await
            .unwrap();

        let detail = walks.get_detailed(walk.id).await.unwrap().unwrap();
        assert_eq!(detail.region, region);
        assert_eq!(detail.walk_difficulty, difficulty);

        regions.delete(region.id).await.unwrap();
        assert!(walks.get_by_id(walk.id).await.unwrap().is_none());

        difficulties.delete(difficulty.id).await.unwrap();
    }
}
