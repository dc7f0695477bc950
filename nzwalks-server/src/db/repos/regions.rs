//! Region repository
//!
//! Deleting a region cascades to its walks through the `walks.region_id`
//! foreign key; nothing here touches the walks table.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DbError, Repository};

/// Region record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: f64,
}

/// Mutable fields of a region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDraft {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: f64,
}

impl Region {
    pub(crate) fn from_draft(id: Uuid, draft: RegionDraft) -> Self {
        Self {
            id,
            code: draft.code,
            name: draft.name,
            area: draft.area,
            lat: draft.lat,
            long: draft.long,
            population: draft.population,
        }
    }
}

/// PostgreSQL-backed region repository
#[derive(Clone)]
pub struct PgRegionRepo {
    pool: PgPool,
}

impl PgRegionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Region, RegionDraft> for PgRegionRepo {
    async fn get_all(&self) -> Result<Vec<Region>, DbError> {
        let regions = sqlx::query_as(
            r#"
            SELECT id, code, name, area, lat, long, population
            FROM regions
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(regions)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>, DbError> {
        let region = sqlx::query_as(
            r#"
            SELECT id, code, name, area, lat, long, population
            FROM regions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(region)
    }

    async fn add(&self, draft: RegionDraft) -> Result<Region, DbError> {
        let region = sqlx::query_as(
            r#"
            INSERT INTO regions (code, name, area, lat, long, population)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(&draft.code)
        .bind(&draft.name)
        .bind(draft.area)
        .bind(draft.lat)
        .bind(draft.long)
        .bind(draft.population)
        .fetch_one(&self.pool)
        .await?;

        Ok(region)
    }

    async fn update(&self, id: Uuid, draft: RegionDraft) -> Result<Option<Region>, DbError> {
        let region = sqlx::query_as(
            r#"
            UPDATE regions
            SET code = $2,
                name = $3,
                area = $4,
                lat = $5,
                long = $6,
                population = $7
            WHERE id = $1
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(id)
        .bind(&draft.code)
        .bind(&draft.name)
        .bind(draft.area)
        .bind(draft.lat)
        .bind(draft.long)
        .bind(draft.population)
        .fetch_optional(&self.pool)
        .await?;

        Ok(region)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>, DbError> {
        let region = sqlx::query_as(
            r#"
            DELETE FROM regions
            WHERE id = $1
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(region)
    }
}
