//! Region endpoints

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use super::{created, resource};
use crate::db::repos::RegionDraft;
use crate::dto::{AddRegionRequest, RegionDto, UpdateRegionRequest};
use crate::http::error::ApiError;
use crate::http::extractors::{ResourceId, ValidJson};
use crate::state::AppState;

const COLLECTION: &str = "Regions";

/// GET /Regions
async fn list_regions(State(state): State<AppState>) -> Result<Json<Vec<RegionDto>>, ApiError> {
    let regions = state.regions().get_all().await?;
    Ok(Json(regions.into_iter().map(RegionDto::from).collect()))
}

/// GET /Regions/{id}
async fn get_region(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<RegionDto>, ApiError> {
    let region = state
        .regions()
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(RegionDto::from(region)))
}

/// POST /Regions
async fn add_region(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AddRegionRequest>,
) -> Result<Response, ApiError> {
    let draft = RegionDraft::try_from(req)?;
    let region = state.regions().add(draft).await?;
    tracing::info!(id = %region.id, code = %region.code, "region created");

    Ok(created(COLLECTION, region.id, RegionDto::from(region)))
}

/// PUT /Regions/{id}
async fn update_region(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidJson(req): ValidJson<UpdateRegionRequest>,
) -> Result<Json<RegionDto>, ApiError> {
    let draft = RegionDraft::try_from(req)?;
    let region = state
        .regions()
        .update(id, draft)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(RegionDto::from(region)))
}

/// DELETE /Regions/{id} - cascades to the region's walks
async fn delete_region(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<RegionDto>, ApiError> {
    let region = state
        .regions()
        .delete(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(%id, "region deleted");

    Ok(Json(RegionDto::from(region)))
}

/// Region routes
pub fn router() -> Router<AppState> {
    resource(
        &[COLLECTION, "regions"],
        get(list_regions).post(add_region),
        get(get_region).put(update_region).delete(delete_region),
    )
}
