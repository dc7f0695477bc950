//! Walk endpoints
//!
//! Reads resolve the region and difficulty with one JOIN; writes echo the
//! flat walk. A walk pointing at a missing region or difficulty is rejected
//! by the database and surfaces as a 500.

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use super::{created, resource};
use crate::db::repos::WalkDraft;
use crate::dto::{AddWalkRequest, UpdateWalkRequest, WalkDto};
use crate::http::error::ApiError;
use crate::http::extractors::{ResourceId, ValidJson};
use crate::state::AppState;

const COLLECTION: &str = "Walks";

/// GET /Walks
async fn list_walks(State(state): State<AppState>) -> Result<Json<Vec<WalkDto>>, ApiError> {
    let walks = state.walks().get_all_detailed().await?;
    Ok(Json(walks.into_iter().map(WalkDto::from).collect()))
}

/// GET /Walks/{id}
async fn get_walk(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<WalkDto>, ApiError> {
    let walk = state
        .walks()
        .get_detailed(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(WalkDto::from(walk)))
}

/// POST /Walks
async fn add_walk(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AddWalkRequest>,
) -> Result<Response, ApiError> {
    let draft = WalkDraft::try_from(req)?;
    let walk = state.walks().add(draft).await?;
    tracing::info!(id = %walk.id, region_id = %walk.region_id, "walk created");

    Ok(created(COLLECTION, walk.id, WalkDto::from(walk)))
}

/// PUT /Walks/{id}
async fn update_walk(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidJson(req): ValidJson<UpdateWalkRequest>,
) -> Result<Json<WalkDto>, ApiError> {
    let draft = WalkDraft::try_from(req)?;
    let walk = state
        .walks()
        .update(id, draft)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(WalkDto::from(walk)))
}

/// DELETE /Walks/{id}
async fn delete_walk(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<WalkDto>, ApiError> {
    let walk = state
        .walks()
        .delete(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(%id, "walk deleted");

    Ok(Json(WalkDto::from(walk)))
}

/// Walk routes
pub fn router() -> Router<AppState> {
    resource(
        &[COLLECTION, "walks"],
        get(list_walks).post(add_walk),
        get(get_walk).put(update_walk).delete(delete_walk),
    )
}
