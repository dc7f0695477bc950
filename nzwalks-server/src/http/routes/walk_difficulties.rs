//! Walk difficulty endpoints

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use super::{created, resource};
use crate::db::repos::WalkDifficultyDraft;
use crate::dto::{AddWalkDifficultyRequest, UpdateWalkDifficultyRequest, WalkDifficultyDto};
use crate::http::error::ApiError;
use crate::http::extractors::{ResourceId, ValidJson};
use crate::state::AppState;

const COLLECTION: &str = "WalkDifficulties";

async fn list_walk_difficulties(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDifficultyDto>>, ApiError> {
    let difficulties = state.walk_difficulties().get_all().await?;
    Ok(Json(
        difficulties
            .into_iter()
            .map(WalkDifficultyDto::from)
            .collect(),
    ))
}

async fn get_walk_difficulty(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<WalkDifficultyDto>, ApiError> {
    let difficulty = state
        .walk_difficulties()
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(WalkDifficultyDto::from(difficulty)))
}

async fn add_walk_difficulty(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AddWalkDifficultyRequest>,
) -> Result<Response, ApiError> {
    let difficulty = state
        .walk_difficulties()
        .add(WalkDifficultyDraft::from(req))
        .await?;
    tracing::info!(id = %difficulty.id, "walk difficulty created");

    Ok(created(
        COLLECTION,
        difficulty.id,
        WalkDifficultyDto::from(difficulty),
    ))
}

async fn update_walk_difficulty(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidJson(req): ValidJson<UpdateWalkDifficultyRequest>,
) -> Result<Json<WalkDifficultyDto>, ApiError> {
    let difficulty = state
        .walk_difficulties()
        .update(id, WalkDifficultyDraft::from(req))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(WalkDifficultyDto::from(difficulty)))
}

/// Cascades to every walk rated with this difficulty.
async fn delete_walk_difficulty(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<WalkDifficultyDto>, ApiError> {
    let difficulty = state
        .walk_difficulties()
        .delete(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(%id, "walk difficulty deleted");

    Ok(Json(WalkDifficultyDto::from(difficulty)))
}

/// Walk difficulty routes
pub fn router() -> Router<AppState> {
    resource(
        &[COLLECTION, "walkdifficulties"],
        get(list_walk_difficulties).post(add_walk_difficulty),
        get(get_walk_difficulty)
            .put(update_walk_difficulty)
            .delete(delete_walk_difficulty),
    )
}
