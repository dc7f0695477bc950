//! Route handlers organized by resource

pub mod health;
pub mod regions;
pub mod walk_difficulties;
pub mod walks;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;

/// Mount a collection path and its `/{id}` item path under every alias.
///
/// The first alias is the canonical one used in `Location` headers.
fn resource(
    aliases: &[&str],
    collection: MethodRouter<AppState>,
    item: MethodRouter<AppState>,
) -> Router<AppState> {
    aliases.iter().fold(Router::new(), |router, alias| {
        router
            .route(&format!("/{alias}"), collection.clone())
            .route(&format!("/{alias}/{{id}}"), item.clone())
    })
}

/// 201 with a `Location` pointing at the new resource.
fn created<T: Serialize>(collection: &str, id: Uuid, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/{collection}/{id}"))],
        Json(body),
    )
        .into_response()
}
