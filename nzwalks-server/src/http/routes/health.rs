//! Liveness probe for the NZWalks API
//!
//! Reports the service name and crate version; it never touches the store,
//! so it answers even while the database is unreachable.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "nzwalks",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /health`, mounted outside the resource routers.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_service_and_version() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "nzwalks");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
