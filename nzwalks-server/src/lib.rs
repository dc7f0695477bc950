//! nzwalks-server: HTTP API for regions, walks and walk difficulties
//!
//! Repositories wrap PostgreSQL (or an in-memory store), DTOs are mapped
//! by hand, and axum handlers translate each request into one repository
//! call.

pub mod db;
pub mod dto;
pub mod http;
pub mod models;
pub mod state;

pub use state::AppState;
