use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub launches: usize,
    pub dataset: String,
}

pub async fn root() -> &'static str {
    "Launch Dashboard API v0.1"
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let dataset = state.dashboard.dataset();
    Json(StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        launches: dataset.len(),
        dataset: dataset.fingerprint().to_string(),
    })
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
