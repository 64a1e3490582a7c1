pub mod charts;
pub mod system;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(system::root))
        .route("/health", axum::routing::get(system::health))
}

pub fn chart_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/controls", axum::routing::get(charts::controls))
        .route("/charts", axum::routing::get(charts::figures))
        .route("/charts/pie", axum::routing::get(charts::pie))
        .route("/charts/scatter", axum::routing::get(charts::scatter))
}
