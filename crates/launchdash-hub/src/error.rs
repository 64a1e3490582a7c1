use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use launchdash_core::error::DashError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Dashboard(#[from] DashError),

    #[error("Not Found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Dashboard(e @ DashError::InvalidRange { .. }) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Dashboard(e) => {
                tracing::error!("Dashboard Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
