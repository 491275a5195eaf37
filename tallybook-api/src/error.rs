use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Report generation failed: {0}")]
    Report(#[from] tallybook_core::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The cause is logged, never sent to the client
        tracing::error!(error = %self, "request failed");

        let body = Json(json!({
            "error": "Internal server error",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
