use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use tallybook_core::reports::ReportQuery;
use tallybook_core::services::ReportService;

use crate::{error::ApiError, Result};

pub type ServiceState = Arc<ReportService>;

/// GET /api/reports?range=..&from=..&to=..
/// Returns the reports snapshot for the requested window
pub async fn get_reports(
    State(service): State<ServiceState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse> {
    // File-backed stores block on disk reads
    let snapshot = tokio::task::spawn_blocking(move || service.generate(&query))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(snapshot))
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "tallybook-api"
    }))
}
