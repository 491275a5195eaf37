use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{self, ServiceState};

/// Create the main application router with all API endpoints
pub fn create_router(service: ServiceState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Reports
        .route("/api/reports", get(handlers::get_reports))
        .with_state(service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
