use std::net::SocketAddr;

use tallybook_core::services::{init_logging, EntryPoint};

use crate::{handlers::ServiceState, router::create_router};

pub const DEFAULT_LOG_DIRECTIVE: &str = "tallybook_api=debug,tallybook_core=info,tower_http=debug";

/// Run the API server until Ctrl-C
pub async fn run_server(service: ServiceState, host: &str, port: u16) -> anyhow::Result<()> {
    init_logging(EntryPoint::Server, DEFAULT_LOG_DIRECTIVE);

    let app = create_router(service);

    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
