// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing; RUST_LOG wins over the debug toggle
    let default_level = if config.server.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sales_dashboard={},tower_http={}",
            default_level, default_level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create services (application layer); the product table is built here, once
    let dashboard_service = DashboardService::new(&config.generator, config.refresh.clone())?;
    if config.refresh.rebuild_table {
        tracing::info!("Product table will be rebuilt on every refresh");
    }

    // Create application state
    let state = Arc::new(AppState::new(dashboard_service));

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting sales-dashboard service on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
