// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, refresh_charts, stream_dashboard};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Compression is done per response in infrastructure::http_response, so no
// CompressionLayer here (it would double-encode the framed stream).
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/stream", get(stream_dashboard))
        .route("/api/refresh/:chart_id", post(refresh_charts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
