// HTTP request handlers
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::{ApiError, ApiResult};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Initial page load: charts, table, metrics and layout
pub async fn get_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let compress = accepts_brotli(&headers);

    let service = &state.dashboard_service;
    let data = service.compute_dashboard_data(&mut service.rng())?;
    tracing::info!("Serving dashboard with {} charts", data.charts.len());

    json_response(&data, compress).await.map_err(ApiError::Encoding)
}

/// Refresh trigger keyed by the chart whose identity fires it
pub async fn refresh_charts(
    Path(chart_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let compress = accepts_brotli(&headers);

    let service = &state.dashboard_service;
    let view = service.refresh_charts(&chart_id, &mut service.rng())?;
    tracing::info!("Refreshed charts via trigger {}", chart_id);

    json_response(&view, compress).await.map_err(ApiError::Encoding)
}

/// Stream the dashboard progressively as length-prefixed frames
pub async fn stream_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let rx = state
        .streaming_service
        .stream_dashboard(state.dashboard_service.rng())
        .await;
    stream_from_receiver(rx, compress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::domain::dashboard::SALES_CHART_ID;
    use crate::infrastructure::config::{GeneratorSettings, RefreshSettings};
    use axum::http::{header, HeaderValue, StatusCode};
    use bytes::Buf;

    fn state() -> Arc<AppState> {
        let settings = GeneratorSettings {
            seed: Some(21),
            ..Default::default()
        };
        let dashboard = DashboardService::new(&settings, RefreshSettings::default()).unwrap();
        Arc::new(AppState::new(dashboard))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let response = get_dashboard(HeaderMap::new(), State(state())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["charts"].as_array().unwrap().len(), 3);
        assert_eq!(json["charts"][0]["traces"][0]["x"][0], "2024-01-01");
        assert_eq!(json["table"]["rows"].as_array().unwrap().len(), 5);
        assert_eq!(json["metrics"][3]["icon_name"], "fa-percentage");
        assert_eq!(json["layout"]["header"]["title"], "Analytics Dashboard");
    }

    #[tokio::test]
    async fn test_get_dashboard_compressed() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("br"));

        let response = get_dashboard(headers, State(state())).await.unwrap();
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }

    #[tokio::test]
    async fn test_refresh_charts() {
        let response = refresh_charts(
            Path(SALES_CHART_ID.to_string()),
            HeaderMap::new(),
            State(state()),
        )
        .await
        .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["charts"].as_array().unwrap().len(), 3);
        assert!(json.get("table").is_none());
    }

    #[tokio::test]
    async fn test_refresh_with_unknown_trigger() {
        let err = refresh_charts(
            Path("revenue-chart".to_string()),
            HeaderMap::new(),
            State(state()),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stream_dashboard_frames() {
        let response = stream_dashboard(HeaderMap::new(), State(state()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let mut body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let mut kinds = Vec::new();
        while body.has_remaining() {
            let length = body.get_u32() as usize;
            let frame = body.split_to(length);
            let value: serde_json::Value = serde_json::from_slice(&frame).unwrap();
            kinds.push(value["type"].as_str().unwrap().to_string());
        }

        assert_eq!(kinds, vec!["skeleton", "chart", "chart", "chart", "complete"]);
    }
}
