//! HTTP server for the housing/road analysis API.
//!
//! # API Endpoints
//!
//! | Method | Path                          | Description                    |
//! |--------|-------------------------------|--------------------------------|
//! | GET    | `/health`                     | Health check                   |
//! | GET    | `/api/housing-road-analysis`  | District records and summary   |
//! | GET    | `/api/logs`                   | SSE stream for pipeline logs   |

use axum::{
    extract::State,
    http::{header, Method},
    response::{sse::Event, Json, Sse},
    routing::get,
    Router,
};
use futures::stream::Stream;
use std::{convert::Infallible, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::LOG_BROADCASTER;
use super::types::{AnalysisResponse, HealthResponse};
use crate::config::AppConfig;
use crate::error::{LoadError, ServerError, ServerResult};
use crate::transform::pipeline::load_analysis;

/// Shared, read-only server state.
pub type AppState = Arc<AppConfig>;

/// Build the application router for a given configuration.
pub fn router(config: AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE, header::CACHE_CONTROL]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/housing-road-analysis", get(housing_road_analysis))
        .route("/api/logs", get(sse_logs))
        .layer(cors)
        .with_state(Arc::new(config))
}

/// Start the HTTP server
pub async fn start_server(config: AppConfig) -> ServerResult<()> {
    let addr = config.socket_addr();

    tracing::info!("Serving data from {}", config.data_file.display());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Housing road server running on http://{}", addr);
    tracing::info!("  GET /api/housing-road-analysis - District data and summary");
    tracing::info!("  GET /api/logs                  - SSE log stream");
    tracing::info!("  GET /health                    - Health check");

    axum::serve(listener, router(config)).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(config): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "housing-road".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_file: config.data_file.display().to_string(),
    })
}

/// District records with summary statistics.
async fn housing_road_analysis(
    State(config): State<AppState>,
) -> Result<AnalysisResponse, LoadError> {
    let payload = load_analysis(&config.data_file).await?;
    Ok(AnalysisResponse(payload))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::{json, Value};
    use std::fs;

    async fn call(config: AppConfig) -> (StatusCode, Option<String>, Value) {
        let response = housing_road_analysis(State(Arc::new(config)))
            .await
            .into_response();
        let status = response.status();
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, cache, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_analysis_endpoint_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("housing_road_analysis.csv");
        fs::write(
            &path,
            "District,Avg_Density,Total_Housing_Units\nNorth,100,10\nSouth,N/A,5\n",
        )
        .unwrap();

        let (status, cache, body) = call(AppConfig::new(&path)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("s-maxage=300, stale-while-revalidate=300"));
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][1]["Avg_Density"], json!("N/A"));
        assert_eq!(body["summary"]["totalDistricts"], json!(2));
        assert_eq!(body["summary"]["avgDensity"], json!(50));
        assert_eq!(body["summary"]["totalHousingUnits"], json!(15));
    }

    #[tokio::test]
    async fn test_analysis_endpoint_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (status, cache, body) = call(AppConfig::new(dir.path().join("nope.csv"))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(cache.is_none());
        assert_eq!(body, json!({ "error": "Data file not found" }));
    }

    #[tokio::test]
    async fn test_analysis_endpoint_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _, body) = call(AppConfig::new(dir.path())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Data load failed" }));
    }

    #[tokio::test]
    async fn test_health_reports_data_file() {
        let Json(body) = health(State(Arc::new(AppConfig::new("data/d.csv")))).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.data_file, "data/d.csv");
    }
}
