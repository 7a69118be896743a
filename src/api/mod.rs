//! HiveMap HTTP Server
//!
//! Serves the dashboard page and its update endpoint, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard page
//! - `GET /api/v1/layout` - Initial layout
//! - `GET /api/v1/update?year=2016` - Status text and map figure
//! - `GET /api/v1/dataset` - Dataset summary
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use hivemap::api::{serve, AppState};
//! use hivemap::config::ServerConfig;
//! use hivemap::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::load("bees.csv".as_ref())?);
//!     let config = ServerConfig::default();
//!
//!     serve(AppState::new(dataset, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Endpoint the dashboard page calls on each selection
pub const UPDATE_PATH: &str = "/api/v1/update";

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/layout", get(routes::dashboard::get_layout))
        .route("/update", get(routes::dashboard::update_view))
        .route("/dataset", get(routes::dashboard::dataset_summary));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HiveMap dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("HiveMap shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, RawRecord};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Dataset::from_raw(vec![
            RawRecord::new("California", "6", "Varroa_mites", 2015, "CA", 10.0),
            RawRecord::new("California", "6", "Varroa_mites", 2015, "CA", 20.0),
            RawRecord::new("Texas", "48", "OtherPest", 2015, "TX", 50.0),
            RawRecord::new("Oregon", "41", "Varroa_mites", 2017, "OR", 18.5),
        ]);

        build_router(AppState::new(Arc::new(dataset), ServerConfig::default()))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = get(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("id=\"select_year\""));
        assert!(html.contains(UPDATE_PATH));
    }

    #[tokio::test]
    async fn test_update_filters_by_year_and_category() {
        let (status, json) = get_json(create_test_app(), "/api/v1/update?year=2015").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status_text"], "The year chosen is 2015");
        assert_eq!(json["figure"]["data"][0]["locations"], serde_json::json!(["CA"]));
        assert_eq!(json["figure"]["data"][0]["z"], serde_json::json!([15.0]));
    }

    #[tokio::test]
    async fn test_update_defaults_to_2015() {
        let (status, json) = get_json(create_test_app(), "/api/v1/update").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status_text"], "The year chosen is 2015");
    }

    #[tokio::test]
    async fn test_update_unknown_year_is_empty() {
        let (status, json) = get_json(create_test_app(), "/api/v1/update?year=1999").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["figure"]["data"][0]["locations"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_update_invalid_year() {
        let (status, json) = get_json(create_test_app(), "/api/v1/update?year=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_layout() {
        let (status, json) = get_json(create_test_app(), "/api/v1/layout").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dropdown"]["value"], 2015);
        assert_eq!(json["dropdown"]["options"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_dataset_summary() {
        let (status, json) = get_json(create_test_app(), "/api/v1/dataset").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["records"], 3);
        assert_eq!(json["years"], serde_json::json!([2015, 2017]));
    }

    #[tokio::test]
    async fn test_health_routes() {
        let (status, _) = get(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = get_json(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 3);
        assert_eq!(json["listen_addr"], "127.0.0.1:8050");
    }
}
