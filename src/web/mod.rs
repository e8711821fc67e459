// Web server — Axum-based JSON API over the ranking pipeline.
//
// All routes serve JSON. The update cycle runs as a background task so the
// trigger endpoint returns immediately; only one cycle runs at a time.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::db::Database;

pub mod handlers;
pub mod update_job;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub config: Arc<Config>,
    pub update_status: Arc<RwLock<update_job::UpdateStatus>>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    db: Arc<dyn Database>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        db,
        config: Arc::new(config),
        update_status: Arc::new(RwLock::new(update_job::UpdateStatus::default())),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Headliner API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/rankings", get(handlers::rankings::get_rankings))
        .route("/api/keywords", get(handlers::keywords::get_keywords))
        .route("/api/update", post(handlers::update::trigger_update))
        .route("/api/status", get(handlers::status::get_status))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deployment health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
