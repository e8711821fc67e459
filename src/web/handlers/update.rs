// POST /api/update — trigger a background update cycle.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::rank::RankParams;
use crate::web::{api_error, update_job, AppState};

pub async fn trigger_update(State(state): State<AppState>) -> impl IntoResponse {
    {
        let mut status = state.update_status.write().await;
        if status.running {
            return api_error(StatusCode::CONFLICT, "An update cycle is already running");
        }
        status.running = true;
        status.started_at = Some(Utc::now().to_rfc3339());
        status.progress_message = "Starting…".to_string();
        status.last_error = None;
    }

    update_job::launch_update(
        state.config.clone(),
        state.db.clone(),
        state.update_status.clone(),
        RankParams::default(),
    );

    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "started": true })),
    )
        .into_response()
}
