// GET /api/status — update-job state plus stored-table stats.
//
// Combines the live UpdateStatus (running, progress) with DB-derived counts
// so the dashboard can render one round-trip.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let update_status = state.update_status.read().await;

    let keyword_count = state.db.ranking_count().await.unwrap_or(0);
    let last_update_at = state
        .db
        .get_update_state("last_update_at")
        .await
        .unwrap_or(None);

    Json(serde_json::json!({
        "update_running": update_status.running,
        "started_at": update_status.started_at,
        "progress_message": update_status.progress_message,
        "last_error": update_status.last_error,
        "keyword_count": keyword_count,
        "last_update_at": last_update_at,
    }))
}
