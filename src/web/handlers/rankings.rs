// GET /api/rankings — the persisted keyword ranking table.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::{api_error, AppState};

pub async fn get_rankings(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.get_rankings().await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Failed to read rankings: {e}"),
        ),
    }
}
