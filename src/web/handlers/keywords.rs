// GET /api/keywords — live extraction with query-param knobs.
//
// Fetches the configured feeds and runs the ranking pipeline without
// touching the stored table. Every knob defaults to the documented contract
// value, so `GET /api/keywords` with no parameters is the stock extraction.

use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::feeds::client::FeedClient;
use crate::normalize::simple::SimpleTokenizer;
use crate::normalize::stopwords;
use crate::rank::{RankParams, WordRank};
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct KeywordsQuery {
    min_count: Option<u32>,
    max_length: Option<usize>,
    beta: Option<f64>,
    max_iter: Option<usize>,
    top_n: Option<usize>,
}

pub async fn get_keywords(
    State(state): State<AppState>,
    Query(query): Query<KeywordsQuery>,
) -> impl IntoResponse {
    if let Err(e) = state.config.require_feeds() {
        return api_error(StatusCode::BAD_REQUEST, &e.to_string());
    }

    let tokenizer = match stopwords::load(state.config.stopwords_path.as_deref())
        .and_then(SimpleTokenizer::new)
    {
        Ok(t) => t,
        Err(e) => {
            return api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to build tokenizer: {e}"),
            )
        }
    };

    let client = match FeedClient::new() {
        Ok(c) => c,
        Err(e) => return api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };

    let documents = client
        .fetch_all(
            &state.config.feeds,
            state.config.fetch_concurrency,
            Duration::from_secs(state.config.fetch_timeout_secs),
        )
        .await;

    let defaults = RankParams::default();
    let params = RankParams {
        min_count: query.min_count.unwrap_or(defaults.min_count),
        max_length: query.max_length.unwrap_or(defaults.max_length),
        beta: query.beta.unwrap_or(defaults.beta),
        max_iter: query.max_iter.unwrap_or(defaults.max_iter),
        top_n: query.top_n.or(defaults.top_n),
    };

    let extraction = WordRank::new(params).extract(&documents, &tokenizer);

    let body: Vec<serde_json::Value> = extraction
        .keywords
        .iter()
        .map(|kw| {
            serde_json::json!({
                "keyword": kw.text,
                "score": kw.score,
                "link": kw.link,
            })
        })
        .collect();

    Json(serde_json::json!({
        "documents": documents.len(),
        "converged": extraction.converged,
        "keywords": body,
    }))
    .into_response()
}
