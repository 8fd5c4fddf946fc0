use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use tracing::warn;

use pulsecheck_common::{FeedbackItem, RawFeedback};
use pulsecheck_triage::{digest, fixtures};

use crate::AppState;

/// Today's items, newest first. A read fault or an empty store substitutes
/// the canned fallback set — a digest over defaults beats a 500.
pub async fn load_today(state: &AppState) -> Vec<FeedbackItem> {
    match state.store.for_day(Utc::now().date_naive()).await {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => fixtures::fallback_items(),
        Err(e) => {
            warn!(error = %e, "Store read failed, serving fallback items");
            fixtures::fallback_items()
        }
    }
}

// --- Handlers ---

/// Seed the store: enrich a batch and persist it, at most once. The body
/// may supply the batch; an empty body uses the fixed sample batch.
pub async fn api_seed(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let batch = if body.is_empty() {
        fixtures::sample_feedback()
    } else {
        match serde_json::from_slice::<Vec<RawFeedback>>(&body) {
            Ok(batch) => batch,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": format!("Invalid request body: {e}") })),
                )
                    .into_response();
            }
        }
    };

    match state.seeder.seed(&batch).await {
        Ok(outcome) => Json(serde_json::json!({
            "seeded": outcome.seeded,
            "count": outcome.count,
        }))
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Seed request failed");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

pub async fn api_items(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let items = load_today(&state).await;
    Json(serde_json::json!({ "items": items }))
}

/// Enrichment preview over the sample batch. Nothing is persisted.
pub async fn api_analyze(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.enricher.analyze(&fixtures::sample_feedback()).await {
        Ok(analyses) => Json(serde_json::json!({ "analyses": analyses })).into_response(),
        Err(e) => {
            warn!(error = %e, "Analyze request failed");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

pub async fn api_digest(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let items = load_today(&state).await;
    Json(digest::aggregate(&items))
}
