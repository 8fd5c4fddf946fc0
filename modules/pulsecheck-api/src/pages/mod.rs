use std::sync::Arc;

use axum::{extract::State, response::Html};

use pulsecheck_triage::digest;

use crate::components::render_digest;
use crate::rest::load_today;
use crate::AppState;

/// The digest as a rendered document. Built from the same `aggregate`
/// output as `/api/digest`; the two presentations never diverge in data.
pub async fn digest_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let items = load_today(&state).await;
    let view = digest::aggregate(&items);
    Html(render_digest(view))
}
