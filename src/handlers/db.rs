use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates;

/// GET /db handler - record a tick and render everything recorded so far
///
/// Deliberately not idempotent: every call inserts a row, so the rendered
/// list only ever grows.
pub async fn db_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let ticks = state.store.tick().await?;

    let results: Vec<String> = ticks
        .iter()
        .map(|tick| format!("Read from DB: {tick}"))
        .collect();

    let model = json!({ "results": results });
    templates::render_page("db", &model, &headers)
}
