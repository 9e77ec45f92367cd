//! Axum route handlers for the recommender page and its JSON mirror.

use axum::{
    extract::State,
    http::Uri,
    response::{Html, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tracing::info;

use crate::controller::Snapshot;
use crate::errors::AppError;
use crate::state::AppState;
use crate::view::render_page;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QueryForm {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SetQueryRequest {
    pub query: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Page
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_page(&state.controller.snapshot())?;
    Ok(Html(html))
}

/// POST /
///
/// Stores the submitted query and starts a submission in the background, then
/// redirects back to the page, which shows the loading state until it lands.
/// A submit while a request is already in flight only updates the query.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(form): Form<QueryForm>,
) -> Redirect {
    state.controller.set_query(form.query);

    // Enter Loading before redirecting so the follow-up GET never renders
    // the previous outcome.
    match state.controller.begin_if_idle() {
        Some(submission) => {
            let controller = state.controller.clone();
            tokio::spawn(async move {
                controller.run(submission).await;
            });
        }
        None => info!("Submission already in flight; ignoring form submit"),
    }

    Redirect::to("/")
}

// ────────────────────────────────────────────────────────────────────────────
// JSON API
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/state
pub async fn handle_get_state(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.controller.snapshot())
}

/// PUT /api/v1/query
pub async fn handle_set_query(
    State(state): State<AppState>,
    Json(request): Json<SetQueryRequest>,
) -> Json<Snapshot> {
    state.controller.set_query(request.query);
    Json(state.controller.snapshot())
}

/// POST /api/v1/submit
///
/// Runs a submission of the current query to completion and returns the final
/// snapshot. The outcome is carried in the snapshot, so this always answers 200.
pub async fn handle_submit(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.controller.submit().await)
}

pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
