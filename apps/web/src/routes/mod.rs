pub mod handlers;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route(
            "/",
            get(handlers::handle_page).post(handlers::handle_form_submit),
        )
        // JSON mirror of the controller
        .route("/api/v1/state", get(handlers::handle_get_state))
        .route("/api/v1/query", put(handlers::handle_set_query))
        .route("/api/v1/submit", post(handlers::handle_submit))
        .fallback(handlers::handle_not_found)
        .with_state(state)
}
