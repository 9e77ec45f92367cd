use std::sync::Arc;

use crate::config::Config;
use crate::controller::QueryController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one controller instance; every page and API call sees the same UI state.
    pub controller: Arc<QueryController>,
    pub config: Config,
}
