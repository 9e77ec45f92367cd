mod config;
mod controller;
mod errors;
mod models;
mod normalizer;
mod recommender_client;
mod routes;
mod state;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::controller::QueryController;
use crate::recommender_client::RecommenderClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Assessment Recommender v{}", env!("CARGO_PKG_VERSION"));

    let client = RecommenderClient::new(config.recommender_api_url.clone())?;
    info!(
        "Recommender client initialized (endpoint: {}, timeout: {}ms)",
        client.endpoint(),
        config.request_timeout_ms
    );

    let controller = Arc::new(QueryController::new(
        Arc::new(client),
        config.request_timeout(),
        config.default_query.clone(),
    ));

    let state = AppState {
        controller,
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
