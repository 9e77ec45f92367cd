//! Recommender client — the single point of entry for calls to the remote
//! assessment recommendation service.
//!
//! No other module may talk to the recommendation endpoint directly; the
//! controller only sees the `RecommendationApi` trait.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::assessment::{RecommendRequest, RecommendationResponse};

#[cfg(test)]
pub mod stub;

pub const DEFAULT_ENDPOINT: &str = "https://api-g7q1.onrender.com/recommend";

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with {status}")]
    Status { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request aborted after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// The recommendation service seam. The controller holds an
/// `Arc<dyn RecommendationApi>` so tests can simulate the endpoint.
///
/// Dropping the returned future must abort the request.
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn recommend(&self, job_description: &str)
        -> Result<RecommendationResponse, RecommendError>;
}

/// reqwest-backed client for the `/recommend` endpoint.
#[derive(Clone)]
pub struct RecommenderClient {
    client: Client,
    endpoint: String,
}

impl RecommenderClient {
    /// The client carries no timeout of its own; the controller races each
    /// call against its abort timer.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RecommendError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationApi for RecommenderClient {
    async fn recommend(
        &self,
        job_description: &str,
    ) -> Result<RecommendationResponse, RecommendError> {
        let response = self
            .client
            .post(&self.endpoint)
            // `.json` also sets `Content-Type: application/json`
            .json(&RecommendRequest { job_description })
            .send()
            .await?;

        let status = response.status();
        // Non-2xx is a failure whatever the body says; don't try to parse it.
        if !status.is_success() {
            return Err(RecommendError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: RecommendationResponse = serde_json::from_slice(&body)?;

        debug!(
            "Recommendation call succeeded: {} assessments, {} bytes",
            parsed.recommended_assessments.len(),
            body.len()
        );

        Ok(parsed)
    }
}
