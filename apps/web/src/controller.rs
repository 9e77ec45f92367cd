//! Query Submission Controller — owns the query and the UI state, and drives
//! each submission through `Loading` to `Success` or `Failure`.
//!
//! State transitions are the only mutation path. Each submission takes a
//! sequence number and only the latest submission may apply its outcome, so
//! overlapping submissions resolve as latest-wins.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::models::assessment::NormalizedRecommendations;
use crate::normalizer::normalize;
use crate::recommender_client::{RecommendError, RecommendationApi};

/// The only failure text users ever see.
pub const FAILURE_MESSAGE: &str = "Onrender API service down, please try again later 😭";

pub const DEFAULT_QUERY: &str = "Looking to hire someone skilled in Python, SQL, and JavaScript";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(20_000);

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(NormalizedRecommendations),
    Failure(String),
}

/// Read-only view handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub query: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<NormalizedRecommendations>,
}

/// A submission that has entered `Loading` and is waiting to be run.
#[derive(Debug)]
pub struct Submission {
    sequence: u64,
    query: String,
}

struct Inner {
    query: String,
    state: UiState,
    /// Sequence number of the most recent submission.
    sequence: u64,
}

pub struct QueryController {
    api: Arc<dyn RecommendationApi>,
    timeout: Duration,
    inner: RwLock<Inner>,
}

impl QueryController {
    pub fn new(api: Arc<dyn RecommendationApi>, timeout: Duration, query: String) -> Self {
        Self {
            api,
            timeout,
            inner: RwLock::new(Inner {
                query,
                state: UiState::Idle,
                sequence: 0,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.read();
        let (is_loading, error, result) = match &inner.state {
            UiState::Idle => (false, None, None),
            UiState::Loading => (true, None, None),
            UiState::Success(result) => (false, None, Some(result.clone())),
            UiState::Failure(message) => (false, Some(message.clone()), None),
        };
        Snapshot {
            query: inner.query.clone(),
            is_loading,
            error,
            result,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.read().state, UiState::Loading)
    }

    pub fn set_query(&self, query: String) {
        self.write().query = query;
    }

    /// Enters `Loading`, dropping any previous result or error, and claims a
    /// new sequence number.
    pub fn begin(&self) -> Submission {
        Self::enter_loading(&mut self.write())
    }

    /// Same as `begin`, but only when no submission is in flight. The check
    /// and the transition happen under one write lock.
    pub fn begin_if_idle(&self) -> Option<Submission> {
        let mut inner = self.write();
        if matches!(inner.state, UiState::Loading) {
            return None;
        }
        Some(Self::enter_loading(&mut inner))
    }

    fn enter_loading(inner: &mut Inner) -> Submission {
        inner.sequence += 1;
        inner.state = UiState::Loading;
        Submission {
            sequence: inner.sequence,
            query: inner.query.clone(),
        }
    }

    /// Applies a terminal state if `sequence` is still the latest submission.
    fn finish(&self, sequence: u64, next: UiState) -> bool {
        let mut inner = self.write();
        if inner.sequence != sequence {
            debug!(
                "Discarding outcome of submission #{sequence}; #{} superseded it",
                inner.sequence
            );
            return false;
        }
        inner.state = next;
        true
    }

    /// Runs one submission of the current query to completion and returns
    /// the resulting snapshot.
    pub async fn submit(&self) -> Snapshot {
        let submission = self.begin();
        self.run(submission).await
    }

    /// Drives a submission started with `begin` to `Success` or `Failure`.
    pub async fn run(&self, submission: Submission) -> Snapshot {
        let Submission { sequence, query } = submission;
        let guard = LoadingGuard {
            controller: self,
            sequence,
            armed: true,
        };

        info!(
            "Submission #{sequence} started ({} chars)",
            query.chars().count()
        );

        let next = match self.fetch(&query).await {
            Ok(result) if result.is_empty() => {
                warn!("Submission #{sequence} returned no assessments");
                UiState::Success(result)
            }
            Ok(result) => {
                info!(
                    "Submission #{sequence} succeeded with {} assessments",
                    result.len()
                );
                UiState::Success(result)
            }
            Err(e) => {
                error!("Submission #{sequence} failed: {e}");
                UiState::Failure(FAILURE_MESSAGE.to_string())
            }
        };

        guard.complete(next);
        self.snapshot()
    }

    /// Races the API call against the abort timer. Whichever finishes first
    /// wins; the loser is dropped, which aborts an in-flight request.
    async fn fetch(&self, query: &str) -> Result<NormalizedRecommendations, RecommendError> {
        match tokio::time::timeout(self.timeout, self.api.recommend(query)).await {
            Ok(response) => response.map(normalize),
            Err(_) => {
                let timeout_ms = self.timeout.as_millis() as u64;
                warn!("Recommendation request aborted after {timeout_ms}ms");
                Err(RecommendError::Timeout { timeout_ms })
            }
        }
    }
}

/// Clears `Loading` exactly once. If the submission future is dropped before
/// completing, the drop finalizes the attempt as a failure.
struct LoadingGuard<'a> {
    controller: &'a QueryController,
    sequence: u64,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn complete(mut self, next: UiState) {
        self.armed = false;
        self.controller.finish(self.sequence, next);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("Submission #{} dropped before completion", self.sequence);
            self.controller
                .finish(self.sequence, UiState::Failure(FAILURE_MESSAGE.to_string()));
        }
    }
}
