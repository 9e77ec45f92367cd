//! Simulated recommendation endpoint for controller and route tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{RecommendError, RecommendationApi};
use crate::models::assessment::{AssessmentRecord, RecommendationResponse, Support};

#[derive(Clone)]
pub enum Behavior {
    Respond(RecommendationResponse),
    Status(u16),
    Malformed,
    /// Never resolves. Dropping the pending call sets `StubApi::aborted`.
    Hang,
    /// Resolves with the payload once the gate is notified.
    Gated(Arc<Notify>, RecommendationResponse),
}

pub struct StubApi {
    behavior: Mutex<Behavior>,
    pub calls: AtomicUsize,
    pub aborted: Arc<AtomicBool>,
}

struct AbortFlag(Arc<AtomicBool>);

impl Drop for AbortFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl StubApi {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            calls: AtomicUsize::new(0),
            aborted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set(&self, behavior: Behavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn was_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendationApi for StubApi {
    async fn recommend(
        &self,
        _job_description: &str,
    ) -> Result<RecommendationResponse, RecommendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            Behavior::Respond(payload) => Ok(payload),
            Behavior::Status(status) => Err(RecommendError::Status { status }),
            Behavior::Malformed => {
                Err(serde_json::from_str::<RecommendationResponse>("{\"recommended").unwrap_err().into())
            }
            Behavior::Hang => {
                let _flag = AbortFlag(self.aborted.clone());
                std::future::pending::<()>().await;
                unreachable!()
            }
            Behavior::Gated(gate, payload) => {
                gate.notified().await;
                Ok(payload)
            }
        }
    }
}

pub fn record(description: &str, codes: &[&str]) -> AssessmentRecord {
    AssessmentRecord {
        url: format!("https://example.com/{}", description.replace(' ', "-")),
        adaptive_support: Support::Yes,
        description: description.to_string(),
        duration: 20,
        remote_support: Support::No,
        test_type: codes.iter().map(|c| c.to_string()).collect(),
    }
}

/// The two-record payload used across tests: `["K"]` then `["S", "C"]`.
pub fn two_record_payload() -> RecommendationResponse {
    RecommendationResponse {
        recommended_assessments: vec![
            record("Python (New)", &["K"]),
            record("Automata Pro", &["S", "C"]),
        ],
    }
}
