use serde::{Deserialize, Serialize};

/// "Yes"/"No" flag used by the recommender for adaptive and remote support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Support {
    Yes,
    No,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire shape (as received from the recommendation service)
// ────────────────────────────────────────────────────────────────────────────

/// Request body sent to the recommendation endpoint.
#[derive(Debug, Serialize)]
pub struct RecommendRequest<'a> {
    pub job_description: &'a str,
}

/// A single recommended assessment exactly as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub url: String,
    pub adaptive_support: Support,
    pub description: String,
    /// Minutes.
    pub duration: u32,
    pub remote_support: Support,
    /// Single-character category codes, e.g. `["K", "A"]`.
    pub test_type: Vec<String>,
}

/// Ranked recommendations. The API's order is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommended_assessments: Vec<AssessmentRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Display shape (after normalization)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAssessment {
    pub url: String,
    pub adaptive_support: Support,
    pub description: String,
    pub duration: u32,
    pub remote_support: Support,
    /// Human-readable category labels, same order as the wire codes.
    pub test_type: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecommendations {
    pub recommended_assessments: Vec<NormalizedAssessment>,
}

impl NormalizedRecommendations {
    pub fn len(&self) -> usize {
        self.recommended_assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommended_assessments.is_empty()
    }
}
