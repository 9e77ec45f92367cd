//! Response Normalizer — expands single-letter test-type codes into display labels.
//!
//! Pure and total: record order and code order are preserved, unknown codes pass
//! through unchanged.

use crate::models::assessment::{
    AssessmentRecord, NormalizedAssessment, NormalizedRecommendations, RecommendationResponse,
};

/// Fixed code → label table for assessment categories.
pub const TEST_TYPE_LABELS: [(&str, &str); 8] = [
    ("K", "Knowledge & Skills"),
    ("S", "Simulations"),
    ("C", "Competencies"),
    ("P", "Personality & Behaviour"),
    ("A", "Ability & Aptitude"),
    ("B", "Biodata & Situational Judgement"),
    ("D", "Development & 360"),
    ("E", "Assessment & Exercises"),
];

/// Returns the label for a test-type code, or the code itself when unknown.
pub fn test_type_label(code: &str) -> &str {
    TEST_TYPE_LABELS
        .iter()
        .find_map(|&(known, label)| (known == code).then_some(label))
        .unwrap_or(code)
}

pub fn normalize_assessment(record: AssessmentRecord) -> NormalizedAssessment {
    let test_type = record
        .test_type
        .iter()
        .map(|code| test_type_label(code).to_string())
        .collect();

    NormalizedAssessment {
        url: record.url,
        adaptive_support: record.adaptive_support,
        description: record.description,
        duration: record.duration,
        remote_support: record.remote_support,
        test_type,
    }
}

pub fn normalize(response: RecommendationResponse) -> NormalizedRecommendations {
    NormalizedRecommendations {
        recommended_assessments: response
            .recommended_assessments
            .into_iter()
            .map(normalize_assessment)
            .collect(),
    }
}
