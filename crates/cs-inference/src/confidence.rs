//! Confidence scoring for produced recommendations.
//!
//! A fixed per-career lookup, not a statistical estimate: the number of
//! responses analyzed never enters the score. That simplification is
//! deliberate and load-bearing for downstream display logic.

use cs_protocol::{RecommendationCore, RecommendationOrigin};

/// Per-career confidence table.
const CAREER_CONFIDENCE: [(&str, f64); 11] = [
    ("Entrepreneur", 0.92),
    ("Business Development Manager", 0.88),
    ("Sales Director", 0.85),
    ("Marketing Manager", 0.87),
    ("Technology Manager", 0.89),
    ("Product Manager", 0.86),
    ("UX Designer", 0.84),
    ("Team Leader", 0.86),
    ("HR Manager", 0.83),
    ("Career Counselor", 0.8),
    ("Data Analyst", 0.85),
];

/// Score for careers the table does not know.
const DEFAULT_CONFIDENCE: f64 = 0.85;

/// Score when the core carries too little to judge.
const UNINFORMATIVE_CONFIDENCE: f64 = 0.5;

/// Assign a confidence in [0, 1] to a recommendation.
pub fn score(core: &RecommendationCore, origin: RecommendationOrigin) -> f64 {
    if core.primary_career.is_empty() || core.alternative_careers.is_empty() {
        return UNINFORMATIVE_CONFIDENCE;
    }

    let confidence = CAREER_CONFIDENCE
        .iter()
        .find(|(career, _)| *career == core.primary_career)
        .map(|(_, confidence)| *confidence)
        .unwrap_or(DEFAULT_CONFIDENCE);

    tracing::debug!(
        career = %core.primary_career,
        confidence,
        origin = ?origin,
        "scored recommendation"
    );
    confidence
}
