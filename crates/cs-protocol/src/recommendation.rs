use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Justification text attached to a recommendation.
///
/// The map is ordered so serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanations {
    /// Why the primary career fits.
    pub primary_career: String,
    /// Career name → explanation, one entry per alternative career.
    #[serde(default)]
    pub alternative_careers: BTreeMap<String, String>,
}

/// The recommendation payload both classifiers produce: primary career,
/// alternatives, and explanations. Confidence and origin are attached later
/// by the orchestrator (see [`RecommendationResult`]).
///
/// Wire names are camelCase — the shape the remote completion service is
/// instructed to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCore {
    pub primary_career: String,
    pub alternative_careers: Vec<String>,
    pub explanations: Explanations,
}

impl RecommendationCore {
    /// Restore the structural invariants a well-formed recommendation must
    /// hold: alternatives deduplicated (order preserved), the primary career
    /// never listed among the alternatives, and the explanation map keyed by
    /// exactly the alternative set.
    ///
    /// Cores produced by the fallback engine or the parser's literal default
    /// already satisfy these, so for them this is an identity. Remote
    /// payloads and loosely text-parsed payloads may not.
    pub fn sanitized(mut self) -> Self {
        let mut seen = Vec::new();
        for career in std::mem::take(&mut self.alternative_careers) {
            if career != self.primary_career && !seen.contains(&career) {
                seen.push(career);
            }
        }
        self.alternative_careers = seen;

        let mut explanations = std::mem::take(&mut self.explanations.alternative_careers);
        self.explanations.alternative_careers = self
            .alternative_careers
            .iter()
            .enumerate()
            .map(|(i, career)| {
                let text = explanations
                    .remove(career)
                    .unwrap_or_else(|| format!("Alternative career option {}", i + 1));
                (career.clone(), text)
            })
            .collect();
        self
    }
}

/// Which classifier produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationOrigin {
    /// Remote completion service.
    Remote,
    /// Local heuristic engine.
    Fallback,
}

/// Final recommendation for one completed assessment.
///
/// Created once per assessment run and never mutated; consumed by the
/// results-presentation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Unique run ID (UUIDv7 for time-sortability).
    pub assessment_id: Uuid,
    pub primary_career: String,
    pub alternative_careers: Vec<String>,
    pub explanations: Explanations,
    /// Confidence in [0, 1].
    pub confidence: f64,
    pub origin: RecommendationOrigin,
    /// Disclaimer set on the fallback path only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResult {
    /// Assemble a result from a scored core, stamping the run ID and time.
    pub fn new(
        core: RecommendationCore,
        confidence: f64,
        origin: RecommendationOrigin,
        note: Option<String>,
    ) -> Self {
        Self {
            assessment_id: Uuid::now_v7(),
            primary_career: core.primary_career,
            alternative_careers: core.alternative_careers,
            explanations: core.explanations,
            confidence,
            origin,
            note,
            generated_at: Utc::now(),
        }
    }
}
