//! Completion payload parser.
//!
//! The remote service is asked for JSON but routinely answers with prose,
//! markdown-ish text, or nothing usable. Three ordered attempts, first
//! success wins: strict JSON, loose section-based text, then a literal
//! known-good default. The winning tier is recorded so callers (and tests)
//! can observe which path produced the value.

use std::collections::BTreeMap;

use cs_protocol::{Explanations, RecommendationCore};

/// Literal placeholders used when a text payload names no alternatives.
const PLACEHOLDER_ALTERNATIVES: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Which parsing attempt produced the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTier {
    /// Strict structural JSON parse.
    Json,
    /// Loose blank-line-section text parse.
    Text,
    /// The hard-coded last-resort recommendation.
    Default,
}

/// A parsed recommendation plus the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecommendation {
    pub core: RecommendationCore,
    pub tier: ParseTier,
}

/// Extract a structured recommendation from a raw completion payload.
///
/// Never fails: any input, including empty or binary garbage, yields a
/// structurally valid [`RecommendationCore`].
pub fn parse(raw: &str) -> ParsedRecommendation {
    if let Some(core) = try_parse_json(raw) {
        return ParsedRecommendation {
            core,
            tier: ParseTier::Json,
        };
    }
    if let Some(core) = try_parse_text(raw) {
        tracing::debug!("payload is not well-formed JSON, text parse succeeded");
        return ParsedRecommendation {
            core,
            tier: ParseTier::Text,
        };
    }
    tracing::warn!(payload_len = raw.len(), "unusable completion payload, using default recommendation");
    ParsedRecommendation {
        core: default_recommendation(),
        tier: ParseTier::Default,
    }
}

/// Attempt 1: the payload is the JSON object we asked the service to emit.
/// Requires all three top-level keys with correct shapes; a blank primary
/// career is not usable.
fn try_parse_json(raw: &str) -> Option<RecommendationCore> {
    let core: RecommendationCore = serde_json::from_str(raw).ok()?;
    if core.primary_career.trim().is_empty() {
        return None;
    }
    Some(core)
}

/// Attempt 2: the payload is prose with blank-line-delimited sections.
fn try_parse_text(raw: &str) -> Option<RecommendationCore> {
    let sections: Vec<&str> = raw.split("\n\n").collect();

    let primary_section = sections
        .iter()
        .find(|section| section.to_lowercase().contains("primary career:"))?;
    let (_, after_colon) = primary_section.split_once(':')?;
    let primary_career = after_colon.trim();
    if primary_career.is_empty() {
        return None;
    }

    let alternative_careers = sections
        .iter()
        .find(|section| section.to_lowercase().contains("alternative careers"))
        .map(|section| {
            section
                .lines()
                .filter_map(|line| line.split_once(':'))
                .map(|(_, name)| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|names| !names.is_empty())
        .unwrap_or_else(|| {
            PLACEHOLDER_ALTERNATIVES
                .iter()
                .map(|name| name.to_string())
                .collect()
        });

    let primary_explanation = sections
        .iter()
        .find(|section| {
            let lower = section.to_lowercase();
            lower.contains("explanation") && lower.contains("primary")
        })
        .map(|section| section.trim().to_string())
        .unwrap_or_else(|| "Based on your responses".into());

    let alternative_explanations: BTreeMap<String, String> = alternative_careers
        .iter()
        .enumerate()
        .map(|(i, career)| (career.clone(), format!("Alternative career option {}", i + 1)))
        .collect();

    Some(RecommendationCore {
        primary_career: primary_career.to_string(),
        alternative_careers,
        explanations: Explanations {
            primary_career: primary_explanation,
            alternative_careers: alternative_explanations,
        },
    })
}

/// Attempt 3: the known-good fallback triple, so the "never raises" contract
/// holds for any return path.
fn default_recommendation() -> RecommendationCore {
    RecommendationCore {
        primary_career: "Career Analyst".into(),
        alternative_careers: vec![
            "Data Scientist".into(),
            "Business Analyst".into(),
            "Marketing Specialist".into(),
        ],
        explanations: Explanations {
            primary_career: "Based on your assessment responses".into(),
            alternative_careers: BTreeMap::from([
                (
                    "Data Scientist".into(),
                    "Alternative option based on analytical skills".into(),
                ),
                (
                    "Business Analyst".into(),
                    "Alternative option based on problem-solving skills".into(),
                ),
                (
                    "Marketing Specialist".into(),
                    "Alternative option based on communication skills".into(),
                ),
            ]),
        },
    }
}
