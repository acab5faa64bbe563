//! Assessment pipeline — normalize, classify remotely, parse, fall back,
//! score.
//!
//! One remote attempt per assessment: any [`ClassificationFailure`] routes
//! straight to the heuristic engine, and the endpoint is never called twice
//! for one submission. The pipeline itself never fails outward; remote
//! trouble is visible to the result consumer only through `origin` and
//! `note`.

use async_trait::async_trait;

use cs_protocol::{FormattedResponse, RecommendationOrigin, RecommendationResult, Response};

use crate::error::ClassificationFailure;
use crate::normalize::normalize;
use crate::remote::{CompletionConfig, RemoteClassifier};
use crate::{confidence, fallback, parser};

/// Disclaimer attached to fallback-derived results.
pub const FALLBACK_NOTE: &str = "These are insights based on your assessment responses.";

/// Seam over the remote completion call so the pipeline can be exercised
/// without a live endpoint.
#[async_trait]
pub trait RemoteClassify: Send + Sync {
    /// Submit formatted responses and return the raw completion text.
    async fn classify(
        &self,
        formatted: &[FormattedResponse],
    ) -> Result<String, ClassificationFailure>;
}

#[async_trait]
impl RemoteClassify for RemoteClassifier {
    async fn classify(
        &self,
        formatted: &[FormattedResponse],
    ) -> Result<String, ClassificationFailure> {
        RemoteClassifier::classify(self, formatted).await
    }
}

/// The inference pipeline for one assessment submission.
pub struct RecommendationPipeline {
    remote: Box<dyn RemoteClassify>,
}

impl RecommendationPipeline {
    pub fn new(remote: Box<dyn RemoteClassify>) -> Self {
        Self { remote }
    }

    /// Pipeline backed by the real completion endpoint.
    pub fn with_config(config: CompletionConfig) -> Self {
        Self::new(Box::new(RemoteClassifier::new(config)))
    }

    /// Run one assessment to a final recommendation.
    ///
    /// Infallible: parser-level defaults count as valid remote results, and
    /// every remote-layer failure is absorbed into the fallback path.
    pub async fn recommend(&self, responses: &[Response]) -> RecommendationResult {
        let formatted = normalize(responses);

        let (core, origin, note) = match self.remote.classify(&formatted).await {
            Ok(raw) => {
                let parsed = parser::parse(&raw);
                tracing::debug!(tier = ?parsed.tier, "remote payload parsed");
                (parsed.core, RecommendationOrigin::Remote, None)
            }
            Err(failure) => {
                tracing::warn!(
                    error = %failure,
                    "remote classification failed, using heuristic fallback"
                );
                (
                    fallback::classify(&formatted),
                    RecommendationOrigin::Fallback,
                    Some(FALLBACK_NOTE.to_string()),
                )
            }
        };

        let core = core.sanitized();
        let confidence = confidence::score(&core, origin);
        RecommendationResult::new(core, confidence, origin, note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use cs_protocol::{Question, QuestionCategory, TraitTag};

    /// Mock remote that returns a fixed payload (or failure) and counts
    /// calls.
    struct MockRemote {
        result: Result<String, ClassificationFailure>,
        calls: Arc<AtomicUsize>,
    }

    impl MockRemote {
        fn payload(raw: &str) -> Self {
            Self {
                result: Ok(raw.into()),
                calls: Arc::default(),
            }
        }

        fn failure(failure: ClassificationFailure) -> Self {
            Self {
                result: Err(failure),
                calls: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl RemoteClassify for MockRemote {
        async fn classify(
            &self,
            _formatted: &[FormattedResponse],
        ) -> Result<String, ClassificationFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn answered(text: &str, options: &[&str], picks: &[&str]) -> Response {
        let mut response = Response::new(Question {
            id: format!("q-{}", text.len()),
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            category: QuestionCategory::CareerImpact,
            trait_tag: TraitTag::Strategic,
        });
        for pick in picks {
            assert!(response.toggle(pick));
        }
        response
    }

    fn business_heavy_responses() -> Vec<Response> {
        [
            (
                "Which subjects did you find most engaging in school?",
                "Business and Commerce related subjects",
            ),
            (
                "Which industry sectors interest you most?",
                "Business and Finance",
            ),
            (
                "Where do you see yourself in 10 years?",
                "Running a successful business enterprise",
            ),
        ]
        .into_iter()
        .map(|(q, a)| answered(q, &[a], &[a]))
        .collect()
    }

    #[tokio::test]
    async fn remote_success_is_tagged_remote_without_note() {
        let raw = r#"{
            "primaryCareer": "Entrepreneur",
            "alternativeCareers": ["Sales Director"],
            "explanations": {
                "primaryCareer": "Risk appetite",
                "alternativeCareers": {"Sales Director": "Persuasion"}
            }
        }"#;
        let pipeline = RecommendationPipeline::new(Box::new(MockRemote::payload(raw)));
        let result = pipeline.recommend(&business_heavy_responses()).await;

        assert_eq!(result.origin, RecommendationOrigin::Remote);
        assert_eq!(result.primary_career, "Entrepreneur");
        assert_eq!(result.confidence, 0.92);
        assert!(result.note.is_none());
    }

    #[tokio::test]
    async fn remote_failure_routes_to_fallback_with_note() {
        let pipeline = RecommendationPipeline::new(Box::new(MockRemote::failure(
            ClassificationFailure::MissingCredential,
        )));
        let result = pipeline.recommend(&business_heavy_responses()).await;

        assert_eq!(result.origin, RecommendationOrigin::Fallback);
        assert_eq!(result.primary_career, "Entrepreneur");
        assert_eq!(result.note.as_deref(), Some(FALLBACK_NOTE));
    }

    #[tokio::test]
    async fn parser_default_is_a_valid_remote_result() {
        // Garbage payload → parser's literal default, still origin=remote:
        // no second fallback trigger.
        let mock = MockRemote::payload("not json at all");
        let pipeline = RecommendationPipeline::new(Box::new(mock));
        let result = pipeline.recommend(&business_heavy_responses()).await;

        assert_eq!(result.origin, RecommendationOrigin::Remote);
        assert_eq!(result.primary_career, "Career Analyst");
        assert!(result.note.is_none());
        // Career Analyst is not in the confidence table
        assert_eq!(result.confidence, 0.85);
    }

    #[tokio::test]
    async fn remote_is_called_exactly_once() {
        let mock = MockRemote::failure(ClassificationFailure::Transport(
            "connection reset".into(),
        ));
        let calls = mock.calls.clone();
        let pipeline = RecommendationPipeline::new(Box::new(mock));
        pipeline.recommend(&business_heavy_responses()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn remote_payload_is_sanitized() {
        // Primary repeated among alternatives, duplicate entry, missing
        // explanation key — invariants must be restored before scoring.
        let raw = r#"{
            "primaryCareer": "Entrepreneur",
            "alternativeCareers": ["Entrepreneur", "Sales Director", "Sales Director", "Marketing Manager"],
            "explanations": {
                "primaryCareer": "Risk appetite",
                "alternativeCareers": {"Sales Director": "Persuasion"}
            }
        }"#;
        let pipeline = RecommendationPipeline::new(Box::new(MockRemote::payload(raw)));
        let result = pipeline.recommend(&business_heavy_responses()).await;

        assert_eq!(
            result.alternative_careers,
            ["Sales Director", "Marketing Manager"]
        );
        let keys: Vec<_> = result
            .explanations
            .alternative_careers
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["Marketing Manager", "Sales Director"]);
    }

    #[tokio::test]
    async fn empty_remote_core_scores_uninformative() {
        let raw = r#"{
            "primaryCareer": "Wanderer",
            "alternativeCareers": [],
            "explanations": {"primaryCareer": "n/a", "alternativeCareers": {}}
        }"#;
        let pipeline = RecommendationPipeline::new(Box::new(MockRemote::payload(raw)));
        let result = pipeline.recommend(&[]).await;
        assert_eq!(result.confidence, 0.5);
    }
}
