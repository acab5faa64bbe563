//! Shared fixtures for end-to-end pipeline tests.
//!
//! Builds answered assessment responses from the real question catalog and
//! wires a [`RecommendationPipeline`] to a wiremock completion endpoint,
//! exercising the real client/parser/fallback code paths.

use cs_inference::{CompletionConfig, RecommendationPipeline};
use cs_protocol::{Question, QuestionCategory, Response, TraitTag};
use wiremock::MockServer;

/// Initialize test logging once (RUST_LOG-filtered); later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn question(
    id: &str,
    text: &str,
    options: &[&str],
    category: QuestionCategory,
    trait_tag: TraitTag,
) -> Question {
    Question {
        id: id.into(),
        text: text.into(),
        options: options.iter().map(|o| o.to_string()).collect(),
        category,
        trait_tag,
    }
}

/// Answer a question by toggling each pick on.
pub fn answered(question: Question, picks: &[&str]) -> Response {
    let mut response = Response::new(question);
    for pick in picks {
        assert!(response.toggle(pick), "unknown option: {pick}");
    }
    response
}

/// Three responses with business-flavored selections and no
/// entrepreneurial-signal question — drives the fallback engine to the
/// Entrepreneur branch via the bucket threshold.
pub fn business_heavy_responses() -> Vec<Response> {
    vec![
        answered(
            question(
                "q-academic",
                "Which subjects did you find most engaging in school?",
                &[
                    "STEM subjects (Science, Technology, Engineering, Mathematics)",
                    "Arts and Humanities (Literature, History, Languages)",
                    "Social Sciences (Psychology, Sociology, Economics)",
                    "Business and Commerce related subjects",
                ],
                QuestionCategory::AcademicPreferences,
                TraitTag::Analytical,
            ),
            &["Business and Commerce related subjects"],
        ),
        answered(
            question(
                "q-industry",
                "Which industry sectors interest you most?",
                &[
                    "Technology and Digital Innovation",
                    "Healthcare and Wellness",
                    "Arts, Media, and Entertainment",
                    "Business and Finance",
                ],
                QuestionCategory::IndustryInterest,
                TraitTag::Strategic,
            ),
            &["Business and Finance"],
        ),
        answered(
            question(
                "q-goals",
                "Where do you see yourself in 10 years?",
                &[
                    "Leading innovation in your field",
                    "Making a significant social impact",
                    "Achieving creative or artistic recognition",
                    "Running a successful business enterprise",
                ],
                QuestionCategory::LongTermGoals,
                TraitTag::Strategic,
            ),
            &["Running a successful business enterprise"],
        ),
    ]
}

/// Responses matching no keyword bucket three times and no entrepreneurial
/// signal — drives the fallback engine to its default branch.
pub fn balanced_responses() -> Vec<Response> {
    vec![
        answered(
            question(
                "q-recharge",
                "How do you typically recharge after a long day?",
                &[
                    "Spending time with friends and socializing",
                    "Engaging in solitary activities like reading or meditation",
                    "Being creative through art, music, or writing",
                    "Planning and organizing future activities",
                ],
                QuestionCategory::Personality,
                TraitTag::Extraversion,
            ),
            &["Engaging in solitary activities like reading or meditation"],
        ),
        answered(
            question(
                "q-academic",
                "Which subjects did you find most engaging in school?",
                &[
                    "STEM subjects (Science, Technology, Engineering, Mathematics)",
                    "Arts and Humanities (Literature, History, Languages)",
                ],
                QuestionCategory::AcademicPreferences,
                TraitTag::Analytical,
            ),
            &["Arts and Humanities (Literature, History, Languages)"],
        ),
        answered(
            question(
                "q-challenge",
                "When faced with a challenge, what's your typical approach?",
                &[
                    "Brainstorm creative solutions",
                    "Break it down into smaller, manageable tasks",
                ],
                QuestionCategory::ProblemSolving,
                TraitTag::Creative,
            ),
            &["Brainstorm creative solutions"],
        ),
    ]
}

/// Completion endpoint success envelope carrying `content`.
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-e2e-test",
        "choices": [
            {
                "message": {
                    "role": "assistant",
                    "content": content
                }
            }
        ]
    })
}

/// Mocked endpoint path mounted by the tests.
pub const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Pipeline pointed at the mock server, credential configured.
pub fn pipeline_for(server: &MockServer) -> RecommendationPipeline {
    RecommendationPipeline::with_config(CompletionConfig {
        api_url: format!("{}{}", server.uri(), COMPLETIONS_PATH),
        api_key: Some("test-key".into()),
        timeout_secs: 2,
        ..CompletionConfig::default()
    })
}

/// Pipeline pointed at the mock server with NO credential configured.
pub fn pipeline_without_credential(server: &MockServer) -> RecommendationPipeline {
    RecommendationPipeline::with_config(CompletionConfig {
        api_url: format!("{}{}", server.uri(), COMPLETIONS_PATH),
        api_key: None,
        timeout_secs: 2,
        ..CompletionConfig::default()
    })
}
