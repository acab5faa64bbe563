//! OpenRouter chat-completion client for remote career classification.
//!
//! Submits the formatted assessment responses to the completion endpoint and
//! hands back the raw text of the first completion choice, unparsed. One
//! blocking async call, no retries — a failed attempt routes the assessment
//! to the heuristic fallback engine at the orchestrator level.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClassificationFailure;
use cs_protocol::FormattedResponse;

/// System instruction specifying the exact JSON shape the completion service
/// is asked to emit.
const SYSTEM_PROMPT: &str = r#"You are an expert career counselor with deep knowledge of various career paths, personality assessments, and job market trends. Your role is to analyze career assessment responses and provide personalized career recommendations.

When analyzing responses:
1. Consider both explicit answers and implicit patterns
2. Look for strong indicators of specific skills, interests, and personality traits
3. Match these indicators to suitable career paths
4. Provide clear explanations for your recommendations
5. Consider multiple career options that align with the candidate's profile

Your recommendations should be:
- Specific and actionable
- Based on the candidate's actual responses
- Include both primary and alternative career paths
- Accompanied by clear explanations of why each career is a good fit

Format your response as JSON with the following structure:
{
  "primaryCareer": "Career Name",
  "alternativeCareers": ["Career 1", "Career 2", "Career 3"],
  "explanations": {
    "primaryCareer": "Detailed explanation of why this career is the best fit",
    "alternativeCareers": {
      "Career 1": "Explanation for first alternative",
      "Career 2": "Explanation for second alternative",
      "Career 3": "Explanation for third alternative"
    }
  }
}"#;

/// Application title sent in the `X-Title` header (recommended by OpenRouter).
const APP_TITLE: &str = "CareerScope";

/// Configuration for the remote completion endpoint.
///
/// Always passed in explicitly at construction — never read from ambient
/// process state — so the client stays testable without a live credential.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer credential. Absence is a detectable precondition failure, not
    /// a silent no-op.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier in OpenRouter format.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum completion length.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds; exceeding it surfaces as a transport
    /// failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Origin identifier sent in the `HTTP-Referer` header (required by
    /// OpenRouter).
    #[serde(default = "default_referer")]
    pub referer: String,
}

fn default_api_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".into()
}
fn default_model() -> String {
    "deepseek/deepseek-chat".into()
}
fn default_temperature() -> f64 {
    0.7
}
fn default_max_tokens() -> u32 {
    1000
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_referer() -> String {
    "https://careerscope.web.app".into()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            referer: default_referer(),
        }
    }
}

/// Chat-completion request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    route: &'a str,
}

/// A single message in the chat request.
#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Completion response envelope (only the fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Error body shape used by OpenRouter-compatible endpoints.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Client for the remote completion endpoint.
pub struct RemoteClassifier {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl RemoteClassifier {
    pub fn new(config: CompletionConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }

    /// Submit the formatted responses and return the raw text of the first
    /// completion choice.
    ///
    /// May take multiple seconds; callers must treat it as a single blocking
    /// remote operation with no partial results.
    pub async fn classify(
        &self,
        formatted: &[FormattedResponse],
    ) -> Result<String, ClassificationFailure> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(ClassificationFailure::MissingCredential);
        };

        let prompt = render_prompt(formatted);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            route: "openrouter",
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "completion request failed");
                ClassificationFailure::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_error_detail(&body);
            tracing::warn!(status = status.as_u16(), detail = %detail, "completion endpoint returned error");
            return Err(ClassificationFailure::Remote {
                status: status.as_u16(),
                detail,
            });
        }

        let envelope: ChatResponse = response
            .json()
            .await
            .map_err(|_| ClassificationFailure::MalformedEnvelope)?;

        envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .ok_or(ClassificationFailure::MalformedEnvelope)
    }
}

/// Render the user prompt listing every formatted response.
fn render_prompt(formatted: &[FormattedResponse]) -> String {
    let responses = serde_json::to_string_pretty(formatted)
        .expect("formatted responses serialize to JSON");
    format!(
        "Based on the following career assessment responses, analyze the candidate's:\n\
         1. Personality traits\n\
         2. Skills and abilities\n\
         3. Interests and preferences\n\
         4. Work style and environment preferences\n\
         \n\
         Assessment Responses:\n\
         {responses}"
    )
}

/// Pull a human-readable detail out of an error body: the structured
/// `error.message` when parseable, otherwise the raw body.
fn extract_error_detail(body: &str) -> String {
    if let Some(message) = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.map(|detail| detail.message))
    {
        return message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "unknown error".into()
    } else {
        trimmed.to_string()
    }
}
