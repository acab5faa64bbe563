//! Recommendation inference core for CareerScope.
//!
//! Turns a candidate's multi-select assessment responses into a career
//! recommendation with alternatives and natural-language justifications.
//! Two classification paths:
//! - **Remote**: a chat-completion endpoint is asked for a structured JSON
//!   recommendation; its reply is parsed tolerantly (strict JSON, then loose
//!   text, then a literal default).
//! - **Fallback**: a deterministic keyword-bucket engine produces an equally
//!   well-formed recommendation whenever the remote path fails.
//!
//! The orchestrator sequences normalize → remote → parse → (fallback) →
//! score and never fails outward.

pub mod confidence;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod orchestrator;
pub mod parser;
pub mod remote;

// Re-export key types for convenience
pub use error::ClassificationFailure;
pub use normalize::normalize;
pub use orchestrator::{FALLBACK_NOTE, RecommendationPipeline, RemoteClassify};
pub use parser::{ParseTier, ParsedRecommendation};
pub use remote::{CompletionConfig, RemoteClassifier};
