//! Remote classification failure taxonomy.

use thiserror::Error;

/// Everything that can go wrong between building the completion request and
/// receiving a usable raw payload.
///
/// These never escape the orchestrator: every variant routes the assessment
/// to the heuristic fallback engine.
#[derive(Debug, Clone, Error)]
pub enum ClassificationFailure {
    /// No API credential configured; detected before any network attempt.
    #[error("completion API credential is not configured")]
    MissingCredential,

    /// No response received (connection failure or timeout).
    #[error("no response received from completion endpoint: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned status {status}: {detail}")]
    Remote { status: u16, detail: String },

    /// A success response without the expected `choices[0].message.content`
    /// envelope.
    #[error("completion response is missing the expected choices structure")]
    MalformedEnvelope,
}
