//! Raw response → canonical formatted-response projection.

use cs_protocol::{FormattedResponse, Response};

/// Project raw responses into the canonical shape both classifiers consume.
///
/// Pure and total: response order and selection order are preserved, and
/// selections are passed through untouched — no deduplication happens here
/// (the toggling semantics upstream make duplicates impossible anyway, but
/// this layer does not enforce that).
pub fn normalize(responses: &[Response]) -> Vec<FormattedResponse> {
    responses
        .iter()
        .map(|response| FormattedResponse {
            question_text: response.question.text.clone(),
            selections: response.selections().to_vec(),
        })
        .collect()
}
