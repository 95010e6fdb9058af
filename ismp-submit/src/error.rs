use crate::transport::TransportError;

/// Errors produced by the submission pipeline.
///
/// Together with `Ok(body)` this gives the caller the full three-way
/// outcome: accepted remotely, denied locally, or failed in flight.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The admission gate denied the call.
    ///
    /// Nothing was encoded and nothing was sent; the caller may retry later
    /// at its own discretion.
    #[error("rate limit exceeded; submission was not attempted")]
    RateLimited,

    /// The document could not be serialized into its wire form.
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    /// Admission succeeded but the submission itself failed.
    ///
    /// The admission slot stays consumed; a retry must pass the gate again.
    #[error("submission failed: {0}")]
    Submission(#[from] TransportError),
}

impl SubmitError {
    /// True when the gate denied the call and no side effects occurred.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SubmitError::RateLimited)
    }
}
