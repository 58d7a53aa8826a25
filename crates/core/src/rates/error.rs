//! Error types for rate parsing.

use thiserror::Error;

/// Errors produced while turning a provider response into a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// The response body is not a non-empty JSON array.
    #[error("invalid rate provider response: expected a non-empty array")]
    InvalidResponseShape,

    /// A required corridor rate was absent from every record.
    #[error("missing required exchange rate: {0}")]
    MissingRate(&'static str),
}
