use thiserror::Error;

/// Error type for token operations.
///
/// `Expired` and `Malformed` are deliberately separate variants: callers
/// routinely treat them the same way externally but log them differently.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("token is expired")]
    Expired,

    #[error("token is malformed or its signature does not verify: {0}")]
    Malformed(String),
}
