use thiserror::Error;

/// Error type for token operations.
///
/// The three verification variants are for internal diagnostics; the HTTP
/// layer collapses all of them into a single unauthenticated response so a
/// caller cannot distinguish a forged token from an expired one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,
}
