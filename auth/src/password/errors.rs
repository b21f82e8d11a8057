use thiserror::Error;

/// Error type for password hashing.
///
/// Hashing fails only on platform-level conditions (e.g. the entropy source
/// is unavailable); verification never errors and reports mismatch as `false`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
