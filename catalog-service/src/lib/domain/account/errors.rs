use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Identifier validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all account operations.
///
/// `InvalidCredentials` deliberately merges "unknown identifier" and "wrong
/// password" so a caller cannot enumerate registered identifiers. The same
/// merging happens at the HTTP layer for every token failure.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid account ID: {0}")]
    InvalidAccountId(#[from] AccountIdError),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    // Domain-level errors
    #[error("Identifier already in use: {0}")]
    DuplicateIdentifier(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
