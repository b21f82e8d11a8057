use thiserror::Error;

/// Error for EntryId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EntryKind parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryKindError {
    #[error("Unknown entry kind: {0}")]
    Unknown(String),
}

/// Error for EntryName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryNameError {
    #[error("Entry name must not be empty")]
    Empty,

    #[error("Entry name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all catalog operations
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid entry ID: {0}")]
    InvalidEntryId(#[from] EntryIdError),

    #[error("Invalid entry kind: {0}")]
    InvalidKind(#[from] EntryKindError),

    #[error("Invalid entry name: {0}")]
    InvalidName(#[from] EntryNameError),

    // Domain-level errors
    #[error("Entry not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
