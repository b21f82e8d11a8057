use std::fmt;
use std::str::FromStr;

use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::AccountIdError;
use crate::account::errors::IdentifierError;

/// Credential aggregate entity.
///
/// Represents one registered subject. `password_hash` is an opaque PHC string;
/// it is never serialized to clients and never logged. `identifier` is unique
/// (enforced by the store) and immutable after creation.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub identifier: Identifier,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier value type
///
/// The unique login identifier of an account. Identifiers are email-shaped
/// and validated with an RFC 5322 compliant parser. Case normalization is a
/// configuration decision applied at the HTTP boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    /// Create a new validated identifier.
    ///
    /// # Errors
    /// * `InvalidFormat` - not a well-formed email address
    pub fn new(identifier: String) -> Result<Self, IdentifierError> {
        email_address::EmailAddress::from_str(&identifier)
            .map(|_| Identifier(identifier))
            .map_err(|e| IdentifierError::InvalidFormat(e.to_string()))
    }

    /// Get the identifier as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new account with domain types
#[derive(Debug)]
pub struct CreateAccountCommand {
    pub identifier: Identifier,
    pub password: String,
    pub role: Role,
}

impl CreateAccountCommand {
    /// Construct a new create account command.
    ///
    /// # Arguments
    /// * `identifier` - Validated login identifier
    /// * `password` - Plain text password (hashed by the service)
    /// * `role` - Role granted at creation
    pub fn new(identifier: Identifier, password: String, role: Role) -> Self {
        Self {
            identifier,
            password,
            role,
        }
    }
}
