use serde::Deserialize;
use serde::Serialize;

use crate::role::Role;

/// Decoded payload of a bearer token.
///
/// Exists only inside a signed token and transiently in request context after
/// verification; never persisted. The `role` claim is a snapshot taken at
/// issuance; consumers re-derive the effective role from the credential
/// store, so a role change after issuance is not ignored. Expiry is enforced
/// by [`TokenCodec::verify`](crate::token::TokenCodec::verify), not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Role at issuance time
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
