//! Credential primitives for the catalog service
//!
//! Provides the two pure building blocks of session management:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (HS256 JWT)
//!
//! plus the closed [`Role`] enumeration shared by both. The service layers its
//! own storage and HTTP concerns on top; nothing in here performs I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{Role, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("account123", Role::Viewer, Duration::hours(24)).unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.sub, "account123");
//! ```
//!
//! # Token lifetime
//!
//! Tokens are fully stateless: there is no revocation list, and a leaked or
//! stale token remains valid until its `exp` claim. The blast radius of a
//! compromise is bounded only by the configured TTL. Rotating the signing
//! secret invalidates every outstanding token at once. This is a deliberate
//! trade-off to keep verification free of I/O; do not bolt a denylist onto it.

pub mod password;
pub mod role;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::Role;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
