use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides one-way salted hashing and verification (internally Argon2id).
/// Hashing is deliberately CPU-expensive; callers on an async runtime should
/// run it on a blocking thread.
#[derive(Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// Draws a fresh random salt on every call, so hashing the same password
    /// twice produces two different PHC strings that both verify.
    ///
    /// # Errors
    /// * `HashingFailed` - platform-level failure (no entropy source)
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Recomputes the digest with the salt embedded in `hash` and compares in
    /// constant time. A syntactically malformed `hash` yields `false` rather
    /// than an error; a stored hash the hasher cannot parse can never match.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
