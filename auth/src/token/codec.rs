use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use crate::role::Role;

/// Bearer token issuer and verifier.
///
/// Signs [`Claims`] with a process-wide symmetric secret using HS256.
/// Verification is a pure function of the token and the secret: no I/O, no
/// clock leeway, O(1).
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the signing secret.
    ///
    /// The secret is injected here once at construction; verification never
    /// reads ambient state. It should be at least 256 bits and come from the
    /// environment, never from code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// Builds claims with `iat = now` and `exp = now + ttl` and signs them.
    ///
    /// # Errors
    /// * `EncodingFailed` - claim serialization or signing failed
    pub fn issue(&self, subject: &str, role: Role, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - the token cannot be parsed at all
    /// * `SignatureInvalid` - signature mismatch, including any byte-level
    ///   tampering or a token signed under a different secret
    /// * `Expired` - `exp` has passed (no leeway)
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
