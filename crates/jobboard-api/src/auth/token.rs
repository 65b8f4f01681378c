//! Signed-token codec.
//!
//! Issues and verifies a time-bound HS256 assertion carrying the account id.
//! Verification collapses every failure mode (malformed, expired, tampered)
//! into `None`; the gate does not need to distinguish them.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use jobboard_models::AccountId;

/// Claims carried by an issued token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the account id.
    sub: String,
    /// Issued-at, seconds since epoch.
    iat: i64,
    /// Expiry, seconds since epoch.
    exp: i64,
}

/// Stateless token codec.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from a shared secret and token lifetime.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token for an account.
    pub fn issue(&self, account_id: &AccountId) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: account_id.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token, returning the subject account id.
    ///
    /// Malformed, expired, and tampered tokens all yield `None`.
    pub fn verify(&self, token: &str) -> Option<AccountId> {
        let validation = Validation::default();
        decode::<Claims>(token, &self.decoding, &validation)
            .ok()
            .map(|data| AccountId::from(data.claims.sub))
    }
}
