//! Credential hashing.
//!
//! Argon2id with a random per-credential salt, PHC string format. Kept out
//! of the store and gate: hashes are produced at registration and checked at
//! login only.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

use crate::error::{ApiError, ApiResult};

/// Hash a password for storage.
pub fn hash_password(password: &str) -> ApiResult<String> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|_| ApiError::internal("Failed to generate salt"))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|_| ApiError::internal("Failed to encode salt"))?;
    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| ApiError::internal("Failed to hash password"))?
        .to_string();
    Ok(phc)
}

/// Check a password against a stored PHC hash. Unparseable hashes fail
/// closed.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
