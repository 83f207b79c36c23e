//! Authentication: password hashing, session tokens, and the request extractor.

mod extractor;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::Rng;
use rand::distr::Alphanumeric;
use sha2::{Digest, Sha256};

use crate::error::{AppError, AppResult};

pub use extractor::GamerAuth;

/// Session token prefix.
const TOKEN_PREFIX: &str = "lvl_";
/// Length of random part of the token.
const TOKEN_RANDOM_LENGTH: usize = 40;
/// Length of the token prefix stored for identification.
const TOKEN_PREFIX_LENGTH: usize = 8;

/// A freshly generated token. `key` is shown to the client exactly once.
#[derive(Debug)]
pub struct IssuedToken {
    pub key: String,
    pub key_hash: String,
    pub key_prefix: String,
}

/// Generate a new random session token.
pub fn generate_token() -> IssuedToken {
    let random_part: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_RANDOM_LENGTH)
        .map(char::from)
        .collect();

    let key = format!("{}{}", TOKEN_PREFIX, random_part);
    let key_hash = hash_token(&key);
    let key_prefix = key.chars().take(TOKEN_PREFIX_LENGTH).collect::<String>();

    IssuedToken {
        key,
        key_hash,
        key_prefix,
    }
}

/// Hash a session token using SHA-256.
pub fn hash_token(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash a password with argon2 and a random salt (PHC string format).
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))
}

/// Check a password against a stored PHC hash.
pub fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
