//! Account bootstrap payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Maximum gamer bio length.
pub const MAX_BIO_LENGTH: usize = 50;

/// Register request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
}

impl RegisterRequest {
    /// Check field constraints before touching the database.
    pub fn validate(&self) -> AppResult<()> {
        if self.username.trim().is_empty() {
            return Err(AppError::InvalidInput("Username is required".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if self.bio.chars().count() > MAX_BIO_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "Bio must be at most {} characters",
                MAX_BIO_LENGTH
            )));
        }
        Ok(())
    }
}

/// Register response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub token: String,
}

/// Login request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub valid: bool,
    pub token: String,
}
