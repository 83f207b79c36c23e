//! Account registration and login.
//!
//! Argon2 runs on the blocking thread pool so a hash never stalls the
//! worker's event loop.

use actix_web::web;
use tracing::info;

use crate::auth::{self, IssuedToken};
use crate::db::{DbPool, NewAccount};
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, RegisterRequest};

/// Run a CPU-heavy password operation off the async worker.
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
}

/// Create a user with its gamer profile and return a session token.
pub async fn register(pool: &DbPool, req: &RegisterRequest) -> AppResult<IssuedToken> {
    req.validate()?;

    let password = req.password.clone();
    let password_hash = run_blocking(move || auth::hash_password(&password)).await?;
    let token = auth::generate_token();

    let account = NewAccount {
        username: req.username.trim(),
        password_hash: &password_hash,
        first_name: req.first_name.trim(),
        last_name: req.last_name.trim(),
        email: req.email.trim(),
        bio: req.bio.trim(),
    };

    let (user, gamer) = pool
        .create_account(&account, &token.key_hash, &token.key_prefix)
        .await?;

    info!(
        "Registered user: id={}, username={}, gamer_id={}",
        user.id, user.username, gamer.id
    );

    Ok(token)
}

/// Check credentials and issue a new session token.
pub async fn login(pool: &DbPool, req: &LoginRequest) -> AppResult<IssuedToken> {
    let invalid = || AppError::Unauthorized("Invalid username or password".to_string());
    let password = req.password.clone();

    let Some(user) = pool.find_user_by_username(req.username.trim()).await? else {
        // Unknown usernames still pay for one Argon2 hash, like a wrong password does
        run_blocking(move || auth::hash_password(&password)).await?;
        return Err(invalid());
    };

    let stored_hash = user.password_hash.clone();
    let verified = run_blocking(move || auth::verify_password(&password, &stored_hash)).await?;
    if !verified {
        return Err(invalid());
    }

    let token = auth::generate_token();
    pool.insert_token(user.id, &token.key_hash, &token.key_prefix)
        .await?;

    info!("User logged in: id={}, token={}...", user.id, token.key_prefix);

    Ok(token)
}
