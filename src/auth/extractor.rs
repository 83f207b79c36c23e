//! Actix-web extractor for token authentication.
//!
//! Expects `Authorization: Token <key>`. The raw key is wrapped in
//! `SecretString` as soon as it is read and is never logged.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use secrecy::{ExposeSecret, SecretString};

use super::hash_token;
use crate::config::{AUTH_HEADER, TOKEN_SCHEME};
use crate::db::DbPool;
use crate::error::AppError;

/// Pull the token out of the `Authorization` header.
fn extract_token(req: &HttpRequest) -> Result<SecretString, AppError> {
    let header = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("Missing token. Provide an Authorization header.".to_string())
        })?;

    match header.split_once(' ') {
        Some((scheme, key)) if scheme.eq_ignore_ascii_case(TOKEN_SCHEME) && !key.trim().is_empty() => {
            Ok(SecretString::from(key.trim().to_string()))
        }
        _ => Err(AppError::Unauthorized(format!(
            "Malformed Authorization header. Expected '{} <key>'.",
            TOKEN_SCHEME
        ))),
    }
}

/// Extractor that requires a valid session token.
///
/// Resolves the token to the requester's account and gamer profile:
/// ```ignore
/// async fn protected_handler(auth: GamerAuth) -> impl Responder {
///     // auth.gamer_id is the requester's gamer
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GamerAuth {
    pub user_id: i32,
    pub gamer_id: i32,
}

impl FromRequest for GamerAuth {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let pool = req.app_data::<web::Data<DbPool>>().cloned();
        let token = extract_token(req);

        Box::pin(async move {
            let pool = pool
                .ok_or_else(|| AppError::Internal("DbPool not configured".to_string()))?;
            let token = token?;

            let key_hash = hash_token(token.expose_secret());
            let gamer = pool
                .find_gamer_by_token_hash(&key_hash)
                .await?
                .ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))?;

            Ok(GamerAuth {
                user_id: gamer.user_id,
                gamer_id: gamer.id,
            })
        })
    }
}
