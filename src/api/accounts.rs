//! Account bootstrap endpoints: register and login.

use actix_web::{HttpResponse, post, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::accounts;

/// Configure account routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login);
}

/// Register a new gamer account.
#[utoipa::path(
    post,
    path = "/register",
    tag = "Accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 422, description = "Username taken", body = crate::error::ErrorResponse)
    )
)]
#[post("/register")]
pub async fn register(
    pool: web::Data<DbPool>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let token = accounts::register(&pool, &body).await?;

    Ok(HttpResponse::Created().json(RegisterResponse { token: token.key }))
}

/// Exchange credentials for a session token.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
#[post("/login")]
pub async fn login(
    pool: web::Data<DbPool>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let token = accounts::login(&pool, &body).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        valid: true,
        token: token.key,
    }))
}
