//! Profile endpoint.

use actix_web::{HttpResponse, get, web};

use crate::auth::GamerAuth;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::ProfileResponse;
use crate::services::profile;

/// Configure profile routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_profile);
}

/// The requester's gamer record and the events they signed up for.
#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[get("/profile")]
pub async fn get_profile(auth: GamerAuth, pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let profile = profile::load_profile(&pool, auth.gamer_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}
