//! Game type API handlers (read-only).

use actix_web::{HttpResponse, get, web};

use crate::auth::GamerAuth;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::GameTypeResponse;

/// Configure game type routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_game_types).service(get_game_type);
}

/// List all game types.
#[utoipa::path(
    get,
    path = "/gametypes",
    tag = "Game Types",
    responses(
        (status = 200, description = "List of game types", body = Vec<GameTypeResponse>)
    ),
    security(("token" = []))
)]
#[get("/gametypes")]
pub async fn list_game_types(
    _auth: GamerAuth,
    pool: web::Data<DbPool>,
) -> AppResult<HttpResponse> {
    let game_types: Vec<GameTypeResponse> = pool
        .list_game_types()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(game_types))
}

/// Get a single game type.
#[utoipa::path(
    get,
    path = "/gametypes/{id}",
    tag = "Game Types",
    params(
        ("id" = i32, Path, description = "Game type ID")
    ),
    responses(
        (status = 200, description = "Game type", body = GameTypeResponse),
        (status = 404, description = "Game type not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[get("/gametypes/{id}")]
pub async fn get_game_type(
    _auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let game_type = pool
        .get_game_type_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game type {}", id)))?;

    Ok(HttpResponse::Ok().json(GameTypeResponse::from(game_type)))
}
