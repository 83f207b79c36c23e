//! Game API handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::auth::GamerAuth;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{GameRequest, GameResponse, ListGamesQuery};

/// Configure game routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_games)
        .service(create_game)
        .service(get_game)
        .service(update_game)
        .service(delete_game);
}

/// List games, optionally of a single type.
///
/// GET /games?type=1
#[utoipa::path(
    get,
    path = "/games",
    tag = "Games",
    params(
        ("type" = Option<i32>, Query, description = "Only games of this game type")
    ),
    responses(
        (status = 200, description = "List of games", body = Vec<GameResponse>)
    ),
    security(("token" = []))
)]
#[get("/games")]
pub async fn list_games(
    _auth: GamerAuth,
    pool: web::Data<DbPool>,
    query: web::Query<ListGamesQuery>,
) -> AppResult<HttpResponse> {
    let games: Vec<GameResponse> = pool
        .list_games(query.game_type)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(games))
}

/// Create a game owned by the requester.
#[utoipa::path(
    post,
    path = "/games",
    tag = "Games",
    request_body = GameRequest,
    responses(
        (status = 201, description = "Game created", body = GameResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Game type not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[post("/games")]
pub async fn create_game(
    auth: GamerAuth,
    pool: web::Data<DbPool>,
    body: web::Json<GameRequest>,
) -> AppResult<HttpResponse> {
    let fields = body.into_inner().into_new_game()?;

    pool.get_game_type_by_id(fields.game_type_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game type {}", fields.game_type_id)))?;

    let game = pool.insert_game(auth.gamer_id, fields).await?;

    info!(
        "Game created: id={}, title={}, gamer_id={}",
        game.id, game.title, game.gamer_id
    );

    Ok(HttpResponse::Created().json(GameResponse::from(game)))
}

/// Get a single game.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "Games",
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game details", body = GameResponse),
        (status = 404, description = "Game not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[get("/games/{id}")]
pub async fn get_game(
    _auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let game = pool
        .get_game_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game {}", id)))?;

    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

/// Replace a game's fields.
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "Games",
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    request_body = GameRequest,
    responses(
        (status = 204, description = "Game updated"),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Game or game type not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[put("/games/{id}")]
pub async fn update_game(
    _auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<GameRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let fields = body.into_inner().into_new_game()?;

    pool.get_game_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game {}", id)))?;
    pool.get_game_type_by_id(fields.game_type_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game type {}", fields.game_type_id)))?;

    pool.update_game(id, fields).await?;

    info!("Game updated: id={}", id);

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a game. Its events and their registrations go with it.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "Games",
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "Game not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[delete("/games/{id}")]
pub async fn delete_game(
    _auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !pool.delete_game(id).await? {
        return Err(AppError::NotFound(format!("Game {}", id)));
    }

    info!("Game deleted: id={}", id);

    Ok(HttpResponse::NoContent().finish())
}
