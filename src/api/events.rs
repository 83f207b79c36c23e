//! Event API handlers, including the signup action.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::auth::GamerAuth;
use crate::db::{DbPool, EventFilter};
use crate::error::{AppError, AppResult};
use crate::models::{EventRequest, EventResponse, ListEventsQuery, SignupResponse};
use crate::services::signup;

/// Configure event routes.
/// Note: The signup resource must be registered before the generic `/events/{id}` routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_events)
        .service(create_event)
        .service(
            web::resource("/events/{id}/signup")
                .route(web::post().to(join_event))
                .route(web::delete().to(leave_event))
                .default_service(web::to(signup_method_not_allowed)),
        )
        .service(get_event)
        .service(update_event)
        .service(delete_event);
}

/// List events, optionally for a single game.
///
/// GET /events?gameId=1
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    params(
        ("gameId" = Option<i32>, Query, description = "Only events for this game")
    ),
    responses(
        (status = 200, description = "List of events", body = Vec<EventResponse>),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[get("/events")]
pub async fn list_events(
    auth: GamerAuth,
    pool: web::Data<DbPool>,
    query: web::Query<ListEventsQuery>,
) -> AppResult<HttpResponse> {
    let filter = EventFilter {
        game_id: query.game_id,
    };

    let events: Vec<EventResponse> = pool
        .list_event_details(&filter, auth.gamer_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(events))
}

/// Create an event organized by the requester.
#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Game not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[post("/events")]
pub async fn create_event(
    auth: GamerAuth,
    pool: web::Data<DbPool>,
    body: web::Json<EventRequest>,
) -> AppResult<HttpResponse> {
    let fields = body.into_inner().into_new_event()?;

    // Resolve the game first so a bad reference never leaves an event behind
    pool.get_game_by_id(fields.game_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game {}", fields.game_id)))?;

    let event = pool.insert_event(auth.gamer_id, fields).await?;

    info!(
        "Event created: id={}, game_id={}, organizer_id={}",
        event.id, event.game_id, event.organizer_id
    );

    let detail = pool
        .get_event_detail(event.id, auth.gamer_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Event {} vanished after insert", event.id)))?;

    Ok(HttpResponse::Created().json(EventResponse::from(detail)))
}

/// Get a single event.
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event details", body = EventResponse),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[get("/events/{id}")]
pub async fn get_event(
    auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let detail = pool
        .get_event_detail(id, auth.gamer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {}", id)))?;

    Ok(HttpResponse::Ok().json(EventResponse::from(detail)))
}

/// Replace an event. The requester becomes its organizer.
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = EventRequest,
    responses(
        (status = 204, description = "Event updated"),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Event or game not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[put("/events/{id}")]
pub async fn update_event(
    auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<EventRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let fields = body.into_inner().into_new_event()?;

    pool.get_event_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {}", id)))?;
    pool.get_game_by_id(fields.game_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game {}", fields.game_id)))?;

    pool.update_event(id, auth.gamer_id, fields).await?;

    info!("Event updated: id={}, organizer_id={}", id, auth.gamer_id);

    Ok(HttpResponse::NoContent().finish())
}

/// Delete an event and its registrations.
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
#[delete("/events/{id}")]
pub async fn delete_event(
    _auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !pool.delete_event(id).await? {
        return Err(AppError::NotFound(format!("Event {}", id)));
    }

    info!("Event deleted: id={}", id);

    Ok(HttpResponse::NoContent().finish())
}

/// Sign the requester up for an event.
#[utoipa::path(
    post,
    path = "/events/{id}/signup",
    tag = "Events",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 201, description = "Signed up", body = SignupResponse),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Already signed up", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn join_event(
    auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let registration = signup::join_event(&pool, path.into_inner(), auth.gamer_id).await?;

    Ok(HttpResponse::Created().json(SignupResponse {
        event_id: registration.event_id,
        gamer_id: registration.gamer_id,
    }))
}

/// Withdraw the requester from an event.
#[utoipa::path(
    delete,
    path = "/events/{id}/signup",
    tag = "Events",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Left the event"),
        (status = 404, description = "Event not found or not registered", body = crate::error::ErrorResponse)
    ),
    security(("token" = []))
)]
pub async fn leave_event(
    auth: GamerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    signup::leave_event(&pool, path.into_inner(), auth.gamer_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

async fn signup_method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
