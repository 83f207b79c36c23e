//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LevelUp Server",
        version = "0.1.0",
        description = "API server for gamers organizing and joining game events"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Account endpoints
        api::accounts::register,
        api::accounts::login,
        // Game type endpoints
        api::game_types::list_game_types,
        api::game_types::get_game_type,
        // Game endpoints
        api::games::list_games,
        api::games::create_game,
        api::games::get_game,
        api::games::update_game,
        api::games::delete_game,
        // Event endpoints
        api::events::list_events,
        api::events::create_event,
        api::events::get_event,
        api::events::update_event,
        api::events::delete_event,
        api::events::join_event,
        api::events::leave_event,
        // Profile
        api::profile::get_profile,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Accounts
            models::RegisterRequest,
            models::RegisterResponse,
            models::LoginRequest,
            models::LoginResponse,
            // Games
            models::GameTypeResponse,
            models::GameRequest,
            models::GameResponse,
            // Events
            models::EventRequest,
            models::EventResponse,
            models::EventGameResponse,
            models::OrganizerResponse,
            models::OrganizerUserResponse,
            models::SignupResponse,
            // Profile
            models::ProfileResponse,
            models::ProfileGamer,
            models::ProfileUser,
            models::ProfileEvent,
            models::ProfileEventGame,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Accounts", description = "Registration and login"),
        (name = "Game Types", description = "Game type catalogue"),
        (name = "Games", description = "Game management"),
        (name = "Events", description = "Event scheduling and signup"),
        (name = "Profile", description = "The requesting gamer's profile")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Add session token security scheme.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::with_description(
                            crate::config::AUTH_HEADER,
                            "Session token as `Token <key>`",
                        ),
                    ),
                ),
            );
        }
    }
}
