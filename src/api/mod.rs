//! API endpoint modules.

pub mod accounts;
pub mod events;
pub mod game_types;
pub mod games;
pub mod health;
pub mod openapi;
pub mod profile;

use actix_web::web;

use crate::error::AppError;

pub use accounts::configure_routes as configure_account_routes;
pub use events::configure_routes as configure_event_routes;
pub use game_types::configure_routes as configure_game_type_routes;
pub use games::configure_routes as configure_game_routes;
pub use health::configure_routes as configure_health_routes;
pub use openapi::ApiDoc;
pub use profile::configure_routes as configure_profile_routes;

/// Register every API route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(configure_account_routes)
        .configure(configure_game_type_routes)
        .configure(configure_game_routes)
        .configure(configure_event_routes)
        .configure(configure_profile_routes);
}

/// Register extractor configs so malformed bodies, queries and paths
/// produce the standard error body with status 400.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config());
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}
