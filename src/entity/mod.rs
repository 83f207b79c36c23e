//! SeaORM entity definitions.

pub mod auth_token;
pub mod event;
pub mod event_gamer;
pub mod game;
pub mod game_type;
pub mod gamer;
pub mod user;
