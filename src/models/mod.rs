//! Request and response models for the LevelUp API.

pub mod account;
pub mod event;
pub mod game;
pub mod game_type;
pub mod profile;

// Re-export commonly used types
pub use account::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use event::{
    EventGameResponse, EventRequest, EventResponse, ListEventsQuery, OrganizerResponse,
    OrganizerUserResponse, SignupResponse,
};
pub use game::{GameRequest, GameResponse, ListGamesQuery};
pub use game_type::GameTypeResponse;
pub use profile::{ProfileEvent, ProfileEventGame, ProfileGamer, ProfileResponse, ProfileUser};
