//! Profile payloads: the requester's gamer plus the events they joined.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{event, game};

/// Account fields shown on a profile.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// Gamer shown on a profile.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileGamer {
    pub id: i32,
    pub bio: String,
    pub user: ProfileUser,
}

/// Game title as nested in a profile event.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileEventGame {
    pub title: String,
}

/// Joined event shown on a profile.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileEvent {
    pub id: i32,
    pub game: ProfileEventGame,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl From<(event::Model, game::Model)> for ProfileEvent {
    fn from((event, game): (event::Model, game::Model)) -> Self {
        Self {
            id: event.id,
            game: ProfileEventGame { title: game.title },
            description: event.description,
            date: event.date,
            time: event.time,
        }
    }
}

/// Composite profile response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub gamer: ProfileGamer,
    pub events: Vec<ProfileEvent>,
}
