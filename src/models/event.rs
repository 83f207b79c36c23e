//! Event and signup payloads.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::{EventDetail, NewEvent};
use crate::entity::{game, user};
use crate::error::{AppError, AppResult};

/// Accepted formats for an event's time of day.
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Create/update event request body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub game_id: i32,
    pub description: String,
    /// ISO date, e.g. `2024-01-01`.
    pub date: String,
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    pub time: String,
}

impl EventRequest {
    /// Validate and convert into storable fields.
    pub fn into_new_event(self) -> AppResult<NewEvent> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(AppError::InvalidInput("description is required".to_string()));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            AppError::InvalidInput(format!("'{}' is not a valid date (YYYY-MM-DD)", self.date))
        })?;

        let time = parse_time(self.time.trim()).ok_or_else(|| {
            AppError::InvalidInput(format!("'{}' is not a valid time (HH:MM[:SS])", self.time))
        })?;

        Ok(NewEvent {
            game_id: self.game_id,
            description,
            date,
            time,
        })
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

/// Query parameters for listing events.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    /// Only events for this game.
    pub game_id: Option<i32>,
}

/// Game as nested in an event.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventGameResponse {
    pub id: i32,
    pub title: String,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: i32,
}

impl From<game::Model> for EventGameResponse {
    fn from(m: game::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            maker: m.maker,
            number_of_players: m.number_of_players,
            skill_level: m.skill_level,
        }
    }
}

/// Organizer's account fields as nested in an event.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrganizerUserResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<user::Model> for OrganizerUserResponse {
    fn from(m: user::Model) -> Self {
        Self {
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
        }
    }
}

/// Organizer as nested in an event.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrganizerResponse {
    pub id: i32,
    pub user: OrganizerUserResponse,
}

/// Serialized event.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i32,
    pub game: EventGameResponse,
    pub organizer: OrganizerResponse,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Number of gamers signed up.
    pub attendee_count: u64,
    /// Whether the requester is signed up.
    pub joined: bool,
}

impl From<EventDetail> for EventResponse {
    fn from(d: EventDetail) -> Self {
        Self {
            id: d.event.id,
            game: d.game.into(),
            organizer: OrganizerResponse {
                id: d.organizer.gamer.id,
                user: d.organizer.user.into(),
            },
            description: d.event.description,
            date: d.event.date,
            time: d.event.time,
            attendee_count: d.attendee_count,
            joined: d.joined,
        }
    }
}

/// Response to a successful signup.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub event_id: i32,
    pub gamer_id: i32,
}
