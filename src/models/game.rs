//! Game payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::NewGame;
use crate::entity::game;
use crate::error::{AppError, AppResult};

/// Maximum length of a game's title and maker.
pub const MAX_GAME_TEXT_LENGTH: usize = 50;

/// Create/update game request body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    pub title: String,
    pub maker: String,
    pub skill_level: i32,
    pub number_of_players: i32,
    pub game_type_id: i32,
}

impl GameRequest {
    /// Validate and convert into storable fields.
    pub fn into_new_game(self) -> AppResult<NewGame> {
        let title = self.title.trim().to_string();
        let maker = self.maker.trim().to_string();

        for (field, value) in [("title", &title), ("maker", &maker)] {
            if value.is_empty() {
                return Err(AppError::InvalidInput(format!("{} is required", field)));
            }
            if value.chars().count() > MAX_GAME_TEXT_LENGTH {
                return Err(AppError::InvalidInput(format!(
                    "{} must be at most {} characters",
                    field, MAX_GAME_TEXT_LENGTH
                )));
            }
        }

        if self.skill_level < 1 {
            return Err(AppError::InvalidInput(
                "skillLevel must be a positive integer".to_string(),
            ));
        }
        if self.number_of_players < 1 {
            return Err(AppError::InvalidInput(
                "numberOfPlayers must be a positive integer".to_string(),
            ));
        }

        Ok(NewGame {
            title,
            maker,
            skill_level: self.skill_level,
            number_of_players: self.number_of_players,
            game_type_id: self.game_type_id,
        })
    }
}

/// Query parameters for listing games.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ListGamesQuery {
    /// Only games of this game type.
    #[serde(rename = "type")]
    pub game_type: Option<i32>,
}

/// Serialized game. Creator and type are given as references.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GameResponse {
    pub id: i32,
    pub title: String,
    pub maker: String,
    pub skill_level: i32,
    pub number_of_players: i32,
    /// Creator's gamer ID
    pub gamer: i32,
    /// Game type ID
    pub game_type: i32,
}

impl From<game::Model> for GameResponse {
    fn from(m: game::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            maker: m.maker,
            skill_level: m.skill_level,
            number_of_players: m.number_of_players,
            gamer: m.gamer_id,
            game_type: m.game_type_id,
        }
    }
}
