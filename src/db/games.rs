//! Database queries for games.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};

use crate::entity::game::{self, ActiveModel, Entity as Game};
use crate::error::{AppError, AppResult};

use super::{DbPool, is_foreign_key_violation};

/// Editable fields of a game.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub title: String,
    pub maker: String,
    pub skill_level: i32,
    pub number_of_players: i32,
    pub game_type_id: i32,
}

fn game_type_reference_error(err: DbErr, game_type_id: i32, action: &str) -> AppError {
    if is_foreign_key_violation(&err) {
        AppError::NotFound(format!("Game type {}", game_type_id))
    } else {
        AppError::Database(format!("Failed to {} game: {}", action, err))
    }
}

impl DbPool {
    /// Insert a new game created by `gamer_id`.
    pub async fn insert_game(&self, gamer_id: i32, fields: NewGame) -> AppResult<game::Model> {
        let game_type_id = fields.game_type_id;
        let model = ActiveModel {
            id: NotSet,
            title: Set(fields.title),
            maker: Set(fields.maker),
            skill_level: Set(fields.skill_level),
            number_of_players: Set(fields.number_of_players),
            gamer_id: Set(gamer_id),
            game_type_id: Set(fields.game_type_id),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| game_type_reference_error(e, game_type_id, "insert"))?;

        Ok(result)
    }

    /// Get a game by ID.
    pub async fn get_game_by_id(&self, id: i32) -> AppResult<Option<game::Model>> {
        let result = Game::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get game: {}", e)))?;

        Ok(result)
    }

    /// Get games keyed by ID.
    pub async fn get_games_by_ids(&self, ids: &[i32]) -> AppResult<HashMap<i32, game::Model>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Game::find()
            .filter(game::Column::Id.is_in(ids.iter().copied()))
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get games: {}", e)))?;

        Ok(rows.into_iter().map(|g| (g.id, g)).collect())
    }

    /// List games, optionally restricted to one game type.
    pub async fn list_games(&self, game_type_id: Option<i32>) -> AppResult<Vec<game::Model>> {
        let mut select = Game::find();

        if let Some(type_id) = game_type_id {
            select = select.filter(game::Column::GameTypeId.eq(type_id));
        }

        let result = select
            .order_by_asc(game::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list games: {}", e)))?;

        Ok(result)
    }

    /// Replace the editable fields of a game.
    pub async fn update_game(&self, id: i32, fields: NewGame) -> AppResult<game::Model> {
        let game = self
            .get_game_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {}", id)))?;

        let game_type_id = fields.game_type_id;
        let mut active: ActiveModel = game.into();
        active.title = Set(fields.title);
        active.maker = Set(fields.maker);
        active.skill_level = Set(fields.skill_level);
        active.number_of_players = Set(fields.number_of_players);
        active.game_type_id = Set(fields.game_type_id);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::NotFound(format!("Game {}", id)),
                e => game_type_reference_error(e, game_type_id, "update"),
            })?;

        Ok(result)
    }

    /// Delete a game. Its events and their registrations cascade.
    ///
    /// Returns false when no game had this ID.
    pub async fn delete_game(&self, id: i32) -> AppResult<bool> {
        let result = Game::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete game: {}", e)))?;

        Ok(result.rows_affected > 0)
    }
}
