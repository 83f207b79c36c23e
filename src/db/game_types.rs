//! Database queries for game types.

use sea_orm::{EntityTrait, QueryOrder};

use crate::entity::game_type::{self, Entity as GameType};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// List all game types.
    pub async fn list_game_types(&self) -> AppResult<Vec<game_type::Model>> {
        let result = GameType::find()
            .order_by_asc(game_type::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list game types: {}", e)))?;

        Ok(result)
    }

    /// Get a game type by ID.
    pub async fn get_game_type_by_id(&self, id: i32) -> AppResult<Option<game_type::Model>> {
        let result = GameType::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get game type: {}", e)))?;

        Ok(result)
    }
}
