//! Database operations for session tokens.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entity::{auth_token, gamer};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// Store a newly issued token for a user.
    pub async fn insert_token(
        &self,
        user_id: i32,
        key_hash: &str,
        key_prefix: &str,
    ) -> AppResult<auth_token::Model> {
        let model = auth_token::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            key_hash: Set(key_hash.to_string()),
            key_prefix: Set(key_prefix.to_string()),
            created_at: Set(Utc::now()),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert token: {}", e)))?;

        Ok(result)
    }

    /// Resolve a token digest to the gamer of the user who owns it.
    pub async fn find_gamer_by_token_hash(&self, key_hash: &str) -> AppResult<Option<gamer::Model>> {
        let token = auth_token::Entity::find()
            .filter(auth_token::Column::KeyHash.eq(key_hash))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to look up token: {}", e)))?;

        let Some(token) = token else {
            return Ok(None);
        };

        let gamer = gamer::Entity::find()
            .filter(gamer::Column::UserId.eq(token.user_id))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get gamer for token: {}", e)))?;

        Ok(gamer)
    }
}
