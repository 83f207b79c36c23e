//! Database queries for gamers.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::entity::{gamer, user};
use crate::error::{AppError, AppResult};

use super::DbPool;

/// A gamer together with the account it wraps.
#[derive(Debug, Clone)]
pub struct GamerWithUser {
    pub gamer: gamer::Model,
    pub user: user::Model,
}

impl DbPool {
    /// Get a gamer and its user by gamer ID.
    pub async fn get_gamer_with_user(&self, id: i32) -> AppResult<Option<GamerWithUser>> {
        let row = gamer::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get gamer: {}", e)))?;

        Ok(row.and_then(|(gamer, user)| user.map(|user| GamerWithUser { gamer, user })))
    }

    /// Get gamers with their users, keyed by gamer ID.
    pub async fn get_gamers_with_users(
        &self,
        ids: &[i32],
    ) -> AppResult<HashMap<i32, GamerWithUser>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = gamer::Entity::find()
            .filter(gamer::Column::Id.is_in(ids.iter().copied()))
            .find_also_related(user::Entity)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get gamers: {}", e)))?;

        Ok(rows
            .into_iter()
            .filter_map(|(gamer, user)| {
                user.map(|user| (gamer.id, GamerWithUser { gamer, user }))
            })
            .collect())
    }
}
