//! Database operations for user accounts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::entity::{auth_token, gamer, user};
use crate::error::{AppError, AppResult};

use super::{DbPool, is_unique_violation};

/// Fields of a new account, already validated and with the password hashed.
#[derive(Debug)]
pub struct NewAccount<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub bio: &'a str,
}

impl DbPool {
    /// Create a user, its gamer profile, and a first session token in one transaction.
    ///
    /// A taken username surfaces as `Conflict` via the unique index.
    pub async fn create_account(
        &self,
        account: &NewAccount<'_>,
        key_hash: &str,
        key_prefix: &str,
    ) -> AppResult<(user::Model, gamer::Model)> {
        let txn = self.connection().begin().await?;
        let now = Utc::now();

        let new_user = user::ActiveModel {
            id: NotSet,
            username: Set(account.username.to_string()),
            password_hash: Set(account.password_hash.to_string()),
            first_name: Set(account.first_name.to_string()),
            last_name: Set(account.last_name.to_string()),
            email: Set(account.email.to_string()),
            created_at: Set(now),
        };

        let user = new_user.insert(&txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                tracing::debug!("Registration race: unique constraint caught on insert");
                AppError::Conflict(format!("Username '{}' is already taken", account.username))
            } else {
                AppError::Database(format!("Failed to insert user: {}", e))
            }
        })?;

        let gamer = gamer::ActiveModel {
            id: NotSet,
            user_id: Set(user.id),
            bio: Set(account.bio.to_string()),
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert gamer: {}", e)))?;

        auth_token::ActiveModel {
            id: NotSet,
            user_id: Set(user.id),
            key_hash: Set(key_hash.to_string()),
            key_prefix: Set(key_prefix.to_string()),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert token: {}", e)))?;

        txn.commit().await?;

        Ok((user, gamer))
    }

    /// Find a user by username.
    pub async fn find_user_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        let result = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get user: {}", e)))?;

        Ok(result)
    }

    /// Count registered users.
    pub async fn count_users(&self) -> AppResult<u64> {
        let total = user::Entity::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count users: {}", e)))?;

        Ok(total)
    }
}
