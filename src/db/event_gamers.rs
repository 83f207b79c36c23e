//! Database operations for event registrations (the event/gamer join table).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set,
};

use crate::entity::event_gamer::{self, ActiveModel, Entity as EventGamer};
use crate::error::{AppError, AppResult};

use super::{DbPool, is_foreign_key_violation, is_unique_violation};

impl DbPool {
    /// Record that a gamer joined an event.
    ///
    /// There is no existence check before the insert: the unique index on
    /// `(event_id, gamer_id)` rejects duplicates, which surface as `Conflict`.
    /// An event deleted in the meantime surfaces as `NotFound`.
    pub async fn insert_registration(
        &self,
        event_id: i32,
        gamer_id: i32,
    ) -> AppResult<event_gamer::Model> {
        let model = ActiveModel {
            id: NotSet,
            event_id: Set(event_id),
            gamer_id: Set(gamer_id),
        };

        match model.insert(self.connection()).await {
            Ok(registration) => Ok(registration),
            Err(e) if is_unique_violation(&e) => {
                Err(AppError::Conflict("Gamer already signed up for this event".to_string()))
            }
            Err(e) if is_foreign_key_violation(&e) => {
                Err(AppError::NotFound(format!("Event {}", event_id)))
            }
            Err(e) => Err(AppError::Database(format!(
                "Failed to insert registration: {}",
                e
            ))),
        }
    }

    /// Remove a gamer's registration. Returns the number of rows deleted.
    pub async fn delete_registration(&self, event_id: i32, gamer_id: i32) -> AppResult<u64> {
        let result = EventGamer::delete_many()
            .filter(event_gamer::Column::EventId.eq(event_id))
            .filter(event_gamer::Column::GamerId.eq(gamer_id))
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete registration: {}", e)))?;

        Ok(result.rows_affected)
    }

    /// Count registrations for an event.
    pub async fn count_registrations(&self, event_id: i32) -> AppResult<u64> {
        let total = EventGamer::find()
            .filter(event_gamer::Column::EventId.eq(event_id))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count registrations: {}", e)))?;

        Ok(total)
    }

    /// All registrations touching any of the given events.
    pub async fn registrations_for_events(
        &self,
        event_ids: &[i32],
    ) -> AppResult<Vec<event_gamer::Model>> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = EventGamer::find()
            .filter(event_gamer::Column::EventId.is_in(event_ids.iter().copied()))
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get registrations: {}", e)))?;

        Ok(result)
    }
}
