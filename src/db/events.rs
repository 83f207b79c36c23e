//! Database queries for events.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, JoinType, NotSet, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

use crate::entity::event::{self, ActiveModel, Entity as Event};
use crate::entity::{event_gamer, game};
use crate::error::{AppError, AppResult};

use super::{DbPool, GamerWithUser, is_foreign_key_violation};

/// Editable fields of an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub game_id: i32,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Filters accepted when listing events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub game_id: Option<i32>,
}

/// An event with the rows its serialized form nests.
#[derive(Debug, Clone)]
pub struct EventDetail {
    pub event: event::Model,
    pub game: game::Model,
    pub organizer: GamerWithUser,
    pub attendee_count: u64,
    /// Whether the viewing gamer is signed up.
    pub joined: bool,
}

fn game_reference_error(err: DbErr, game_id: i32, action: &str) -> AppError {
    if is_foreign_key_violation(&err) {
        AppError::NotFound(format!("Game {}", game_id))
    } else {
        AppError::Database(format!("Failed to {} event: {}", action, err))
    }
}

impl DbPool {
    /// Insert a new event organized by `organizer_id`.
    ///
    /// A game deleted since the caller resolved it surfaces as `NotFound`.
    pub async fn insert_event(&self, organizer_id: i32, fields: NewEvent) -> AppResult<event::Model> {
        let game_id = fields.game_id;
        let model = ActiveModel {
            id: NotSet,
            game_id: Set(fields.game_id),
            organizer_id: Set(organizer_id),
            description: Set(fields.description),
            date: Set(fields.date),
            time: Set(fields.time),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| game_reference_error(e, game_id, "insert"))?;

        Ok(result)
    }

    /// Get an event by ID.
    pub async fn get_event_by_id(&self, id: i32) -> AppResult<Option<event::Model>> {
        let result = Event::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get event: {}", e)))?;

        Ok(result)
    }

    /// Replace an event's fields and organizer.
    pub async fn update_event(
        &self,
        id: i32,
        organizer_id: i32,
        fields: NewEvent,
    ) -> AppResult<event::Model> {
        let event = self
            .get_event_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {}", id)))?;

        let game_id = fields.game_id;
        let mut active: ActiveModel = event.into();
        active.game_id = Set(fields.game_id);
        active.organizer_id = Set(organizer_id);
        active.description = Set(fields.description);
        active.date = Set(fields.date);
        active.time = Set(fields.time);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::NotFound(format!("Event {}", id)),
                e => game_reference_error(e, game_id, "update"),
            })?;

        Ok(result)
    }

    /// Delete an event. Its registrations cascade.
    ///
    /// Returns false when no event had this ID.
    pub async fn delete_event(&self, id: i32) -> AppResult<bool> {
        let result = Event::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete event: {}", e)))?;

        Ok(result.rows_affected > 0)
    }

    /// List events matching the filter, ordered by ID.
    pub async fn list_events(&self, filter: &EventFilter) -> AppResult<Vec<event::Model>> {
        let mut select = Event::find();

        if let Some(game_id) = filter.game_id {
            select = select.filter(event::Column::GameId.eq(game_id));
        }

        let result = select
            .order_by_asc(event::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list events: {}", e)))?;

        Ok(result)
    }

    /// List events with their game, organizer and attendance.
    pub async fn list_event_details(
        &self,
        filter: &EventFilter,
        viewer_gamer_id: i32,
    ) -> AppResult<Vec<EventDetail>> {
        let events = self.list_events(filter).await?;
        self.load_event_details(events, viewer_gamer_id).await
    }

    /// Get one event with its game, organizer and attendance.
    pub async fn get_event_detail(
        &self,
        id: i32,
        viewer_gamer_id: i32,
    ) -> AppResult<Option<EventDetail>> {
        let Some(event) = self.get_event_by_id(id).await? else {
            return Ok(None);
        };

        let mut details = self.load_event_details(vec![event], viewer_gamer_id).await?;
        Ok(details.pop())
    }

    /// Events a gamer has signed up for, with their games, soonest first.
    pub async fn list_events_joined_by(
        &self,
        gamer_id: i32,
    ) -> AppResult<Vec<(event::Model, game::Model)>> {
        let rows = Event::find()
            .join(JoinType::InnerJoin, event::Relation::Registrations.def())
            .filter(event_gamer::Column::GamerId.eq(gamer_id))
            .order_by_asc(event::Column::Date)
            .order_by_asc(event::Column::Time)
            .find_also_related(game::Entity)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get joined events: {}", e)))?;

        Ok(rows
            .into_iter()
            .filter_map(|(event, game)| game.map(|game| (event, game)))
            .collect())
    }

    /// Batch-load the related rows for a set of events.
    async fn load_event_details(
        &self,
        events: Vec<event::Model>,
        viewer_gamer_id: i32,
    ) -> AppResult<Vec<EventDetail>> {
        let event_ids: Vec<i32> = events.iter().map(|e| e.id).collect();
        let game_ids: Vec<i32> = events.iter().map(|e| e.game_id).collect();
        let organizer_ids: Vec<i32> = events.iter().map(|e| e.organizer_id).collect();

        let games = self.get_games_by_ids(&game_ids).await?;
        let organizers = self.get_gamers_with_users(&organizer_ids).await?;
        let registrations = self.registrations_for_events(&event_ids).await?;

        let mut attendee_counts: HashMap<i32, u64> = HashMap::new();
        let mut joined: HashSet<i32> = HashSet::new();
        for registration in &registrations {
            *attendee_counts.entry(registration.event_id).or_default() += 1;
            if registration.gamer_id == viewer_gamer_id {
                joined.insert(registration.event_id);
            }
        }

        let mut details = Vec::with_capacity(events.len());
        for event in events {
            let game = games.get(&event.game_id).cloned().ok_or_else(|| {
                AppError::Internal(format!("Event {} references missing game", event.id))
            })?;
            let organizer = organizers.get(&event.organizer_id).cloned().ok_or_else(|| {
                AppError::Internal(format!("Event {} references missing organizer", event.id))
            })?;

            details.push(EventDetail {
                attendee_count: attendee_counts.get(&event.id).copied().unwrap_or(0),
                joined: joined.contains(&event.id),
                event,
                game,
                organizer,
            });
        }

        Ok(details)
    }
}
