//! Event signup workflow.
//!
//! Per (event, gamer) pair the state is either NotJoined or Joined, encoded as
//! the absence or presence of one `event_gamers` row. Joining twice is a
//! `Conflict`. Leaving without having joined is `NotFound`. Neither mutates
//! anything.

use tracing::info;

use crate::db::DbPool;
use crate::entity::event_gamer;
use crate::error::{AppError, AppResult};

/// Sign a gamer up for an event.
pub async fn join_event(
    pool: &DbPool,
    event_id: i32,
    gamer_id: i32,
) -> AppResult<event_gamer::Model> {
    pool.get_event_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {}", event_id)))?;

    let registration = pool.insert_registration(event_id, gamer_id).await?;

    info!("Gamer {} joined event {}", gamer_id, event_id);
    Ok(registration)
}

/// Withdraw a gamer from an event.
pub async fn leave_event(pool: &DbPool, event_id: i32, gamer_id: i32) -> AppResult<()> {
    pool.get_event_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {}", event_id)))?;

    let removed = pool.delete_registration(event_id, gamer_id).await?;
    if removed == 0 {
        return Err(AppError::NotFound(format!(
            "Registration of gamer {} for event {}",
            gamer_id, event_id
        )));
    }

    info!("Gamer {} left event {}", gamer_id, event_id);
    Ok(())
}
