//! Profile aggregation.

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{ProfileGamer, ProfileResponse, ProfileUser};

/// Build the requester's profile: their gamer record and every event they joined.
pub async fn load_profile(pool: &DbPool, gamer_id: i32) -> AppResult<ProfileResponse> {
    let owner = pool
        .get_gamer_with_user(gamer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Gamer {}", gamer_id)))?;

    let events = pool.list_events_joined_by(gamer_id).await?;

    Ok(ProfileResponse {
        gamer: ProfileGamer {
            id: owner.gamer.id,
            bio: owner.gamer.bio,
            user: ProfileUser {
                first_name: owner.user.first_name,
                last_name: owner.user.last_name,
                username: owner.user.username,
            },
        },
        events: events.into_iter().map(Into::into).collect(),
    })
}
