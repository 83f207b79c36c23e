//! Game type payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::game_type;

/// Serialized game type.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GameTypeResponse {
    pub id: i32,
    pub label: String,
}

impl From<game_type::Model> for GameTypeResponse {
    fn from(m: game_type::Model) -> Self {
        Self {
            id: m.id,
            label: m.label,
        }
    }
}
