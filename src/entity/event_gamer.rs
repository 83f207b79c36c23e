//! Join record between an event and a gamer who signed up for it.
//!
//! The `(event_id, gamer_id)` pair is unique at the database level.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_gamers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub gamer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::gamer::Entity",
        from = "Column::GamerId",
        to = "super::gamer::Column::Id",
        on_delete = "Cascade"
    )]
    Gamer,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::gamer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gamer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
