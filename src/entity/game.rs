//! Game entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub maker: String,
    pub skill_level: i32,
    pub number_of_players: i32,
    /// Creator of the game
    pub gamer_id: i32,
    pub game_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gamer::Entity",
        from = "Column::GamerId",
        to = "super::gamer::Column::Id",
        on_delete = "Cascade"
    )]
    Gamer,
    #[sea_orm(
        belongs_to = "super::game_type::Entity",
        from = "Column::GameTypeId",
        to = "super::game_type::Column::Id",
        on_delete = "Cascade"
    )]
    GameType,
    #[sea_orm(has_many = "super::event::Entity")]
    Events,
}

impl Related<super::gamer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gamer.def()
    }
}

impl Related<super::game_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameType.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
