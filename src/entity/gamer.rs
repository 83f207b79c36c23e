//! Gamer profile entity, one per user.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gamers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub bio: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::game::Entity")]
    Games,
    #[sea_orm(has_many = "super::event_gamer::Entity")]
    Registrations,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Games.def()
    }
}

impl Related<super::event_gamer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

/// Events a gamer has signed up for, through the join table.
impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_gamer::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_gamer::Relation::Gamer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
