//! Create event_gamers join table.
//!
//! The unique index on (event_id, gamer_id) rejects a second signup of the
//! same gamer, including concurrent ones.

use sea_orm_migration::prelude::*;

use super::m20260301_000003_create_gamers::Gamer;
use super::m20260301_000006_create_events::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventGamer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventGamer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventGamer::EventId).integer().not_null())
                    .col(ColumnDef::new(EventGamer::GamerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventGamer::Table, EventGamer::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventGamer::Table, EventGamer::GamerId)
                            .to(Gamer::Table, Gamer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_gamers_event_gamer")
                    .table(EventGamer::Table)
                    .col(EventGamer::EventId)
                    .col(EventGamer::GamerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_gamers_gamer_id")
                    .table(EventGamer::Table)
                    .col(EventGamer::GamerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventGamer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventGamer {
    #[sea_orm(iden = "event_gamers")]
    Table,
    Id,
    EventId,
    GamerId,
}
