//! Create games table.

use sea_orm_migration::prelude::*;

use super::m20260301_000003_create_gamers::Gamer;
use super::m20260301_000004_create_game_types::GameType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Game::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Game::Title).string_len(50).not_null())
                    .col(ColumnDef::new(Game::Maker).string_len(50).not_null())
                    .col(ColumnDef::new(Game::SkillLevel).integer().not_null())
                    .col(ColumnDef::new(Game::NumberOfPlayers).integer().not_null())
                    .col(ColumnDef::new(Game::GamerId).integer().not_null())
                    .col(ColumnDef::new(Game::GameTypeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Game::Table, Game::GamerId)
                            .to(Gamer::Table, Gamer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Game::Table, Game::GameTypeId)
                            .to(GameType::Table, GameType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_game_type_id")
                    .table(Game::Table)
                    .col(Game::GameTypeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    #[sea_orm(iden = "games")]
    Table,
    Id,
    Title,
    Maker,
    SkillLevel,
    NumberOfPlayers,
    GamerId,
    GameTypeId,
}
