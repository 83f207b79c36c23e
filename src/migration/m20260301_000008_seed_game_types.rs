//! Seed the fixed set of game types.

use sea_orm_migration::prelude::*;

use super::m20260301_000004_create_game_types::GameType;

/// Labels available out of the box. Game types are read-only over the API.
pub const SEED_LABELS: &[&str] = &["Board", "Card", "Tabletop role playing", "Video"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(GameType::Table).columns([GameType::Label]);
        for label in SEED_LABELS {
            insert
                .values([(*label).into()])
                .map_err(|e| DbErr::Custom(format!("Invalid seed row: {}", e)))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(GameType::Table)
            .and_where(Expr::col(GameType::Label).is_in(SEED_LABELS.iter().copied()))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
