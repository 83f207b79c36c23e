//! Create gamers table.

use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gamer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gamer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // One gamer per user
                    .col(ColumnDef::new(Gamer::UserId).integer().not_null().unique_key())
                    .col(ColumnDef::new(Gamer::Bio).string_len(50).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Gamer::Table, Gamer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gamer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gamer {
    #[sea_orm(iden = "gamers")]
    Table,
    Id,
    UserId,
    Bio,
}
