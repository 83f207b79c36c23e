//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users;
mod m20260301_000002_create_auth_tokens;
mod m20260301_000003_create_gamers;
mod m20260301_000004_create_game_types;
mod m20260301_000005_create_games;
mod m20260301_000006_create_events;
mod m20260301_000007_create_event_gamers;
mod m20260301_000008_seed_game_types;

pub use m20260301_000008_seed_game_types::SEED_LABELS;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users::Migration),
            Box::new(m20260301_000002_create_auth_tokens::Migration),
            Box::new(m20260301_000003_create_gamers::Migration),
            Box::new(m20260301_000004_create_game_types::Migration),
            Box::new(m20260301_000005_create_games::Migration),
            Box::new(m20260301_000006_create_events::Migration),
            Box::new(m20260301_000007_create_event_gamers::Migration),
            Box::new(m20260301_000008_seed_game_types::Migration),
        ]
    }
}
