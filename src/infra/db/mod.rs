//! Database connection and schema management.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Shared handle on the Postgres connection pool
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool and bring the schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        if let Err(e) = db.run_migrations().await {
            tracing::error!("Failed to run migrations: {}", e);
            return Err(e);
        }

        tracing::info!("Database connected and migrations applied");
        Ok(db)
    }

    /// Open the pool and leave the schema alone.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self::from_connection(connection))
    }

    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Clone of the underlying pool handle, for repositories.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Revert the most recent migration only.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Every known migration name paired with whether it has been applied,
    /// applied ones first.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let applied = Migrator::get_applied_migrations(&self.connection).await?;
        let pending = Migrator::get_pending_migrations(&self.connection).await?;

        Ok(applied
            .iter()
            .map(|m| (m.name().to_string(), true))
            .chain(pending.iter().map(|m| (m.name().to_string(), false)))
            .collect())
    }

    /// Drop every table and re-apply all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Round-trip to the server.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
