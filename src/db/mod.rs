// Database module - SQLite implementation of the store traits

use std::str::FromStr;

use color_eyre::{eyre::ensure, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub mod models;

mod category;
mod migrations;
mod question;

const MAX_CONNECTIONS: u32 = 5;

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Connect to `url` (e.g. `sqlite://trivia.db?mode=rwc`), verify the
    /// connection and apply pending migrations.
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        ensure!(one == 1, "connection check failed");

        migrations::run(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }

    pub async fn migration_applied(&self, version: &str) -> Result<bool> {
        migrations::is_applied(&self.pool, version).await
    }
}
