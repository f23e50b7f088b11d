use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;

/// Shareable handle to the tick database for use across async handlers
///
/// Wraps an sqlx connection pool; cloning is cheap and every clone shares
/// the same pool.
#[derive(Clone)]
pub struct TickStore {
    pool: SqlitePool,
}

impl TickStore {
    /// Create a store from configuration.
    ///
    /// Connects to the configured `DATABASE_URL`, creating a local database
    /// file on first use when nothing else was configured.
    pub async fn connect(config: &Config) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .context("invalid database connection string")?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("failed to connect to database")?;

        tracing::info!("Connected to database: {}", config.database_url);

        Ok(Self { pool })
    }

    /// In-memory store for tests.
    ///
    /// Bounded to a single connection so every caller sees the same
    /// database; a pooled `sqlite::memory:` would otherwise hand each
    /// connection its own empty one.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .context("failed to open in-memory database")?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Record the current time and return every tick recorded so far.
    ///
    /// Runs three statements in order on one pooled connection: create the
    /// table if absent, insert now, select all. The connection returns to
    /// the pool when the guard drops, on success and error paths alike.
    ///
    /// # Errors
    /// Returns an error if acquiring a connection or any of the three
    /// statements fails.
    pub async fn tick(&self) -> Result<Vec<NaiveDateTime>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("CREATE TABLE IF NOT EXISTS ticks (tick TIMESTAMP)")
            .execute(&mut *conn)
            .await?;

        sqlx::query("INSERT INTO ticks (tick) VALUES (?1)")
            .bind(Utc::now().naive_utc())
            .execute(&mut *conn)
            .await?;

        let ticks: Vec<NaiveDateTime> = sqlx::query_scalar("SELECT tick FROM ticks")
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!("tick recorded, {} rows total", ticks.len());

        Ok(ticks)
    }
}
