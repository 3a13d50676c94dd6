// ABOUTME: Database handle, pool creation, and schema migrations
// ABOUTME: Owns the SQLite connection pool shared across request handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! # Database Layer
//!
//! Owns the connection pool and the idempotent schema migrations for the two
//! tables the server consumes: `inventory` and `substitutions`.

/// Inventory allocation and substitution lookups
pub mod inventory;

pub use inventory::{AllocationOutcome, InventoryManager, Recommendation};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};

/// Database handle wrapping the shared connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations
    ///
    /// In-memory databases are pinned to a single pooled connection so every
    /// query observes the same store.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid, the connection
    /// fails, or migrations fail.
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        let connect = SqliteConnectOptions::from_str(&url.to_connection_string())
            .map_err(|e| AppError::config(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = options.connect_with(connect).await?;

        let database = Self { pool };
        database.migrate().await?;

        Ok(database)
    }

    /// Create a database over an existing pool (used by tests)
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create an inventory manager over this database
    #[must_use]
    pub fn inventory(&self) -> InventoryManager {
        InventoryManager::new(self.pool.clone())
    }

    /// Run idempotent schema migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS inventory (
                name TEXT PRIMARY KEY,
                qty_available REAL NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS substitutions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                original TEXT NOT NULL,
                substitute TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_substitutions_original ON substitutions(original)",
        )
        .execute(&self.pool)
        .await?;

        info!("Database migrations complete");
        Ok(())
    }
}
