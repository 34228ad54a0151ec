// ABOUTME: SQLite food log database: connection setup, schema creation, and the store trait
// ABOUTME: Meals hold a meal type per user; foods hold the scaled nutrients of each eaten item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Users live in `users`, with an optional body profile in `user_details`.
//! The food log uses two more tables. Every logged food creates one `meals`
//! row (user and meal type) and one `foods` row referencing it. Logging for
//! a principal that has no `users` row yet registers it with an empty name.

mod food_log;
mod users;

pub use food_log::FoodLogManager;
pub use users::UserManager;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use crate::models::{FoodLogEntry, LoggedFood, UserRef};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::debug;

/// Persistence collaborator for logged foods
#[async_trait]
pub trait FoodLogStore: Send + Sync {
    /// Persist one entry and return it as stored
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written
    async fn add_food(&self, entry: &FoodLogEntry) -> AppResult<LoggedFood>;

    /// Foods logged by `user` on the given UTC day, in logging order
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read
    async fn foods_for_day(&self, user: &UserRef, day: NaiveDate) -> AppResult<Vec<LoggedFood>>;
}

/// Database handle for the food log
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and create the schema if needed
    ///
    /// File databases are created on first use, including their parent
    /// directory. In-memory databases use a single connection so every query
    /// sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory, connection, or schema cannot be created
    pub async fn connect(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .connect("sqlite::memory:")
                .await
                .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?,
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                SqlitePoolOptions::new()
                    .connect(&format!("{}?mode=rwc", url.to_connection_string()))
                    .await
                    .map_err(|e| AppError::database(format!("Failed to open {url}: {e}")))?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        debug!(database = %url, "Food log database ready");
        Ok(db)
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Food log operations on this database
    #[must_use]
    pub fn food_log(&self) -> FoodLogManager {
        FoodLogManager::new(self.pool.clone())
    }

    /// User and profile operations on this database
    #[must_use]
    pub fn users(&self) -> UserManager {
        UserManager::new(self.pool.clone())
    }

    /// Create tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        let statements = [
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS user_details (
                user_id TEXT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
                age INTEGER NOT NULL,
                weight REAL NOT NULL,
                height REAL NOT NULL,
                gender TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS meals (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS foods (
                id TEXT PRIMARY KEY,
                meal_id TEXT NOT NULL REFERENCES meals(id) ON DELETE CASCADE,
                food_name TEXT NOT NULL,
                weight REAL NOT NULL,
                calorie REAL NOT NULL,
                protein REAL NOT NULL,
                carbs REAL NOT NULL,
                fats REAL NOT NULL,
                fiber REAL NOT NULL,
                sugars REAL NOT NULL,
                sodium REAL NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
            "CREATE INDEX IF NOT EXISTS idx_meals_user_created ON meals(user_id, created_at)",
            "CREATE INDEX IF NOT EXISTS idx_foods_meal_id ON foods(meal_id)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        }
        Ok(())
    }
}
