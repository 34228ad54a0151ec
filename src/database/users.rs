// ABOUTME: SQLite user registry and body profile storage
// ABOUTME: Registers principals with a display name and keeps one profile per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::food_log::{elapsed_ms, timestamp};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{Gender, UserAccount, UserDetails, UserRef};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::time::Instant;

/// User database operations manager
#[derive(Clone)]
pub struct UserManager {
    pool: SqlitePool,
}

impl UserManager {
    /// Create a new user manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a user, or rename one that already exists
    ///
    /// The original `created_at` of an existing user is kept, including users
    /// first stored implicitly by logging a food.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or a database error
    pub async fn create_user(&self, user: &UserRef, name: &str) -> AppResult<UserAccount> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }
        let started = Instant::now();

        sqlx::query(
            r"
            INSERT INTO users (id, name, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT(id) DO UPDATE SET name = excluded.name
            ",
        )
        .bind(user.as_str())
        .bind(name)
        .bind(timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        AppLogger::log_database_operation("upsert", "users", true, elapsed_ms(started));

        self.get_user(user)
            .await?
            .ok_or_else(|| AppError::internal(format!("User {user} missing after insert")))
    }

    /// Get a registered user
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is unreadable
    pub async fn get_user(&self, user: &UserRef) -> AppResult<Option<UserAccount>> {
        let row = sqlx::query("SELECT id, name, created_at FROM users WHERE id = $1")
            .bind(user.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Store or replace the body profile of a registered user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user is not registered, or a database error
    pub async fn save_user_details(&self, user: &UserRef, details: &UserDetails) -> AppResult<()> {
        if self.get_user(user).await?.is_none() {
            return Err(AppError::not_found(format!("User {user}")));
        }
        let started = Instant::now();

        sqlx::query(
            r"
            INSERT INTO user_details (user_id, age, weight, height, gender, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT(user_id) DO UPDATE SET
                age = excluded.age,
                weight = excluded.weight,
                height = excluded.height,
                gender = excluded.gender,
                updated_at = excluded.updated_at
            ",
        )
        .bind(user.as_str())
        .bind(i64::from(details.age))
        .bind(details.weight_kg)
        .bind(details.height_cm)
        .bind(details.gender.as_str())
        .bind(timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save user details: {e}")))?;

        AppLogger::log_database_operation("upsert", "user_details", true, elapsed_ms(started));
        Ok(())
    }

    /// Get the body profile of a user, if one was saved
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored profile is invalid
    pub async fn user_details(&self, user: &UserRef) -> AppResult<Option<UserDetails>> {
        let row = sqlx::query(
            "SELECT age, weight, height, gender FROM user_details WHERE user_id = $1",
        )
        .bind(user.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user details: {e}")))?;

        row.as_ref().map(row_to_details).transpose()
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<UserAccount> {
    let id: String = row.get("id");
    let created_at: String = row.get("created_at");
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| AppError::database(format!("Invalid created_at '{created_at}': {e}")))?
        .with_timezone(&Utc);

    Ok(UserAccount {
        id: UserRef::new(id)?,
        name: row.get("name"),
        created_at,
    })
}

fn row_to_details(row: &SqliteRow) -> AppResult<UserDetails> {
    let age: i64 = row.get("age");
    let age = u32::try_from(age)
        .map_err(|_| AppError::database(format!("Invalid stored age: {age}")))?;
    let gender: String = row.get("gender");

    UserDetails::new(
        age,
        row.get("weight"),
        row.get("height"),
        gender.parse::<Gender>()?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_database, create_test_user};

    #[tokio::test]
    async fn test_create_user_renames_without_resetting_created_at() {
        let db = create_test_database().await.unwrap();
        let users = db.users();
        let user = create_test_user();

        let first = users.create_user(&user, "Ada").await.unwrap();
        let renamed = users.create_user(&user, "  Ada L. ").await.unwrap();

        assert_eq!(renamed.name, "Ada L.");
        assert_eq!(renamed.created_at, first.created_at);
        assert_eq!(users.get_user(&user).await.unwrap(), Some(renamed));
    }

    #[tokio::test]
    async fn test_details_require_a_registered_user() {
        let db = create_test_database().await.unwrap();
        let details = UserDetails::new(30, 60.0, 165.0, Gender::Female).unwrap();

        let error = db
            .users()
            .save_user_details(&create_test_user(), &details)
            .await
            .unwrap_err();

        assert_eq!(error.code, crate::errors::ErrorCode::ResourceNotFound);
    }
}
