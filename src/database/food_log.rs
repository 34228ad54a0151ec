// ABOUTME: SQLite implementation of the food log store
// ABOUTME: Writes a meal row and a food row per entry and reads a user's foods for one day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FoodLogStore;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{FoodLogEntry, LoggedFood, MealType, UserRef};
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::time::Instant;
use uuid::Uuid;

/// Food log database operations manager
#[derive(Clone)]
pub struct FoodLogManager {
    pool: SqlitePool,
}

impl FoodLogManager {
    /// Create a new food log manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist an entry with an explicit timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if an insert fails; no row is kept in that case
    pub async fn add_food_at(
        &self,
        entry: &FoodLogEntry,
        logged_at: DateTime<Utc>,
    ) -> AppResult<LoggedFood> {
        let started = Instant::now();
        let meal_id = Uuid::new_v4().to_string();
        let food_id = Uuid::new_v4().to_string();
        let created_at = timestamp(logged_at);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query(
            "INSERT INTO users (id, name, created_at) VALUES ($1, '', $2) ON CONFLICT(id) DO NOTHING",
        )
        .bind(entry.user.as_str())
        .bind(&created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to register user: {e}")))?;

        sqlx::query("INSERT INTO meals (id, user_id, name, created_at) VALUES ($1, $2, $3, $4)")
            .bind(&meal_id)
            .bind(entry.user.as_str())
            .bind(entry.meal_type.as_str())
            .bind(&created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to create meal: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO foods (id, meal_id, food_name, weight, calorie, protein, carbs, fats, fiber, sugars, sodium, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(&food_id)
        .bind(&meal_id)
        .bind(&entry.food_name)
        .bind(entry.weight_grams)
        .bind(entry.calories)
        .bind(entry.protein)
        .bind(entry.carbs)
        .bind(entry.fats)
        .bind(entry.fiber)
        .bind(entry.sugars)
        .bind(entry.sodium)
        .bind(&created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to add food: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit food entry: {e}")))?;

        AppLogger::log_database_operation("insert", "foods", true, elapsed_ms(started));

        Ok(LoggedFood {
            id: food_id,
            meal_id,
            meal_type: entry.meal_type,
            food_name: entry.food_name.clone(),
            weight_grams: entry.weight_grams,
            calories: entry.calories,
            protein: entry.protein,
            carbs: entry.carbs,
            fats: entry.fats,
            fiber: entry.fiber,
            sugars: entry.sugars,
            sodium: entry.sodium,
            created_at: logged_at,
        })
    }

    /// Count foods logged by `user` across all days
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_foods(&self, user: &UserRef) -> AppResult<i64> {
        let row = sqlx::query(
            r"
            SELECT COUNT(*) AS total
            FROM foods f
            JOIN meals m ON m.id = f.meal_id
            WHERE m.user_id = $1
            ",
        )
        .bind(user.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count foods: {e}")))?;

        Ok(row.get("total"))
    }
}

#[async_trait]
impl FoodLogStore for FoodLogManager {
    async fn add_food(&self, entry: &FoodLogEntry) -> AppResult<LoggedFood> {
        self.add_food_at(entry, Utc::now()).await
    }

    async fn foods_for_day(&self, user: &UserRef, day: NaiveDate) -> AppResult<Vec<LoggedFood>> {
        let start = day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        let end = day
            .checked_add_days(Days::new(1))
            .and_then(|next| next.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
        let (Some(start), Some(end)) = (start, end) else {
            return Err(AppError::invalid_input(format!("Day out of range: {day}")));
        };

        let rows = sqlx::query(
            r"
            SELECT f.id, f.meal_id, m.name AS meal_name, f.food_name, f.weight, f.calorie,
                   f.protein, f.carbs, f.fats, f.fiber, f.sugars, f.sodium, f.created_at
            FROM foods f
            JOIN meals m ON m.id = f.meal_id
            WHERE m.user_id = $1 AND f.created_at >= $2 AND f.created_at < $3
            ORDER BY f.created_at ASC, f.rowid ASC
            ",
        )
        .bind(user.as_str())
        .bind(timestamp(start))
        .bind(timestamp(end))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get foods for {day}: {e}")))?;

        rows.iter().map(row_to_logged_food).collect()
    }
}

fn row_to_logged_food(row: &SqliteRow) -> AppResult<LoggedFood> {
    let created_at: String = row.get("created_at");
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| AppError::database(format!("Invalid created_at '{created_at}': {e}")))?
        .with_timezone(&Utc);
    let meal_name: String = row.get("meal_name");

    Ok(LoggedFood {
        id: row.get("id"),
        meal_id: row.get("meal_id"),
        meal_type: MealType::from_str_lossy(&meal_name),
        food_name: row.get("food_name"),
        weight_grams: row.get("weight"),
        calories: row.get("calorie"),
        protein: row.get("protein"),
        carbs: row.get("carbs"),
        fats: row.get("fats"),
        fiber: row.get("fiber"),
        sugars: row.get("sugars"),
        sodium: row.get("sodium"),
        created_at,
    })
}

/// Fixed-width UTC timestamp so text comparison matches time order
pub(super) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(super) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_database, create_test_entry, create_test_user};
    use chrono::TimeZone;

    #[test]
    fn test_timestamps_sort_lexically() {
        let early = Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 59).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        assert!(timestamp(early) < timestamp(late));
        assert!(timestamp(late).ends_with('Z'));
    }

    #[tokio::test]
    async fn test_add_food_round_trips_through_day_query() {
        let db = create_test_database().await.unwrap();
        let log = db.food_log();
        let user = create_test_user();
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 12, 30, 0).unwrap();

        let stored = log
            .add_food_at(&create_test_entry(&user, "oatmeal", MealType::Breakfast), at)
            .await
            .unwrap();
        let day = log
            .foods_for_day(&user, at.date_naive())
            .await
            .unwrap();

        assert_eq!(day, vec![stored]);
        assert_eq!(day[0].meal_type, MealType::Breakfast);
        assert_eq!(log.count_foods(&user).await.unwrap(), 1);
    }
}
