// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, in-memory databases, pipeline configs, and canned fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrisnap`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use chrono::{DateTime, Utc};
use nutrisnap::{
    config::{DatabaseUrl, PipelineConfig},
    database::Database,
    external::NutritionixFood,
    models::{FoodLogEntry, LoggedFood, MealType, NutrientProfile, NutritionRecord, UserRef},
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::connect(&DatabaseUrl::Memory).await?)
}

/// Pipeline limits with short deadlines so timeout tests stay fast
pub fn fast_pipeline_config() -> PipelineConfig {
    PipelineConfig {
        max_labels: 3,
        max_concurrent_lookups: 3,
        lookup_timeout_secs: 1,
        detection_timeout_secs: 1,
    }
}

/// Principal used across integration tests
pub fn test_user(id: &str) -> UserRef {
    UserRef::new(id).unwrap()
}

/// Nutritionix match with macros filled in
pub fn food(name: &str, calories: f64, serving_weight_grams: f64) -> NutritionixFood {
    NutritionixFood {
        nf_protein: Some(calories / 25.0),
        nf_total_carbohydrate: Some(calories / 8.0),
        nf_total_fat: Some(calories / 20.0),
        ..NutritionixFood::named(name, calories, serving_weight_grams)
    }
}

/// Nutrition record for a food with the given serving weight
pub fn record(name: &str, calories: f64, serving_weight_grams: f64) -> NutritionRecord {
    NutritionRecord {
        food_item: name.to_owned(),
        nutrients: NutrientProfile {
            calories,
            protein: calories / 25.0,
            total_carbohydrate: calories / 8.0,
            total_fat: calories / 20.0,
            dietary_fiber: 2.0,
            sugars: 4.0,
            sodium: 300.0,
            ..NutrientProfile::default()
        },
        serving_qty: 1.0,
        serving_unit: "serving".to_owned(),
        serving_weight_grams,
        confidence: 1.0,
    }
}

/// Food log entry with fixed macros
pub fn entry(user: &UserRef, name: &str, meal_type: MealType, calories: f64) -> FoodLogEntry {
    FoodLogEntry {
        user: user.clone(),
        meal_type,
        food_name: name.to_owned(),
        weight_grams: 100.0,
        calories,
        protein: 10.0,
        carbs: 20.0,
        fats: 5.0,
        fiber: 1.0,
        sugars: 2.0,
        sodium: 100.0,
    }
}

/// Logged food as returned by the store, for pure summary tests
pub fn logged(name: &str, meal_type: MealType, calories: f64) -> LoggedFood {
    LoggedFood {
        id: format!("food-{name}"),
        meal_id: format!("meal-{name}"),
        meal_type,
        food_name: name.to_owned(),
        weight_grams: 100.0,
        calories,
        protein: 10.0,
        carbs: 20.0,
        fats: 5.0,
        fiber: 1.0,
        sugars: 2.0,
        sodium: 100.0,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}
