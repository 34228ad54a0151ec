// ABOUTME: Test utilities for creating nutrition records, lookup matches, and food log fixtures
// ABOUTME: Centralizes test data creation so unit tests, integration tests, and benches agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::DatabaseUrl;
use crate::database::Database;
use crate::errors::AppResult;
use crate::external::NutritionixFood;
use crate::models::{FoodLogEntry, MealType, NutrientProfile, NutritionRecord, UserRef};

/// Create a pizza slice record: 285 kcal per 107 g serving
#[must_use]
pub fn create_test_record() -> NutritionRecord {
    create_test_record_named("pizza", 285.0, 107.0)
}

/// Create a record with the given name, calories, and serving weight
///
/// Macros are filled with fixed fractions of the calories so scaled values
/// stay easy to check by hand.
#[must_use]
pub fn create_test_record_named(
    food_item: &str,
    calories: f64,
    serving_weight_grams: f64,
) -> NutritionRecord {
    NutritionRecord {
        food_item: food_item.to_owned(),
        nutrients: NutrientProfile {
            calories,
            total_fat: calories / 20.0,
            saturated_fat: calories / 50.0,
            cholesterol: 10.0,
            sodium: 500.0,
            total_carbohydrate: calories / 8.0,
            dietary_fiber: 2.0,
            sugars: 3.5,
            protein: calories / 25.0,
            potassium: 180.0,
            phosphorus: 150.0,
        },
        serving_qty: 1.0,
        serving_unit: "slice".to_owned(),
        serving_weight_grams,
        confidence: 1.0,
    }
}

/// Create a Nutritionix match with every nutrient populated
#[must_use]
pub fn create_test_food(food_name: &str, calories: f64, serving_weight_grams: f64) -> NutritionixFood {
    NutritionixFood {
        nf_total_fat: Some(calories / 20.0),
        nf_protein: Some(calories / 25.0),
        nf_total_carbohydrate: Some(calories / 8.0),
        nf_dietary_fiber: Some(2.0),
        nf_sugars: Some(3.5),
        nf_sodium: Some(500.0),
        ..NutritionixFood::named(food_name, calories, serving_weight_grams)
    }
}

/// Create the principal used across tests
#[must_use]
#[allow(clippy::expect_used)]
pub fn create_test_user() -> UserRef {
    UserRef::new("test-user").expect("literal user id is non-blank")
}

/// Create a food log entry for `food_name` with plain round numbers
#[must_use]
pub fn create_test_entry(user: &UserRef, food_name: &str, meal_type: MealType) -> FoodLogEntry {
    FoodLogEntry {
        user: user.clone(),
        meal_type,
        food_name: food_name.to_owned(),
        weight_grams: 100.0,
        calories: 200.0,
        protein: 10.0,
        carbs: 25.0,
        fats: 8.0,
        fiber: 3.0,
        sugars: 4.0,
        sodium: 120.0,
    }
}

/// Create an in-memory food log database with the schema applied
///
/// # Errors
///
/// Returns an error if the database cannot be opened
pub async fn create_test_database() -> AppResult<Database> {
    Database::connect(&DatabaseUrl::Memory).await
}
