// ABOUTME: Food logging service turning a nutrition record and eaten weight into a food log entry
// ABOUTME: Validates the principal and weight, scales nutrients unrounded, and persists via the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::FoodLogStore;
use crate::errors::{AppError, AppResult};
use crate::intelligence::scaling_multiplier;
use crate::logging::AppLogger;
use crate::models::{FoodLogEntry, LoggedFood, MealType, NutritionRecord, UserRef};

/// Build the entry that `log_food` would persist
///
/// Business rules:
/// - The principal must be non-blank
/// - The eaten weight must be finite and strictly positive
/// - Nutrients are scaled by `weight / serving weight` without rounding
///
/// # Errors
///
/// Returns `AppError::MissingRequiredField` for a blank principal and
/// `AppError::InvalidInput` for an unusable weight
pub fn build_entry(
    user: &UserRef,
    record: &NutritionRecord,
    weight_grams: f64,
    meal_type: MealType,
) -> AppResult<FoodLogEntry> {
    if user.as_str().trim().is_empty() {
        return Err(AppError::missing_field("user"));
    }
    if !weight_grams.is_finite() || weight_grams <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be a positive number of grams, got {weight_grams}"
        )));
    }

    let multiplier = scaling_multiplier(weight_grams, record.serving_weight_grams);
    let nutrients = &record.nutrients;

    Ok(FoodLogEntry {
        user: user.clone(),
        meal_type,
        food_name: record.food_item.clone(),
        weight_grams,
        calories: nutrients.calories * multiplier,
        protein: nutrients.protein * multiplier,
        carbs: nutrients.total_carbohydrate * multiplier,
        fats: nutrients.total_fat * multiplier,
        fiber: nutrients.dietary_fiber * multiplier,
        sugars: nutrients.sugars * multiplier,
        sodium: nutrients.sodium * multiplier,
    })
}

/// Log an eaten food for `user`
///
/// # Errors
///
/// Returns validation errors from [`build_entry`] and any error reported by
/// the store
pub async fn log_food(
    store: &dyn FoodLogStore,
    user: &UserRef,
    record: &NutritionRecord,
    weight_grams: f64,
    meal_type: MealType,
) -> AppResult<LoggedFood> {
    let entry = build_entry(user, record, weight_grams, meal_type)?;
    let logged = store.add_food(&entry).await?;
    AppLogger::log_food_logged(user.as_str(), meal_type, &logged.food_name, weight_grams);
    Ok(logged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::NutrientProfile;
    use crate::test_utils::{create_test_database, create_test_record, create_test_user};

    fn record() -> NutritionRecord {
        NutritionRecord {
            food_item: "rice".into(),
            nutrients: NutrientProfile {
                calories: 206.0,
                total_carbohydrate: 45.0,
                total_fat: 0.4,
                protein: 4.3,
                ..NutrientProfile::default()
            },
            serving_qty: 1.0,
            serving_unit: "cup".into(),
            serving_weight_grams: 158.0,
            confidence: 0.8,
        }
    }

    #[test]
    fn test_entry_uses_unrounded_multiplier() {
        let user = UserRef::new("user-1").unwrap();
        let entry = build_entry(&user, &record(), 100.0, MealType::Lunch).unwrap();

        let multiplier = 100.0 / 158.0;
        assert!((entry.calories - 206.0 * multiplier).abs() < 1e-9);
        assert!((entry.carbs - 45.0 * multiplier).abs() < 1e-9);
        assert_eq!(entry.meal_type, MealType::Lunch);
    }

    #[test]
    fn test_rejects_unusable_weight() {
        let user = UserRef::new("user-1").unwrap();
        for weight in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let error = build_entry(&user, &record(), weight, MealType::Snack).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidInput);
        }
    }

    #[tokio::test]
    async fn test_log_food_persists_scaled_entry() {
        let db = create_test_database().await.unwrap();
        let store = db.food_log();
        let user = create_test_user();

        let logged = log_food(&store, &user, &create_test_record(), 214.0, MealType::Dinner)
            .await
            .unwrap();

        assert_eq!(logged.food_name, "pizza");
        assert_eq!(logged.meal_type, MealType::Dinner);
        assert!((logged.calories - 570.0).abs() < 1e-9);
        assert!((logged.weight_grams - 214.0).abs() < f64::EPSILON);
        assert_eq!(store.count_foods(&user).await.unwrap(), 1);
    }
}
