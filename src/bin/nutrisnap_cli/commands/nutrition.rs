// ABOUTME: Nutrition commands for nutrisnap-cli
// ABOUTME: Resolves a food label, scales it to an eaten weight, and logs it against a meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutrisnap::{
    config::AppConfig,
    database::Database,
    external::NutritionixClient,
    intelligence::scale_nutrition,
    models::{MealType, NutritionRecord, UserRef},
    services::{log_food, resolve_nutrition},
};
use tracing::info;

use crate::helpers::display::{display_logged_food, display_scaled};

/// Print the nutrition of `label` at `grams` (or its reference serving)
pub async fn scale(config: &AppConfig, label: &str, grams: Option<f64>) -> Result<()> {
    let record = lookup(config, label).await?;
    let requested = grams.unwrap_or(record.serving_weight_grams);
    display_scaled(&scale_nutrition(&record, requested));
    Ok(())
}

/// Resolve `label` and add `grams` of it to the user's food log
pub async fn log(
    config: &AppConfig,
    database: &Database,
    label: &str,
    grams: f64,
    meal: &str,
    user: &str,
) -> Result<()> {
    let user = UserRef::new(user)?;
    let meal_type = MealType::from_str_lossy(meal);
    let record = lookup(config, label).await?;

    let store = database.food_log();
    let logged = log_food(&store, &user, &record, grams, meal_type).await?;
    display_logged_food(&logged);
    Ok(())
}

async fn lookup(config: &AppConfig, label: &str) -> Result<NutritionRecord> {
    let client = NutritionixClient::new(config.external_services.nutritionix.clone())?;
    info!("Looking up nutrition for '{}'", label);
    Ok(resolve_nutrition(&client, label).await?)
}
