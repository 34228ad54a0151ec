// ABOUTME: Nutrition resolver mapping a food label to a nutrition record via the lookup service
// ABOUTME: Builds the lookup query, takes the first match, and normalizes missing values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::{
    DEFAULT_QUANTITY_PREFIX, DEFAULT_RECORD_CONFIDENCE, FALLBACK_SERVING_WEIGHT_GRAMS,
    QUANTITY_MARKERS,
};
use crate::errors::LookupError;
use crate::external::{NutritionLookup, NutritionixFood};
use crate::models::{NutrientProfile, NutritionRecord};
use tracing::warn;

/// Build the lookup query for a label
///
/// Labels that already state a quantity ("2 piece sushi", "1 serving rice")
/// are sent unchanged; anything else is prefixed with `"1 serving "`.
#[must_use]
pub fn format_query(label: &str) -> String {
    if QUANTITY_MARKERS.iter().any(|marker| label.contains(marker)) {
        label.to_owned()
    } else {
        format!("{DEFAULT_QUANTITY_PREFIX}{label}")
    }
}

/// Convert a lookup match into a nutrition record
///
/// Business rules:
/// - Missing or non-finite nutrient values become 0
/// - Serving weight that is missing, non-positive, or non-finite becomes 1 g
/// - Confidence starts at 1.0; the pipeline replaces it with the label score
/// - A blank food name falls back to the label
#[must_use]
pub fn record_from_match(food: &NutritionixFood, label: &str) -> NutritionRecord {
    let food_item = if food.food_name.trim().is_empty() {
        label.to_owned()
    } else {
        food.food_name.clone()
    };

    NutritionRecord {
        food_item,
        nutrients: NutrientProfile {
            calories: or_zero(food.nf_calories),
            total_fat: or_zero(food.nf_total_fat),
            saturated_fat: or_zero(food.nf_saturated_fat),
            cholesterol: or_zero(food.nf_cholesterol),
            sodium: or_zero(food.nf_sodium),
            total_carbohydrate: or_zero(food.nf_total_carbohydrate),
            dietary_fiber: or_zero(food.nf_dietary_fiber),
            sugars: or_zero(food.nf_sugars),
            protein: or_zero(food.nf_protein),
            potassium: or_zero(food.nf_potassium),
            phosphorus: or_zero(food.nf_p),
        },
        serving_qty: or_zero(food.serving_qty),
        serving_unit: food.serving_unit.clone().unwrap_or_default(),
        serving_weight_grams: food
            .serving_weight_grams
            .filter(|grams| grams.is_finite() && *grams > 0.0)
            .unwrap_or(FALLBACK_SERVING_WEIGHT_GRAMS),
        confidence: DEFAULT_RECORD_CONFIDENCE,
    }
}

fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Resolve a label into a nutrition record
///
/// Exactly one lookup call is made. When the service returns several
/// matches the first one wins.
///
/// # Errors
///
/// Returns `LookupError::NotFound` when the service has no match, and
/// passes through transport and malformed-payload failures
pub async fn resolve_nutrition(
    lookup: &dyn NutritionLookup,
    label: &str,
) -> Result<NutritionRecord, LookupError> {
    let query = format_query(label);
    let matches = lookup.lookup(&query).await?;
    matches
        .first()
        .map(|food| record_from_match(food, label))
        .ok_or_else(|| LookupError::not_found(query))
}

/// Resolve a label, logging and discarding any failure
pub async fn fetch_nutrition_info(
    lookup: &dyn NutritionLookup,
    label: &str,
) -> Option<NutritionRecord> {
    match resolve_nutrition(lookup, label).await {
        Ok(record) => Some(record),
        Err(error) => {
            warn!(label = %label, kind = error.kind(), "Nutrition lookup failed: {error}");
            None
        }
    }
}
