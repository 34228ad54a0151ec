// ABOUTME: Quantity scaling of nutrition records to a requested serving weight
// ABOUTME: Computes the serving multiplier and rounds every scaled nutrient to one decimal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::FALLBACK_SERVING_WEIGHT_GRAMS;
use crate::models::{NutritionRecord, ScaledNutrition};

/// Multiplier that turns one reference serving into `requested_grams`
///
/// A requested weight that is not strictly positive (zero, negative, NaN)
/// yields the identity multiplier 1.
#[must_use]
pub fn scaling_multiplier(requested_grams: f64, serving_weight_grams: f64) -> f64 {
    if requested_grams.is_nan() || requested_grams <= 0.0 {
        return 1.0;
    }
    let serving = if serving_weight_grams > 0.0 {
        serving_weight_grams
    } else {
        FALLBACK_SERVING_WEIGHT_GRAMS
    };
    requested_grams / serving
}

/// Round to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Recompute a record for `requested_grams`
///
/// Each nutrient is multiplied and rounded independently. The input record is
/// never modified, so scaling the same record twice gives the same result.
#[must_use]
pub fn scale_nutrition(record: &NutritionRecord, requested_grams: f64) -> ScaledNutrition {
    let multiplier = scaling_multiplier(requested_grams, record.serving_weight_grams);
    let weight_grams = if requested_grams > 0.0 {
        requested_grams
    } else {
        record.serving_weight_grams
    };

    ScaledNutrition {
        food_item: record.food_item.clone(),
        weight_grams,
        multiplier,
        nutrients: record
            .nutrients
            .map(|value| round_to_tenth(value * multiplier)),
    }
}
