// ABOUTME: Daily food log summary: macronutrient totals, meal grouping, and target progress
// ABOUTME: Groups logged foods by meal type in breakfast-to-other order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::daily_targets;
use crate::models::{LoggedFood, MealGroup, MealType, NutrientProgress, NutrientTotals};

/// Sum calories, protein, carbs, and fats over `foods`
#[must_use]
pub fn calculate_totals(foods: &[LoggedFood]) -> NutrientTotals {
    foods
        .iter()
        .fold(NutrientTotals::default(), |totals, food| NutrientTotals {
            calories: totals.calories + food.calories,
            protein: totals.protein + food.protein,
            carbs: totals.carbs + food.carbs,
            fats: totals.fats + food.fats,
        })
}

/// Group foods by meal type
///
/// Groups follow `MealType::ORDER`; meal types with no food are omitted.
/// Items keep the order of `foods`.
#[must_use]
pub fn group_by_meal(foods: &[LoggedFood]) -> Vec<MealGroup> {
    MealType::ORDER
        .iter()
        .filter_map(|&meal_type| {
            let members: Vec<&LoggedFood> = foods
                .iter()
                .filter(|food| food.meal_type == meal_type)
                .collect();
            if members.is_empty() {
                return None;
            }
            Some(MealGroup {
                meal_type,
                calories: members.iter().map(|food| food.calories).sum(),
                items: members.iter().map(|food| food.food_name.clone()).collect(),
            })
        })
        .collect()
}

/// Progress of each macronutrient against the fixed daily targets
#[must_use]
pub fn daily_progress(totals: &NutrientTotals) -> Vec<NutrientProgress> {
    [
        ("Calories", totals.calories, "kcal", daily_targets::CALORIES_KCAL),
        ("Protein", totals.protein, "g", daily_targets::PROTEIN_G),
        ("Carbs", totals.carbs, "g", daily_targets::CARBS_G),
        ("Fats", totals.fats, "g", daily_targets::FATS_G),
    ]
    .into_iter()
    .map(|(title, value, unit, target)| NutrientProgress {
        title: title.to_owned(),
        value,
        unit: unit.to_owned(),
        target,
        percent: value / target * 100.0,
    })
    .collect()
}
