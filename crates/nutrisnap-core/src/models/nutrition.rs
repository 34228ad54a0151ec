// ABOUTME: Nutrition record models for resolved food labels and rescaled servings
// ABOUTME: NutrientProfile, NutritionRecord, ScaledNutrition, and MealType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro and micronutrient amounts for one serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy (kcal)
    pub calories: f64,
    /// Total fat (g)
    pub total_fat: f64,
    /// Saturated fat (g)
    pub saturated_fat: f64,
    /// Cholesterol (mg)
    pub cholesterol: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Total carbohydrate (g)
    pub total_carbohydrate: f64,
    /// Dietary fiber (g)
    pub dietary_fiber: f64,
    /// Sugars (g)
    pub sugars: f64,
    /// Protein (g)
    pub protein: f64,
    /// Potassium (mg)
    pub potassium: f64,
    /// Phosphorus (mg)
    pub phosphorus: f64,
}

impl NutrientProfile {
    /// Apply `f` to every nutrient field independently
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            total_fat: f(self.total_fat),
            saturated_fat: f(self.saturated_fat),
            cholesterol: f(self.cholesterol),
            sodium: f(self.sodium),
            total_carbohydrate: f(self.total_carbohydrate),
            dietary_fiber: f(self.dietary_fiber),
            sugars: f(self.sugars),
            protein: f(self.protein),
            potassium: f(self.potassium),
            phosphorus: f(self.phosphorus),
        }
    }
}

/// Nutrition facts for one resolved food label
///
/// Nutrient values are stated per `serving_weight_grams`, which is always
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Food name as reported by the lookup service
    pub food_item: String,
    /// Nutrient amounts for the reference serving
    #[serde(flatten)]
    pub nutrients: NutrientProfile,
    /// Quantity of the reference serving (e.g. 1)
    pub serving_qty: f64,
    /// Unit of the reference serving (e.g. "slice")
    pub serving_unit: String,
    /// Weight of the reference serving in grams (> 0)
    pub serving_weight_grams: f64,
    /// Confidence in [0, 1], taken from the originating label
    pub confidence: f64,
}

impl NutritionRecord {
    /// Return the record with the given confidence attached
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// A nutrition record recomputed for a requested serving weight
///
/// Derived and never persisted; recomputed on every quantity edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledNutrition {
    /// Food name
    pub food_item: String,
    /// Weight the values are stated for, in grams
    pub weight_grams: f64,
    /// Multiplier applied to the reference serving
    pub multiplier: f64,
    /// Scaled nutrient amounts, rounded to one decimal place
    #[serde(flatten)]
    pub nutrients: NutrientProfile,
}

/// Type of meal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    #[default]
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Meal types in chronological display order
    pub const ORDER: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
        Self::Other,
    ];

    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Display name as stored in the food log
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
            Self::Other => "Other",
        }
    }

    /// Position in `ORDER`
    #[must_use]
    pub const fn sort_index(self) -> usize {
        match self {
            Self::Breakfast => 0,
            Self::Lunch => 1,
            Self::Dinner => 2,
            Self::Snack => 3,
            Self::Other => 4,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
