// ABOUTME: Food log models for persisted entries and daily summaries
// ABOUTME: UserRef principal, FoodLogEntry, LoggedFood, NutrientTotals, and MealGroup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::MealType;
use crate::errors::{AppError, AppResult};

/// Caller-supplied principal that a food entry is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRef(String);

impl UserRef {
    /// Create a principal reference
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingRequiredField` if the reference is blank
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::missing_field("user"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the underlying identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A food entry ready to be written to the food log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Principal the entry is attributed to
    pub user: UserRef,
    /// Meal the food belongs to
    pub meal_type: MealType,
    /// Food name
    pub food_name: String,
    /// Eaten weight in grams
    pub weight_grams: f64,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fats (g)
    pub fats: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Sugars (g)
    pub sugars: f64,
    /// Sodium (mg)
    pub sodium: f64,
}

/// A food entry read back from the food log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedFood {
    /// Food row ID
    pub id: String,
    /// Meal row ID
    pub meal_id: String,
    /// Meal the food belongs to
    pub meal_type: MealType,
    /// Food name
    pub food_name: String,
    /// Eaten weight in grams
    pub weight_grams: f64,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fats (g)
    pub fats: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Sugars (g)
    pub sugars: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// When the entry was logged
    pub created_at: DateTime<Utc>,
}

/// Macronutrient totals for a set of logged foods
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fats (g)
    pub fats: f64,
}

/// Logged foods of one meal type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealGroup {
    /// Meal type shared by every item
    pub meal_type: MealType,
    /// Summed calories
    pub calories: f64,
    /// Food names in logging order
    pub items: Vec<String>,
}

/// Progress of one nutrient against its daily target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    /// Display name
    pub title: String,
    /// Consumed amount
    pub value: f64,
    /// Unit of `value` and `target`
    pub unit: String,
    /// Daily target
    pub target: f64,
    /// `value / target` as a percentage
    pub percent: f64,
}
