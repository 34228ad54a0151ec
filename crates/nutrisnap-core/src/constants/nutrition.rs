// ABOUTME: Nutrition lookup defaults, query formatting markers, and daily intake targets
// ABOUTME: Serving weight fallback keeps quantity scaling free of division by zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Serving weight substituted when a lookup reports none, zero, or a negative weight
pub const FALLBACK_SERVING_WEIGHT_GRAMS: f64 = 1.0;

/// Confidence assigned to a freshly resolved record before the label score is attached
pub const DEFAULT_RECORD_CONFIDENCE: f64 = 1.0;

/// Substrings that mark a label as already carrying a quantity
pub const QUANTITY_MARKERS: &[&str] = &[" piece", " serving"];

/// Prefix added to labels without a quantity before querying
pub const DEFAULT_QUANTITY_PREFIX: &str = "1 serving ";

/// Default weight offered for a new entry, in grams
pub const DEFAULT_ENTRY_WEIGHT_GRAMS: f64 = 100.0;

/// Daily intake targets used for progress reporting
pub mod daily_targets {
    /// Calories (kcal)
    pub const CALORIES_KCAL: f64 = 2000.0;
    /// Protein (g)
    pub const PROTEIN_G: f64 = 80.0;
    /// Carbohydrates (g)
    pub const CARBS_G: f64 = 250.0;
    /// Fats (g)
    pub const FATS_G: f64 = 65.0;
}
