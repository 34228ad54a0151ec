// ABOUTME: Pure nutrition algorithms used by the pipeline, food log, and CLI
// ABOUTME: Label filtering and ranking, quantity scaling, daily summary, and BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Deterministic calculations with no I/O. Every function here is safe to call
//! from any task and returns the same output for the same input.

/// BMI calculation and classification
pub mod body_metrics;
/// Macronutrient totals, meal grouping, and daily target progress
pub mod daily_summary;
/// Vision label filtering and ranking
pub mod food_detection;
/// Rescaling nutrition records to a requested weight
pub mod portion_scaling;

pub use body_metrics::{body_measurements, calculate_bmi, classify_bmi};
pub use daily_summary::{calculate_totals, daily_progress, group_by_meal};
pub use food_detection::{extract_food_labels, is_valid_food_item, rank_food_labels};
pub use portion_scaling::{round_to_tenth, scale_nutrition, scaling_multiplier};
