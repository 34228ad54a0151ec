// ABOUTME: Core data models for the food recognition and nutrition logging pipeline
// ABOUTME: Re-exports vision labels, nutrition records, food log entries, and body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `DetectedLabel` / `VisionAnnotations`: candidate food labels from a vision collaborator
//! - `NutritionRecord` / `NutrientProfile`: nutrition facts for one resolved label
//! - `ScaledNutrition`: a record recomputed for a user-chosen serving weight
//! - `FoodLogEntry` / `LoggedFood`: food entries written to and read from the food log
//! - `NutrientTotals` / `MealGroup`: daily summaries
//! - `UserAccount` / `UserDetails`: registered users and their body profiles
//! - `BmiResult`: body mass index output

mod body;
mod food_log;
mod label;
mod nutrition;
mod user;

pub use body::{BmiCategory, BmiResult};
pub use food_log::{FoodLogEntry, LoggedFood, MealGroup, NutrientProgress, NutrientTotals, UserRef};
pub use label::{DetectedLabel, LabelAnnotation, ObjectAnnotation, VisionAnnotations};
pub use nutrition::{MealType, NutrientProfile, NutritionRecord, ScaledNutrition};
pub use user::{Gender, UserAccount, UserDetails};
