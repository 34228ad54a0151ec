// ABOUTME: Main library entry point for the NutriSnap food recognition pipeline
// ABOUTME: Turns food photos into ranked labels, nutrition records, and food log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriSnap
//!
//! Food photo recognition and nutrition logging. An image is sent to a vision
//! service, the returned labels are filtered and ranked, each surviving label
//! is resolved into a nutrition record, and the user can rescale a record to
//! the weight they actually ate and log it against a meal.
//!
//! ## Architecture
//!
//! - **External**: Vision and nutrition lookup collaborators (Google Vision, Nutritionix, mocks)
//! - **Intelligence**: Pure algorithms (label filtering/ranking, quantity scaling, daily summary, BMI)
//! - **Services**: Nutrition resolver, recognition pipeline, food logging
//! - **Database**: SQLite food log
//! - **Config / Logging**: Environment-only configuration and structured `tracing` output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nutrisnap::config::environment::AppConfig;
//! use nutrisnap::external::{GoogleVisionClient, NutritionixClient};
//! use nutrisnap::services::food_recognition::FoodRecognitionPipeline;
//!
//! # async fn example(image: Vec<u8>) -> anyhow::Result<()> {
//! let config = AppConfig::from_env()?;
//! let vision = Arc::new(GoogleVisionClient::new(config.external_services.vision.clone())?);
//! let lookup = Arc::new(NutritionixClient::new(config.external_services.nutritionix.clone())?);
//!
//! let pipeline = FoodRecognitionPipeline::new(vision, lookup, config.pipeline.clone());
//! let outcome = pipeline.recognize(&image).await;
//! for record in &outcome.items {
//!     println!("{} ({:.0}%)", record.food_item, record.confidence * 100.0);
//! }
//! # Ok(())
//! # }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Application constants and environment-backed settings
pub mod constants;

/// SQLite food log storage
pub mod database;

/// Unified error handling system with standard error codes
pub mod errors;

/// External API clients (Google Vision, Nutritionix) and their collaborator traits
pub mod external;

/// Pure nutrition algorithms: label ranking, quantity scaling, daily summary, BMI
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Common data models for labels, nutrition records, and food log entries
pub mod models;

/// Domain service layer: nutrition resolution, recognition pipeline, food logging
pub mod services;

/// Test utilities for creating consistent test data
#[cfg(any(test, feature = "testing"))]
pub mod test_utils;
