// ABOUTME: Domain service layer for recognition, nutrition resolution, and food logging
// ABOUTME: Composes external collaborators, pure algorithms, and storage into use cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services depend on collaborator traits rather than concrete clients, so the
//! CLI, tests, and benchmarks can run the same business rules against real
//! services or mocks.

/// Food logging: entry construction and persistence
pub mod food_logging;

/// Recognition pipeline: detection, bounded resolution, and stale-capture handling
pub mod food_recognition;

/// Nutrition resolver: label to nutrition record
pub mod nutrition_resolver;

pub use food_logging::{build_entry, log_food};
pub use food_recognition::{
    CaptureGeneration, FoodRecognitionPipeline, PipelineState, RecognitionOutcome,
    RecognitionStatus, UnresolvedLabel,
};
pub use nutrition_resolver::{fetch_nutrition_info, format_query, record_from_match, resolve_nutrition};
