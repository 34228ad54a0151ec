// ABOUTME: Recognition command for nutrisnap-cli
// ABOUTME: Reads a photo, runs the recognition pipeline against the live services, and prints results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use nutrisnap::{
    config::AppConfig,
    external::{GoogleVisionClient, NutritionixClient},
    services::{FoodRecognitionPipeline, RecognitionStatus},
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::{display_outcome, outcome_json};

/// Recognize the foods in `image` and print them
pub async fn analyze(config: &AppConfig, image: &Path, json: bool) -> Result<()> {
    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("Failed to read image {}", image.display()))?;
    info!(
        image = %image.display(),
        bytes = bytes.len(),
        "Analyzing food photo"
    );

    let vision = Arc::new(GoogleVisionClient::new(
        config.external_services.vision.clone(),
    )?);
    let lookup = Arc::new(NutritionixClient::new(
        config.external_services.nutritionix.clone(),
    )?);
    let pipeline = FoodRecognitionPipeline::new(vision, lookup, config.pipeline.clone());

    let outcome = pipeline.recognize(&bytes).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
    } else {
        display_outcome(&outcome);
    }

    if outcome.status == RecognitionStatus::DetectionFailed {
        anyhow::bail!("Food detection failed; see logs for details");
    }
    Ok(())
}
