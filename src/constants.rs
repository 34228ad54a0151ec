// ABOUTME: System-wide constants and environment-backed settings for NutriSnap
// ABOUTME: Re-exports core detection/nutrition/unit constants and exposes env getters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded constants live in `nutrisnap-core`; this module re-exports them
//! and adds the string-valued settings read from the environment.

pub use nutrisnap_core::constants::*;

/// External service endpoints
pub mod endpoints {
    /// Google Cloud Vision REST base URL
    pub const GOOGLE_VISION_BASE_URL: &str = "https://vision.googleapis.com/v1";
    /// Nutritionix track API base URL
    pub const NUTRITIONIX_BASE_URL: &str = "https://trackapi.nutritionix.com/v2";
}

/// Environment-based configuration getters
pub mod env_config {
    use super::endpoints;
    use std::env;

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./data/nutrisnap.db".into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }

    /// Get deployment environment from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }

    /// Get Google Vision API key if set and non-blank
    #[must_use]
    pub fn google_vision_api_key() -> Option<String> {
        non_blank("GOOGLE_VISION_API_KEY")
    }

    /// Get Google Vision base `URL` from environment or default
    #[must_use]
    pub fn google_vision_base_url() -> String {
        env::var("GOOGLE_VISION_BASE_URL")
            .unwrap_or_else(|_| endpoints::GOOGLE_VISION_BASE_URL.into())
    }

    /// Get Nutritionix application ID if set and non-blank
    #[must_use]
    pub fn nutritionix_app_id() -> Option<String> {
        non_blank("NUTRITIONIX_APP_ID")
    }

    /// Get Nutritionix API key if set and non-blank
    #[must_use]
    pub fn nutritionix_api_key() -> Option<String> {
        non_blank("NUTRITIONIX_API_KEY")
    }

    /// Get Nutritionix base `URL` from environment or default
    #[must_use]
    pub fn nutritionix_base_url() -> String {
        env::var("NUTRITIONIX_BASE_URL").unwrap_or_else(|_| endpoints::NUTRITIONIX_BASE_URL.into())
    }

    fn non_blank(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }
}
