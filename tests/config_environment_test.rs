// ABOUTME: Integration tests for environment-driven configuration loading
// ABOUTME: Covers defaults, overrides, credential handling, and rejected values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisnap::config::{AppConfig, DatabaseUrl, Environment, LogLevel};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const MANAGED_VARS: [&str; 13] = [
    "DATABASE_URL",
    "RUST_LOG",
    "ENVIRONMENT",
    "GOOGLE_VISION_API_KEY",
    "NUTRITIONIX_APP_ID",
    "NUTRITIONIX_API_KEY",
    "NUTRITIONIX_BASE_URL",
    "VISION_MAX_LABELS",
    "PIPELINE_MAX_LABELS",
    "PIPELINE_MAX_CONCURRENT_LOOKUPS",
    "PIPELINE_LOOKUP_TIMEOUT_SECS",
    "PIPELINE_DETECTION_TIMEOUT_SECS",
    "HTTP_CLIENT_TIMEOUT_SECS",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.database_url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/nutrisnap.db")
        }
    );
    assert!(config.external_services.vision.api_key.is_none());
    assert_eq!(config.external_services.vision.max_labels, 15);
    assert_eq!(config.external_services.vision.max_objects, 5);
    assert_eq!(config.pipeline.max_labels, 3);
    assert_eq!(config.pipeline.max_concurrent_lookups, 3);
    assert_eq!(config.pipeline.lookup_timeout_secs, 10);
    assert_eq!(config.pipeline.detection_timeout_secs, 30);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "testing");
    env::set_var("GOOGLE_VISION_API_KEY", "vision-key");
    env::set_var("NUTRITIONIX_APP_ID", "app-id");
    env::set_var("NUTRITIONIX_API_KEY", "nx-key");
    env::set_var("NUTRITIONIX_BASE_URL", "http://localhost:9999/v2");
    env::set_var("PIPELINE_MAX_CONCURRENT_LOOKUPS", " 5 ");
    env::set_var("PIPELINE_LOOKUP_TIMEOUT_SECS", "2");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.database_url.is_memory());
    assert_eq!(config.environment, Environment::Testing);
    assert_eq!(
        config.external_services.vision.api_key.as_deref(),
        Some("vision-key")
    );
    assert_eq!(
        config.external_services.nutritionix.base_url,
        "http://localhost:9999/v2"
    );
    assert_eq!(config.pipeline.max_concurrent_lookups, 5);
    assert_eq!(config.pipeline.lookup_timeout().as_secs(), 2);
    assert!(!config.summary().contains("nx-key"));
    assert!(config.summary().contains("nutritionix_keys=set"));
}

#[test]
#[serial]
fn test_blank_credentials_count_as_missing() {
    clear_env();
    env::set_var("GOOGLE_VISION_API_KEY", "   ");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.external_services.vision.api_key.is_none());
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_env();

    env::set_var("PIPELINE_MAX_LABELS", "three");
    let error = AppConfig::from_env().unwrap_err();
    assert!(format!("{error:#}").contains("PIPELINE_MAX_LABELS"));
    clear_env();

    env::set_var("PIPELINE_MAX_CONCURRENT_LOOKUPS", "0");
    let error = AppConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("PIPELINE_MAX_CONCURRENT_LOOKUPS"));
    clear_env();

    env::set_var("DATABASE_URL", "postgresql://localhost/food");
    assert!(AppConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_label_cutoff_above_three_is_rejected() {
    clear_env();
    env::set_var("PIPELINE_MAX_LABELS", "7");

    let error = AppConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains("PIPELINE_MAX_LABELS must be at most 3"));

    env::set_var("PIPELINE_MAX_LABELS", "2");
    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.pipeline.max_labels, 2);
    assert_eq!(config.pipeline.label_cutoff(), 2);
}
