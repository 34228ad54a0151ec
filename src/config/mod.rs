// ABOUTME: Configuration management module for pipeline, client, and storage settings
// ABOUTME: Re-exports the environment-driven AppConfig and its typed sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for NutriSnap
//!
//! All configuration comes from environment variables. Numeric settings that
//! fail to parse are rejected; credentials are optional until the client that
//! needs them is constructed.

/// Environment-driven configuration
pub mod environment;

pub use environment::{
    AppConfig, DatabaseUrl, Environment, ExternalServicesConfig, HttpClientConfig, LogLevel,
    NutritionixConfig, PipelineConfig, VisionConfig,
};
