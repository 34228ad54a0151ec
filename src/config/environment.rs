// ABOUTME: Environment configuration management for pipeline, client, and storage settings
// ABOUTME: Parses environment variables into typed sections with validated numeric values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{detection, env_config, http, pipeline};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational output
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Food log database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path of the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a `sqlite:` URL or a bare file path
    ///
    /// # Errors
    ///
    /// Returns an error if the URL names a non-`SQLite` scheme or an empty path
    pub fn parse_url(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with("postgres://") || trimmed.starts_with("postgresql://") {
            bail!("Unsupported database URL (only SQLite is supported): {trimmed}");
        }

        let path = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
        let path = path.strip_prefix("//").unwrap_or(path);
        match path {
            "" => bail!("Database URL has an empty path"),
            ":memory:" => Ok(Self::Memory),
            _ => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/nutrisnap.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Google Cloud Vision client settings
#[derive(Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// API key; required only when the real client is built
    pub api_key: Option<String>,
    /// REST base URL
    pub base_url: String,
    /// `LABEL_DETECTION` max results
    pub max_labels: u32,
    /// `OBJECT_LOCALIZATION` max results
    pub max_objects: u32,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::constants::endpoints::GOOGLE_VISION_BASE_URL.to_owned(),
            max_labels: detection::VISION_MAX_LABELS,
            max_objects: detection::VISION_MAX_OBJECTS,
        }
    }
}

impl fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("max_labels", &self.max_labels)
            .field("max_objects", &self.max_objects)
            .finish()
    }
}

/// Nutritionix client settings
#[derive(Clone, Serialize, Deserialize)]
pub struct NutritionixConfig {
    /// Application ID sent as `x-app-id`
    pub app_id: Option<String>,
    /// API key sent as `x-app-key`
    pub api_key: Option<String>,
    /// REST base URL
    pub base_url: String,
}

impl Default for NutritionixConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            api_key: None,
            base_url: crate::constants::endpoints::NUTRITIONIX_BASE_URL.to_owned(),
        }
    }
}

impl fmt::Debug for NutritionixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionixConfig")
            .field("app_id", &self.app_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// External service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalServicesConfig {
    /// Vision service
    pub vision: VisionConfig,
    /// Nutrition lookup service
    pub nutritionix: NutritionixConfig,
}

/// Recognition pipeline limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum number of labels kept after ranking, at most three
    pub max_labels: usize,
    /// Maximum number of lookups in flight at once
    pub max_concurrent_lookups: usize,
    /// Per-lookup timeout in seconds
    pub lookup_timeout_secs: u64,
    /// Vision call timeout in seconds
    pub detection_timeout_secs: u64,
}

impl PipelineConfig {
    /// Number of ranked labels a capture keeps
    ///
    /// Never more than [`detection::MAX_FOOD_LABELS`], whatever `max_labels` says.
    #[must_use]
    pub fn label_cutoff(&self) -> usize {
        self.max_labels.min(detection::MAX_FOOD_LABELS)
    }

    /// Per-lookup timeout
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// Vision call timeout
    #[must_use]
    pub const fn detection_timeout(&self) -> Duration {
        Duration::from_secs(self.detection_timeout_secs)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_labels: detection::MAX_FOOD_LABELS,
            max_concurrent_lookups: pipeline::DEFAULT_MAX_CONCURRENT_LOOKUPS,
            lookup_timeout_secs: pipeline::DEFAULT_LOOKUP_TIMEOUT_SECS,
            detection_timeout_secs: pipeline::DEFAULT_DETECTION_TIMEOUT_SECS,
        }
    }
}

/// Shared HTTP client timeouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: http::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Food log database
    pub database_url: DatabaseUrl,
    /// Vision and nutrition services
    pub external_services: ExternalServicesConfig,
    /// Recognition pipeline limits
    pub pipeline: PipelineConfig,
    /// Shared HTTP client timeouts
    pub http_client: HttpClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse, a limit is zero,
    /// or the database URL is unsupported
    pub fn from_env() -> Result<Self> {
        let config = Self {
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_config::environment()),
            database_url: DatabaseUrl::parse_url(&env_config::database_url())
                .context("Invalid DATABASE_URL value")?,
            external_services: ExternalServicesConfig {
                vision: VisionConfig {
                    api_key: env_config::google_vision_api_key(),
                    base_url: env_config::google_vision_base_url(),
                    max_labels: parse_env("VISION_MAX_LABELS", detection::VISION_MAX_LABELS)?,
                    max_objects: parse_env("VISION_MAX_OBJECTS", detection::VISION_MAX_OBJECTS)?,
                },
                nutritionix: NutritionixConfig {
                    app_id: env_config::nutritionix_app_id(),
                    api_key: env_config::nutritionix_api_key(),
                    base_url: env_config::nutritionix_base_url(),
                },
            },
            pipeline: PipelineConfig {
                max_labels: parse_env("PIPELINE_MAX_LABELS", detection::MAX_FOOD_LABELS)?,
                max_concurrent_lookups: parse_env(
                    "PIPELINE_MAX_CONCURRENT_LOOKUPS",
                    pipeline::DEFAULT_MAX_CONCURRENT_LOOKUPS,
                )?,
                lookup_timeout_secs: parse_env(
                    "PIPELINE_LOOKUP_TIMEOUT_SECS",
                    pipeline::DEFAULT_LOOKUP_TIMEOUT_SECS,
                )?,
                detection_timeout_secs: parse_env(
                    "PIPELINE_DETECTION_TIMEOUT_SECS",
                    pipeline::DEFAULT_DETECTION_TIMEOUT_SECS,
                )?,
            },
            http_client: HttpClientConfig {
                timeout_secs: parse_env("HTTP_CLIENT_TIMEOUT_SECS", http::DEFAULT_TIMEOUT_SECS)?,
                connect_timeout_secs: parse_env(
                    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                    http::DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
            },
        };

        config.validate()?;
        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// Reject limits that would stall the pipeline
    ///
    /// # Errors
    ///
    /// Returns an error naming the first zero-valued limit, or a label
    /// cutoff above [`detection::MAX_FOOD_LABELS`]
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("PIPELINE_MAX_LABELS", self.pipeline.max_labels as u64),
            (
                "PIPELINE_MAX_CONCURRENT_LOOKUPS",
                self.pipeline.max_concurrent_lookups as u64,
            ),
            ("PIPELINE_LOOKUP_TIMEOUT_SECS", self.pipeline.lookup_timeout_secs),
            ("PIPELINE_DETECTION_TIMEOUT_SECS", self.pipeline.detection_timeout_secs),
            ("HTTP_CLIENT_TIMEOUT_SECS", self.http_client.timeout_secs),
        ];

        if let Some((name, _)) = limits.iter().find(|(_, value)| *value == 0) {
            bail!("{name} must be greater than zero");
        }
        if self.pipeline.max_labels > detection::MAX_FOOD_LABELS {
            bail!(
                "PIPELINE_MAX_LABELS must be at most {}",
                detection::MAX_FOOD_LABELS
            );
        }
        Ok(())
    }

    /// One-line summary without credentials
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} log_level={} database={} vision_key={} nutritionix_keys={} \
             max_labels={} max_concurrent_lookups={} lookup_timeout={}s detection_timeout={}s",
            self.environment,
            self.log_level,
            self.database_url,
            enabled(self.external_services.vision.api_key.is_some()),
            enabled(
                self.external_services.nutritionix.app_id.is_some()
                    && self.external_services.nutritionix.api_key.is_some()
            ),
            self.pipeline.max_labels,
            self.pipeline.max_concurrent_lookups,
            self.pipeline.lookup_timeout_secs,
            self.pipeline.detection_timeout_secs,
        )
    }
}

const fn enabled(flag: bool) -> &'static str {
    if flag {
        "set"
    } else {
        "missing"
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {value}")),
        Err(_) => Ok(default),
    }
}
