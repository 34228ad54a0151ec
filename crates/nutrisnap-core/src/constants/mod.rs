// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for label detection, nutrition lookup, and body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Vision label filtering and ranking constants
pub mod detection;
/// Nutrition lookup defaults and daily targets
pub mod nutrition;
/// Body metric thresholds and unit conversions
pub mod units;

/// Service names used in structured logging and error messages
pub mod service_names {
    /// Name of this application in logs
    pub const NUTRISNAP: &str = "nutrisnap";
    /// Google Cloud Vision API
    pub const GOOGLE_VISION: &str = "Google Vision";
    /// Nutritionix natural-language nutrient API
    pub const NUTRITIONIX: &str = "Nutritionix";
}

/// Recognition pipeline defaults
pub mod pipeline {
    /// Default bound on concurrently running nutrition lookups
    pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 3;
    /// Default per-lookup deadline in seconds
    pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
    /// Default deadline for the vision call in seconds
    pub const DEFAULT_DETECTION_TIMEOUT_SECS: u64 = 30;
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}
