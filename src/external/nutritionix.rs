// ABOUTME: Nutritionix natural-language nutrients client for label nutrition lookups
// ABOUTME: Includes a mock lookup with canned foods, failures, delays, and in-flight tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutritionix `natural/nutrients` client
//!
//! Queries are free text such as `"1 serving pizza"`. The service answers
//! with a `foods` array; a 404 means the text matched nothing.
//!
//! # API Reference
//! <https://docs.x.nutritionix.com/>

use super::http_client::{require_http_url, shared_client};
use super::NutritionLookup;
use crate::config::NutritionixConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult, LookupError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// One food match as returned by Nutritionix
///
/// Every numeric field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionixFood {
    /// Matched food name
    #[serde(default)]
    pub food_name: String,
    /// Energy (kcal)
    pub nf_calories: Option<f64>,
    /// Total fat (g)
    pub nf_total_fat: Option<f64>,
    /// Saturated fat (g)
    pub nf_saturated_fat: Option<f64>,
    /// Cholesterol (mg)
    pub nf_cholesterol: Option<f64>,
    /// Sodium (mg)
    pub nf_sodium: Option<f64>,
    /// Total carbohydrate (g)
    pub nf_total_carbohydrate: Option<f64>,
    /// Dietary fiber (g)
    pub nf_dietary_fiber: Option<f64>,
    /// Sugars (g)
    pub nf_sugars: Option<f64>,
    /// Protein (g)
    pub nf_protein: Option<f64>,
    /// Potassium (mg)
    pub nf_potassium: Option<f64>,
    /// Phosphorus (mg)
    pub nf_p: Option<f64>,
    /// Reference serving quantity
    pub serving_qty: Option<f64>,
    /// Reference serving unit
    pub serving_unit: Option<String>,
    /// Reference serving weight in grams
    pub serving_weight_grams: Option<f64>,
}

impl NutritionixFood {
    /// Food match with a name, calories, and serving weight
    #[must_use]
    pub fn named(food_name: impl Into<String>, calories: f64, serving_weight_grams: f64) -> Self {
        Self {
            food_name: food_name.into(),
            nf_calories: Some(calories),
            serving_qty: Some(1.0),
            serving_unit: Some("serving".to_owned()),
            serving_weight_grams: Some(serving_weight_grams),
            ..Self::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct NutrientsResponse {
    #[serde(default)]
    foods: Vec<NutritionixFood>,
}

/// Nutritionix API client
#[derive(Debug, Clone)]
pub struct NutritionixClient {
    config: NutritionixConfig,
    app_id: String,
    api_key: String,
    http_client: Client,
}

impl NutritionixClient {
    /// Create a client on the shared HTTP connection pool
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the application ID or key is missing and
    /// `ConfigError` when the base URL is not an HTTP URL
    pub fn new(config: NutritionixConfig) -> AppResult<Self> {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a client with a dedicated HTTP client
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the application ID or key is missing and
    /// `ConfigError` when the base URL is not an HTTP URL
    pub fn with_http_client(config: NutritionixConfig, http_client: Client) -> AppResult<Self> {
        let app_id = config
            .app_id
            .clone()
            .ok_or_else(|| AppError::config_missing("NUTRITIONIX_APP_ID"))?;
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AppError::config_missing("NUTRITIONIX_API_KEY"))?;
        require_http_url("NUTRITIONIX_BASE_URL", &config.base_url)?;
        Ok(Self {
            config,
            app_id,
            api_key,
            http_client,
        })
    }
}

#[async_trait]
impl NutritionLookup for NutritionixClient {
    async fn lookup(&self, query: &str) -> Result<Vec<NutritionixFood>, LookupError> {
        let url = format!("{}/natural/nutrients", self.config.base_url);
        let response = self
            .http_client
            .post(&url)
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.api_key)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| LookupError::transport(service_names::NUTRITIONIX, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body = response.text().await?;
        let parsed: NutrientsResponse = serde_json::from_str(&body).map_err(|e| {
            LookupError::malformed(service_names::NUTRITIONIX, format!("JSON parse error: {e}"))
        })?;
        Ok(parsed.foods)
    }
}

/// Map a non-success status other than 404 to a lookup error
fn status_error(status: StatusCode, body: &str) -> LookupError {
    let details = format!("HTTP {status}: {body}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LookupError::unauthorized(service_names::NUTRITIONIX, details)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            LookupError::rate_limited(service_names::NUTRITIONIX, details)
        }
        _ => LookupError::transport(service_names::NUTRITIONIX, details),
    }
}

/// Mock nutrition lookup for testing (no API calls)
///
/// Unknown queries answer with an empty match list.
#[derive(Debug, Default)]
pub struct MockNutritionLookup {
    responses: HashMap<String, Result<Vec<NutritionixFood>, LookupError>>,
    delays: HashMap<String, Duration>,
    default_delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockNutritionLookup {
    /// Create an empty mock
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with a single match
    #[must_use]
    pub fn with_food(self, query: impl Into<String>, food: NutritionixFood) -> Self {
        self.with_matches(query, vec![food])
    }

    /// Answer `query` with the given match list
    #[must_use]
    pub fn with_matches(mut self, query: impl Into<String>, foods: Vec<NutritionixFood>) -> Self {
        self.responses.insert(query.into(), Ok(foods));
        self
    }

    /// Fail `query` with `error`
    #[must_use]
    pub fn with_error(mut self, query: impl Into<String>, error: LookupError) -> Self {
        self.responses.insert(query.into(), Err(error));
        self
    }

    /// Delay every answer
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.default_delay = Some(delay);
        self
    }

    /// Delay answers for one query
    #[must_use]
    pub fn with_query_delay(mut self, query: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(query.into(), delay);
        self
    }

    /// Queries received, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Highest number of lookups observed in flight at once
    #[must_use]
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NutritionLookup for MockNutritionLookup {
    async fn lookup(&self, query: &str) -> Result<Vec<NutritionixFood>, LookupError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.to_owned());
        }
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(query).copied().or(self.default_delay) {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.responses
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_missing_credentials_is_config_missing() {
        let error = NutritionixClient::with_http_client(
            NutritionixConfig {
                app_id: Some("app".into()),
                ..NutritionixConfig::default()
            },
            Client::new(),
        )
        .unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert_eq!(error.message, "NUTRITIONIX_API_KEY is not set");
    }

    #[test]
    fn test_non_http_base_url_is_config_error() {
        let error = NutritionixClient::with_http_client(
            NutritionixConfig {
                app_id: Some("app".into()),
                api_key: Some("key".into()),
                base_url: "trackapi.nutritionix.com/v2".into(),
            },
            Client::new(),
        )
        .unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigError);
        assert!(error.message.contains("NUTRITIONIX_BASE_URL"));
    }

    #[test]
    fn test_status_errors_separate_auth_and_rate_limits() {
        assert_eq!(
            status_error(StatusCode::UNAUTHORIZED, "bad key").kind(),
            "unauthorized"
        );
        assert_eq!(status_error(StatusCode::FORBIDDEN, "").kind(), "unauthorized");
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "slow down").kind(),
            "rate_limited"
        );

        let error = status_error(StatusCode::SERVICE_UNAVAILABLE, "maintenance");
        assert_eq!(error.kind(), "transport");
        assert!(error.to_string().contains("HTTP 503 Service Unavailable: maintenance"));
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let raw = r#"{"foods": [{"food_name": "pizza", "nf_calories": 285.0, "serving_weight_grams": 107}]}"#;
        let parsed: NutrientsResponse = serde_json::from_str(raw).unwrap();

        let food = &parsed.foods[0];
        assert_eq!(food.food_name, "pizza");
        assert_eq!(food.nf_calories, Some(285.0));
        assert_eq!(food.nf_p, None);
        assert_eq!(food.serving_weight_grams, Some(107.0));
    }

    #[test]
    fn test_response_without_foods_is_empty() {
        let parsed: NutrientsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.foods.is_empty());
    }

    #[tokio::test]
    async fn test_mock_records_calls_and_answers_unknown_with_no_matches() {
        let mock = MockNutritionLookup::new()
            .with_food("1 serving apple", NutritionixFood::named("apple", 95.0, 182.0));

        assert_eq!(mock.lookup("1 serving apple").await.unwrap().len(), 1);
        assert!(mock.lookup("1 serving rock").await.unwrap().is_empty());
        assert_eq!(mock.calls(), vec!["1 serving apple", "1 serving rock"]);
    }
}
