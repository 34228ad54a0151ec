// ABOUTME: Google Cloud Vision client returning generic labels and localized objects
// ABOUTME: Includes a mock vision provider with canned annotations for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Google Cloud Vision `images:annotate` client
//!
//! One request per image with `LABEL_DETECTION` and `OBJECT_LOCALIZATION`
//! features. The first entry of `responses` is the analysis result.
//!
//! # API Reference
//! <https://cloud.google.com/vision/docs/reference/rest/v1/images/annotate>

use super::http_client::{require_http_url, shared_client};
use super::VisionProvider;
use crate::config::VisionConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::models::{LabelAnnotation, ObjectAnnotation, VisionAnnotations};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(flatten)]
    annotations: VisionAnnotations,
    error: Option<AnnotateStatus>,
}

#[derive(Debug, Deserialize)]
struct AnnotateStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

/// Google Cloud Vision client
#[derive(Debug, Clone)]
pub struct GoogleVisionClient {
    config: VisionConfig,
    api_key: String,
    http_client: Client,
}

impl GoogleVisionClient {
    /// Create a client on the shared HTTP connection pool
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no API key is configured and
    /// `ConfigError` when the base URL is not an HTTP URL
    pub fn new(config: VisionConfig) -> AppResult<Self> {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a client with a dedicated HTTP client
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no API key is configured and
    /// `ConfigError` when the base URL is not an HTTP URL
    pub fn with_http_client(config: VisionConfig, http_client: Client) -> AppResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AppError::config_missing("GOOGLE_VISION_API_KEY"))?;
        require_http_url("GOOGLE_VISION_BASE_URL", &config.base_url)?;
        Ok(Self {
            config,
            api_key,
            http_client,
        })
    }

    fn request_body(&self, image: &[u8]) -> serde_json::Value {
        json!({
            "requests": [{
                "image": { "content": STANDARD.encode(image) },
                "features": [
                    { "type": "LABEL_DETECTION", "maxResults": self.config.max_labels },
                    { "type": "OBJECT_LOCALIZATION", "maxResults": self.config.max_objects }
                ]
            }]
        })
    }
}

#[async_trait]
impl VisionProvider for GoogleVisionClient {
    async fn analyze(&self, image: &[u8]) -> AppResult<VisionAnnotations> {
        if image.is_empty() {
            return Err(AppError::invalid_input("Image is empty"));
        }

        let url = format!("{}/images:annotate", self.config.base_url);
        let response = self
            .http_client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&self.request_body(image))
            .send()
            .await
            .map_err(|e| {
                AppError::external_unavailable(service_names::GOOGLE_VISION, e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body: AnnotateResponse = response.json().await.map_err(|e| {
            AppError::external_service(
                service_names::GOOGLE_VISION,
                format!("JSON parse error: {e}"),
            )
        })?;

        let first = body.responses.into_iter().next().ok_or_else(|| {
            AppError::external_service(service_names::GOOGLE_VISION, "Response has no results")
        })?;

        if let Some(error) = first.error {
            return Err(AppError::external_service(
                service_names::GOOGLE_VISION,
                format!("Annotation error {}: {}", error.code, error.message),
            ));
        }

        debug!(
            labels = first.annotations.label_annotations.len(),
            objects = first.annotations.localized_object_annotations.len(),
            "Vision analysis complete"
        );
        Ok(first.annotations)
    }
}

fn status_error(status: StatusCode, body: &str) -> AppError {
    let details = format!("HTTP {status}: {body}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AppError::external_auth_failed(service_names::GOOGLE_VISION, details)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            AppError::external_rate_limited(service_names::GOOGLE_VISION, details)
        }
        _ => AppError::external_service(service_names::GOOGLE_VISION, details),
    }
}

/// Mock vision provider for testing (no API calls)
#[derive(Debug, Default)]
pub struct MockVisionProvider {
    annotations: VisionAnnotations,
    failure: Option<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockVisionProvider {
    /// Provider answering every image with `annotations`
    #[must_use]
    pub fn new(annotations: VisionAnnotations) -> Self {
        Self {
            annotations,
            ..Self::default()
        }
    }

    /// Provider answering with generic labels only
    #[must_use]
    pub fn with_labels(labels: &[(&str, f64)]) -> Self {
        Self::new(VisionAnnotations {
            label_annotations: labels
                .iter()
                .map(|(description, score)| LabelAnnotation {
                    description: (*description).to_owned(),
                    score: *score,
                })
                .collect(),
            localized_object_annotations: Vec::new(),
        })
    }

    /// Add localized objects to the canned annotations
    #[must_use]
    pub fn and_objects(mut self, objects: &[(&str, f64)]) -> Self {
        self.annotations
            .localized_object_annotations
            .extend(objects.iter().map(|(name, score)| ObjectAnnotation {
                name: (*name).to_owned(),
                score: *score,
            }));
        self
    }

    /// Provider failing every call with an external service error
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Delay every answer
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `analyze` calls received
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionProvider for MockVisionProvider {
    async fn analyze(&self, _image: &[u8]) -> AppResult<VisionAnnotations> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.failure {
            Some(message) => Err(AppError::external_service(
                service_names::GOOGLE_VISION,
                message.clone(),
            )),
            None => Ok(self.annotations.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn config_with_key() -> VisionConfig {
        VisionConfig {
            api_key: Some("test-key".into()),
            ..VisionConfig::default()
        }
    }

    #[test]
    fn test_missing_api_key_is_config_missing() {
        let error =
            GoogleVisionClient::with_http_client(VisionConfig::default(), Client::new()).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert!(error.message.contains("GOOGLE_VISION_API_KEY"));
    }

    #[test]
    fn test_status_errors_separate_auth_and_rate_limits() {
        assert_eq!(
            status_error(StatusCode::FORBIDDEN, "API key not valid").code,
            ErrorCode::ExternalAuthFailed
        );
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "quota").code,
            ErrorCode::ExternalRateLimited
        );
        assert_eq!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "").code,
            ErrorCode::ExternalServiceError
        );
    }

    #[test]
    fn test_request_body_shape() {
        let client = GoogleVisionClient::new(config_with_key()).unwrap();
        let body = client.request_body(b"abc");

        let request = &body["requests"][0];
        assert_eq!(request["image"]["content"], "YWJj");
        assert_eq!(request["features"][0]["type"], "LABEL_DETECTION");
        assert_eq!(request["features"][0]["maxResults"], 15);
        assert_eq!(request["features"][1]["type"], "OBJECT_LOCALIZATION");
        assert_eq!(request["features"][1]["maxResults"], 5);
    }

    #[test]
    fn test_response_parsing_reads_first_entry() {
        let raw = r#"{
            "responses": [{
                "labelAnnotations": [{"description": "Pizza", "score": 0.97}],
                "localizedObjectAnnotations": [{"name": "Plate", "score": 0.8}]
            }]
        }"#;
        let parsed: AnnotateResponse = serde_json::from_str(raw).unwrap();
        let first = parsed.responses.into_iter().next().unwrap();

        assert!(first.error.is_none());
        assert_eq!(first.annotations.label_annotations[0].description, "Pizza");
        assert_eq!(first.annotations.localized_object_annotations[0].name, "Plate");
    }

    #[tokio::test]
    async fn test_mock_failure_counts_calls() {
        let mock = MockVisionProvider::failing("quota exceeded");
        assert!(mock.analyze(b"img").await.is_err());
        assert_eq!(mock.call_count(), 1);
    }
}
