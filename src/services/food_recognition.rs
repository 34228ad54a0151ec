// ABOUTME: Food recognition pipeline from image bytes to ranked nutrition records
// ABOUTME: Detects labels, resolves them with bounded concurrency, and discards stale captures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Recognition Pipeline
//!
//! One capture cycle runs through these states:
//!
//! ```text
//! Idle -> Detecting -> Detected -> Resolving -> Ready
//!   ^        |            |                      |
//!   +--------+------------+---------- reset -----+
//! ```
//!
//! Every capture takes a new generation number. Starting another capture or
//! calling [`FoodRecognitionPipeline::reset`] moves the generation on; lookups
//! of the older capture that have not started are skipped, lookups in flight
//! are cancelled, and the older cycle reports [`RecognitionStatus::Superseded`]
//! without touching pipeline state.
//!
//! The pipeline never fails. Detection errors, empty results, and per-label
//! lookup failures are all reported through [`RecognitionOutcome`].

use super::nutrition_resolver::{format_query, resolve_nutrition};
use crate::config::PipelineConfig;
use crate::errors::LookupError;
use crate::external::{NutritionLookup, VisionProvider};
use crate::intelligence::rank_food_labels;
use crate::logging::AppLogger;
use crate::models::{DetectedLabel, NutritionRecord};
use futures_util::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{watch, RwLock};
use tokio::time::timeout;
use tracing::{debug, warn};

/// Pipeline state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    /// Waiting for a capture
    #[default]
    Idle,
    /// Vision call in flight
    Detecting,
    /// Labels extracted
    Detected,
    /// Nutrition lookups in flight
    Resolving,
    /// Results available
    Ready,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Detecting => "detecting",
            Self::Detected => "detected",
            Self::Resolving => "resolving",
            Self::Ready => "ready",
        };
        f.write_str(name)
    }
}

/// How a recognition cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionStatus {
    /// Lookups finished; `items` may still be empty if every lookup failed
    Ready,
    /// No label survived filtering, so no lookup was made
    NoFoodDetected,
    /// The vision call failed or timed out
    DetectionFailed,
    /// A newer capture or a reset replaced this cycle
    Superseded,
}

impl fmt::Display for RecognitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ready => "ready",
            Self::NoFoodDetected => "no_food_detected",
            Self::DetectionFailed => "detection_failed",
            Self::Superseded => "superseded",
        };
        f.write_str(name)
    }
}

/// A detected label whose nutrition lookup failed
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedLabel {
    /// The label that was looked up
    pub label: DetectedLabel,
    /// Why the lookup failed
    pub error: LookupError,
}

/// Result of one recognition cycle
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionOutcome {
    /// Capture generation the cycle ran under
    pub generation: u64,
    /// How the cycle ended
    pub status: RecognitionStatus,
    /// Ranked labels that were looked up
    pub labels: Vec<DetectedLabel>,
    /// Resolved records in label rank order, confidence set to the label score
    pub items: Vec<NutritionRecord>,
    /// Labels whose lookup failed, in label rank order
    pub unresolved: Vec<UnresolvedLabel>,
}

impl RecognitionOutcome {
    fn empty(generation: u64, status: RecognitionStatus) -> Self {
        Self {
            generation,
            status,
            labels: Vec::new(),
            items: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// Whether the cycle recognized at least one food
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Token identifying one capture cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureGeneration(u64);

impl CaptureGeneration {
    /// Raw generation number
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

enum LabelResolution {
    Resolved(usize, NutritionRecord),
    Failed(usize, UnresolvedLabel),
    Abandoned,
}

/// Orchestrates detection and nutrition resolution for captured images
pub struct FoodRecognitionPipeline {
    vision: Arc<dyn VisionProvider>,
    lookup: Arc<dyn NutritionLookup>,
    config: PipelineConfig,
    state: RwLock<PipelineState>,
    generation: watch::Sender<u64>,
}

impl FoodRecognitionPipeline {
    /// Create a pipeline in the `Idle` state at generation 0
    #[must_use]
    pub fn new(
        vision: Arc<dyn VisionProvider>,
        lookup: Arc<dyn NutritionLookup>,
        config: PipelineConfig,
    ) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            vision,
            lookup,
            config,
            state: RwLock::new(PipelineState::Idle),
            generation,
        }
    }

    /// Current pipeline state
    pub async fn state(&self) -> PipelineState {
        *self.state.read().await
    }

    /// Generation of the most recent capture or reset
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        *self.generation.borrow()
    }

    /// Start a new capture, superseding any cycle still running
    #[must_use]
    pub fn begin_capture(&self) -> CaptureGeneration {
        CaptureGeneration(self.advance_generation())
    }

    /// Abandon the current cycle and return to `Idle`
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        let generation = self.advance_generation();
        *state = PipelineState::Idle;
        debug!(capture.generation = generation, "Pipeline reset");
    }

    /// Run a full recognition cycle for `image` under a new capture generation
    pub async fn recognize(&self, image: &[u8]) -> RecognitionOutcome {
        let capture = self.begin_capture();
        self.recognize_capture(capture, image).await
    }

    /// Run a recognition cycle under a generation taken with `begin_capture`
    pub async fn recognize_capture(
        &self,
        capture: CaptureGeneration,
        image: &[u8],
    ) -> RecognitionOutcome {
        let generation = capture.value();
        if !self.transition(generation, PipelineState::Detecting).await {
            return self.superseded(generation);
        }

        let started = Instant::now();
        let annotations = match timeout(self.config.detection_timeout(), self.vision.analyze(image))
            .await
        {
            Ok(Ok(annotations)) => annotations,
            Ok(Err(error)) => {
                warn!(capture.generation = generation, "Food detection failed: {error}");
                return self
                    .finish_empty(generation, RecognitionStatus::DetectionFailed)
                    .await;
            }
            Err(_) => {
                warn!(
                    capture.generation = generation,
                    timeout_secs = self.config.detection_timeout_secs,
                    "Food detection timed out"
                );
                return self
                    .finish_empty(generation, RecognitionStatus::DetectionFailed)
                    .await;
            }
        };

        let candidate_count = annotations.candidates().count();
        let labels = rank_food_labels(annotations.candidates(), self.config.label_cutoff());
        AppLogger::log_detection(generation, candidate_count, labels.len(), elapsed_ms(started));

        if !self.transition(generation, PipelineState::Detected).await {
            return self.superseded(generation);
        }
        if labels.is_empty() {
            return self
                .finish_empty(generation, RecognitionStatus::NoFoodDetected)
                .await;
        }

        if !self.transition(generation, PipelineState::Resolving).await {
            return self.superseded(generation);
        }
        let (items, unresolved) = self.resolve_labels(generation, &labels).await;

        if !self.transition(generation, PipelineState::Ready).await {
            return self.superseded(generation);
        }
        RecognitionOutcome {
            generation,
            status: RecognitionStatus::Ready,
            labels,
            items,
            unresolved,
        }
    }

    /// Look up every label with bounded concurrency, keeping label rank order
    async fn resolve_labels(
        &self,
        generation: u64,
        labels: &[DetectedLabel],
    ) -> (Vec<NutritionRecord>, Vec<UnresolvedLabel>) {
        let mut resolutions: Vec<LabelResolution> = stream::iter(labels.iter().enumerate())
            .map(|(index, label)| self.resolve_label(generation, index, label))
            .buffer_unordered(self.config.max_concurrent_lookups.max(1))
            .collect()
            .await;

        resolutions.sort_by_key(|resolution| match resolution {
            LabelResolution::Resolved(index, _) | LabelResolution::Failed(index, _) => *index,
            LabelResolution::Abandoned => usize::MAX,
        });

        let mut items = Vec::new();
        let mut unresolved = Vec::new();
        for resolution in resolutions {
            match resolution {
                LabelResolution::Resolved(_, record) => items.push(record),
                LabelResolution::Failed(_, failure) => unresolved.push(failure),
                LabelResolution::Abandoned => {}
            }
        }
        (items, unresolved)
    }

    async fn resolve_label(
        &self,
        generation: u64,
        index: usize,
        label: &DetectedLabel,
    ) -> LabelResolution {
        if self.is_stale(generation) {
            return LabelResolution::Abandoned;
        }

        let mut changes = self.generation.subscribe();
        let deadline = self.config.lookup_timeout();
        let started = Instant::now();

        let result = tokio::select! {
            result = timeout(deadline, resolve_nutrition(self.lookup.as_ref(), &label.description)) => {
                result.unwrap_or_else(|_| {
                    Err(LookupError::timed_out(
                        format_query(&label.description),
                        duration_ms(deadline),
                    ))
                })
            }
            () = wait_until_superseded(&mut changes, generation) => {
                debug!(lookup.label = %label.description, "Lookup cancelled for newer capture");
                return LabelResolution::Abandoned;
            }
        };

        let duration = elapsed_ms(started);
        match result {
            Ok(record) => {
                AppLogger::log_resolution(&label.description, true, duration, None);
                LabelResolution::Resolved(index, record.with_confidence(label.score))
            }
            Err(error) => {
                AppLogger::log_resolution(
                    &label.description,
                    false,
                    duration,
                    Some(&error.to_string()),
                );
                LabelResolution::Failed(
                    index,
                    UnresolvedLabel {
                        label: label.clone(),
                        error,
                    },
                )
            }
        }
    }

    /// Set the state if `generation` is still current
    async fn transition(&self, generation: u64, next: PipelineState) -> bool {
        let mut state = self.state.write().await;
        if self.is_stale(generation) {
            return false;
        }
        *state = next;
        true
    }

    async fn finish_empty(&self, generation: u64, status: RecognitionStatus) -> RecognitionOutcome {
        if self.transition(generation, PipelineState::Idle).await {
            RecognitionOutcome::empty(generation, status)
        } else {
            self.superseded(generation)
        }
    }

    fn superseded(&self, generation: u64) -> RecognitionOutcome {
        AppLogger::log_superseded(generation, self.current_generation());
        RecognitionOutcome::empty(generation, RecognitionStatus::Superseded)
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.current_generation() != generation
    }

    fn advance_generation(&self) -> u64 {
        let mut next = 0;
        self.generation.send_modify(|current| {
            *current += 1;
            next = *current;
        });
        next
    }
}

/// Resolve once the watched generation differs from `generation`
async fn wait_until_superseded(changes: &mut watch::Receiver<u64>, generation: u64) {
    loop {
        if *changes.borrow_and_update() != generation {
            return;
        }
        if changes.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn elapsed_ms(started: Instant) -> u64 {
    duration_ms(started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::{MockNutritionLookup, MockVisionProvider};
    use crate::test_utils::create_test_food;

    fn pipeline(vision: MockVisionProvider) -> FoodRecognitionPipeline {
        FoodRecognitionPipeline::new(
            Arc::new(vision),
            Arc::new(MockNutritionLookup::new()),
            PipelineConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_generations_increase_on_capture_and_reset() {
        let pipeline = pipeline(MockVisionProvider::default());
        assert_eq!(pipeline.current_generation(), 0);

        let capture = pipeline.begin_capture();
        assert_eq!(capture.value(), 1);

        pipeline.reset().await;
        assert_eq!(pipeline.current_generation(), 2);
        assert_eq!(pipeline.state().await, PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_stale_capture_is_superseded_before_detection() {
        let vision = Arc::new(MockVisionProvider::with_labels(&[("Pizza", 0.9)]));
        let pipeline = FoodRecognitionPipeline::new(
            vision.clone(),
            Arc::new(MockNutritionLookup::new()),
            PipelineConfig::default(),
        );

        let stale = pipeline.begin_capture();
        let _newer = pipeline.begin_capture();

        let outcome = pipeline.recognize_capture(stale, b"img").await;
        assert_eq!(outcome.status, RecognitionStatus::Superseded);
        assert_eq!(vision.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_food_returns_to_idle() {
        let pipeline = pipeline(MockVisionProvider::with_labels(&[("Food", 0.99), ("Dish", 0.9)]));

        let outcome = pipeline.recognize(b"img").await;
        assert_eq!(outcome.status, RecognitionStatus::NoFoodDetected);
        assert!(!outcome.has_items());
        assert_eq!(pipeline.state().await, PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_ready_records_take_label_score() {
        let pipeline = FoodRecognitionPipeline::new(
            Arc::new(MockVisionProvider::with_labels(&[("Pizza", 0.87)])),
            Arc::new(
                MockNutritionLookup::new()
                    .with_food("1 serving Pizza", create_test_food("pizza", 285.0, 107.0)),
            ),
            PipelineConfig::default(),
        );

        let outcome = pipeline.recognize(b"img").await;
        assert_eq!(outcome.status, RecognitionStatus::Ready);
        assert_eq!(outcome.items.len(), 1);
        assert!((outcome.items[0].confidence - 0.87).abs() < f64::EPSILON);
        assert!((outcome.items[0].nutrients.protein - 11.4).abs() < 1e-9);
        assert_eq!(pipeline.state().await, PipelineState::Ready);
    }
}
