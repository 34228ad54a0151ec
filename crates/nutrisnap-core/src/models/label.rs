// ABOUTME: Vision label models shared by the vision client and the label ranker
// ABOUTME: Wire shapes for generic labels and localized objects plus the normalized DetectedLabel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A candidate food label with the vision collaborator's confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLabel {
    /// Label text as reported by the vision collaborator
    pub description: String,
    /// Confidence in [0, 1]
    pub score: f64,
}

impl DetectedLabel {
    /// Create a new detected label
    #[must_use]
    pub fn new(description: impl Into<String>, score: f64) -> Self {
        Self {
            description: description.into(),
            score,
        }
    }
}

/// Generic image label (`labelAnnotations[]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnnotation {
    /// Label text
    pub description: String,
    /// Confidence in [0, 1]
    #[serde(default)]
    pub score: f64,
}

/// Localized object (`localizedObjectAnnotations[]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectAnnotation {
    /// Object name
    pub name: String,
    /// Confidence in [0, 1]
    #[serde(default)]
    pub score: f64,
}

/// Result of one image analysis, both collections empty when absent on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionAnnotations {
    /// Generic labels
    #[serde(default)]
    pub label_annotations: Vec<LabelAnnotation>,
    /// Localized objects
    #[serde(default)]
    pub localized_object_annotations: Vec<ObjectAnnotation>,
}

impl VisionAnnotations {
    /// Normalize both collections into `DetectedLabel`s, generic labels first
    pub fn candidates(&self) -> impl Iterator<Item = DetectedLabel> + '_ {
        let labels = self
            .label_annotations
            .iter()
            .map(|label| DetectedLabel::new(label.description.clone(), label.score));
        let objects = self
            .localized_object_annotations
            .iter()
            .map(|object| DetectedLabel::new(object.name.clone(), object.score));
        labels.chain(objects)
    }

    /// Whether the analysis produced no labels at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label_annotations.is_empty() && self.localized_object_annotations.is_empty()
    }
}
