// ABOUTME: Vision label filtering and ranking for food recognition
// ABOUTME: Drops generic or too-short labels and keeps the highest-scoring candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food label detection
//!
//! Vision services label a pizza photo with "Pizza" but also with "Food",
//! "Fast food" and "Dish". Generic category words are useless as nutrition
//! queries, so they are dropped before ranking.

use crate::constants::detection::{GENERIC_FOOD_TERMS, MAX_FOOD_LABELS, MIN_LABEL_LENGTH};
use crate::models::{DetectedLabel, VisionAnnotations};
use std::cmp::Ordering;

/// Whether a label names a specific food
///
/// Rejects the generic stoplist (case-insensitive) and labels shorter than
/// three characters.
#[must_use]
pub fn is_valid_food_item(label: &str) -> bool {
    let lowered = label.to_lowercase();
    if GENERIC_FOOD_TERMS.contains(&lowered.as_str()) {
        return false;
    }
    label.chars().count() >= MIN_LABEL_LENGTH
}

/// Extract the top food labels from one vision analysis
///
/// Generic labels come before localized objects, so on equal scores a
/// generic label outranks an object.
#[must_use]
pub fn extract_food_labels(annotations: &VisionAnnotations) -> Vec<DetectedLabel> {
    rank_food_labels(annotations.candidates(), MAX_FOOD_LABELS)
}

/// Filter candidates, sort by descending score, and keep at most `limit`
///
/// The sort is stable. NaN scores sort after every real score.
#[must_use]
pub fn rank_food_labels(
    candidates: impl IntoIterator<Item = DetectedLabel>,
    limit: usize,
) -> Vec<DetectedLabel> {
    let mut labels: Vec<DetectedLabel> = candidates
        .into_iter()
        .filter(|label| is_valid_food_item(&label.description))
        .collect();

    labels.sort_by(by_score_descending);
    labels.truncate(limit);
    labels
}

fn by_score_descending(a: &DetectedLabel, b: &DetectedLabel) -> Ordering {
    match (a.score.is_nan(), b.score.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
    }
}
