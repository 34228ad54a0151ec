// ABOUTME: Constants governing which vision labels count as food candidates
// ABOUTME: Generic-term stoplist, minimum label length, and top-K ranking cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Labels too generic to resolve into a specific food, compared lowercased
pub const GENERIC_FOOD_TERMS: &[&str] = &[
    "food",
    "fast food",
    "comfort food",
    "cuisine",
    "meal",
    "dish",
    "snack",
    "breakfast",
    "lunch",
    "dinner",
    "dessert",
    "recipe",
    "ingredient",
    "junk food",
    "cooking",
    "staple food",
];

/// Labels shorter than this many characters are rejected
pub const MIN_LABEL_LENGTH: usize = 3;

/// Maximum number of ranked labels forwarded to nutrition lookup
pub const MAX_FOOD_LABELS: usize = 3;

/// Maximum generic labels requested from the vision API
pub const VISION_MAX_LABELS: u32 = 15;

/// Maximum localized objects requested from the vision API
pub const VISION_MAX_OBJECTS: u32 = 5;
