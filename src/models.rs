// ABOUTME: Core data models re-exported from nutrisnap-core
// ABOUTME: Re-exports labels, nutrition records, meal types, food log entries, and BMI results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data carried between the vision client, the resolver, the
//! recognition pipeline, and the food log. None of these types perform I/O.

pub use nutrisnap_core::models::*;
