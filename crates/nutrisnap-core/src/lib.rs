// ABOUTME: Core types and constants for the NutriSnap food recognition pipeline
// ABOUTME: Foundation crate with error handling, detection constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriSnap Core
//!
//! Foundation crate providing shared types and constants for the NutriSnap
//! nutrition pipeline. It performs no I/O and is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the lookup-boundary `LookupError`
//! - **constants**: Detection stoplist, ranking cutoffs, nutrition defaults, and body metric thresholds
//! - **models**: Vision labels, nutrition records, food log entries, and daily summaries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (labels, nutrition records, food log entries)
pub mod models;
