// ABOUTME: Re-exports command modules for nutrisnap-cli
// ABOUTME: Provides access to recognition, nutrition, summary, profile, and body metric commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod body;
pub mod nutrition;
pub mod profile;
pub mod recognize;
pub mod summary;
