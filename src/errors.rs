// ABOUTME: Unified error types re-exported from nutrisnap-core
// ABOUTME: AppError, ErrorCode, AppResult, and the resolver-boundary LookupError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrisnap_core::errors::*;
