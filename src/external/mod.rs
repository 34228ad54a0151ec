// ABOUTME: External collaborator traits and clients (Google Vision, Nutritionix)
// ABOUTME: The pipeline depends only on the traits so tests can inject mocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! The recognition pipeline talks to two collaborators: a vision service that
//! labels an image and a nutrition service that resolves a text query. Both
//! are traits; real HTTP clients and in-memory mocks implement them.

use crate::errors::{AppResult, LookupError};
use crate::models::VisionAnnotations;
use async_trait::async_trait;

/// Shared HTTP client construction
pub mod http_client;
/// Nutritionix nutrition lookup client
pub mod nutritionix;
/// Google Cloud Vision client
pub mod vision;

pub use http_client::{create_client, init_shared_client, shared_client};
pub use nutritionix::{MockNutritionLookup, NutritionixClient, NutritionixFood};
pub use vision::{GoogleVisionClient, MockVisionProvider};

/// Image analysis collaborator
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Analyze one encoded image and return its generic labels and localized objects
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or answers with a failure
    async fn analyze(&self, image: &[u8]) -> AppResult<VisionAnnotations>;
}

/// Nutrition lookup collaborator
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Return every food match for a free-text query, best match first
    ///
    /// An empty list means the service had no match.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Transport` or `LookupError::Malformed` when the
    /// service cannot be reached or its answer cannot be read
    async fn lookup(&self, query: &str) -> Result<Vec<NutritionixFood>, LookupError>;
}
