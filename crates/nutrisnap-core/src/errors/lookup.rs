// ABOUTME: Nutrition lookup error types distinguishing "nothing found" from "lookup broke"
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Lookup Error Types
//!
//! `LookupError` is returned by nutrition lookup collaborators and by the
//! resolver. Keeping `NotFound` separate from transport failures lets the
//! recognition pipeline report why a label went unresolved instead of
//! collapsing every failure into absence.

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// Errors raised while resolving a food label into a nutrition record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The lookup service answered but had no match for the query
    NotFound {
        /// Query sent to the lookup service
        query: String,
    },
    /// The lookup service could not be reached or returned a non-success status
    Transport {
        /// Name of the external service
        service: String,
        /// Details about the failure
        details: String,
    },
    /// The lookup service rejected the configured credentials
    Unauthorized {
        /// Name of the external service
        service: String,
        /// Details about the rejection
        details: String,
    },
    /// The lookup service refused the request because of its rate limit
    RateLimited {
        /// Name of the external service
        service: String,
        /// Details about the refusal
        details: String,
    },
    /// The lookup service answered with a payload that could not be interpreted
    Malformed {
        /// Name of the external service
        service: String,
        /// Details about the parse failure
        details: String,
    },
    /// The lookup did not complete within the configured deadline
    TimedOut {
        /// Query sent to the lookup service
        query: String,
        /// Deadline that elapsed, in milliseconds
        after_ms: u64,
    },
}

impl LookupError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a transport error
    #[must_use]
    pub fn transport(service: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Transport {
            service: service.into(),
            details: details.into(),
        }
    }

    /// Create a rejected-credentials error
    #[must_use]
    pub fn unauthorized(service: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Unauthorized {
            service: service.into(),
            details: details.into(),
        }
    }

    /// Create a rate-limit error
    #[must_use]
    pub fn rate_limited(service: impl Into<String>, details: impl Into<String>) -> Self {
        Self::RateLimited {
            service: service.into(),
            details: details.into(),
        }
    }

    /// Create a malformed payload error
    #[must_use]
    pub fn malformed(service: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Malformed {
            service: service.into(),
            details: details.into(),
        }
    }

    /// Create a timeout error
    #[must_use]
    pub fn timed_out(query: impl Into<String>, after_ms: u64) -> Self {
        Self::TimedOut {
            query: query.into(),
            after_ms,
        }
    }

    /// Whether the lookup answered cleanly with no match
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the failure came from the transport rather than the data
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::Unauthorized { .. }
                | Self::RateLimited { .. }
                | Self::TimedOut { .. }
        )
    }

    /// Short machine-readable kind, used in structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Transport { .. } => "transport",
            Self::Unauthorized { .. } => "unauthorized",
            Self::RateLimited { .. } => "rate_limited",
            Self::Malformed { .. } => "malformed",
            Self::TimedOut { .. } => "timed_out",
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { query } => write!(f, "No nutrition match for '{query}'"),
            Self::Transport { service, details } => {
                write!(f, "{service} request failed: {details}")
            }
            Self::Unauthorized { service, details } => {
                write!(f, "{service} rejected the credentials: {details}")
            }
            Self::RateLimited { service, details } => {
                write!(f, "{service} rate limit exceeded: {details}")
            }
            Self::Malformed { service, details } => {
                write!(f, "{service} returned an unreadable payload: {details}")
            }
            Self::TimedOut { query, after_ms } => {
                write!(f, "Lookup for '{query}' timed out after {after_ms}ms")
            }
        }
    }
}

impl Error for LookupError {}

impl From<LookupError> for AppError {
    fn from(error: LookupError) -> Self {
        let code = match &error {
            LookupError::NotFound { .. } => ErrorCode::ResourceNotFound,
            LookupError::Transport { .. } | LookupError::TimedOut { .. } => {
                ErrorCode::ExternalServiceUnavailable
            }
            LookupError::Unauthorized { .. } => ErrorCode::ExternalAuthFailed,
            LookupError::RateLimited { .. } => ErrorCode::ExternalRateLimited,
            LookupError::Malformed { .. } => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::malformed("HTTP", error.to_string())
        } else {
            Self::transport("HTTP", error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_resource_not_found() {
        let app_error: AppError = LookupError::not_found("1 serving pizza").into();
        assert_eq!(app_error.code, ErrorCode::ResourceNotFound);
        assert!(app_error.message.contains("1 serving pizza"));
    }

    #[test]
    fn test_timeout_counts_as_transport() {
        let error = LookupError::timed_out("1 serving soup", 10_000);
        assert!(error.is_transport());
        assert!(!error.is_not_found());
        assert_eq!(error.kind(), "timed_out");

        let app_error: AppError = error.into();
        assert_eq!(app_error.code, ErrorCode::ExternalServiceUnavailable);
    }

    #[test]
    fn test_rejected_credentials_and_rate_limits_keep_their_codes() {
        let unauthorized = LookupError::unauthorized("Nutritionix", "HTTP 401 Unauthorized");
        assert!(unauthorized.is_transport());
        assert_eq!(unauthorized.kind(), "unauthorized");
        assert_eq!(AppError::from(unauthorized).code, ErrorCode::ExternalAuthFailed);

        let limited = LookupError::rate_limited("Nutritionix", "HTTP 429 Too Many Requests");
        assert_eq!(limited.kind(), "rate_limited");
        assert_eq!(
            limited.to_string(),
            "Nutritionix rate limit exceeded: HTTP 429 Too Many Requests"
        );
        assert_eq!(AppError::from(limited).code, ErrorCode::ExternalRateLimited);
    }

    #[test]
    fn test_malformed_is_neither_transport_nor_missing() {
        let error = LookupError::malformed("Nutritionix", "missing foods");
        assert!(!error.is_transport());
        assert!(!error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Nutritionix returned an unreadable payload: missing foods"
        );
    }
}
