// ABOUTME: Shared HTTP client with connection pooling and timeout configuration
// ABOUTME: Configured once at startup and reused by the vision and nutrition clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::HttpClientConfig;
use crate::errors::{AppError, AppResult};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Configure the shared client before first use
///
/// Returns `false` when the shared client was already created, in which case
/// the existing timeouts stay in effect.
pub fn init_shared_client(config: HttpClientConfig) -> bool {
    let installed = SHARED_CLIENT.set(create_client(config)).is_ok();
    if installed {
        debug!(
            timeout_secs = config.timeout_secs,
            connect_timeout_secs = config.connect_timeout_secs,
            "Shared HTTP client configured"
        );
    }
    installed
}

/// Get or create the shared HTTP client
///
/// Falls back to default timeouts when `init_shared_client` was never called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| create_client(HttpClientConfig::default()))
}

/// Create a new HTTP client with the given timeouts
#[must_use]
pub fn create_client(config: HttpClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Reject a configured base URL that is not `http://` or `https://`
pub(super) fn require_http_url(name: &str, url: &str) -> AppResult<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(AppError::config(format!(
            "{name} must start with http:// or https://, got '{url}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_require_http_url() {
        assert!(require_http_url("BASE", "https://vision.googleapis.com/v1").is_ok());
        assert!(require_http_url("BASE", "http://localhost:8080").is_ok());

        let error = require_http_url("BASE", "ftp://example.com").unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigError);
        assert!(error.message.starts_with("BASE must start with"));
    }
}
