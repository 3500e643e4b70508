//! Canteen data service client.
//!
//! # Architecture
//!
//! - The hosted data service is the source of truth - NO local database,
//!   direct REST calls against its PostgREST-style table endpoints
//! - Exact-match filters (`column=eq.value`) and two-key sorts
//!   (`order=meal_type.asc,created_at.asc`), encoded as query strings
//! - Menu reads are cached in-memory via `moka` (60 second TTL, invalidated
//!   by every menu write); orders are always fetched fresh
//! - Sign-in delegates the password check to the service's token endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use smart_canteen_app::canteen::CanteenClient;
//!
//! let client = CanteenClient::new(&config.service);
//!
//! let date = "2026-08-30".parse()?;
//! let menu = client.list_menu(date, true).await?;
//! let orders = client.list_orders_with_items(date).await?;
//! ```

mod client;

pub use client::{AuthUser, CanteenClient};

use thiserror::Error;

/// Errors that can occur when talking to the canteen data service.
#[derive(Debug, Error)]
pub enum CanteenError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service error ({status}): {message}")]
    Api {
        /// HTTP status returned by the service.
        status: reqwest::StatusCode,
        /// Response body, for diagnostics.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode service response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service rejected the configured API key.
    ///
    /// Every 401 is mapped here: all requests carry the service key, so an
    /// unauthorized response means the deployment is misconfigured, not that
    /// a user did something wrong.
    #[error("the canteen service rejected the configured API key")]
    InvalidKey,
}

impl CanteenError {
    /// Whether this error means the supplied credentials were rejected.
    ///
    /// Credential rejections from the token endpoint come back as 400
    /// (`invalid_grant`) or 403; a 401 is a [`CanteenError::InvalidKey`]
    /// instead and stays a server-side failure.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(
            self,
            Self::Api { status, .. }
                if matches!(status.as_u16(), 400 | 403)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> CanteenError {
        CanteenError::Api {
            status: reqwest::StatusCode::from_u16(status).unwrap_or_default(),
            message: String::new(),
        }
    }

    #[test]
    fn test_auth_rejection_covers_credential_statuses() {
        assert!(api(400).is_auth_rejection());
        assert!(api(403).is_auth_rejection());
    }

    #[test]
    fn test_auth_rejection_excludes_server_failures() {
        assert!(!api(500).is_auth_rejection());
        assert!(!CanteenError::InvalidKey.is_auth_rejection());
    }
}
