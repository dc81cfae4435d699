//! OAuth-specific error types for the QuickBooks API SDK.
//!
//! This module contains error types for the authorization-code flow, token
//! refresh and revocation, and the discovery document fetch.
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use thiserror::Error;

/// Errors that can occur during OAuth operations.
///
/// Token endpoint failures carry the HTTP status and body text. Network
/// failures are reported with status `0`.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// OAuth state parameter mismatch.
    ///
    /// The state parameter in the callback does not match the state issued
    /// with the authorization URL.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The expected state value that was generated.
        expected: String,
        /// The state value received in the callback.
        received: String,
    },

    /// Callback parameters are invalid or malformed.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// Description of what's invalid about the callback.
        reason: String,
    },

    /// No redirect URI is configured in `QuickBooksConfig`.
    ///
    /// Configure one via `QuickBooksConfigBuilder::redirect_uri()`.
    #[error("Redirect URI must be configured in QuickBooksConfig for OAuth")]
    MissingRedirectUri,

    /// The authorization-code or refresh-token grant failed.
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// The HTTP status code returned, `0` for network errors.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// The revocation endpoint rejected the request.
    #[error("Token revocation failed with status {status}: {message}")]
    TokenRevocationFailed {
        /// The HTTP status code returned, `0` for network errors.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// The discovery document could not be fetched or parsed.
    #[error("Discovery document fetch failed with status {status}: {message}")]
    DiscoveryFailed {
        /// The HTTP status code returned, `0` for network errors.
        status: u16,
        /// The error message from the response.
        message: String,
    },
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
