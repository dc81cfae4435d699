//! Error types for the QuickBooks API SDK.
//!
//! [`ConfigError`] covers everything that can go wrong before a request is
//! made: empty credentials, a malformed realm id or URL, bad scopes, and
//! builder fields left unset. Transport, entity and OAuth failures have their
//! own error types in their modules.
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// OAuth client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the client ID of your Intuit app.")]
    EmptyClientId,

    /// OAuth client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the client secret of your Intuit app.")]
    EmptyClientSecret,

    /// Realm ID cannot be empty.
    #[error("Realm ID cannot be empty. Every API path is scoped to a company realm.")]
    EmptyRealmId,

    /// Scopes are invalid.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A URL is invalid.
    #[error("Invalid URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://myapp.example.com/callback').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The minor version is not a number.
    #[error("Invalid minor version '{version}'. Expected a positive integer (e.g., '75').")]
    InvalidMinorVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let error = ConfigError::EmptyClientId;
        let message = error.to_string();
        assert!(message.contains("Client ID cannot be empty"));
    }

    #[test]
    fn test_invalid_url_error_message() {
        let error = ConfigError::InvalidUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "client_id" };
        let message = error.to_string();
        assert!(message.contains("client_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyRealmId;
        let _: &dyn std::error::Error = &error;
    }
}
