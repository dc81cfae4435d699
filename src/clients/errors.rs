//! HTTP-specific error types for the QuickBooks API SDK.
//!
//! This module contains error types for HTTP operations, including structured
//! faults, raw response errors, throttling, and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`FaultError`]: Non-2xx responses whose body is a QuickBooks fault envelope
//! - [`HttpResponseError`]: Non-2xx responses with any other body
//! - [`ThrottledError`]: Refused locally while the 429 cooldown is active
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`DecodeError`]: A 2xx response whose body is not JSON
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Fault(e)) => {
//!         for error in &e.fault.errors {
//!             println!("{}: {}", error.code, error.message);
//!         }
//!     }
//!     Err(HttpError::Throttled(_)) => println!("Slow down"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::clients::fault::{Fault, OBJECT_NOT_FOUND};

/// Error returned for a non-2xx response carrying a fault envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("QuickBooks returned {status}: {fault}")]
pub struct FaultError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The parsed fault.
    pub fault: Fault,
    /// The `time` field of the envelope, if present.
    pub time: Option<String>,
    /// The `intuit_tid` response header, for support requests.
    pub intuit_tid: Option<String>,
}

impl FaultError {
    /// Returns `true` if this is a 400 whose first error is "Object Not Found".
    ///
    /// The status alone is not enough: validation errors are also 400s.
    #[must_use]
    pub fn is_object_not_found(&self) -> bool {
        self.status == 400 && self.fault.first_message() == Some(OBJECT_NOT_FOUND)
    }
}

/// Error returned when a non-2xx response body is not a fault envelope.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     message: "Bad Gateway".to_string(),
///     intuit_tid: None,
/// };
///
/// assert_eq!(error.to_string(), "502 Bad Gateway");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code} {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// The `intuit_tid` response header, for support requests.
    pub intuit_tid: Option<String>,
}

/// Error returned, without touching the network, while the client is cooling
/// down after a 429 response.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("QuickBooks rate limit reached; requests are refused for {cooldown:?} after a 429 response")]
pub struct ThrottledError {
    /// The configured cooldown window.
    pub cooldown: Duration,
}

/// Error returned when a 2xx response body is not valid JSON.
#[derive(Debug, Error)]
#[error("Failed to decode {status} response body: {source}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::ReservedQueryParameter {
///     name: "minorversion".to_string(),
/// };
///
/// assert!(error.to_string().contains("minorversion"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A query parameter that the client sets itself was supplied.
    #[error("Query parameter '{name}' is set by the client and cannot be overridden.")]
    ReservedQueryParameter {
        /// The offending parameter name.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A structured QuickBooks fault.
    #[error(transparent)]
    Fault(#[from] FaultError),

    /// A non-2xx response without a fault envelope.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Refused locally during the throttle cooldown.
    #[error(transparent)]
    Throttled(#[from] ThrottledError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response with a body that is not JSON.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the structured fault, if this error carries one.
    #[must_use]
    pub const fn fault(&self) -> Option<&FaultError> {
        match self {
            Self::Fault(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the `intuit_tid` of the failed response, if known.
    #[must_use]
    pub fn intuit_tid(&self) -> Option<&str> {
        match self {
            Self::Fault(e) => e.intuit_tid.as_deref(),
            Self::Response(e) => e.intuit_tid.as_deref(),
            _ => None,
        }
    }
}
