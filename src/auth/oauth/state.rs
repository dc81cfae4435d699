//! CSRF state for the authorization redirect.
//!
//! A [`StateParam`] is issued with every authorization URL, stored by the
//! caller, and compared against the `state` query parameter of the
//! callback. It can also carry a small serializable payload (for example a
//! return path) through the round trip.
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::auth::oauth::StateParam;
//! use serde::{Serialize, Deserialize};
//!
//! let state = StateParam::new();
//! assert_eq!(state.nonce().len(), 32);
//! assert!(state.matches(state.as_ref()));
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Return {
//!     path: String,
//! }
//!
//! let state = StateParam::with_data(&Return { path: "/invoices".to_string() });
//! let back: Option<Return> = state.extract_data();
//! assert_eq!(back.unwrap().path, "/invoices");
//! ```

use std::fmt;

use base64::prelude::*;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use subtle::ConstantTimeEq;

/// OAuth state parameter.
///
/// Payload-carrying states are URL-safe base64 JSON, so the value can be
/// placed in a query string without further escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    nonce: String,
    data: T,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 32;

    fn random_nonce() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Creates a state holding a random 32-character alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Self::random_nonce(),
        }
    }

    /// Creates a state that carries `data` alongside a random nonce.
    #[must_use]
    pub fn with_data<T: Serialize>(data: &T) -> Self {
        let envelope = Envelope {
            nonce: Self::random_nonce(),
            data,
        };
        let json = serde_json::to_vec(&envelope).unwrap_or_default();

        Self {
            value: BASE64_URL_SAFE_NO_PAD.encode(json),
        }
    }

    /// Wraps a state value received from elsewhere, e.g. a stored session.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { value: raw.into() }
    }

    /// Returns the full state value as sent in the authorization URL.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.value
    }

    /// Decodes the payload of a state created with [`with_data`](Self::with_data).
    ///
    /// Returns `None` for plain states and for payloads of another shape.
    #[must_use]
    pub fn extract_data<T: DeserializeOwned>(&self) -> Option<T> {
        let decoded = BASE64_URL_SAFE_NO_PAD.decode(self.value.as_bytes()).ok()?;
        let envelope: Envelope<T> = serde_json::from_slice(&decoded).ok()?;
        Some(envelope.data)
    }

    /// Compares `received` against this state in constant time.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        self.value.as_bytes().ct_eq(received.as_bytes()).into()
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
