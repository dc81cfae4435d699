//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated OAuth client ID of an Intuit app.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::ClientId;
///
/// let id = ClientId::new("ABcd1234").unwrap();
/// assert_eq!(id.as_ref(), "ABcd1234");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated OAuth client secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A QuickBooks company identifier.
///
/// Every API path is scoped to a realm: `/v3/company/{realm}/...`.
/// The realm is returned as the `realmId` parameter of the OAuth callback.
///
/// # Serialization
///
/// `RealmId` serializes to and deserializes from a plain string:
///
/// ```rust
/// use quickbooks_api::RealmId;
///
/// let realm = RealmId::new("123146096291789").unwrap();
/// let json = serde_json::to_string(&realm).unwrap();
/// assert_eq!(json, r#""123146096291789""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RealmId(String);

impl RealmId {
    /// Creates a new validated realm ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRealmId`] if the ID is empty or contains
    /// characters that cannot appear in a path segment.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::EmptyRealmId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for RealmId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RealmId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RealmId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated absolute `http` or `https` URL.
///
/// Used for the API base URL override and the OAuth redirect URI.
/// A trailing slash is removed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::ServiceUrl;
///
/// let url = ServiceUrl::new("https://myapp.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://myapp.example.com");
/// assert_eq!(url.host_name(), "myapp.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl ServiceUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || url[host_start..host_end].contains(' ') {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
        assert!(matches!(ClientId::new("   "), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_realm_id_trims_and_validates() {
        let realm = RealmId::new(" 4620816365 ").unwrap();
        assert_eq!(realm.as_ref(), "4620816365");

        assert!(matches!(RealmId::new(""), Err(ConfigError::EmptyRealmId)));
        assert!(RealmId::new("12/34").is_err());
    }

    #[test]
    fn test_realm_id_serde_round_trip() {
        let realm = RealmId::new("123146096291789").unwrap();
        let json = serde_json::to_string(&realm).unwrap();
        let back: RealmId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, realm);

        assert!(serde_json::from_str::<RealmId>(r#""""#).is_err());
    }

    #[test]
    fn test_service_url_strips_trailing_slash() {
        let url = ServiceUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_service_url_rejects_invalid_urls() {
        assert!(ServiceUrl::new("").is_err());
        assert!(ServiceUrl::new("quickbooks.api.intuit.com").is_err());
        assert!(ServiceUrl::new("ftp://example.com").is_err());
        assert!(ServiceUrl::new("https://").is_err());
    }
}
