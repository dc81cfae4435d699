//! OAuth scope handling for the Intuit identity platform.
//!
//! This module provides the [`AuthScopes`] type for managing OAuth scopes,
//! including parsing and implied scope handling.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Scope granting access to the accounting API.
pub const ACCOUNTING_SCOPE: &str = "com.intuit.quickbooks.accounting";

/// Scope granting access to the payments API.
pub const PAYMENT_SCOPE: &str = "com.intuit.quickbooks.payment";

/// Scope enabling OpenID Connect.
pub const OPENID_SCOPE: &str = "openid";

/// OpenID user-info scopes, each of which only works alongside `openid`.
const OPENID_CLAIM_SCOPES: &[&str] = &["profile", "email", "phone", "address"];

/// A set of OAuth scopes requested from Intuit.
///
/// Scopes are space separated on the wire; commas are accepted when parsing.
///
/// # Implied Scopes
///
/// The OpenID claim scopes (`profile`, `email`, `phone`, `address`) are
/// rejected by Intuit unless `openid` is also requested, so parsing any of
/// them adds `openid`.
///
/// # Serialization
///
/// `AuthScopes` serializes to and deserializes from the space separated
/// string sent in the authorization URL:
///
/// ```rust
/// use quickbooks_api::AuthScopes;
///
/// let scopes: AuthScopes = "com.intuit.quickbooks.accounting email".parse().unwrap();
/// let json = serde_json::to_string(&scopes).unwrap();
/// assert_eq!(json, r#""com.intuit.quickbooks.accounting email openid""#);
/// ```
///
/// # Example
///
/// ```rust
/// use quickbooks_api::AuthScopes;
///
/// let scopes: AuthScopes = "com.intuit.quickbooks.accounting openid".parse().unwrap();
/// assert!(!scopes.is_empty());
///
/// let required: AuthScopes = "com.intuit.quickbooks.accounting".parse().unwrap();
/// assert!(scopes.covers(&required));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: BTreeSet<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scope set holding only the accounting scope.
    #[must_use]
    pub fn accounting() -> Self {
        let mut scopes = BTreeSet::new();
        scopes.insert(ACCOUNTING_SCOPE.to_string());
        Self { scopes }
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns `true` if this scope set contains all scopes in `other`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.is_subset(&self.scopes)
    }

    /// Returns an iterator over the scopes.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    fn add_implied_scopes(&mut self) {
        if self
            .scopes
            .iter()
            .any(|scope| OPENID_CLAIM_SCOPES.contains(&scope.as_str()))
        {
            self.scopes.insert(OPENID_SCOPE.to_string());
        }
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = BTreeSet::new();

        for scope in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if scope.is_empty() {
                continue;
            }

            if !scope
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
            {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("Invalid characters in scope: '{scope}'"),
                });
            }

            scopes.insert(scope.to_string());
        }

        let mut auth_scopes = Self { scopes };
        auth_scopes.add_implied_scopes();

        Ok(auth_scopes)
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scopes: Vec<&str> = self.iter().collect();
        write!(f, "{}", scopes.join(" "))
    }
}

impl Serialize for AuthScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_scopes_parses_space_and_comma_separated() {
        let scopes: AuthScopes = "com.intuit.quickbooks.accounting, openid  com.intuit.quickbooks.payment"
            .parse()
            .unwrap();
        assert!(scopes.iter().any(|s| s == ACCOUNTING_SCOPE));
        assert!(scopes.iter().any(|s| s == PAYMENT_SCOPE));
        assert!(scopes.iter().any(|s| s == OPENID_SCOPE));
    }

    #[test]
    fn test_claim_scopes_imply_openid() {
        let scopes: AuthScopes = "email".parse().unwrap();
        assert!(scopes.iter().any(|s| s == "openid"));

        let scopes: AuthScopes = ACCOUNTING_SCOPE.parse().unwrap();
        assert!(!scopes.iter().any(|s| s == "openid"));
    }

    #[test]
    fn test_auth_scopes_rejects_invalid_characters() {
        let result = "com.intuit.quickbooks.accounting op*nid".parse::<AuthScopes>();
        assert!(matches!(result, Err(ConfigError::InvalidScopes { .. })));
    }

    #[test]
    fn test_auth_scopes_covers() {
        let scopes: AuthScopes = "com.intuit.quickbooks.accounting openid".parse().unwrap();
        assert!(scopes.covers(&AuthScopes::accounting()));

        let more: AuthScopes = "com.intuit.quickbooks.payment".parse().unwrap();
        assert!(!scopes.covers(&more));
    }

    #[test]
    fn test_display_is_space_separated_and_sorted() {
        let scopes: AuthScopes = "profile,com.intuit.quickbooks.accounting".parse().unwrap();
        assert_eq!(
            scopes.to_string(),
            "com.intuit.quickbooks.accounting openid profile"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let scopes: AuthScopes = "com.intuit.quickbooks.accounting openid".parse().unwrap();
        let json = serde_json::to_string(&scopes).unwrap();
        let back: AuthScopes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scopes);
    }
}
