//! Session management for QuickBooks API authentication.
//!
//! This module provides the [`Session`] type holding the per-company
//! authentication state, and [`BearerToken`], the token endpoint's response.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RealmId;

/// Token endpoint response for the authorization-code and refresh grants.
///
/// ```json
/// {
///   "token_type": "bearer",
///   "access_token": "eyJlbmMiOiJBMTI4Q0JDLUhTMjU2...",
///   "refresh_token": "AB11730384931ocrNlRqi2e2KRQoCQ2k...",
///   "expires_in": 3600,
///   "x_refresh_token_expires_in": 8726400
/// }
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerToken {
    /// Token used to obtain a new access token.
    #[serde(default)]
    pub refresh_token: String,
    /// Token sent as `Authorization: Bearer` on API calls.
    pub access_token: String,
    /// Always `bearer`.
    #[serde(default)]
    pub token_type: String,
    /// OpenID token, present when the `openid` scope was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
    /// Refresh token lifetime in seconds.
    #[serde(default)]
    pub x_refresh_token_expires_in: i64,
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("access_token", &"*****")
            .field("refresh_token", &"*****")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("x_refresh_token_expires_in", &self.x_refresh_token_expires_in)
            .finish_non_exhaustive()
    }
}

/// Represents an authenticated session for QuickBooks API calls.
///
/// A session pairs a company realm with the tokens that authorize calls
/// against it.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::{Session, RealmId};
///
/// let session = Session::new(RealmId::new("4620816365").unwrap(), "access-token");
///
/// assert!(session.is_active());
/// assert!(!session.expired());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// The company this session is for.
    pub realm_id: RealmId,

    /// The access token for API authentication.
    pub access_token: String,

    /// The refresh token, if one was issued.
    pub refresh_token: Option<String>,

    /// When the access token expires, if known.
    pub expires: Option<DateTime<Utc>>,

    /// When the refresh token expires, if known.
    pub refresh_token_expires: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session from an existing access token.
    #[must_use]
    pub fn new(realm_id: RealmId, access_token: impl Into<String>) -> Self {
        Self {
            realm_id,
            access_token: access_token.into(),
            refresh_token: None,
            expires: None,
            refresh_token_expires: None,
        }
    }

    /// Creates a session from a token endpoint response.
    ///
    /// Expiry instants are computed from the lifetimes relative to now.
    #[must_use]
    pub fn from_bearer_token(realm_id: RealmId, token: &BearerToken) -> Self {
        let now = Utc::now();
        let expires_at = |secs: i64| (secs > 0).then(|| now + Duration::seconds(secs));

        Self {
            realm_id,
            access_token: token.access_token.clone(),
            refresh_token: (!token.refresh_token.is_empty()).then(|| token.refresh_token.clone()),
            expires: expires_at(token.expires_in),
            refresh_token_expires: expires_at(token.x_refresh_token_expires_in),
        }
    }

    /// Returns `true` if the access token has expired.
    ///
    /// Sessions without an expiration time are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if the refresh token has expired.
    #[must_use]
    pub fn refresh_token_expired(&self) -> bool {
        self.refresh_token_expires
            .is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this session is active (not expired and has access token).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("realm_id", &self.realm_id)
            .field("access_token", &"*****")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .field("expires", &self.expires)
            .field("refresh_token_expires", &self.refresh_token_expires)
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn realm() -> RealmId {
        RealmId::new("4620816365").unwrap()
    }

    #[test]
    fn test_session_expired() {
        let mut session = Session::new(realm(), "token");
        assert!(!session.expired());

        session.expires = Some(Utc::now() - Duration::hours(1));
        assert!(session.expired());
        assert!(!session.is_active());

        session.expires = Some(Utc::now() + Duration::hours(1));
        assert!(!session.expired());
        assert!(session.is_active());
    }

    #[test]
    fn test_from_bearer_token_computes_expiry() {
        let token: BearerToken = serde_json::from_str(
            r#"{
                "token_type": "bearer",
                "access_token": "access",
                "refresh_token": "refresh",
                "expires_in": 3600,
                "x_refresh_token_expires_in": 8726400
            }"#,
        )
        .unwrap();

        let session = Session::from_bearer_token(realm(), &token);
        assert_eq!(session.access_token, "access");
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));

        let expires = session.expires.unwrap();
        assert!(expires > Utc::now() + Duration::minutes(59));
        assert!(session.refresh_token_expires.unwrap() > expires);
        assert!(!session.refresh_token_expired());
    }

    #[test]
    fn test_from_bearer_token_without_lifetimes() {
        let token = BearerToken {
            access_token: "access".to_string(),
            ..BearerToken::default()
        };

        let session = Session::from_bearer_token(realm(), &token);
        assert!(session.refresh_token.is_none());
        assert!(session.expires.is_none());
        assert!(session.refresh_token_expires.is_none());
    }

    #[test]
    fn test_debug_masks_tokens() {
        let mut session = Session::new(realm(), "secret-access");
        session.refresh_token = Some("secret-refresh".to_string());

        let debug = format!("{session:?}");
        assert!(debug.contains("4620816365"));
        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
    }

    #[test]
    fn test_session_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
