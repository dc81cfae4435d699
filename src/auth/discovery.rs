//! OpenID discovery document.
//!
//! Intuit publishes its OAuth endpoints in a well-known JSON document per
//! environment. The token flows in [`oauth`](crate::auth::oauth) read their
//! URLs from a [`DiscoveryDocument`] instead of hardcoding them.

use serde::{Deserialize, Serialize};

use crate::auth::oauth::OAuthError;
use crate::config::Environment;

/// The endpoints advertised by Intuit's discovery document.
///
/// # Example
///
/// ```rust,ignore
/// use quickbooks_api::{DiscoveryDocument, Environment};
///
/// let discovery = DiscoveryDocument::fetch(Environment::Sandbox).await?;
/// println!("token endpoint: {}", discovery.token_endpoint);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryDocument {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
    pub revocation_endpoint: String,
    pub jwks_uri: String,
}

impl DiscoveryDocument {
    /// Fetches the discovery document of the given environment.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::DiscoveryFailed`] on network failure, a non-2xx
    /// status, or a body that is not a discovery document.
    pub async fn fetch(environment: Environment) -> Result<Self, OAuthError> {
        Self::fetch_from(environment.discovery_url()).await
    }

    /// Fetches a discovery document from an explicit URL.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::DiscoveryFailed`] on network failure, a non-2xx
    /// status, or a body that is not a discovery document.
    pub async fn fetch_from(url: &str) -> Result<Self, OAuthError> {
        tracing::debug!("Fetching OpenID discovery document from {url}");

        let response = reqwest::Client::new()
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| OAuthError::DiscoveryFailed {
                status: 0,
                message: format!("Network error: {e}"),
            })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OAuthError::DiscoveryFailed {
                status,
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| OAuthError::DiscoveryFailed {
                status,
                message: format!("Failed to parse discovery document: {e}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_intuit_document() {
        let doc: DiscoveryDocument = serde_json::from_str(
            r#"{
                "issuer": "https://oauth.platform.intuit.com/op/v1",
                "authorization_endpoint": "https://appcenter.intuit.com/connect/oauth2",
                "token_endpoint": "https://oauth.platform.intuit.com/oauth2/v1/tokens/bearer",
                "userinfo_endpoint": "https://sandbox-accounts.platform.intuit.com/v1/openid_connect/userinfo",
                "revocation_endpoint": "https://developer.API.intuit.com/v2/oauth2/tokens/revoke",
                "jwks_uri": "https://oauth.platform.intuit.com/op/v1/jwks",
                "response_types_supported": ["code"],
                "scopes_supported": ["openid", "email", "profile", "address", "phone"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            doc.token_endpoint,
            "https://oauth.platform.intuit.com/oauth2/v1/tokens/bearer"
        );
        assert_eq!(
            doc.authorization_endpoint,
            "https://appcenter.intuit.com/connect/oauth2"
        );
    }

    #[tokio::test]
    async fn test_fetch_from_unreachable_host_reports_status_zero() {
        let result = DiscoveryDocument::fetch_from("http://127.0.0.1:1/.well-known").await;
        assert!(matches!(
            result,
            Err(OAuthError::DiscoveryFailed { status: 0, .. })
        ));
    }
}
