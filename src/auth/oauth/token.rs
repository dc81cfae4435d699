//! Token endpoint calls: code exchange, refresh and revocation.
//!
//! All three are form-encoded POSTs authenticated with HTTP Basic
//! credentials built from the app's client id and secret. Endpoint URLs
//! come from the [`DiscoveryDocument`].
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::auth::oauth::{refresh_access_token, validate_callback};
//! use quickbooks_api::{DiscoveryDocument, RestClient};
//!
//! let discovery = DiscoveryDocument::fetch(config.environment()).await?;
//! let grant = validate_callback(&query, &stored_state)?;
//! let session = exchange_authorization_code(&config, &discovery, &grant.code, grant.realm_id).await?;
//!
//! // later
//! if session.expired() {
//!     if let Some(refresh_token) = &session.refresh_token {
//!         let session = refresh_access_token(&config, &discovery, refresh_token, session.realm_id.clone()).await?;
//!         client.update_session(&session);
//!     }
//! }
//! ```

use base64::prelude::*;
use serde::Serialize;

use crate::auth::discovery::DiscoveryDocument;
use crate::auth::oauth::error::OAuthError;
use crate::auth::session::BearerToken;
use crate::auth::Session;
use crate::config::{QuickBooksConfig, RealmId};

const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";
const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

#[derive(Serialize)]
struct AuthorizationCodeForm<'a> {
    grant_type: &'static str,
    code: &'a str,
    redirect_uri: &'a str,
}

#[derive(Serialize)]
struct RefreshTokenForm<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct RevokeForm<'a> {
    token: &'a str,
}

fn basic_credentials(config: &QuickBooksConfig) -> String {
    let raw = format!(
        "{}:{}",
        config.client_id().as_ref(),
        config.client_secret().as_ref()
    );
    format!("Basic {}", BASE64_STANDARD.encode(raw))
}

async fn request_token<F: Serialize + ?Sized>(
    config: &QuickBooksConfig,
    discovery: &DiscoveryDocument,
    form: &F,
) -> Result<BearerToken, OAuthError> {
    let response = reqwest::Client::new()
        .post(&discovery.token_endpoint)
        .header("Authorization", basic_credentials(config))
        .header("Accept", "application/json")
        .form(form)
        .send()
        .await
        .map_err(|e| OAuthError::TokenRequestFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(OAuthError::TokenRequestFailed {
            status,
            message: error_body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| OAuthError::TokenRequestFailed {
            status,
            message: format!("Failed to parse token response: {e}"),
        })
}

/// Exchanges an authorization code for a session on `realm_id`.
///
/// The code is single-use. The configured redirect URI is sent along, as the
/// token endpoint requires it to match the one used for authorization.
///
/// # Errors
///
/// - [`OAuthError::MissingRedirectUri`] if no redirect URI is configured
/// - [`OAuthError::TokenRequestFailed`] on network failure or rejection
pub async fn exchange_authorization_code(
    config: &QuickBooksConfig,
    discovery: &DiscoveryDocument,
    code: &str,
    realm_id: RealmId,
) -> Result<Session, OAuthError> {
    let redirect_uri = config.redirect_uri().ok_or(OAuthError::MissingRedirectUri)?;

    let form = AuthorizationCodeForm {
        grant_type: AUTHORIZATION_CODE_GRANT_TYPE,
        code,
        redirect_uri: redirect_uri.as_ref(),
    };

    let token = request_token(config, discovery, &form).await?;
    tracing::debug!("Obtained access token for realm {realm_id}");

    Ok(Session::from_bearer_token(realm_id, &token))
}

/// Obtains a fresh session from a refresh token.
///
/// Intuit may rotate the refresh token; the returned session carries
/// whichever one the endpoint issued.
///
/// # Errors
///
/// Returns [`OAuthError::TokenRequestFailed`] on network failure or rejection.
pub async fn refresh_access_token(
    config: &QuickBooksConfig,
    discovery: &DiscoveryDocument,
    refresh_token: &str,
    realm_id: RealmId,
) -> Result<Session, OAuthError> {
    let form = RefreshTokenForm {
        grant_type: REFRESH_TOKEN_GRANT_TYPE,
        refresh_token,
    };

    let token = request_token(config, discovery, &form).await?;
    tracing::debug!("Refreshed access token for realm {realm_id}");

    Ok(Session::from_bearer_token(realm_id, &token))
}

/// Revokes an access or refresh token.
///
/// Revoking a refresh token also invalidates the access tokens issued
/// from it.
///
/// # Errors
///
/// Returns [`OAuthError::TokenRevocationFailed`] on network failure or a
/// non-2xx response.
pub async fn revoke_token(
    config: &QuickBooksConfig,
    discovery: &DiscoveryDocument,
    token: &str,
) -> Result<(), OAuthError> {
    let response = reqwest::Client::new()
        .post(&discovery.revocation_endpoint)
        .header("Authorization", basic_credentials(config))
        .header("Accept", "application/json")
        .form(&RevokeForm { token })
        .send()
        .await
        .map_err(|e| OAuthError::TokenRevocationFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(OAuthError::TokenRevocationFailed {
            status,
            message: error_body,
        });
    }

    tracing::debug!("Token revoked");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret};

    #[test]
    fn test_basic_credentials_encodes_id_and_secret() {
        let config = QuickBooksConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap();

        // base64("id:secret")
        assert_eq!(basic_credentials(&config), "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn test_refresh_form_encodes_grant_type() {
        let form = RefreshTokenForm {
            grant_type: REFRESH_TOKEN_GRANT_TYPE,
            refresh_token: "AB11 xyz",
        };
        let encoded = serde_json::to_value(&form).unwrap();
        assert_eq!(encoded["grant_type"], "refresh_token");
        assert_eq!(encoded["refresh_token"], "AB11 xyz");
    }
}
