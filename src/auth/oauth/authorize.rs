//! Authorization redirect and callback handling.
//!
//! [`authorization_url`] produces the URL the user is sent to along with the
//! [`StateParam`] to remember; [`validate_callback`] checks the redirect back
//! and yields the authorization code and company.

use serde::Deserialize;

use crate::auth::discovery::DiscoveryDocument;
use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::AuthScopes;
use crate::config::{QuickBooksConfig, RealmId};

/// Result of starting the authorization-code flow.
///
/// `state` must be stored (cookie, session store) and handed back to
/// [`validate_callback`] when the redirect arrives.
#[derive(Clone, Debug)]
pub struct AuthorizationRequest {
    /// The URL to redirect the user to.
    pub auth_url: String,
    /// The state issued with `auth_url`.
    pub state: StateParam,
}

/// Query parameters of the redirect back from Intuit.
///
/// Deserializes directly from the callback's query string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CallbackQuery {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "realmId", default)]
    pub realm_id: Option<String>,
    /// Set by Intuit when the user declined or the request was invalid.
    #[serde(default)]
    pub error: Option<String>,
}

/// A validated callback: the code to exchange and the company it grants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationGrant {
    pub code: String,
    pub realm_id: RealmId,
}

/// Builds the authorization URL for the configured app.
///
/// Scopes default to the configured scopes; pass `scope_override` to ask for
/// a different set.
///
/// # Errors
///
/// Returns [`OAuthError::MissingRedirectUri`] if no redirect URI is configured.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::{QuickBooksConfig, ClientId, ClientSecret, ServiceUrl, DiscoveryDocument};
/// use quickbooks_api::auth::oauth::authorization_url;
///
/// let config = QuickBooksConfig::builder()
///     .client_id(ClientId::new("client-id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .redirect_uri(ServiceUrl::new("https://myapp.example.com/callback").unwrap())
///     .build()
///     .unwrap();
///
/// let discovery = DiscoveryDocument {
///     authorization_endpoint: "https://appcenter.intuit.com/connect/oauth2".to_string(),
///     ..DiscoveryDocument::default()
/// };
///
/// let request = authorization_url(&config, &discovery, None).unwrap();
/// assert!(request.auth_url.starts_with("https://appcenter.intuit.com/connect/oauth2?"));
/// assert!(request.auth_url.contains("response_type=code"));
/// ```
pub fn authorization_url(
    config: &QuickBooksConfig,
    discovery: &DiscoveryDocument,
    scope_override: Option<&AuthScopes>,
) -> Result<AuthorizationRequest, OAuthError> {
    let redirect_uri = config.redirect_uri().ok_or(OAuthError::MissingRedirectUri)?;
    let scopes = scope_override.unwrap_or_else(|| config.scopes());
    let state = StateParam::new();

    let params = [
        ("client_id", config.client_id().as_ref().to_string()),
        ("scope", scopes.to_string()),
        ("redirect_uri", redirect_uri.to_string()),
        ("response_type", "code".to_string()),
        ("state", state.to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if discovery.authorization_endpoint.contains('?') {
        '&'
    } else {
        '?'
    };
    let auth_url = format!(
        "{}{separator}{query_string}",
        discovery.authorization_endpoint
    );

    Ok(AuthorizationRequest { auth_url, state })
}

/// Validates the redirect back from Intuit against the issued state.
///
/// # Errors
///
/// - [`OAuthError::InvalidCallback`] when Intuit reported an error or a
///   parameter is missing or malformed
/// - [`OAuthError::StateMismatch`] when the state differs from `expected_state`
pub fn validate_callback(
    query: &CallbackQuery,
    expected_state: &StateParam,
) -> Result<AuthorizationGrant, OAuthError> {
    if let Some(error) = &query.error {
        return Err(OAuthError::InvalidCallback {
            reason: format!("authorization denied: {error}"),
        });
    }

    let received = query.state.as_deref().unwrap_or_default();
    if !expected_state.matches(received) {
        return Err(OAuthError::StateMismatch {
            expected: expected_state.to_string(),
            received: received.to_string(),
        });
    }

    let code = query
        .code
        .as_deref()
        .filter(|code| !code.is_empty())
        .ok_or_else(|| OAuthError::InvalidCallback {
            reason: "missing code parameter".to_string(),
        })?;

    let realm_id = query
        .realm_id
        .as_deref()
        .ok_or_else(|| OAuthError::InvalidCallback {
            reason: "missing realmId parameter".to_string(),
        })
        .and_then(|raw| {
            RealmId::new(raw).map_err(|_| OAuthError::InvalidCallback {
                reason: format!("invalid realmId '{raw}'"),
            })
        })?;

    Ok(AuthorizationGrant {
        code: code.to_string(),
        realm_id,
    })
}
