//! OAuth 2.0 authorization-code flow against the Intuit identity platform.
//!
//! 1. [`authorization_url`]: build the redirect URL and the [`StateParam`] to
//!    remember.
//! 2. [`validate_callback`]: check the redirect back (state compared in
//!    constant time) and extract the code and realm.
//! 3. [`exchange_authorization_code`]: trade the code for a [`Session`].
//! 4. [`refresh_access_token`] / [`revoke_token`]: keep the session alive or
//!    disconnect it.
//!
//! Endpoint URLs come from a [`DiscoveryDocument`].
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::auth::oauth::{
//!     authorization_url, exchange_authorization_code, validate_callback, CallbackQuery,
//! };
//! use quickbooks_api::{DiscoveryDocument, RestClient};
//!
//! let discovery = DiscoveryDocument::fetch(config.environment()).await?;
//!
//! let request = authorization_url(&config, &discovery, None)?;
//! // store request.state, redirect the user to request.auth_url
//!
//! let grant = validate_callback(&query, &stored_state)?;
//! let session = exchange_authorization_code(&config, &discovery, &grant.code, grant.realm_id).await?;
//! let client = RestClient::new(&session, Some(&config))?;
//! ```
//!
//! [`Session`]: crate::Session
//! [`DiscoveryDocument`]: crate::auth::DiscoveryDocument

mod authorize;
mod error;
mod state;
mod token;

pub use authorize::{
    authorization_url, validate_callback, AuthorizationGrant, AuthorizationRequest, CallbackQuery,
};
pub use error::OAuthError;
pub use state::StateParam;
pub use token::{exchange_authorization_code, refresh_access_token, revoke_token};
