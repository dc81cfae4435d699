//! Configuration types for the QuickBooks API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with QuickBooks Online.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`QuickBooksConfig`]: The main configuration struct holding all SDK settings
//! - [`QuickBooksConfigBuilder`]: A builder for constructing [`QuickBooksConfig`] instances
//! - [`ClientId`]: A validated OAuth client ID
//! - [`ClientSecret`]: A validated OAuth client secret with masked debug output
//! - [`RealmId`]: A validated company (realm) identifier
//! - [`ServiceUrl`]: A validated http(s) URL
//! - [`Environment`]: Production or sandbox
//! - [`MinorVersion`]: The API minor version sent on every call
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::{QuickBooksConfig, ClientId, ClientSecret, Environment};
//!
//! let config = QuickBooksConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .environment(Environment::Production)
//!     .build()
//!     .unwrap();
//! ```

mod environment;
mod newtypes;
mod version;

pub use environment::Environment;
pub use newtypes::{ClientId, ClientSecret, RealmId, ServiceUrl};
pub use version::MinorVersion;

use std::time::Duration;

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Default window during which requests are refused after a 429 response.
pub const DEFAULT_THROTTLE_COOLDOWN: Duration = Duration::from_secs(60);

/// Configuration for the QuickBooks API SDK.
///
/// This struct holds the app credentials, the target environment and the
/// transport settings shared by every client built from it. Per-company
/// state (realm and tokens) lives in [`Session`](crate::Session).
///
/// # Thread Safety
///
/// `QuickBooksConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::{QuickBooksConfig, ClientId, ClientSecret, MinorVersion};
///
/// let config = QuickBooksConfig::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .minor_version(MinorVersion::new(70))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.minor_version().value(), 70);
/// ```
#[derive(Clone, Debug)]
pub struct QuickBooksConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    environment: Environment,
    redirect_uri: Option<ServiceUrl>,
    scopes: AuthScopes,
    minor_version: MinorVersion,
    api_base_url: Option<ServiceUrl>,
    throttle_cooldown: Duration,
    request_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl QuickBooksConfig {
    /// Creates a new builder for constructing a `QuickBooksConfig`.
    #[must_use]
    pub fn builder() -> QuickBooksConfigBuilder {
        QuickBooksConfigBuilder::new()
    }

    /// Returns the OAuth client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the target environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the OAuth redirect URI, if configured.
    #[must_use]
    pub const fn redirect_uri(&self) -> Option<&ServiceUrl> {
        self.redirect_uri.as_ref()
    }

    /// Returns the OAuth scopes requested during authorization.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the API minor version.
    #[must_use]
    pub const fn minor_version(&self) -> MinorVersion {
        self.minor_version
    }

    /// Returns the API base URL.
    ///
    /// This is the configured override if any, otherwise the endpoint of
    /// the configured environment.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_ref()
            .map_or_else(|| self.environment.api_endpoint(), AsRef::as_ref)
    }

    /// Returns how long requests are refused after a 429 response.
    #[must_use]
    pub const fn throttle_cooldown(&self) -> Duration {
        self.throttle_cooldown
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify QuickBooksConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QuickBooksConfig>();
};

/// Builder for constructing [`QuickBooksConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `environment`: [`Environment::Sandbox`]
/// - `scopes`: `com.intuit.quickbooks.accounting`
/// - `minor_version`: [`MinorVersion::DEFAULT`]
/// - `api_base_url`: the environment's endpoint
/// - `throttle_cooldown`: 60 seconds
/// - `redirect_uri`, `request_timeout`, `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct QuickBooksConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    environment: Option<Environment>,
    redirect_uri: Option<ServiceUrl>,
    scopes: Option<AuthScopes>,
    minor_version: Option<MinorVersion>,
    api_base_url: Option<ServiceUrl>,
    throttle_cooldown: Option<Duration>,
    request_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl QuickBooksConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the OAuth client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the target environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the OAuth redirect URI registered for the app.
    #[must_use]
    pub fn redirect_uri(mut self, uri: ServiceUrl) -> Self {
        self.redirect_uri = Some(uri);
        self
    }

    /// Sets the OAuth scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the API minor version.
    #[must_use]
    pub const fn minor_version(mut self, version: MinorVersion) -> Self {
        self.minor_version = Some(version);
        self
    }

    /// Overrides the API base URL (for proxies and test servers).
    #[must_use]
    pub fn api_base_url(mut self, url: ServiceUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets how long requests are refused after a 429 response.
    #[must_use]
    pub const fn throttle_cooldown(mut self, cooldown: Duration) -> Self {
        self.throttle_cooldown = Some(cooldown);
        self
    }

    /// Sets a deadline applied to every HTTP round trip.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`QuickBooksConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<QuickBooksConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        Ok(QuickBooksConfig {
            client_id,
            client_secret,
            environment: self.environment.unwrap_or_default(),
            redirect_uri: self.redirect_uri,
            scopes: self.scopes.unwrap_or_else(AuthScopes::accounting),
            minor_version: self.minor_version.unwrap_or_default(),
            api_base_url: self.api_base_url,
            throttle_cooldown: self.throttle_cooldown.unwrap_or(DEFAULT_THROTTLE_COOLDOWN),
            request_timeout: self.request_timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
