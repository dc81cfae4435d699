//! # QuickBooks Online API Rust SDK
//!
//! A typed client for the QuickBooks Online accounting REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`QuickBooksConfig`] and [`QuickBooksConfigBuilder`]
//! - Validated newtypes for credentials and company identifiers
//! - OAuth 2.0 authorization code flow, refresh and revocation via [`auth::oauth`]
//! - An async transport that pauses all calls for a cooldown after a 429
//! - A generic query executor and count-then-page pagination via [`rest`]
//! - Typed entities with find, query, create, sparse update, delete and void
//!
//! ## Quick Start
//!
//! ```rust
//! use quickbooks_api::{QuickBooksConfig, ClientId, ClientSecret, Environment};
//!
//! let config = QuickBooksConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use quickbooks_api::{DiscoveryDocument, Environment, ServiceUrl};
//! use quickbooks_api::auth::oauth::{
//!     authorization_url, exchange_authorization_code, validate_callback,
//! };
//!
//! // Step 1: Look up Intuit's OAuth endpoints
//! let discovery = DiscoveryDocument::fetch(Environment::Sandbox).await?;
//!
//! // Step 2: Redirect the user, keeping the state for the callback
//! let request = authorization_url(&config, &discovery, None)?;
//! // Redirect user to request.auth_url
//! // Store request.state in the user's session
//!
//! // Step 3: Handle the callback
//! let grant = validate_callback(&callback_query, &stored_state)?;
//! let session =
//!     exchange_authorization_code(&config, &discovery, &grant.code, grant.realm_id).await?;
//! ```
//!
//! ## Making API Calls
//!
//! ```rust,ignore
//! use quickbooks_api::{RestClient, Session, RealmId};
//! use quickbooks_api::rest::{Creatable, Deletable, QbEntity};
//! use quickbooks_api::rest::resources::{Bill, Invoice};
//!
//! let client = RestClient::new(&session, Some(&config))?;
//!
//! // Every invoice, 1000 per page
//! let invoices = Invoice::find_all(&client).await?;
//!
//! // One bill by id, then delete it
//! let bill = Bill::find_by_id(&client, "25").await?;
//! bill.delete(&client).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients are `Send + Sync` and can be shared across tasks
//! - **No hidden retries**: Each operation makes the documented number of calls

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthScopes, BearerToken, DiscoveryDocument, Session};
pub use config::{
    ClientId, ClientSecret, Environment, MinorVersion, QuickBooksConfig, QuickBooksConfigBuilder,
    RealmId, ServiceUrl,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Fault, FaultDetail, FaultError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, RestClient,
    ThrottledError,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{OAuthError, StateParam};

// Re-export entity operation types
pub use rest::{ResourceError, ResourceResponse};
