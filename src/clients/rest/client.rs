//! REST client for the QuickBooks Online accounting API.
//!
//! This module provides the [`RestClient`] type, the handle entity
//! operations are issued through.

use crate::auth::Session;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{QuickBooksConfig, RealmId};

/// REST API client for one QuickBooks company.
///
/// One client encapsulates one authenticated session: the bearer token, the
/// base endpoint, the realm and the throttle flag. It offers `get`, `post`
/// and `query` over [`HttpClient`] with leading-slash path normalization.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Concurrent calls on one client are safe;
/// [`update_session`](Self::update_session) swaps the token for calls that
/// start afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use quickbooks_api::{RestClient, Session, RealmId};
///
/// let session = Session::new(RealmId::new("4620816365").unwrap(), "access-token");
/// let client = RestClient::new(&session, None)?;
///
/// let response = client.get("companyinfo/4620816365", None).await?;
/// let response = client.query("SELECT * FROM Invoice MAXRESULTS 10").await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The company all paths are scoped to.
    realm_id: RealmId,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given session.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(session: &Session, config: Option<&QuickBooksConfig>) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(session, config)?;
        tracing::debug!(
            "QuickBooks client for realm {} targeting {}",
            session.realm_id,
            http_client.base_uri()
        );

        Ok(Self {
            http_client,
            realm_id: session.realm_id.clone(),
        })
    }

    /// Returns the realm this client is scoped to.
    #[must_use]
    pub const fn realm_id(&self) -> &RealmId {
        &self.realm_id
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Adopts the access token of a refreshed session.
    ///
    /// Calls already in flight finish with the old token.
    pub fn update_session(&self, session: &Session) {
        if session.realm_id != self.realm_id {
            tracing::warn!(
                "Session for realm {} applied to client for realm {}",
                session.realm_id,
                self.realm_id
            );
        }
        self.http_client.set_access_token(session.access_token.clone());
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the company, e.g. `invoice/130`
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, throttling, transport and
    /// server failures.
    pub async fn get(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the company, e.g. `invoice`
    /// * `body` - The JSON body to send, if any
    /// * `query` - Optional query parameters, e.g. `operation=delete`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, throttling, transport and
    /// server failures.
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, body, query).await
    }

    /// Runs a query-language statement against the `query` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, throttling, transport and
    /// server failures.
    pub async fn query(&self, statement: &str) -> Result<HttpResponse, HttpError> {
        self.get("query", Some(vec![("query".to_string(), statement.to_string())]))
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path.trim_start_matches('/'));

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }
}
