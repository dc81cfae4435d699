//! HTTP client for QuickBooks API communication.
//!
//! This module provides the [`HttpClient`] type, the single transport
//! primitive every higher layer goes through: one request, one round trip.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::auth::Session;
use crate::clients::errors::{
    DecodeError, FaultError, HttpError, HttpResponseError, ThrottledError,
};
use crate::clients::fault::parse_failure;
use crate::clients::http_request::{HttpMethod, HttpRequest, MINOR_VERSION_PARAM};
use crate::clients::http_response::HttpResponse;
use crate::clients::throttle::Throttle;
use crate::config::{MinorVersion, QuickBooksConfig, DEFAULT_THROTTLE_COOLDOWN};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the QuickBooks API.
///
/// The client handles:
/// - URL construction: `{base}/v3/company/{realm}/{path}?minorversion=N&...`
/// - Default headers: User-Agent, `Accept: application/json`, bearer token
/// - Fault envelope parsing for non-2xx responses
/// - The 429 cooldown (see [`Throttle`])
///
/// It never retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// The bearer token can be swapped on a live client after a refresh.
///
/// # Example
///
/// ```rust,ignore
/// use quickbooks_api::{HttpClient, HttpRequest, HttpMethod, Session, RealmId};
///
/// let session = Session::new(RealmId::new("4620816365").unwrap(), "access-token");
/// let client = HttpClient::new(&session, None)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "invoice/130").build()?;
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://quickbooks.api.intuit.com`).
    base_uri: String,
    /// Base path (e.g., `/v3/company/4620816365`).
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Bearer token, replaceable after a refresh.
    access_token: RwLock<String>,
    minor_version: MinorVersion,
    throttle: Throttle,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// Without a configuration the client targets the sandbox with the
    /// default minor version and cooldown.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(session: &Session, config: Option<&QuickBooksConfig>) -> Result<Self, HttpError> {
        let base_uri = config.map_or_else(
            || crate::config::Environment::default().api_endpoint().to_string(),
            |c| c.api_base_url().to_string(),
        );
        let base_path = format!("/v3/company/{}", session.realm_id);

        // Build User-Agent header
        let user_agent_prefix = config
            .and_then(QuickBooksConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}QuickBooks API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.and_then(QuickBooksConfig::request_timeout) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let cooldown = config.map_or(DEFAULT_THROTTLE_COOLDOWN, QuickBooksConfig::throttle_cooldown);

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
            access_token: RwLock::new(session.access_token.clone()),
            minor_version: config.map_or_else(MinorVersion::default, QuickBooksConfig::minor_version),
            throttle: Throttle::new(cooldown),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the realm-scoped base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the minor version sent with every request.
    #[must_use]
    pub const fn minor_version(&self) -> MinorVersion {
        self.minor_version
    }

    /// Returns `true` while the 429 cooldown is running.
    #[must_use]
    pub fn is_throttled(&self) -> bool {
        self.throttle.is_throttled()
    }

    /// Replaces the bearer token used by subsequent requests.
    ///
    /// Requests already in flight keep the token they were sent with.
    pub fn set_access_token(&self, token: impl Into<String>) {
        let mut guard = self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = token.into();
    }

    fn access_token(&self) -> String {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sends an HTTP request to the QuickBooks API.
    ///
    /// Exactly one round trip is made, or none when the request is invalid
    /// or the client is cooling down after a 429.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The cooldown is active, or this response is a 429 (`Throttled`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response with a fault envelope (`Fault`)
    /// - Non-2xx response with any other body (`Response`)
    /// - 2xx response whose body is not JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        if self.throttle.is_throttled() {
            return Err(ThrottledError {
                cooldown: self.throttle.cooldown(),
            }
            .into());
        }

        let url = format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            request.path.trim_start_matches('/')
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let token = self.access_token();
        if !token.is_empty() {
            req_builder = req_builder.bearer_auth(token);
        }

        // minorversion always leads the query string
        let mut query = Vec::with_capacity(request.query.len() + 1);
        query.push((MINOR_VERSION_PARAM.to_string(), self.minor_version.to_string()));
        query.extend(request.query.iter().cloned());
        req_builder = req_builder.query(&query);

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(
            "Sending {} request to QuickBooks at {}",
            request.http_method,
            request.path
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if code == 429 {
            self.throttle.engage();
            return Err(ThrottledError {
                cooldown: self.throttle.cooldown(),
            }
            .into());
        }

        let response_ok = (200..=299).contains(&code);
        if response_ok {
            let plain_text = res_headers
                .get("content-type")
                .and_then(|values| values.first())
                .is_some_and(|value| value.starts_with("text/plain"));

            let body = if body_text.trim().is_empty() {
                serde_json::json!({})
            } else if plain_text {
                serde_json::Value::String(body_text)
            } else {
                serde_json::from_str(&body_text)
                    .map_err(|source| DecodeError { status: code, source })?
            };
            return Ok(HttpResponse::new(code, res_headers, body));
        }

        let intuit_tid = res_headers
            .get("intuit_tid")
            .and_then(|values| values.first())
            .cloned();

        Err(match parse_failure(&body_text) {
            Some((fault, time)) => HttpError::Fault(FaultError {
                status: code,
                fault,
                time,
                intuit_tid,
            }),
            None => HttpError::Response(HttpResponseError {
                code,
                message: body_text,
                intuit_tid,
            }),
        })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("base_path", &self.base_path)
            .field("minor_version", &self.minor_version)
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}
