//! HTTP request types for the QuickBooks API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the QuickBooks API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// Query parameter the client always sets itself.
pub const MINOR_VERSION_PARAM: &str = "minorversion";

/// HTTP methods used by the QuickBooks API.
///
/// The accounting API only uses GET for reads and POST for every mutation
/// (create, sparse update, delete, void, send).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reads and queries.
    Get,
    /// HTTP POST method for every write.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// An HTTP request to be sent to the QuickBooks API.
///
/// The path is relative to `/v3/company/{realm}`.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "invoice/130")
///     .build()
///     .unwrap();
///
/// let delete_request = HttpRequest::builder(HttpMethod::Post, "invoice")
///     .body(json!({"Id": "130", "SyncToken": "3"}))
///     .query_param("operation", "delete")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the company base path) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters appended after `minorversion`, in order.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - a query parameter is named `minorversion`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if let Some((name, _)) = self
            .query
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(MINOR_VERSION_PARAM))
        {
            return Err(InvalidHttpRequestError::ReservedQueryParameter { name: name.clone() });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends all query parameters at once.
    #[must_use]
    pub fn query<K, V>(mut self, query: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(query.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_keeps_query_order() {
        let request = HttpRequest::builder(HttpMethod::Post, "payment")
            .body(json!({"Id": "1"}))
            .query_param("operation", "update")
            .query_param("include", "void")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("operation".to_string(), "update".to_string()),
                ("include".to_string(), "void".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "/").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
    }

    #[test]
    fn test_minor_version_cannot_be_overridden() {
        let result = HttpRequest::builder(HttpMethod::Get, "query")
            .query([("MinorVersion", "4")])
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::ReservedQueryParameter { .. })
        ));
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Post, "estimate/7/send")
            .build()
            .unwrap();
        assert!(request.body.is_none());
        assert_eq!(request.http_method.to_string(), "post");
    }
}
