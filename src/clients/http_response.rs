//! HTTP response types for the QuickBooks API SDK.

use std::collections::HashMap;

/// An HTTP response from the QuickBooks API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`{}` when the body was empty).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `intuit_tid` header value, if present.
    ///
    /// Intuit support asks for this transaction id when investigating a call.
    #[must_use]
    pub fn intuit_tid(&self) -> Option<&str> {
        self.headers
            .get("intuit_tid")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the envelope's `time` field, if present.
    #[must_use]
    pub fn server_time(&self) -> Option<&str> {
        self.body.get("time").and_then(serde_json::Value::as_str)
    }
}
