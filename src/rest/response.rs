//! Response wrapper for single-entity operations.
//!
//! [`ResourceResponse<T>`] pairs a decoded entity with the envelope's `time`
//! field and the `intuit_tid` header. It implements `Deref<Target = T>`, so
//! the entity's fields can be read straight through it:
//!
//! ```rust,ignore
//! let invoice = Invoice::find_by_id(&client, "130").await?;
//! println!("{:?} due {:?}", invoice.total_amt, invoice.due_date);
//!
//! // Take ownership of the entity
//! let invoice: Invoice = invoice.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// A decoded entity plus response metadata.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    time: Option<String>,
    intuit_tid: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new response wrapper.
    #[must_use]
    pub const fn new(data: T, time: Option<String>, intuit_tid: Option<String>) -> Self {
        Self {
            data,
            time,
            intuit_tid,
        }
    }

    /// Consumes the wrapper and returns the entity.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// The server timestamp of the response envelope.
    #[must_use]
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// The `intuit_tid` response header.
    #[must_use]
    pub fn intuit_tid(&self) -> Option<&str> {
        self.intuit_tid.as_deref()
    }

    /// Maps the entity, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            time: self.time,
            intuit_tid: self.intuit_tid,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the value under `key` of a single-entity envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the key is missing or its value
    /// does not decode as `T`.
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let intuit_tid = response.intuit_tid().map(ToString::to_string);
        let time = response.server_time().map(ToString::to_string);

        let HttpResponse { mut body, .. } = response;
        let value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ResourceError::decode(key, format!("missing key '{key}' in response body")))?;

        let data: T = serde_json::from_value(value).map_err(|e| ResourceError::decode(key, e))?;

        Ok(Self {
            data,
            time,
            intuit_tid,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
