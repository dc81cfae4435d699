//! HTTP client types for QuickBooks API communication.
//!
//! This module provides the transport layer for authenticated requests to
//! the QuickBooks Online accounting API: request/response types, the fault
//! envelope, and the 429 cooldown.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`Fault`]: The structured error body of non-2xx responses
//! - [`Throttle`]: The shared cooldown flag
//! - [`rest::RestClient`]: Higher-level client used by entity operations
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::{HttpClient, HttpRequest, HttpMethod, Session, RealmId};
//!
//! let session = Session::new(RealmId::new("4620816365").unwrap(), "access-token");
//! let client = HttpClient::new(&session, None)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "companyinfo/4620816365")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Throttling
//!
//! A 429 response fails the call with [`HttpError::Throttled`] and starts a
//! cooldown (60 seconds by default). Calls made during the cooldown fail with
//! the same error without sending anything. Nothing is retried.

mod errors;
mod fault;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod throttle;

pub use errors::{
    DecodeError, FaultError, HttpError, HttpResponseError, InvalidHttpRequestError,
    ThrottledError,
};
pub use fault::{Fault, FaultDetail, OBJECT_NOT_FOUND};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, MINOR_VERSION_PARAM};
pub use http_response::HttpResponse;
pub use throttle::Throttle;

pub use rest::RestClient;
