//! REST API client for QuickBooks Online.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that entity operations use.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::{RestClient, Session, RealmId, QuickBooksConfig, ClientId, ClientSecret};
//!
//! let config = QuickBooksConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let session = Session::new(RealmId::new("4620816365").unwrap(), "access-token");
//! let client = RestClient::new(&session, Some(&config))?;
//!
//! let response = client.query("SELECT COUNT(*) FROM Invoice").await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! Requests are attempted exactly once. After a 429 the client refuses
//! further calls with [`HttpError::Throttled`](crate::clients::HttpError::Throttled)
//! until the configured cooldown elapses.

mod client;

pub use client::RestClient;
