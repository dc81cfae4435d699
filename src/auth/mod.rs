//! Authentication types for the QuickBooks API SDK.
//!
//! # Overview
//!
//! - [`Session`]: realm plus tokens, the input to every client
//! - [`BearerToken`]: the token endpoint's response
//! - [`AuthScopes`]: the OAuth scopes requested during authorization
//! - [`DiscoveryDocument`]: Intuit's published OAuth endpoints
//! - [`oauth`]: authorization URL, callback validation, token exchange,
//!   refresh and revocation
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::{Session, RealmId};
//!
//! let session = Session::new(RealmId::new("4620816365").unwrap(), "access-token");
//! assert!(session.is_active());
//! ```

mod discovery;
pub mod oauth;
mod scopes;
pub mod session;

pub use discovery::DiscoveryDocument;
pub use scopes::{AuthScopes, ACCOUNTING_SCOPE, OPENID_SCOPE, PAYMENT_SCOPE};
pub use session::{BearerToken, Session};
