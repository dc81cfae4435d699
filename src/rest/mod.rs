//! Entity operations for the QuickBooks Online accounting API.
//!
//! # Overview
//!
//! - [`QbEntity`]: lookups, listings and queries shared by every entity
//! - [`Creatable`], [`Updatable`], [`Deletable`], [`Voidable`]: mutations,
//!   implemented per entity
//! - [`execute_query`]: the generic query executor
//! - [`fetch_all`] / [`fetch_page`]: count-then-page and single-page
//!   pagination
//! - [`QueryStatement`]: builder for query-language statements
//! - [`ResourceResponse`]: decoded entity plus response metadata
//! - [`ResourceError`]: error type for all of the above
//!
//! Entity types live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::rest::{QbEntity, QueryStatement};
//! use quickbooks_api::rest::resources::Customer;
//!
//! let customers = Customer::find_all(&client).await?;
//!
//! let statement = QueryStatement::select("Customer").where_eq("DisplayName", "Amy's Bird Sanctuary");
//! let matches = Customer::query(&client, &statement.to_string()).await?;
//! ```

mod errors;
mod pagination;
mod query;
mod resource;
pub mod resources;
mod response;

pub use errors::ResourceError;
pub use pagination::{fetch_all, fetch_page, EmptyResultPolicy, QUERY_PAGE_SIZE};
pub use query::{
    escape_literal, execute_query, total_count, with_paging, QueryStatement, QUERY_METADATA_KEYS,
    QUERY_RESPONSE_KEY,
};
pub use resource::{
    Creatable, Deletable, QbEntity, Updatable, VoidOperation, Voidable, SPARSE_KEY,
    SYNC_TOKEN_KEY,
};
pub use response::ResourceResponse;
