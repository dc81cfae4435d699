//! Pagination over the query endpoint.
//!
//! Two patterns are supported:
//!
//! - **Count-then-page** ([`fetch_all`]): run a count query, then fetch
//!   `ORDERBY Id` pages of `page_size` rows until the offset reaches the
//!   count. Pages are appended in the order they were fetched. A page that
//!   comes back short does not end the loop early; only the count does.
//! - **Direct bounded page** ([`fetch_page`]): one query for the rows
//!   starting at a given position, no count.
//!
//! Pages are fetched one after another.

use serde::de::DeserializeOwned;

use crate::clients::RestClient;
use crate::rest::query::{execute_query, total_count, with_paging, QueryStatement};
use crate::rest::ResourceError;

/// The largest page the query endpoint serves.
pub const QUERY_PAGE_SIZE: usize = 1000;

/// What a full listing returns when the count query reports zero rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyResultPolicy {
    /// Return an empty vector.
    EmptyVec,
    /// Fail with [`ResourceError::NoneFound`].
    NoneFound,
}

fn check_page_size(page_size: usize) -> Result<(), ResourceError> {
    if page_size == 0 || page_size > QUERY_PAGE_SIZE {
        return Err(ResourceError::InvalidPageSize {
            size: page_size,
            max: QUERY_PAGE_SIZE,
        });
    }
    Ok(())
}

/// Fetches every row of `entity` in ascending `Id` order.
///
/// # Arguments
///
/// * `entity` - Query-language entity name, e.g. `"Invoice"`
/// * `plural` - Used in the [`ResourceError::NoneFound`] message
/// * `policy` - Behaviour when the count is zero
/// * `page_size` - Rows per page, `1..=1000`
///
/// # Errors
///
/// - [`ResourceError::InvalidPageSize`] before any request is sent
/// - [`ResourceError::NoneFound`] for a zero count under
///   [`EmptyResultPolicy::NoneFound`]
/// - the first error of any count or page query
pub async fn fetch_all<T: DeserializeOwned>(
    client: &RestClient,
    entity: &str,
    plural: &'static str,
    policy: EmptyResultPolicy,
    page_size: usize,
) -> Result<Vec<T>, ResourceError> {
    check_page_size(page_size)?;

    let total = total_count(client, entity).await?;
    if total == 0 {
        return match policy {
            EmptyResultPolicy::EmptyVec => Ok(Vec::new()),
            EmptyResultPolicy::NoneFound => Err(ResourceError::NoneFound { plural }),
        };
    }

    let base = QueryStatement::select(entity).order_by("Id").to_string();
    let mut rows = Vec::with_capacity(total.min(page_size));
    let mut offset = 0;

    while offset < total {
        let statement = with_paging(&base, offset + 1, page_size);
        let page: Vec<T> = execute_query(client, &statement).await?;
        tracing::debug!(
            "Fetched {} {entity} rows at start position {} (page size {page_size}, total {total})",
            page.len(),
            offset + 1
        );
        rows.extend(page);
        offset = offset.saturating_add(page_size);
    }

    Ok(rows)
}

/// Runs `statement` for a single page of rows.
///
/// `start_position` is 1-based. `statement` must not already carry
/// `STARTPOSITION`/`MAXRESULTS` clauses.
///
/// # Errors
///
/// - [`ResourceError::InvalidPageSize`] or
///   [`ResourceError::InvalidStartPosition`] before any request is sent
/// - the error of the page query
pub async fn fetch_page<T: DeserializeOwned>(
    client: &RestClient,
    statement: &str,
    start_position: usize,
    max_results: usize,
) -> Result<Vec<T>, ResourceError> {
    check_page_size(max_results)?;
    if start_position == 0 {
        return Err(ResourceError::InvalidStartPosition { position: 0 });
    }

    let statement = with_paging(statement, start_position, max_results);
    execute_query(client, &statement).await
}
