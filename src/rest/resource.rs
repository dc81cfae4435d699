//! Entity traits for CRUD operations.
//!
//! Every entity implements [`QbEntity`], which supplies lookups, listings and
//! queries. Mutations are opt-in capability traits, implemented only by the
//! entities the API allows them on:
//!
//! - [`Creatable`]: POST to the collection endpoint
//! - [`Updatable`]: sparse update against freshly fetched state
//! - [`Deletable`]: `operation=delete`, idempotent
//! - [`Voidable`]: void, idempotent
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::rest::{QbEntity, Creatable, Updatable, Deletable};
//! use quickbooks_api::rest::resources::{Bill, ReferenceType};
//!
//! let bill = Bill {
//!     vendor_ref: Some(ReferenceType::new("46")),
//!     line: Some(lines),
//!     ..Bill::default()
//! };
//! let bill = bill.create(&client).await?.into_inner();
//!
//! let patch = Bill {
//!     id: bill.id.clone(),
//!     private_note: Some("approved".to_string()),
//!     ..Bill::default()
//! };
//! let bill = patch.update(&client).await?.into_inner();
//!
//! bill.delete(&client).await?;
//! ```

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::rest::pagination::{fetch_all, fetch_page, EmptyResultPolicy, QUERY_PAGE_SIZE};
use crate::rest::query::{execute_query, total_count, QueryStatement};
use crate::rest::{ResourceError, ResourceResponse};

/// Key of the concurrency token in entity bodies.
pub const SYNC_TOKEN_KEY: &str = "SyncToken";

/// Key of the sparse-update flag in request bodies.
pub const SPARSE_KEY: &str = "sparse";

/// A QuickBooks entity type.
///
/// Implementors provide the wire names and the two identity accessors; the
/// read operations come for free.
#[allow(async_fn_in_trait)]
pub trait QbEntity: Serialize + DeserializeOwned + Send + Sync + Sized {
    /// Wire and query-language name, e.g. `"JournalEntry"`.
    const NAME: &'static str;

    /// Endpoint path segment, e.g. `"journalentry"`.
    const ENDPOINT: &'static str;

    /// Lowercase plural used in error messages, e.g. `"journal entries"`.
    const PLURAL: &'static str;

    /// What [`find_all`](Self::find_all) does on an empty collection.
    const EMPTY_RESULT: EmptyResultPolicy;

    /// The server-assigned id, `None` before creation.
    fn id(&self) -> Option<&str>;

    /// The concurrency token, `None` before creation.
    fn sync_token(&self) -> Option<&str>;

    /// Path of a single record.
    #[must_use]
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::ENDPOINT, urlencoding::encode(id))
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] for an empty id (no request
    /// is sent), otherwise the transport's error; an unknown id surfaces as
    /// the server's fault.
    async fn find_by_id(
        client: &RestClient,
        id: &str,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        if id.is_empty() {
            return Err(ResourceError::MissingField {
                entity: Self::NAME,
                field: "Id",
            });
        }

        let response = client.get(&Self::item_path(id), None).await?;
        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Fetches every record in ascending id order, 1000 per page.
    ///
    /// An empty collection follows [`EMPTY_RESULT`](Self::EMPTY_RESULT).
    ///
    /// # Errors
    ///
    /// See [`fetch_all`].
    async fn find_all(client: &RestClient) -> Result<Vec<Self>, ResourceError> {
        Self::find_all_with_page_size(client, QUERY_PAGE_SIZE).await
    }

    /// Like [`find_all`](Self::find_all) with a caller-chosen page size.
    ///
    /// # Errors
    ///
    /// See [`fetch_all`].
    async fn find_all_with_page_size(
        client: &RestClient,
        page_size: usize,
    ) -> Result<Vec<Self>, ResourceError> {
        fetch_all(client, Self::NAME, Self::PLURAL, Self::EMPTY_RESULT, page_size).await
    }

    /// Runs an arbitrary statement and decodes the rows as `Self`.
    ///
    /// Zero rows is an empty vector regardless of the entity's policy.
    ///
    /// # Errors
    ///
    /// See [`execute_query`].
    async fn query(client: &RestClient, statement: &str) -> Result<Vec<Self>, ResourceError> {
        execute_query(client, statement).await
    }

    /// Fetches one page of `ORDERBY Id` rows starting at `start_position`.
    ///
    /// # Errors
    ///
    /// See [`fetch_page`].
    async fn query_page(
        client: &RestClient,
        start_position: usize,
        max_results: usize,
    ) -> Result<Vec<Self>, ResourceError> {
        let statement = QueryStatement::select(Self::NAME).order_by("Id").to_string();
        fetch_page(client, &statement, start_position, max_results).await
    }

    /// Returns the number of records.
    ///
    /// # Errors
    ///
    /// See [`total_count`].
    async fn count(client: &RestClient) -> Result<usize, ResourceError> {
        total_count(client, Self::NAME).await
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<Value, ResourceError> {
    serde_json::to_value(value).map_err(ResourceError::Serialize)
}

fn required<'a, E: QbEntity>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ResourceError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ResourceError::MissingField {
            entity: E::NAME,
            field,
        })
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Builds a sparse update body.
///
/// Starts from the fetched record, overwrites it with every field the caller
/// set, then forces the fetched concurrency token and the sparse flag.
pub(crate) fn sparse_update_body(
    current: Value,
    update: Value,
    entity: &'static str,
) -> Result<Value, ResourceError> {
    let Value::Object(mut body) = current else {
        return Err(ResourceError::decode(entity, "expected an object"));
    };
    let Value::Object(fields) = update else {
        return Err(ResourceError::decode(entity, "update body is not an object"));
    };

    let sync_token = body
        .get(SYNC_TOKEN_KEY)
        .cloned()
        .ok_or_else(|| ResourceError::decode(entity, "fetched record has no SyncToken"))?;

    body.extend(fields);
    body.insert(SYNC_TOKEN_KEY.to_string(), sync_token);
    body.insert(SPARSE_KEY.to_string(), Value::Bool(true));

    Ok(Value::Object(body))
}

/// Entities that can be created.
#[allow(async_fn_in_trait)]
pub trait Creatable: QbEntity {
    /// POSTs this entity to the collection endpoint.
    ///
    /// The returned record carries the server-assigned `Id` and `SyncToken`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] or the transport's error.
    async fn create(&self, client: &RestClient) -> Result<ResourceResponse<Self>, ResourceError> {
        self.create_with_params(client, &[]).await
    }

    /// Like [`create`](Self::create) with extra query parameters, e.g.
    /// `include=allowduplicatedocnum`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] or the transport's error.
    async fn create_with_params(
        &self,
        client: &RestClient,
        query: &[(&str, &str)],
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let body = to_body(self)?;
        let query = (!query.is_empty()).then(|| params(query));

        let response = client.post(Self::ENDPOINT, Some(body), query).await?;
        ResourceResponse::from_http_response(response, Self::NAME)
    }
}

/// Entities that support sparse updates.
#[allow(async_fn_in_trait)]
pub trait Updatable: QbEntity {
    /// Fetches the current record as raw JSON.
    ///
    /// Raw JSON keeps wire fields this crate does not model.
    ///
    /// # Errors
    ///
    /// Returns the transport's error, or [`ResourceError::Decode`] when the
    /// envelope lacks the entity key.
    async fn fetch_current(client: &RestClient, id: &str) -> Result<Value, ResourceError> {
        let mut response = client.get(&Self::item_path(id), None).await?;
        response
            .body
            .get_mut(Self::NAME)
            .map(Value::take)
            .ok_or_else(|| {
                ResourceError::decode(Self::NAME, format!("missing key '{}' in response body", Self::NAME))
            })
    }

    /// Sparse-updates the record with the fields set on `self`.
    ///
    /// Exactly one GET fetches the current record; its `SyncToken` replaces
    /// whatever `self` carries. The POST fails with the server's stale-object
    /// fault if the record changes in between. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] when `self` has no id (no
    /// request is sent), otherwise the first error of the GET or the POST.
    async fn update(&self, client: &RestClient) -> Result<ResourceResponse<Self>, ResourceError> {
        self.update_with_params(client, &[]).await
    }

    /// Like [`update`](Self::update) with extra query parameters.
    ///
    /// # Errors
    ///
    /// See [`update`](Self::update).
    async fn update_with_params(
        &self,
        client: &RestClient,
        query: &[(&str, &str)],
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = required::<Self>(self.id(), "Id")?;

        let current = Self::fetch_current(client, id).await?;
        let body = sparse_update_body(current, to_body(self)?, Self::NAME)?;
        let query = (!query.is_empty()).then(|| params(query));

        let response = client.post(Self::ENDPOINT, Some(body), query).await?;
        ResourceResponse::from_http_response(response, Self::NAME)
    }
}

/// POSTs `{Id, SyncToken}` (plus `extra`) and treats "Object Not Found" as done.
async fn post_terminal<E: QbEntity>(
    entity: &E,
    client: &RestClient,
    operation: &str,
    extra: Map<String, Value>,
    query: &[(&str, &str)],
) -> Result<(), ResourceError> {
    let id = required::<E>(entity.id(), "Id")?;
    let sync_token = required::<E>(entity.sync_token(), SYNC_TOKEN_KEY)?;

    let mut body = Map::new();
    body.insert("Id".to_string(), Value::from(id));
    body.insert(SYNC_TOKEN_KEY.to_string(), Value::from(sync_token));
    body.extend(extra);

    match client
        .post(E::ENDPOINT, Some(Value::Object(body)), Some(params(query)))
        .await
    {
        Ok(_) => Ok(()),
        Err(e) if e.fault().is_some_and(crate::clients::FaultError::is_object_not_found) => {
            tracing::warn!(
                "{} {id} was already gone during {operation}; treating as done",
                E::NAME
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Entities that can be deleted.
#[allow(async_fn_in_trait)]
pub trait Deletable: QbEntity {
    /// Deletes the record.
    ///
    /// Deleting a record that no longer exists succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] when the id or concurrency
    /// token is empty (no request is sent), otherwise any error other than
    /// a 400 "Object Not Found" fault.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        post_terminal(self, client, "delete", Map::new(), &[("operation", "delete")]).await
    }
}

/// How an entity is voided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoidOperation {
    /// `operation=void`.
    Void,
    /// `operation=update&include=void` with a sparse body.
    UpdateIncludeVoid,
}

/// Entities that can be voided.
#[allow(async_fn_in_trait)]
pub trait Voidable: QbEntity {
    const VOID_OPERATION: VoidOperation = VoidOperation::Void;

    /// Voids the record.
    ///
    /// Voiding a record that no longer exists succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] when the id or concurrency
    /// token is empty (no request is sent), otherwise any error other than
    /// a 400 "Object Not Found" fault.
    async fn void(&self, client: &RestClient) -> Result<(), ResourceError> {
        match Self::VOID_OPERATION {
            VoidOperation::Void => {
                post_terminal(self, client, "void", Map::new(), &[("operation", "void")]).await
            }
            VoidOperation::UpdateIncludeVoid => {
                let mut extra = Map::new();
                extra.insert(SPARSE_KEY.to_string(), Value::Bool(true));
                post_terminal(
                    self,
                    client,
                    "void",
                    extra,
                    &[("operation", "update"), ("include", "void")],
                )
                .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_update_body_merges_over_fetched_record() {
        let current = json!({
            "Id": "25",
            "SyncToken": "3",
            "PrivateNote": "old",
            "DocNumber": "B-1"
        });
        let update = json!({"Id": "25", "SyncToken": "0", "PrivateNote": "new"});

        let body = sparse_update_body(current, update, "Bill").unwrap();
        assert_eq!(
            body,
            json!({
                "Id": "25",
                "SyncToken": "3",
                "PrivateNote": "new",
                "DocNumber": "B-1",
                "sparse": true
            })
        );
    }

    #[test]
    fn test_sparse_update_body_requires_fetched_token() {
        let result = sparse_update_body(json!({"Id": "1"}), json!({}), "Bill");
        assert!(matches!(result, Err(ResourceError::Decode { .. })));
    }

    #[test]
    fn test_params_converts_pairs() {
        assert_eq!(
            params(&[("operation", "update"), ("include", "void")]),
            vec![
                ("operation".to_string(), "update".to_string()),
                ("include".to_string(), "void".to_string())
            ]
        );
    }
}
