//! The QuickBooks query language and the generic query executor.
//!
//! Statements have the form
//! `SELECT * | COUNT(*) FROM <Entity> [WHERE ...] [ORDERBY <field>] [STARTPOSITION n] [MAXRESULTS m]`.
//! The API has no bind parameters, so literals must go through
//! [`escape_literal`] before being interpolated.
//!
//! Query responses look like
//!
//! ```json
//! {
//!   "QueryResponse": {"Invoice": [...], "startPosition": 1, "maxResults": 2, "totalCount": 2},
//!   "time": "2024-03-01T10:00:00.000-08:00"
//! }
//! ```
//!
//! The name of the result key depends on the queried entity, so
//! [`execute_query`] finds it by elimination: whatever is left after the
//! metadata keys are removed.
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::rest::QueryStatement;
//!
//! let statement = QueryStatement::select("Customer")
//!     .where_eq("DisplayName", "O'Brien Landscaping")
//!     .order_by("Id")
//!     .max_results(10);
//!
//! assert_eq!(
//!     statement.to_string(),
//!     "SELECT * FROM Customer WHERE DisplayName = 'O''Brien Landscaping' ORDERBY Id MAXRESULTS 10"
//! );
//! ```

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::ResourceError;

/// Key of the query envelope in a response body.
pub const QUERY_RESPONSE_KEY: &str = "QueryResponse";

/// Metadata keys of a query envelope; everything else is the result array.
pub const QUERY_METADATA_KEYS: [&str; 3] = ["startPosition", "maxResults", "totalCount"];

/// Escapes a string literal by doubling embedded single quotes.
#[must_use]
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Appends `STARTPOSITION`/`MAXRESULTS` clauses to a raw statement.
#[must_use]
pub fn with_paging(statement: &str, start_position: usize, max_results: usize) -> String {
    format!(
        "{} STARTPOSITION {start_position} MAXRESULTS {max_results}",
        statement.trim_end()
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Projection {
    All,
    Count,
}

/// Builder for query-language statements.
///
/// Renders through `Display`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryStatement {
    projection: Projection,
    entity: String,
    conditions: Vec<String>,
    order_by: Option<String>,
    start_position: Option<usize>,
    max_results: Option<usize>,
}

impl QueryStatement {
    fn new(projection: Projection, entity: &str) -> Self {
        Self {
            projection,
            entity: entity.to_string(),
            conditions: Vec::new(),
            order_by: None,
            start_position: None,
            max_results: None,
        }
    }

    /// `SELECT * FROM <entity>`.
    #[must_use]
    pub fn select(entity: &str) -> Self {
        Self::new(Projection::All, entity)
    }

    /// `SELECT COUNT(*) FROM <entity>`.
    #[must_use]
    pub fn count(entity: &str) -> Self {
        Self::new(Projection::Count, entity)
    }

    /// Adds `<field> = '<value>'`, escaping the value.
    ///
    /// Conditions are joined with `AND`.
    #[must_use]
    pub fn where_eq(mut self, field: &str, value: &str) -> Self {
        self.conditions
            .push(format!("{field} = '{}'", escape_literal(value)));
        self
    }

    /// Adds a condition verbatim. The caller is responsible for escaping.
    #[must_use]
    pub fn where_raw(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: &str) -> Self {
        self.order_by = Some(field.to_string());
        self
    }

    /// Sets the 1-based position of the first row.
    #[must_use]
    pub const fn start_position(mut self, position: usize) -> Self {
        self.start_position = Some(position);
        self
    }

    #[must_use]
    pub const fn max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }
}

impl fmt::Display for QueryStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let projection = match self.projection {
            Projection::All => "*",
            Projection::Count => "COUNT(*)",
        };
        write!(f, "SELECT {projection} FROM {}", self.entity)?;

        if !self.conditions.is_empty() {
            write!(f, " WHERE {}", self.conditions.join(" AND "))?;
        }
        if let Some(field) = &self.order_by {
            write!(f, " ORDERBY {field}")?;
        }
        if let Some(position) = self.start_position {
            write!(f, " STARTPOSITION {position}")?;
        }
        if let Some(max) = self.max_results {
            write!(f, " MAXRESULTS {max}")?;
        }
        Ok(())
    }
}

fn query_envelope(mut body: Value) -> Result<serde_json::Map<String, Value>, ResourceError> {
    match body.get_mut(QUERY_RESPONSE_KEY).map(Value::take) {
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(ResourceError::decode(
            QUERY_RESPONSE_KEY,
            format!("expected an object, found {other}"),
        )),
        None => Err(ResourceError::decode(
            QUERY_RESPONSE_KEY,
            "missing key 'QueryResponse' in response body",
        )),
    }
}

/// Decodes the result rows of a query response body.
///
/// Zero remaining keys decode as an empty vector; more than one is an error.
pub(crate) fn decode_query_response<T: DeserializeOwned>(
    body: Value,
) -> Result<Vec<T>, ResourceError> {
    let mut envelope = query_envelope(body)?;
    envelope.retain(|key, _| !QUERY_METADATA_KEYS.contains(&key.as_str()));

    let mut remaining = envelope.into_iter();
    let Some((key, rows)) = remaining.next() else {
        return Ok(Vec::new());
    };

    if let Some((extra, _)) = remaining.next() {
        return Err(ResourceError::decode(
            QUERY_RESPONSE_KEY,
            format!("ambiguous result keys '{key}' and '{extra}'"),
        ));
    }

    serde_json::from_value(rows).map_err(|e| ResourceError::decode(key, e))
}

/// Runs a statement and decodes the result rows as `T`.
///
/// The executor knows nothing about the entity: the caller picks both the
/// statement and the row type.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] for transport failures and
/// [`ResourceError::Decode`] when the envelope has an unexpected shape.
///
/// # Example
///
/// ```rust,ignore
/// use quickbooks_api::rest::{execute_query, resources::Invoice};
///
/// let overdue: Vec<Invoice> =
///     execute_query(&client, "SELECT * FROM Invoice WHERE Balance > '0'").await?;
/// ```
pub async fn execute_query<T: DeserializeOwned>(
    client: &RestClient,
    statement: &str,
) -> Result<Vec<T>, ResourceError> {
    let response = client.query(statement).await?;
    decode_query_response(response.body)
}

/// Reads `totalCount` from a count query response. Absent means zero.
pub(crate) fn decode_total_count(body: Value) -> Result<usize, ResourceError> {
    let envelope = query_envelope(body)?;
    match envelope.get("totalCount") {
        None => Ok(0),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                ResourceError::decode("totalCount", format!("expected a count, found {value}"))
            }),
    }
}

/// Runs `SELECT COUNT(*) FROM <entity>` and returns the reported count.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] for transport failures and
/// [`ResourceError::Decode`] when the envelope has an unexpected shape.
pub async fn total_count(client: &RestClient, entity: &str) -> Result<usize, ResourceError> {
    let statement = QueryStatement::count(entity).to_string();
    let response = client.query(&statement).await?;
    decode_total_count(response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        #[serde(rename = "Id")]
        id: String,
    }

    #[test]
    fn test_escape_literal_doubles_quotes() {
        assert_eq!(escape_literal("O'Brien's"), "O''Brien''s");
        assert_eq!(escape_literal("plain"), "plain");
    }

    #[test]
    fn test_with_paging_appends_clauses() {
        assert_eq!(
            with_paging("SELECT * FROM Invoice ORDERBY Id ", 1001, 1000),
            "SELECT * FROM Invoice ORDERBY Id STARTPOSITION 1001 MAXRESULTS 1000"
        );
    }

    #[test]
    fn test_statement_renders_count() {
        assert_eq!(
            QueryStatement::count("Account").to_string(),
            "SELECT COUNT(*) FROM Account"
        );
    }

    #[test]
    fn test_statement_joins_conditions_with_and() {
        let statement = QueryStatement::select("Invoice")
            .where_eq("DocNumber", "1001")
            .where_raw("TotalAmt > '100.00'")
            .order_by("Id")
            .start_position(1)
            .max_results(1000);

        assert_eq!(
            statement.to_string(),
            "SELECT * FROM Invoice WHERE DocNumber = '1001' AND TotalAmt > '100.00' ORDERBY Id STARTPOSITION 1 MAXRESULTS 1000"
        );
    }

    #[test]
    fn test_decode_skips_metadata_keys() {
        let body = json!({
            "QueryResponse": {
                "startPosition": 1,
                "Invoice": [{"Id": "1"}, {"Id": "2"}],
                "maxResults": 2,
                "totalCount": 2
            },
            "time": "2024-03-01T10:00:00.000-08:00"
        });

        let rows: Vec<Row> = decode_query_response(body).unwrap();
        assert_eq!(
            rows,
            vec![
                Row { id: "1".to_string() },
                Row { id: "2".to_string() }
            ]
        );
    }

    #[test]
    fn test_decode_without_result_key_is_empty() {
        let body = json!({"QueryResponse": {}, "time": "2024-03-01T10:00:00.000-08:00"});
        let rows: Vec<Row> = decode_query_response(body).unwrap();
        assert!(rows.is_empty());

        let body = json!({"QueryResponse": {"totalCount": 0}});
        let rows: Vec<Row> = decode_query_response(body).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_decode_rejects_two_result_keys() {
        let body = json!({"QueryResponse": {"Invoice": [], "Bill": []}});
        let result: Result<Vec<Row>, _> = decode_query_response(body);
        assert!(matches!(result, Err(ResourceError::Decode { .. })));
    }

    #[test]
    fn test_decode_rejects_missing_envelope() {
        let result: Result<Vec<Row>, _> = decode_query_response(json!({"time": "x"}));
        assert!(matches!(result, Err(ResourceError::Decode { .. })));
    }

    #[test]
    fn test_decode_total_count() {
        assert_eq!(
            decode_total_count(json!({"QueryResponse": {"totalCount": 2501}})).unwrap(),
            2501
        );
        assert_eq!(decode_total_count(json!({"QueryResponse": {}})).unwrap(), 0);
        assert!(decode_total_count(json!({"QueryResponse": {"totalCount": "many"}})).is_err());
    }
}
