//! Resource-specific error types for entity operations.
//!
//! [`ResourceError`] layers entity semantics on top of
//! [`HttpError`](crate::clients::HttpError): local validation failures that
//! never reach the network, the "none found" policy of some finders, and
//! response bodies that do not have the expected shape.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::rest::{QbEntity, ResourceError};
//! use quickbooks_api::rest::resources::Account;
//!
//! match Account::find_all(&client).await {
//!     Ok(accounts) => println!("{} accounts", accounts.len()),
//!     Err(ResourceError::NoneFound { .. }) => println!("empty chart of accounts"),
//!     Err(e) if e.fault().is_some() => println!("QuickBooks said: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

use crate::clients::{FaultError, HttpError};

/// Error type for entity operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A field required by the operation is empty. No request was sent.
    #[error("{entity} is missing required field {field}")]
    MissingField {
        /// The entity's wire name (e.g. "Invoice").
        entity: &'static str,
        /// The missing field (e.g. "Id", "SyncToken").
        field: &'static str,
    },

    /// The count query reported zero rows for an entity whose finder treats
    /// an empty collection as an error.
    #[error("no {plural} could be found")]
    NoneFound {
        /// Lowercase plural of the entity (e.g. "accounts").
        plural: &'static str,
    },

    /// A page size outside `1..=max` was requested.
    #[error("page size {size} is out of range (1..={max})")]
    InvalidPageSize {
        /// The requested page size.
        size: usize,
        /// The largest page the API serves.
        max: usize,
    },

    /// A page start of 0 was requested; positions are 1-based.
    #[error("start position must be at least 1, got {position}")]
    InvalidStartPosition {
        /// The requested start position.
        position: usize,
    },

    /// A successful response did not have the expected shape.
    #[error("failed to decode {context}: {message}")]
    Decode {
        /// What was being decoded (e.g. "Invoice", "QueryResponse").
        context: String,
        /// Description of the mismatch.
        message: String,
    },

    /// The request body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    pub(crate) fn decode(context: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Returns the structured fault if QuickBooks returned one.
    #[must_use]
    pub const fn fault(&self) -> Option<&FaultError> {
        match self {
            Self::Http(e) => e.fault(),
            _ => None,
        }
    }

    /// Returns `true` for a 400 fault whose first message is "Object Not Found".
    #[must_use]
    pub fn is_object_not_found(&self) -> bool {
        self.fault().is_some_and(FaultError::is_object_not_found)
    }

    /// Returns the `intuit_tid` of the failing response, if any.
    ///
    /// Useful for support tickets.
    #[must_use]
    pub fn intuit_tid(&self) -> Option<&str> {
        match self {
            Self::Http(e) => e.intuit_tid(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{Fault, FaultDetail, HttpResponseError, OBJECT_NOT_FOUND};

    fn fault_error(status: u16, message: &str) -> HttpError {
        HttpError::Fault(FaultError {
            status,
            fault: Fault {
                errors: vec![FaultDetail {
                    message: message.to_string(),
                    detail: String::new(),
                    code: "610".to_string(),
                    element: String::new(),
                }],
                fault_type: "ValidationFault".to_string(),
            },
            time: None,
            intuit_tid: Some("1-abc".to_string()),
        })
    }

    #[test]
    fn test_none_found_message() {
        let error = ResourceError::NoneFound { plural: "accounts" };
        assert_eq!(error.to_string(), "no accounts could be found");
    }

    #[test]
    fn test_missing_field_message() {
        let error = ResourceError::MissingField {
            entity: "Invoice",
            field: "SyncToken",
        };
        assert_eq!(error.to_string(), "Invoice is missing required field SyncToken");
    }

    #[test]
    fn test_is_object_not_found_checks_message() {
        let gone = ResourceError::from(fault_error(400, OBJECT_NOT_FOUND));
        assert!(gone.is_object_not_found());
        assert_eq!(gone.intuit_tid(), Some("1-abc"));

        let invalid = ResourceError::from(fault_error(400, "Validation Error"));
        assert!(!invalid.is_object_not_found());
        assert!(invalid.fault().is_some());
    }

    #[test]
    fn test_raw_response_has_no_fault() {
        let error = ResourceError::from(HttpError::Response(HttpResponseError {
            code: 502,
            message: "Bad Gateway".to_string(),
            intuit_tid: None,
        }));
        assert!(error.fault().is_none());
        assert!(!error.is_object_not_found());
    }
}
