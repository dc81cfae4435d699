//! The QuickBooks failure envelope.
//!
//! Non-2xx responses usually carry a body of the form:
//!
//! ```json
//! {
//!   "Fault": {
//!     "Error": [
//!       {"Message": "Object Not Found", "Detail": "...", "code": "610", "element": ""}
//!     ],
//!     "type": "ValidationFault"
//!   },
//!   "time": "2015-02-09T10:11:11.123-08:00"
//! }
//! ```
//!
//! Only the top-level `Fault` key is recognized. Bodies without it are
//! reported as raw [`HttpResponseError`](crate::clients::HttpResponseError)s.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fault message QuickBooks returns when a record no longer exists.
pub const OBJECT_NOT_FOUND: &str = "Object Not Found";

/// One error entry of a [`Fault`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultDetail {
    /// Short message, e.g. `"Object Not Found"` or `"Stale Object Error"`.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Longer human readable explanation.
    #[serde(rename = "Detail", default)]
    pub detail: String,
    /// Intuit error code, e.g. `"610"`.
    #[serde(default)]
    pub code: String,
    /// The offending element, when the server names one.
    #[serde(default)]
    pub element: String,
}

/// A structured fault: one or more errors plus a fault type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// The individual errors, in the order the server reported them.
    #[serde(rename = "Error", default)]
    pub errors: Vec<FaultDetail>,
    /// The fault type, e.g. `"ValidationFault"` or `"AuthenticationFault"`.
    #[serde(rename = "type", default)]
    pub fault_type: String,
}

impl Fault {
    /// Returns the first error's message, if any.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fault_type.is_empty() {
            f.write_str("fault")?;
        } else {
            f.write_str(&self.fault_type)?;
        }
        for (i, error) in self.errors.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{}", error.message)?;
            if !error.code.is_empty() {
                write!(f, " (code {})", error.code)?;
            }
            if !error.detail.is_empty() {
                write!(f, " - {}", error.detail)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct FailureEnvelope {
    #[serde(rename = "Fault")]
    fault: Fault,
    #[serde(default)]
    time: Option<String>,
}

/// Parses a failure envelope out of a raw response body.
///
/// Returns `None` when the body is not JSON or has no `Fault` key.
pub(crate) fn parse_failure(body: &str) -> Option<(Fault, Option<String>)> {
    serde_json::from_str::<FailureEnvelope>(body)
        .ok()
        .map(|envelope| (envelope.fault, envelope.time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failure_keeps_every_error() {
        let body = r#"{
            "Fault": {
                "Error": [
                    {"Message": "Duplicate Name Exists Error", "Detail": "The name supplied already exists.", "code": "6240"},
                    {"Message": "Required param missing", "Detail": "Name", "code": "2020", "element": "Name"}
                ],
                "type": "ValidationFault"
            },
            "time": "2015-02-09T10:11:11.123-08:00"
        }"#;

        let (fault, time) = parse_failure(body).unwrap();
        assert_eq!(fault.fault_type, "ValidationFault");
        assert_eq!(fault.errors.len(), 2);
        assert_eq!(fault.errors[1].element, "Name");
        assert_eq!(fault.first_message(), Some("Duplicate Name Exists Error"));
        assert_eq!(time.as_deref(), Some("2015-02-09T10:11:11.123-08:00"));
    }

    #[test]
    fn test_parse_failure_requires_fault_key() {
        assert!(parse_failure(r#"{"fault": {"error": []}}"#).is_none());
        assert!(parse_failure("<html>Bad Gateway</html>").is_none());
        assert!(parse_failure("").is_none());
    }

    #[test]
    fn test_fault_display_lists_errors() {
        let fault = Fault {
            errors: vec![
                FaultDetail {
                    message: "Object Not Found".to_string(),
                    detail: "Object Not Found : Something you're trying to use has been made inactive."
                        .to_string(),
                    code: "610".to_string(),
                    element: String::new(),
                },
                FaultDetail {
                    message: "Second".to_string(),
                    ..FaultDetail::default()
                },
            ],
            fault_type: "ValidationFault".to_string(),
        };

        let text = fault.to_string();
        assert!(text.starts_with("ValidationFault: Object Not Found (code 610) - "));
        assert!(text.ends_with("; Second"));
    }
}
