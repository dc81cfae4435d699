//! References from one entity to another.

use serde::{Deserialize, Serialize};

/// A reference to another entity, e.g. `CustomerRef` or `APAccountRef`.
///
/// Only `value` (the referenced id) is needed when writing; `name` is filled
/// in by the server on reads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReferenceType {
    /// The id of the referenced entity.
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The referenced entity type, set on polymorphic references such as
    /// `EntityRef`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,
}

impl ReferenceType {
    /// Creates a reference by id alone.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Creates a reference with a display name.
    #[must_use]
    pub fn named(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: Some(name.into()),
            ref_type: None,
        }
    }
}

/// A memo attached to a transaction, e.g. `CustomerMemo`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MemoRef {
    pub value: String,
}
