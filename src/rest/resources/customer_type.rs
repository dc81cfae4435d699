use serde::{Deserialize, Serialize};

use crate::rest::{EmptyResultPolicy, QbEntity};

use super::common::MetaData;

/// A customer category. Read-only through the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerType {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl QbEntity for CustomerType {
    const NAME: &'static str = "CustomerType";
    const ENDPOINT: &'static str = "customertype";
    const PLURAL: &'static str = "customerTypes";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::EmptyVec;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}
