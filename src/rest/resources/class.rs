//! Class resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{MetaData, ReferenceType};

/// A class used to categorize transactions, e.g. by business segment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Class {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_class: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl QbEntity for Class {
    const NAME: &'static str = "Class";
    const ENDPOINT: &'static str = "class";
    const PLURAL: &'static str = "classes";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::EmptyVec;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Class {}
impl Updatable for Class {}
