//! Attachable resource implementation.
//!
//! Attachables are notes and file attachments linked to other entities.
//! Only the metadata half is handled here; the multipart upload endpoint is
//! not wrapped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{Creatable, Deletable, EmptyResultPolicy, QbEntity, ResourceError, Updatable};

use super::common::{MetaData, ReferenceType};

/// A link from an attachable to the entity it is attached to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AttachableRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_on_send: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_ref_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Attachable {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// MIME type of the file, e.g. `application/pdf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachable_ref: Option<Vec<AttachableRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_access_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_download_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_file_access_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_temp_download_uri: Option<String>,
}

impl QbEntity for Attachable {
    const NAME: &'static str = "Attachable";
    const ENDPOINT: &'static str = "attachable";
    const PLURAL: &'static str = "attachables";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Attachable {}
impl Updatable for Attachable {}
impl Deletable for Attachable {}

impl Attachable {
    /// Returns a temporary download URL for the attachment's file.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] for an empty id (no request
    /// is sent), the transport's error, or [`ResourceError::Decode`] when
    /// the body is not a URL string.
    pub async fn download_url(client: &RestClient, id: &str) -> Result<String, ResourceError> {
        if id.is_empty() {
            return Err(ResourceError::MissingField {
                entity: Self::NAME,
                field: "Id",
            });
        }

        let path = format!("download/{}", urlencoding::encode(id));
        let response = client.get(&path, None).await?;

        match response.body {
            Value::String(url) => Ok(url.trim().to_string()),
            other => Err(ResourceError::decode(
                "download",
                format!("expected a URL, found {other}"),
            )),
        }
    }
}
