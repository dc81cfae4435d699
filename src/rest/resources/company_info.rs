//! CompanyInfo resource implementation.
//!
//! There is exactly one `CompanyInfo` per company and it lives at
//! `companyinfo/<realm id>`, so it is fetched by realm rather than by a
//! record id.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{EmptyResultPolicy, QbEntity, ResourceError, ResourceResponse, Updatable};

use super::common::{EmailAddress, MetaData, PhysicalAddress, TelephoneNumber, WebSiteAddress};

/// A free-form name/value pair, e.g. `OfferingSku` or `NeoEnabled`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

/// The company's own settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyInfo {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_communication_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_addr: Option<WebSiteAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_start_date: Option<String>,
    /// English month name, e.g. `January`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year_start_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_languages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_value: Option<Vec<NameValue>>,
}

impl QbEntity for CompanyInfo {
    const NAME: &'static str = "CompanyInfo";
    const ENDPOINT: &'static str = "companyinfo";
    const PLURAL: &'static str = "companyInfo";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl CompanyInfo {
    fn realm_path(client: &RestClient) -> String {
        format!("{}/{}", Self::ENDPOINT, client.realm_id())
    }

    /// Fetches the company's settings.
    ///
    /// # Errors
    ///
    /// Returns the transport's error, or [`ResourceError::Decode`] when the
    /// envelope has an unexpected shape.
    pub async fn fetch(client: &RestClient) -> Result<ResourceResponse<Self>, ResourceError> {
        let response = client.get(&Self::realm_path(client), None).await?;
        ResourceResponse::from_http_response(response, Self::NAME)
    }
}

impl Updatable for CompanyInfo {
    // The record id is not the realm id, but only the realm path serves it.
    async fn fetch_current(client: &RestClient, _id: &str) -> Result<Value, ResourceError> {
        let mut response = client.get(&Self::realm_path(client), None).await?;
        response
            .body
            .get_mut(Self::NAME)
            .map(Value::take)
            .ok_or_else(|| {
                ResourceError::decode(Self::NAME, "missing key 'CompanyInfo' in response body")
            })
    }
}
