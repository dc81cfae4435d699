//! Estimate resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    Creatable, Deletable, EmptyResultPolicy, QbEntity, ResourceError, ResourceResponse, Updatable,
    Voidable,
};

use super::common::{
    EmailAddress, Line, LinkedTxn, MemoRef, MetaData, PhysicalAddress, QbDate, ReferenceType,
    TxnTaxDetail,
};

/// A user-defined field on a sales form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomField {
    #[serde(rename = "DefinitionId", skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `StringType` is the only type the API currently accepts.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
}

/// A quote for goods or services, which may later become an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Estimate {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<QbDate>,
    /// `Pending`, `Accepted`, `Closed` or `Rejected`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_memo: Option<MemoRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<Line>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_txn: Option<Vec<LinkedTxn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field: Option<Vec<CustomField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_tax_after_discount: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<QbDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_date: Option<QbDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
}

impl QbEntity for Estimate {
    const NAME: &'static str = "Estimate";
    const ENDPOINT: &'static str = "estimate";
    const PLURAL: &'static str = "estimates";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Estimate {}
impl Updatable for Estimate {}
impl Deletable for Estimate {}
impl Voidable for Estimate {}

impl Estimate {
    /// Emails the estimate to the customer.
    ///
    /// Without `send_to` the server uses the estimate's `BillEmail`. The
    /// returned estimate carries the updated `EmailStatus` and delivery
    /// info.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] for an empty id (no request
    /// is sent), otherwise the transport's error.
    pub async fn send(
        client: &RestClient,
        id: &str,
        send_to: Option<&str>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        if id.is_empty() {
            return Err(ResourceError::MissingField {
                entity: Self::NAME,
                field: "Id",
            });
        }

        let path = format!("{}/send", Self::item_path(id));
        let query = send_to
            .filter(|email| !email.is_empty())
            .map(|email| vec![("sendTo".to_string(), email.to_string())]);

        let response = client.post(&path, None, query).await?;
        ResourceResponse::from_http_response(response, Self::NAME)
    }
}
