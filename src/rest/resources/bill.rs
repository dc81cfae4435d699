//! Bill resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, Deletable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{Line, LinkedTxn, MetaData, QbDate, ReferenceType, TxnTaxDetail};

/// An accounts-payable transaction from a vendor.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Bill {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<Line>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<QbDate>,
    #[serde(rename = "APAccountRef", skip_serializing_if = "Option::is_none")]
    pub ap_account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_term_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_txn: Option<Vec<LinkedTxn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_tax_calculation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<QbDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_ref: Option<ReferenceType>,
    #[serde(rename = "IncludeInAnnualTPAR", skip_serializing_if = "Option::is_none")]
    pub include_in_annual_tpar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur_data_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
}

impl QbEntity for Bill {
    const NAME: &'static str = "Bill";
    const ENDPOINT: &'static str = "bill";
    const PLURAL: &'static str = "bills";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::EmptyVec;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Bill {}
impl Updatable for Bill {}
impl Deletable for Bill {}
