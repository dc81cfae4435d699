//! Invoice resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, Deletable, EmptyResultPolicy, QbEntity, Updatable, Voidable};

use super::common::{
    EmailAddress, Line, LinkedTxn, MemoRef, MetaData, PhysicalAddress, QbDate, ReferenceType,
    TxnTaxDetail,
};

/// A sales transaction billed to a customer for later payment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Invoice {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<Line>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_txn: Option<Vec<LinkedTxn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_memo: Option<MemoRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_term_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<QbDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_method_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<QbDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_amt_total: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_tax_after_discount: Option<bool>,
    /// `NotSet`, `NeedToPrint` or `PrintComplete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_status: Option<String>,
    /// `NotSet`, `NeedToSend` or `EmailSent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_email: Option<EmailAddress>,
    #[serde(rename = "BillEmailCc", skip_serializing_if = "Option::is_none")]
    pub bill_email_cc: Option<EmailAddress>,
    #[serde(rename = "BillEmailBcc", skip_serializing_if = "Option::is_none")]
    pub bill_email_bcc: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_online_credit_card_payment: Option<bool>,
    #[serde(rename = "AllowOnlineACHPayment", skip_serializing_if = "Option::is_none")]
    pub allow_online_ach_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_to_account_ref: Option<ReferenceType>,
}

impl QbEntity for Invoice {
    const NAME: &'static str = "Invoice";
    const ENDPOINT: &'static str = "invoice";
    const PLURAL: &'static str = "invoices";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::EmptyVec;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Invoice {}
impl Updatable for Invoice {}
impl Deletable for Invoice {}
impl Voidable for Invoice {}
