//! Payment resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{
    Creatable, Deletable, EmptyResultPolicy, QbEntity, Updatable, VoidOperation, Voidable,
};

use super::common::{LinkedTxn, MetaData, QbDate, ReferenceType};

/// A payment line: the amount applied to the linked transactions.
///
/// Payment lines carry no `DetailType`, so they are modelled apart from
/// [`Line`](super::common::Line).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_txn: Option<Vec<LinkedTxn>>,
}

/// A payment received from a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_to_account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_ref_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<QbDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,
    /// The part of the payment not applied to any transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unapplied_amt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<PaymentLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
}

impl QbEntity for Payment {
    const NAME: &'static str = "Payment";
    const ENDPOINT: &'static str = "payment";
    const PLURAL: &'static str = "payments";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Payment {}
impl Updatable for Payment {}
impl Deletable for Payment {}

impl Voidable for Payment {
    const VOID_OPERATION: VoidOperation = VoidOperation::UpdateIncludeVoid;
}
