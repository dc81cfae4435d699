//! Deposit resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, Deletable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{Line, MetaData, QbDate, ReferenceType, TxnTaxDetail};

/// A deposit of funds into a bank account.
///
/// Lines either link received payments (`LinkedTxn`) or carry a
/// `DepositLineDetail` for funds from other sources.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Deposit {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_to_account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<QbDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_total_amt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<Line>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
}

impl QbEntity for Deposit {
    const NAME: &'static str = "Deposit";
    const ENDPOINT: &'static str = "deposit";
    const PLURAL: &'static str = "deposits";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Deposit {}
impl Updatable for Deposit {}
impl Deletable for Deposit {}
