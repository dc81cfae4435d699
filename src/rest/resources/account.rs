//! Account resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{MetaData, ReferenceType};

/// A ledger account in the chart of accounts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acct_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_account: Option<bool>,
    /// `Asset`, `Equity`, `Expense`, `Liability` or `Revenue`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_location_type: Option<String>,
    /// e.g. `Bank`, `Expense`, `Accounts Payable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance_with_sub_accounts: Option<Decimal>,
}

impl QbEntity for Account {
    const NAME: &'static str = "Account";
    const ENDPOINT: &'static str = "account";
    const PLURAL: &'static str = "accounts";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Account {}
impl Updatable for Account {}
