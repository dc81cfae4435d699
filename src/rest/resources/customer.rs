//! Customer resource implementation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{
    EmailAddress, MetaData, PhysicalAddress, ReferenceType, TelephoneNumber, WebSiteAddress,
};

/// A customer, or a job under a parent customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Unique across customers, vendors and employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_on_check_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_addr: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_addr: Option<WebSiteAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tax_code_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(rename = "TaxExemptionReasonId", skip_serializing_if = "Option::is_none")]
    pub tax_exemption_reason_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_with_parent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ref: Option<ReferenceType>,
    /// Depth in the customer/job hierarchy, 0 for top-level customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_term_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    /// Only honoured on create, together with `Balance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_balance_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_with_jobs: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
}

impl Customer {
    /// The shipping address, falling back to the billing address.
    #[must_use]
    pub fn address(&self) -> Option<&PhysicalAddress> {
        self.ship_addr.as_ref().or(self.bill_addr.as_ref())
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.web_addr.as_ref().and_then(|w| w.uri.as_deref())
    }

    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.primary_email_addr
            .as_ref()
            .and_then(|e| e.address.as_deref())
    }
}

impl QbEntity for Customer {
    const NAME: &'static str = "Customer";
    const ENDPOINT: &'static str = "customer";
    const PLURAL: &'static str = "customers";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::EmptyVec;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Customer {}
impl Updatable for Customer {}
