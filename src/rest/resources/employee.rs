//! Employee resource implementation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{EmailAddress, MetaData, PhysicalAddress, TelephoneNumber};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_on_check_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_addr: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_addr: Option<PhysicalAddress>,
    /// Masked by the server on reads.
    #[serde(rename = "SSN", skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hired_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released_date: Option<NaiveDate>,
}

impl QbEntity for Employee {
    const NAME: &'static str = "Employee";
    const ENDPOINT: &'static str = "employee";
    const PLURAL: &'static str = "employees";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Employee {}
impl Updatable for Employee {}
