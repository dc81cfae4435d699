//! Vendor resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{
    EmailAddress, MetaData, PhysicalAddress, ReferenceType, TelephoneNumber, WebSiteAddress,
};

/// A seller the company buys goods or services from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Vendor {
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
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_on_check_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_addr: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_addr: Option<WebSiteAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_addr: Option<PhysicalAddress>,
    #[serde(rename = "APAccountRef", skip_serializing_if = "Option::is_none")]
    pub ap_account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(rename = "GSTIN", skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(rename = "GSTRegistrationType", skip_serializing_if = "Option::is_none")]
    pub gst_registration_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_reporting_basis: Option<String>,
    #[serde(rename = "HasTPAR", skip_serializing_if = "Option::is_none")]
    pub has_tpar: Option<bool>,
    /// Whether the vendor receives a 1099.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor1099: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acct_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
}

impl QbEntity for Vendor {
    const NAME: &'static str = "Vendor";
    const ENDPOINT: &'static str = "vendor";
    const PLURAL: &'static str = "vendors";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Vendor {}
impl Updatable for Vendor {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vendor_wire_names() {
        let vendor: Vendor = serde_json::from_value(json!({
            "PrimaryEmailAddr": {"Address": "Books@Intuit.com"},
            "Vendor1099": false,
            "HasTPAR": true,
            "GSTIN": "07AAGFF2194N1Z1",
            "APAccountRef": {"value": "33"},
            "Balance": 0,
            "DisplayName": "Books by Bessie",
            "Active": true,
            "Id": "30",
            "SyncToken": "0"
        }))
        .unwrap();

        assert_eq!(vendor.vendor1099, Some(false));
        assert_eq!(vendor.has_tpar, Some(true));
        assert_eq!(vendor.gstin.as_deref(), Some("07AAGFF2194N1Z1"));
        assert_eq!(vendor.ap_account_ref.unwrap().value, "33");
    }

    #[test]
    fn test_vendor_constants() {
        assert_eq!(Vendor::PLURAL, "vendors");
        assert_eq!(Vendor::EMPTY_RESULT, EmptyResultPolicy::NoneFound);
    }
}
