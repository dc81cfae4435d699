//! Postal addresses and contact details embedded in names and transactions.

use serde::{Deserialize, Serialize};

/// A postal address, e.g. `BillAddr` or `ShipAddr`.
///
/// The meaning of `Line1`..`Line5` depends on context: when `City` and
/// friends are empty the lines may hold a free-form address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicalAddress {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line4: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line5: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_sub_division_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

/// An email address, e.g. `PrimaryEmailAddr` or `BillEmail`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EmailAddress {
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl EmailAddress {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }
}

/// A phone number, e.g. `PrimaryPhone` or `Mobile`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TelephoneNumber {
    #[serde(rename = "FreeFormNumber", skip_serializing_if = "Option::is_none")]
    pub free_form_number: Option<String>,
}

/// A website, e.g. `WebAddr`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebSiteAddress {
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}
