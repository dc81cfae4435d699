//! Item resource implementation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{MetaData, ReferenceType};

/// A product or service sold or purchased.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_item: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    /// `Inventory`, `NonInventory`, `Service`, `Group` or `Category`.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_tax_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_qty_on_hand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty_on_hand: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inv_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_code_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_tax_code_ref: Option<ReferenceType>,
}

impl QbEntity for Item {
    const NAME: &'static str = "Item";
    const ENDPOINT: &'static str = "item";
    const PLURAL: &'static str = "items";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::EmptyVec;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Item {}
impl Updatable for Item {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inventory_item_deserialization() {
        let item: Item = serde_json::from_value(json!({
            "FullyQualifiedName": "Garden Supplies",
            "Name": "Garden Supplies",
            "Sku": "GS-01",
            "TrackQtyOnHand": true,
            "Type": "Inventory",
            "PurchaseCost": 0,
            "QtyOnHand": 10,
            "IncomeAccountRef": {"name": "Sales of Product Income", "value": "79"},
            "AssetAccountRef": {"name": "Inventory Asset", "value": "81"},
            "ExpenseAccountRef": {"name": "Cost of Goods Sold", "value": "80"},
            "InvStartDate": "2015-01-01",
            "Id": "19",
            "SyncToken": "0"
        }))
        .unwrap();

        assert_eq!(item.item_type.as_deref(), Some("Inventory"));
        assert_eq!(item.sku.as_deref(), Some("GS-01"));
        assert_eq!(item.qty_on_hand, Some(Decimal::from(10)));
        assert_eq!(item.inv_start_date, NaiveDate::from_ymd_opt(2015, 1, 1));
    }

    #[test]
    fn test_item_type_serializes_as_type() {
        let item = Item {
            name: Some("Consulting".to_string()),
            item_type: Some("Service".to_string()),
            ..Item::default()
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"Name": "Consulting", "Type": "Service"})
        );
    }
}
