//! Purchase resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, Deletable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{Line, MetaData, PhysicalAddress, QbDate, ReferenceType, TxnTaxDetail};

/// An expense paid at the time of purchase: check, cash or credit card.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Purchase {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<Line>>,
    /// `Cash`, `Check` or `CreditCard`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// The account the money was paid from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<QbDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remit_to_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_tax_calculation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    /// Set for credit card refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_ref: Option<ReferenceType>,
    #[serde(rename = "IncludeInAnnualTPAR", skip_serializing_if = "Option::is_none")]
    pub include_in_annual_tpar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur_data_ref: Option<ReferenceType>,
}

impl QbEntity for Purchase {
    const NAME: &'static str = "Purchase";
    const ENDPOINT: &'static str = "purchase";
    const PLURAL: &'static str = "purchases";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::EmptyVec;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for Purchase {}
impl Updatable for Purchase {}
impl Deletable for Purchase {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::LineDetail;
    use serde_json::json;

    #[test]
    fn test_cash_purchase_deserialization() {
        let purchase: Purchase = serde_json::from_value(json!({
            "SyncToken": "0",
            "PurchaseEx": {"any": []},
            "TxnDate": "2015-07-27",
            "TotalAmt": 10.0,
            "PaymentType": "Cash",
            "AccountRef": {"name": "Checking", "value": "35"},
            "EntityRef": {"name": "Hicks Hardware", "value": "41", "type": "Vendor"},
            "Line": [{
                "DetailType": "ItemBasedExpenseLineDetail",
                "Amount": 10.0,
                "Id": "1",
                "ItemBasedExpenseLineDetail": {
                    "ItemRef": {"name": "Pump", "value": "11"},
                    "Qty": 1,
                    "UnitPrice": 10,
                    "BillableStatus": "NotBillable"
                }
            }],
            "Id": "252"
        }))
        .unwrap();

        assert_eq!(purchase.payment_type.as_deref(), Some("Cash"));
        assert_eq!(
            purchase.entity_ref.unwrap().ref_type.as_deref(),
            Some("Vendor")
        );
        assert!(matches!(
            purchase.line.unwrap()[0].detail,
            LineDetail::ItemBasedExpense(_)
        ));
    }
}
