//! CreditMemo resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, Deletable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{
    EmailAddress, Line, LinkedTxn, MemoRef, MetaData, PhysicalAddress, QbDate, ReferenceType,
    TxnTaxDetail,
};

/// A refund or credit owed to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CreditMemo {
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
    pub customer_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_memo: Option<MemoRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<Line>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_term_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_txn: Option<Vec<LinkedTxn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur_data_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_balance: Option<Decimal>,
    /// The part of the credit not yet applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_credit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
}

impl QbEntity for CreditMemo {
    const NAME: &'static str = "CreditMemo";
    const ENDPOINT: &'static str = "creditmemo";
    const PLURAL: &'static str = "creditMemos";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::NoneFound;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for CreditMemo {}
impl Updatable for CreditMemo {}
impl Deletable for CreditMemo {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::LineDetail;
    use serde_json::json;

    #[test]
    fn test_credit_memo_deserialization() {
        let memo: CreditMemo = serde_json::from_value(json!({
            "RemainingCredit": 0,
            "CustomerRef": {"value": "3", "name": "CoolCars"},
            "TxnDate": "2014-12-31",
            "TotalAmt": 50,
            "Line": [
                {
                    "Id": "1",
                    "LineNum": 1,
                    "Amount": 50,
                    "DetailType": "SalesItemLineDetail",
                    "SalesItemLineDetail": {"ItemRef": {"value": "3", "name": "Concrete"}}
                },
                {"Amount": 50, "DetailType": "SubTotalLineDetail", "SubTotalLineDetail": {}}
            ],
            "Id": "73",
            "SyncToken": "0"
        }))
        .unwrap();

        assert_eq!(memo.remaining_credit, Some(Decimal::ZERO));
        let lines = memo.line.unwrap();
        assert!(matches!(lines[0].detail, LineDetail::SalesItem(_)));
        assert!(matches!(lines[1].detail, LineDetail::SubTotal(_)));
    }

    #[test]
    fn test_credit_memo_constants() {
        assert_eq!(CreditMemo::ENDPOINT, "creditmemo");
        assert_eq!(CreditMemo::EMPTY_RESULT, EmptyResultPolicy::NoneFound);
    }
}
