//! JournalEntry resource implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{Creatable, Deletable, EmptyResultPolicy, QbEntity, Updatable};

use super::common::{Line, LineDetail, MetaData, PostingType, QbDate, ReferenceType, TxnTaxDetail};

/// A manual posting of debits and credits.
///
/// The debit and credit lines must balance; the server rejects the entry
/// otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct JournalEntry {
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
    pub private_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<Line>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,
    /// Marks an adjusting entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur_data_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,
}

impl JournalEntry {
    /// Sums the line amounts posted to one side.
    #[must_use]
    pub fn total(&self, side: PostingType) -> Decimal {
        self.line
            .iter()
            .flatten()
            .filter_map(|line| match &line.detail {
                LineDetail::JournalEntry(detail) if detail.posting_type == side => line.amount,
                _ => None,
            })
            .sum()
    }

    /// Whether debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total(PostingType::Debit) == self.total(PostingType::Credit)
    }
}

impl QbEntity for JournalEntry {
    const NAME: &'static str = "JournalEntry";
    const ENDPOINT: &'static str = "journalentry";
    const PLURAL: &'static str = "journalEntries";
    const EMPTY_RESULT: EmptyResultPolicy = EmptyResultPolicy::EmptyVec;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Creatable for JournalEntry {}
impl Updatable for JournalEntry {}
impl Deletable for JournalEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JournalEntry {
        serde_json::from_value(json!({
            "SyncToken": "0",
            "TxnDate": "2015-06-29",
            "Adjustment": false,
            "Line": [
                {
                    "JournalEntryLineDetail": {
                        "PostingType": "Debit",
                        "AccountRef": {"name": "Opening Bal Equity", "value": "39"}
                    },
                    "DetailType": "JournalEntryLineDetail",
                    "Amount": 100.10,
                    "Id": "0",
                    "Description": "nov portion of rider insurance"
                },
                {
                    "JournalEntryLineDetail": {
                        "PostingType": "Credit",
                        "AccountRef": {"name": "Notes Payable", "value": "44"},
                        "Entity": {"Type": "Vendor", "EntityRef": {"value": "41"}}
                    },
                    "DetailType": "JournalEntryLineDetail",
                    "Amount": 100.10,
                    "Id": "1",
                    "Description": "nov portion of rider insurance"
                }
            ],
            "Id": "227"
        }))
        .unwrap()
    }

    #[test]
    fn test_journal_entry_totals() {
        let entry = sample();
        assert_eq!(entry.total(PostingType::Debit), "100.10".parse().unwrap());
        assert!(entry.is_balanced());
    }

    #[test]
    fn test_unbalanced_entry() {
        let mut entry = sample();
        if let Some(lines) = entry.line.as_mut() {
            lines[1].amount = Some(Decimal::from(99));
        }
        assert!(!entry.is_balanced());
    }

    #[test]
    fn test_credit_line_entity() {
        let entry = sample();
        let lines = entry.line.unwrap();
        match &lines[1].detail {
            LineDetail::JournalEntry(detail) => {
                let entity = detail.entity.as_ref().unwrap();
                assert_eq!(entity.entity_type.as_deref(), Some("Vendor"));
                assert_eq!(entity.entity_ref.as_ref().unwrap().value, "41");
            }
            other => panic!("unexpected detail {other:?}"),
        }
    }
}
