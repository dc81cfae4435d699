//! Transaction lines.
//!
//! Every line carries a `DetailType` tag naming the one detail object it
//! holds:
//!
//! ```json
//! {
//!   "Id": "1",
//!   "Amount": 103.55,
//!   "DetailType": "AccountBasedExpenseLineDetail",
//!   "AccountBasedExpenseLineDetail": {"AccountRef": {"value": "7"}}
//! }
//! ```
//!
//! [`Line`] models that as a [`LineDetail`] sum type. Tags without a typed
//! variant decode to [`LineDetail::Other`] with their object kept as JSON.

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{LinkedTxn, QbDate, ReferenceType};

/// Wire names of the supported detail types.
pub mod detail_type {
    pub const SALES_ITEM: &str = "SalesItemLineDetail";
    pub const TAX: &str = "TaxLineDetail";
    pub const DISCOUNT: &str = "DiscountLineDetail";
    pub const JOURNAL_ENTRY: &str = "JournalEntryLineDetail";
    pub const ACCOUNT_BASED_EXPENSE: &str = "AccountBasedExpenseLineDetail";
    pub const ITEM_BASED_EXPENSE: &str = "ItemBasedExpenseLineDetail";
    pub const DEPOSIT: &str = "DepositLineDetail";
    pub const SUB_TOTAL: &str = "SubTotalLineDetail";
    pub const DESCRIPTION_ONLY: &str = "DescriptionOnly";

    /// Every tag with a typed [`LineDetail`](super::LineDetail) variant.
    pub const ALL: [&str; 9] = [
        SALES_ITEM,
        TAX,
        DISCOUNT,
        JOURNAL_ENTRY,
        ACCOUNT_BASED_EXPENSE,
        ITEM_BASED_EXPENSE,
        DEPOSIT,
        SUB_TOTAL,
        DESCRIPTION_ONLY,
    ];
}

/// Detail of a line selling an item or service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SalesItemLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_account_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_date: Option<QbDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_inclusive_amt: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amt: Option<Decimal>,
}

/// Detail of a tax line, as found in `TxnTaxDetail.TaxLine`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TaxLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_based: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percent: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount_taxable: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_inclusive_amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_delta_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DiscountLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_based: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_account_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_ref: Option<ReferenceType>,
}

/// Which side of the ledger a journal entry line posts to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostingType {
    Debit,
    Credit,
}

/// Reference to the name (customer, vendor, employee) a journal entry line
/// is recorded against.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct JournalEntryEntity {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<ReferenceType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct JournalEntryLineDetail {
    pub posting_type: PostingType,

    pub account_ref: ReferenceType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<JournalEntryEntity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_applicable_on: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
}

/// Detail of an expense line booked straight to an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AccountBasedExpenseLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,

    /// `"NotBillable"`, `"Billable"` or `"HasBeenBilled"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_status: Option<String>,
}

/// Detail of an expense line for a purchased item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemBasedExpenseLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DepositLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_type: Option<String>,
}

/// Detail of a server-computed subtotal line. Usually empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SubTotalLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_ref: Option<ReferenceType>,
}

/// Detail of a text-only line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DescriptionLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_date: Option<QbDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_ref: Option<ReferenceType>,
}

/// The detail object of a line, discriminated by `DetailType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDetail {
    SalesItem(SalesItemLineDetail),
    Tax(TaxLineDetail),
    Discount(DiscountLineDetail),
    JournalEntry(JournalEntryLineDetail),
    AccountBasedExpense(AccountBasedExpenseLineDetail),
    ItemBasedExpense(ItemBasedExpenseLineDetail),
    Deposit(DepositLineDetail),
    SubTotal(SubTotalLineDetail),
    DescriptionOnly(DescriptionLineDetail),
    /// A detail type this crate does not model, e.g. `GroupLineDetail`.
    ///
    /// The object stored under the tag is kept as-is and written back on
    /// serialization.
    Other {
        detail_type: String,
        detail: Option<Value>,
    },
}

impl LineDetail {
    /// The `DetailType` tag written for this detail.
    #[must_use]
    pub fn detail_type(&self) -> &str {
        match self {
            Self::SalesItem(_) => detail_type::SALES_ITEM,
            Self::Tax(_) => detail_type::TAX,
            Self::Discount(_) => detail_type::DISCOUNT,
            Self::JournalEntry(_) => detail_type::JOURNAL_ENTRY,
            Self::AccountBasedExpense(_) => detail_type::ACCOUNT_BASED_EXPENSE,
            Self::ItemBasedExpense(_) => detail_type::ITEM_BASED_EXPENSE,
            Self::Deposit(_) => detail_type::DEPOSIT,
            Self::SubTotal(_) => detail_type::SUB_TOTAL,
            Self::DescriptionOnly(_) => detail_type::DESCRIPTION_ONLY,
            Self::Other { detail_type, .. } => detail_type.as_str(),
        }
    }
}

/// A transaction line.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Line {
    pub id: Option<String>,
    pub line_num: Option<u32>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    /// Transactions this line applies to, e.g. on payment and deposit lines.
    pub linked_txn: Option<Vec<LinkedTxn>>,
    pub detail: LineDetail,
}

impl Line {
    /// A line with just an amount and a detail.
    #[must_use]
    pub const fn new(amount: Decimal, detail: LineDetail) -> Self {
        Self {
            id: None,
            line_num: None,
            description: None,
            amount: Some(amount),
            linked_txn: None,
            detail,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Wire form of a modelled [`Line`]: the tag plus one optional slot per
/// detail type.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LineRepr {
    id: Option<String>,
    line_num: Option<u32>,
    description: Option<String>,
    amount: Option<Decimal>,
    linked_txn: Option<Vec<LinkedTxn>>,
    detail_type: String,
    sales_item_line_detail: Option<SalesItemLineDetail>,
    tax_line_detail: Option<TaxLineDetail>,
    discount_line_detail: Option<DiscountLineDetail>,
    journal_entry_line_detail: Option<JournalEntryLineDetail>,
    account_based_expense_line_detail: Option<AccountBasedExpenseLineDetail>,
    item_based_expense_line_detail: Option<ItemBasedExpenseLineDetail>,
    deposit_line_detail: Option<DepositLineDetail>,
    sub_total_line_detail: Option<SubTotalLineDetail>,
    description_line_detail: Option<DescriptionLineDetail>,
}

/// Key of the detail object for a `DescriptionOnly` line.
const DESCRIPTION_LINE_DETAIL: &str = "DescriptionLineDetail";

fn present<T>(slot: Option<T>, tag: &str) -> Result<T, String> {
    slot.ok_or_else(|| format!("line with DetailType '{tag}' has no {tag} object"))
}

impl LineRepr {
    fn into_line(self, other_detail: Option<Value>) -> Result<Line, String> {
        let tag = self.detail_type.as_str();
        let detail = match tag {
            detail_type::SALES_ITEM => {
                LineDetail::SalesItem(present(self.sales_item_line_detail, tag)?)
            }
            detail_type::TAX => LineDetail::Tax(present(self.tax_line_detail, tag)?),
            detail_type::DISCOUNT => LineDetail::Discount(present(self.discount_line_detail, tag)?),
            detail_type::JOURNAL_ENTRY => {
                LineDetail::JournalEntry(present(self.journal_entry_line_detail, tag)?)
            }
            detail_type::ACCOUNT_BASED_EXPENSE => LineDetail::AccountBasedExpense(present(
                self.account_based_expense_line_detail,
                tag,
            )?),
            detail_type::ITEM_BASED_EXPENSE => {
                LineDetail::ItemBasedExpense(present(self.item_based_expense_line_detail, tag)?)
            }
            detail_type::DEPOSIT => LineDetail::Deposit(present(self.deposit_line_detail, tag)?),
            // Subtotal and text lines often arrive without a detail object.
            detail_type::SUB_TOTAL => {
                LineDetail::SubTotal(self.sub_total_line_detail.unwrap_or_default())
            }
            detail_type::DESCRIPTION_ONLY => {
                LineDetail::DescriptionOnly(self.description_line_detail.unwrap_or_default())
            }
            other => LineDetail::Other {
                detail_type: other.to_string(),
                detail: other_detail,
            },
        };

        Ok(Line {
            id: self.id,
            line_num: self.line_num,
            description: self.description,
            amount: self.amount,
            linked_txn: self.linked_txn,
            detail,
        })
    }
}

impl TryFrom<Map<String, Value>> for Line {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        // An unmodelled tag names its own detail key; lift it out before the
        // typed decode.
        let unknown_tag = match fields.get("DetailType") {
            Some(Value::String(tag)) if !detail_type::ALL.contains(&tag.as_str()) => {
                Some(tag.clone())
            }
            _ => None,
        };
        let other_detail = unknown_tag.and_then(|tag| fields.remove(&tag));

        let repr: LineRepr =
            serde_json::from_value(Value::Object(fields)).map_err(|e| e.to_string())?;
        repr.into_line(other_detail)
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("Id", id)?;
        }
        if let Some(line_num) = &self.line_num {
            map.serialize_entry("LineNum", line_num)?;
        }
        if let Some(description) = &self.description {
            map.serialize_entry("Description", description)?;
        }
        if let Some(amount) = &self.amount {
            map.serialize_entry("Amount", amount)?;
        }
        if let Some(linked_txn) = &self.linked_txn {
            map.serialize_entry("LinkedTxn", linked_txn)?;
        }
        map.serialize_entry("DetailType", self.detail.detail_type())?;

        match &self.detail {
            LineDetail::SalesItem(d) => map.serialize_entry(detail_type::SALES_ITEM, d)?,
            LineDetail::Tax(d) => map.serialize_entry(detail_type::TAX, d)?,
            LineDetail::Discount(d) => map.serialize_entry(detail_type::DISCOUNT, d)?,
            LineDetail::JournalEntry(d) => map.serialize_entry(detail_type::JOURNAL_ENTRY, d)?,
            LineDetail::AccountBasedExpense(d) => {
                map.serialize_entry(detail_type::ACCOUNT_BASED_EXPENSE, d)?;
            }
            LineDetail::ItemBasedExpense(d) => {
                map.serialize_entry(detail_type::ITEM_BASED_EXPENSE, d)?;
            }
            LineDetail::Deposit(d) => map.serialize_entry(detail_type::DEPOSIT, d)?,
            LineDetail::SubTotal(d) => map.serialize_entry(detail_type::SUB_TOTAL, d)?,
            LineDetail::DescriptionOnly(d) => map.serialize_entry(DESCRIPTION_LINE_DETAIL, d)?,
            LineDetail::Other {
                detail_type,
                detail: Some(d),
            } => map.serialize_entry(detail_type, d)?,
            LineDetail::Other { detail: None, .. } => {}
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_decodes_account_based_expense_line() {
        let line: Line = serde_json::from_value(json!({
            "Id": "1",
            "LineNum": 1,
            "Amount": 103.55,
            "DetailType": "AccountBasedExpenseLineDetail",
            "AccountBasedExpenseLineDetail": {
                "AccountRef": {"value": "7", "name": "Job Expenses:Job Materials"},
                "BillableStatus": "NotBillable"
            }
        }))
        .unwrap();

        assert_eq!(line.id.as_deref(), Some("1"));
        assert_eq!(line.amount, Some(dec("103.55")));
        match line.detail {
            LineDetail::AccountBasedExpense(detail) => {
                assert_eq!(detail.account_ref.unwrap().value, "7");
                assert_eq!(detail.billable_status.as_deref(), Some("NotBillable"));
            }
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn test_subtotal_without_detail_object() {
        let line: Line = serde_json::from_value(json!({
            "Amount": 335.25,
            "DetailType": "SubTotalLineDetail",
            "SubTotalLineDetail": {}
        }))
        .unwrap();
        assert_eq!(line.detail, LineDetail::SubTotal(SubTotalLineDetail::default()));

        let line: Line =
            serde_json::from_value(json!({"Description": "Thanks!", "DetailType": "DescriptionOnly"}))
                .unwrap();
        assert!(matches!(line.detail, LineDetail::DescriptionOnly(_)));
    }

    #[test]
    fn test_unknown_detail_type_is_kept_and_written_back() {
        let wire = json!({
            "Id": "3",
            "LineNum": 2,
            "Amount": 240.5,
            "DetailType": "GroupLineDetail",
            "GroupLineDetail": {
                "GroupItemRef": {"value": "21", "name": "Deck Kit"},
                "Quantity": 1
            }
        });

        let line: Line = serde_json::from_value(wire).unwrap();
        assert_eq!(line.id.as_deref(), Some("3"));
        assert_eq!(line.amount, Some(dec("240.5")));
        assert_eq!(line.detail.detail_type(), "GroupLineDetail");
        match &line.detail {
            LineDetail::Other { detail_type, detail } => {
                assert_eq!(detail_type, "GroupLineDetail");
                let detail = detail.as_ref().unwrap();
                assert_eq!(detail["GroupItemRef"]["value"], "21");
            }
            other => panic!("unexpected detail {other:?}"),
        }

        let json = serde_json::to_value(&line).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(json["DetailType"], "GroupLineDetail");
        assert_eq!(json["Amount"].to_string(), "240.5");
        assert_eq!(json["GroupLineDetail"]["GroupItemRef"]["name"], "Deck Kit");
        assert_eq!(json["GroupLineDetail"]["Quantity"].to_string(), "1");

        let again: Line = serde_json::from_value(json).unwrap();
        assert_eq!(again, line);
    }

    #[test]
    fn test_unknown_detail_type_without_object() {
        let line: Line =
            serde_json::from_value(json!({"Amount": 0, "DetailType": "GroupLineDetail"})).unwrap();
        assert_eq!(
            line.detail,
            LineDetail::Other {
                detail_type: "GroupLineDetail".to_string(),
                detail: None,
            }
        );

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_detail_object_is_error() {
        let result: Result<Line, _> =
            serde_json::from_value(json!({"Amount": 10, "DetailType": "SalesItemLineDetail"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_tag_and_single_detail() {
        let line = Line::new(
            dec("100.00"),
            LineDetail::JournalEntry(JournalEntryLineDetail {
                posting_type: PostingType::Debit,
                account_ref: ReferenceType::new("39"),
                entity: None,
                class_ref: None,
                department_ref: None,
                tax_code_ref: None,
                tax_applicable_on: None,
                tax_amount: None,
            }),
        )
        .with_description("nov portion of rider insurance");

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 4);
        assert_eq!(json["Description"], "nov portion of rider insurance");
        assert_eq!(json["Amount"].to_string(), "100.00");
        assert_eq!(json["DetailType"], "JournalEntryLineDetail");
        assert_eq!(
            json["JournalEntryLineDetail"],
            json!({"PostingType": "Debit", "AccountRef": {"value": "39"}})
        );
    }
}
