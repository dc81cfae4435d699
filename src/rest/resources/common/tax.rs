use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Line, ReferenceType};

/// Tax summary of a sales or purchase transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TxnTaxDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_tax_code_ref: Option<ReferenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,

    /// One `TaxLineDetail` line per applied rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_line: Option<Vec<Line>>,
}
