use serde::{Deserialize, Serialize};

/// A link to another transaction, e.g. the invoice a payment line settles.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LinkedTxn {
    #[serde(rename = "TxnId")]
    pub txn_id: String,

    /// The linked transaction's type, e.g. `"Invoice"`.
    #[serde(rename = "TxnType")]
    pub txn_type: String,

    #[serde(rename = "TxnLineId", skip_serializing_if = "Option::is_none")]
    pub txn_line_id: Option<String>,
}

impl LinkedTxn {
    #[must_use]
    pub fn new(txn_id: impl Into<String>, txn_type: impl Into<String>) -> Self {
        Self {
            txn_id: txn_id.into(),
            txn_type: txn_type.into(),
            txn_line_id: None,
        }
    }
}
