use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Creation and last-modification timestamps. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MetaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<FixedOffset>>,
}
