use serde::{Deserialize, Serialize};
use crate::enums::gate_status::GateStatus;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub status: GateStatus,
    pub metric_key: String,

    #[serde(default)]
    pub comparator: Option<String>,

    #[serde(default)]
    pub error_threshold: Option<String>,

    #[serde(default)]
    pub actual_value: Option<String>,
}

impl Condition {
    pub fn new(status: GateStatus, metric_key: &str) -> Self {
        Self {
            status,
            metric_key: metric_key.to_string(),
            comparator: None,
            error_threshold: None,
            actual_value: None,
        }
    }
}
