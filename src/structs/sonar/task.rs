use serde::{Deserialize, Serialize};
use crate::enums::task_status::TaskStatus;

/// Compute engine task, see `ws-ce.proto` of SonarQube.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub status: TaskStatus,

    #[serde(default)]
    pub analysis_id: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub component_key: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,
}
