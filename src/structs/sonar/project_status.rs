use serde::{Deserialize, Serialize};
use crate::enums::gate_status::GateStatus;
use crate::structs::sonar::condition::Condition;

/// Quality gate status of one analysis, see `ws-qualitygates.proto` of SonarQube.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    pub status: GateStatus,

    #[serde(default)]
    pub ignored_conditions: bool,

    #[serde(default)]
    pub conditions: Vec<Condition>,
}
