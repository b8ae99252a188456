use crate::enums::gate_status::GateStatus;

/// Result of evaluating a project status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub status: GateStatus,
    /// Failing conditions as `metricKey:STATUS`, empty when passed.
    pub summary: String,
}

impl Verdict {
    pub fn failure_message(&self) -> String {
        format!("Quality Gate not passed (status: {})! Failed metric(s): {}", self.status, self.summary)
    }
}
