use std::fmt;
use serde::{Deserialize, Serialize};

/// Status of a compute engine task as reported by `api/ce/task`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    InProgress,
    Pending,
    Success,
    Canceled,
    Failed,
}

impl TaskStatus {
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Self::InProgress | Self::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Canceled => "CANCELED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
