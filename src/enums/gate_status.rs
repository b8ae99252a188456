use std::fmt;
use serde::{Deserialize, Serialize};

/// Verdict of a quality gate or of one of its conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateStatus {
    Ok,
    Warn,
    Error,
    None,
}

impl GateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::None => "NONE",
        }
    }

    /// `NONE` marks a condition that does not apply, so it never counts as failing.
    pub fn is_failing(&self) -> bool {
        !matches!(self, Self::Ok | Self::None)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Ok => "✅",
            Self::Warn => "⚠️",
            Self::Error => "❌",
            Self::None => "➖",
        }
    }
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_and_error_are_failing() {
        assert!(GateStatus::Warn.is_failing());
        assert!(GateStatus::Error.is_failing());
        assert!(!GateStatus::Ok.is_failing());
        assert!(!GateStatus::None.is_failing());
    }

    #[test]
    fn deserializes_wire_names() {
        let statuses: Vec<GateStatus> = serde_json::from_str(r#"["OK","WARN","ERROR","NONE"]"#).unwrap();
        assert_eq!(statuses, vec![GateStatus::Ok, GateStatus::Warn, GateStatus::Error, GateStatus::None]);
    }
}
