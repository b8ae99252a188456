use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;
use crate::enums::gate_status::GateStatus;
use crate::enums::task_status::TaskStatus;

#[derive(Debug, Error)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // Network/API errors
    #[error("Error reading from Sonar: {uri}")]
    Transport {
        uri: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Bad status code '{status}' returned from '{uri}' - Body: {body}")]
    Protocol { status: u16, uri: String, body: String },

    // Decode errors
    #[error("Error parsing response into '{target}': {body}")]
    MalformedResponse {
        target: &'static str,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Error parsing response into '{target}' - no content: {body}")]
    MissingContent { target: &'static str, body: String },

    // Task resolution errors
    #[error("Cannot determine analysis id - unsuitable task status: {status}")]
    UnsuitableTaskStatus { status: TaskStatus },
    #[error(
        "Could not fetch analysis id within {attempts} requests with an interval of {interval_secs} seconds \
         (last status: {last_status}). Please increase the values 'check-task-attempts' and/or \
         'check-task-interval' to fit your projects needs."
    )]
    AttemptsExhausted { attempts: u32, interval_secs: u64, last_status: TaskStatus },
    #[error("Invalid response from Sonar: {message}")]
    InvalidResponse { message: String },
    #[error("Interrupted while {during}")]
    Interrupted { during: String },

    // Report task discovery errors
    #[error("Error reading report task file '{}': {reason}", .path.display())]
    ReportTask { path: PathBuf, reason: String },

    // Verdict
    #[error("Quality Gate not passed (status: {status})! Failed metric(s): {failed_conditions}")]
    QualityGateNotPassed { status: GateStatus, failed_conditions: String },
}

impl GateError {
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub fn report_task_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ReportTask { path: path.into(), reason: reason.into() }
    }

    pub fn interrupted(during: &str) -> Self {
        Self::Interrupted { during: during.to_string() }
    }

    /// A failed quality gate is the only error that is an expected outcome of a check.
    pub fn is_gate_failure(&self) -> bool {
        matches!(self, Self::QualityGateNotPassed { .. })
    }

    /// Message including the chain of underlying causes.
    pub fn user_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = StdError::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = StdError::source(cause);
        }
        msg
    }
}

impl From<toml::de::Error> for GateError {
    fn from(error: toml::de::Error) -> Self {
        GateError::Configuration {
            message: format!("invalid configuration file: {}", error.message()),
        }
    }
}

/// Result type alias for quality gate operations
pub type GateResult<T> = Result<T, GateError>;
