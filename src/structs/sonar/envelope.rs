//! Sonar wraps every payload in a single-key object (`{"task": {...}}`).
//! The envelopes below are decoded once and unwrapped right away.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use crate::errors::{GateError, GateResult};
use crate::structs::sonar::project_status::ProjectStatus;
use crate::structs::sonar::task::Task;

pub trait Envelope: DeserializeOwned {
    type Content;

    /// Name used in error messages.
    const NAME: &'static str;

    fn into_content(self) -> Option<Self::Content>;
}

#[derive(Debug, Deserialize)]
pub struct TaskEnvelope {
    #[serde(default)]
    task: Option<Task>,
}

impl Envelope for TaskEnvelope {
    type Content = Task;
    const NAME: &'static str = "TaskEnvelope";

    fn into_content(self) -> Option<Task> {
        self.task
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusEnvelope {
    #[serde(default)]
    project_status: Option<ProjectStatus>,
}

impl Envelope for ProjectStatusEnvelope {
    type Content = ProjectStatus;
    const NAME: &'static str = "ProjectStatusEnvelope";

    fn into_content(self) -> Option<ProjectStatus> {
        self.project_status
    }
}

/// Parse `json` into the envelope `E` and return its content.
pub fn parse_envelope<E: Envelope>(json: &str) -> GateResult<E::Content> {
    let envelope: E = serde_json::from_str(json).map_err(|source| GateError::MalformedResponse {
        target: E::NAME,
        body: json.to_string(),
        source,
    })?;

    envelope.into_content().ok_or_else(|| GateError::MissingContent {
        target: E::NAME,
        body: json.to_string(),
    })
}
