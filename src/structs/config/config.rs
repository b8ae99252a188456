use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Contents of `sonar-quality-gate.toml`. Every key is optional; command-line
/// flags take precedence over the values found here.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub host_url: Option<String>,

    #[serde(default)]
    pub project_key: Option<String>,

    #[serde(default)]
    pub login: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default)]
    pub pull_request: Option<String>,

    #[serde(default)]
    pub skip: Option<bool>,

    #[serde(default)]
    pub fail_on_miss: Option<bool>,

    #[serde(default)]
    pub check_task_attempts: Option<u32>,

    #[serde(default)]
    pub check_task_interval_secs: Option<u64>,

    #[serde(default)]
    pub build_dir: Option<PathBuf>,
}
