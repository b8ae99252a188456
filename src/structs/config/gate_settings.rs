use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Fully resolved settings of one check run.
#[derive(Clone)]
pub struct GateSettings {
    pub host_url: Url,
    pub project_key: String,
    pub login: Option<String>,
    pub password: Option<String>,
    pub branch: Option<String>,
    pub pull_request: Option<String>,
    pub skip: bool,
    pub fail_on_miss: bool,
    pub check_task_attempts: u32,
    pub check_task_interval_secs: u64,
    pub build_dir: PathBuf,
}

// Credentials stay out of logs.
impl fmt::Debug for GateSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateSettings")
            .field("host_url", &self.host_url.as_str())
            .field("project_key", &self.project_key)
            .field("login", &self.login.as_ref().map(|_| "***"))
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("branch", &self.branch)
            .field("pull_request", &self.pull_request)
            .field("skip", &self.skip)
            .field("fail_on_miss", &self.fail_on_miss)
            .field("check_task_attempts", &self.check_task_attempts)
            .field("check_task_interval_secs", &self.check_task_interval_secs)
            .field("build_dir", &self.build_dir)
            .finish()
    }
}
