use std::time::Duration;

pub const SONAR_WEB_API_PATH_PROJECT_STATUS: &str = "api/qualitygates/project_status";
pub const SONAR_WEB_API_PATH_CE_TASK: &str = "api/ce/task";

pub const DEFAULT_HOST_URL: &str = "http://localhost:9000";
pub const DEFAULT_BUILD_DIR: &str = "target";
pub const DEFAULT_CHECK_TASK_ATTEMPTS: u32 = 10;
pub const DEFAULT_CHECK_TASK_INTERVAL_SECS: u64 = 5;
pub const REQUEST_TIMEOUT_MINUTES: u64 = 1;

pub const SONAR_TOKEN_ENV: &str = "SONAR_TOKEN";
pub const SONAR_HOST_URL_ENV: &str = "SONAR_HOST_URL";

pub const CONFIG_FILE_NAME: &str = "sonar-quality-gate.toml";
pub const HOME_CONFIG_DIR: &str = ".sonar-quality-gate";
pub const HOME_CONFIG_FILE_NAME: &str = "config.toml";

pub const REPORT_TASK_DIR: &str = "sonar";
pub const REPORT_TASK_FILE_NAME: &str = "report-task.txt";
pub const REPORT_TASK_KEY_CE_TASK_ID: &str = "ceTaskId";

pub fn timeout_duration(minutes: u64) -> Duration {
    Duration::from_secs(minutes * 60)
}

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
