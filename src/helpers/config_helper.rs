use std::path::PathBuf;
use crate::config::constants::{
    DEFAULT_BUILD_DIR, DEFAULT_CHECK_TASK_ATTEMPTS, DEFAULT_CHECK_TASK_INTERVAL_SECS, DEFAULT_HOST_URL,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host_url() -> String {
        DEFAULT_HOST_URL.to_string()
    }

    pub fn default_fail_on_miss() -> bool {
        true
    }

    pub fn default_check_task_attempts() -> u32 {
        DEFAULT_CHECK_TASK_ATTEMPTS
    }

    pub fn default_check_task_interval_secs() -> u64 {
        DEFAULT_CHECK_TASK_INTERVAL_SECS
    }

    pub fn default_build_dir() -> PathBuf {
        PathBuf::from(DEFAULT_BUILD_DIR)
    }
}
