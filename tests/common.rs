use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use sonar_quality_gate::errors::GateResult;
use sonar_quality_gate::structs::config::gate_settings::GateSettings;
use sonar_quality_gate::traits::sleeper::Sleeper;
use url::Url;

/// Counts the pauses instead of waiting.
#[derive(Default)]
pub struct CountingSleeper {
    sleeps: AtomicUsize,
}

impl CountingSleeper {
    pub fn count(&self) -> usize {
        self.sleeps.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Sleeper for CountingSleeper {
    async fn sleep(&self, _duration: Duration) -> GateResult<()> {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn settings(base_url: &str, build_dir: &Path) -> GateSettings {
    GateSettings {
        host_url: Url::parse(base_url).unwrap(),
        project_key: "proj".to_string(),
        login: None,
        password: None,
        branch: None,
        pull_request: None,
        skip: false,
        fail_on_miss: true,
        check_task_attempts: 10,
        check_task_interval_secs: 5,
        build_dir: build_dir.to_path_buf(),
    }
}

pub fn write_report_task(build_dir: &Path, ce_task_id: &str) {
    let sonar_dir = build_dir.join("sonar");
    std::fs::create_dir_all(&sonar_dir).unwrap();
    std::fs::write(
        sonar_dir.join("report-task.txt"),
        format!("projectKey=proj\nserverUrl=http://localhost:9000\nceTaskId={}\n", ce_task_id),
    )
    .unwrap();
}
