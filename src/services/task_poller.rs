use crate::config::constants::sleep_duration_secs;
use crate::enums::task_status::TaskStatus;
use crate::errors::{GateError, GateResult};
use crate::traits::sleeper::Sleeper;
use crate::traits::sonar_api::SonarApi;

/// Resolves a compute engine task handle into the id of the analysis it produced.
pub struct TaskPoller<'a> {
    api: &'a dyn SonarApi,
    sleeper: &'a dyn Sleeper,
    max_attempts: u32,
    interval_secs: u64,
}

impl<'a> TaskPoller<'a> {
    pub fn new(api: &'a dyn SonarApi, sleeper: &'a dyn Sleeper, max_attempts: u32, interval_secs: u64) -> Self {
        Self {
            api,
            sleeper,
            max_attempts,
            interval_secs,
        }
    }

    /// Poll the task until it is no longer ongoing. Only an ongoing status is
    /// retried; API errors and terminal failures end the loop right away.
    pub async fn resolve(&self, task_handle: &str) -> GateResult<String> {
        let mut attempts_left = self.max_attempts;
        let mut status = TaskStatus::InProgress;

        while status.is_ongoing() && attempts_left > 0 {
            attempts_left -= 1;

            let task = self.api.fetch_task(task_handle).await?;
            status = task.status;

            match status {
                TaskStatus::Success => {
                    return task.analysis_id.ok_or_else(|| GateError::InvalidResponse {
                        message: format!("task '{}' succeeded without an analysis id", task_handle),
                    });
                }
                TaskStatus::InProgress | TaskStatus::Pending => {
                    if attempts_left > 0 {
                        log::info!(
                            "Analysis in progress, next retry in {}s (attempts left: {})",
                            self.interval_secs,
                            attempts_left
                        );
                        self.sleeper.sleep(sleep_duration_secs(self.interval_secs)).await?;
                    }
                }
                TaskStatus::Canceled | TaskStatus::Failed => {
                    if let Some(error_message) = &task.error_message {
                        log::error!("task '{}' ended with: {}", task_handle, error_message);
                    }
                    return Err(GateError::UnsuitableTaskStatus { status });
                }
            }
        }

        Err(GateError::AttemptsExhausted {
            attempts: self.max_attempts,
            interval_secs: self.interval_secs,
            last_status: status,
        })
    }
}
