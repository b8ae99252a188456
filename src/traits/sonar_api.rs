use async_trait::async_trait;
use crate::enums::resolution_mode::StatusQuery;
use crate::errors::GateResult;
use crate::structs::sonar::project_status::ProjectStatus;
use crate::structs::sonar::task::Task;

/// Read access to the Sonar Web API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SonarApi: Send + Sync {

    /// `GET api/ce/task?id=<task_handle>`
    async fn fetch_task(&self, task_handle: &str) -> GateResult<Task>;

    /// `GET api/qualitygates/project_status` with the parameters of `query`
    async fn fetch_project_status(&self, query: &StatusQuery) -> GateResult<ProjectStatus>;
}
