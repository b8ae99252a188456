use crate::errors::GateResult;

/// Finds the compute engine task handle left behind by a previous scanner run.
#[cfg_attr(test, mockall::automock)]
pub trait TaskHandleSource: Send + Sync {
    fn find_task_handle(&self) -> GateResult<Option<String>>;
}
