use std::time::Duration;
use async_trait::async_trait;
use crate::errors::GateResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for `duration`. An interruption ends the wait with an error.
    async fn sleep(&self, duration: Duration) -> GateResult<()>;
}

/// Sleeps on the tokio timer. Ctrl-C is handled around the whole command,
/// see `CommandRunner::run_command`.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) -> GateResult<()> {
        tokio::time::sleep(duration).await;
        Ok(())
    }
}
