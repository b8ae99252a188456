use crate::enums::resolution_mode::{ProjectTarget, ResolutionMode};
use crate::errors::{GateError, GateResult};
use crate::helpers::string_helper::is_blank;
use crate::traits::task_handle_source::TaskHandleSource;

pub struct ModeSelector;

impl ModeSelector {
    /// Decide once per run how the quality gate gets resolved. A branch or
    /// pull request always wins; the task handle is only looked up otherwise.
    pub fn select(
        project_key: &str,
        branch: Option<&str>,
        pull_request: Option<&str>,
        handles: &dyn TaskHandleSource,
    ) -> GateResult<ResolutionMode> {
        let target = match (branch, pull_request) {
            (Some(b), Some(pr)) if !is_blank(Some(b)) && !is_blank(Some(pr)) => {
                return Err(GateError::config_error("you cannot specify both a branch and a pull request"));
            }
            (Some(b), _) if !is_blank(Some(b)) => Some(ProjectTarget::Branch(b.to_string())),
            (_, Some(pr)) if !is_blank(Some(pr)) => Some(ProjectTarget::PullRequest(pr.to_string())),
            _ => None,
        };

        let mode = match target {
            Some(target) => ResolutionMode::Advanced {
                project_key: project_key.to_string(),
                target,
            },
            None => match handles.find_task_handle()? {
                Some(task_handle) => ResolutionMode::Integrated { task_handle },
                None => ResolutionMode::Simple {
                    project_key: project_key.to_string(),
                },
            },
        };

        log::info!("🎯 Resolution mode: {}", mode);
        Ok(mode)
    }
}
