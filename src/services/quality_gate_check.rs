use crate::enums::check_outcome::CheckOutcome;
use crate::enums::resolution_mode::{ResolutionMode, StatusQuery};
use crate::errors::{GateError, GateResult};
use crate::logger::gate_report_logger::GateReportLogger;
use crate::services::mode_selector::ModeSelector;
use crate::services::status_evaluator::StatusEvaluator;
use crate::services::task_poller::TaskPoller;
use crate::structs::config::gate_settings::GateSettings;
use crate::traits::sleeper::Sleeper;
use crate::traits::sonar_api::SonarApi;
use crate::traits::task_handle_source::TaskHandleSource;

/// One quality gate check: pick the mode, resolve the analysis if needed,
/// fetch the project status and judge it.
pub struct QualityGateCheck<'a> {
    settings: &'a GateSettings,
    api: &'a dyn SonarApi,
    handles: &'a dyn TaskHandleSource,
    sleeper: &'a dyn Sleeper,
}

impl<'a> QualityGateCheck<'a> {
    pub fn new(
        settings: &'a GateSettings,
        api: &'a dyn SonarApi,
        handles: &'a dyn TaskHandleSource,
        sleeper: &'a dyn Sleeper,
    ) -> Self {
        Self {
            settings,
            api,
            handles,
            sleeper,
        }
    }

    pub async fn run(&self) -> GateResult<CheckOutcome> {
        if self.settings.skip {
            log::info!("⏭️ skipped");
            return Ok(CheckOutcome::Skipped);
        }

        let mode = ModeSelector::select(
            &self.settings.project_key,
            self.settings.branch.as_deref(),
            self.settings.pull_request.as_deref(),
            self.handles,
        )?;
        let query = self.status_query(mode).await?;

        let project_status = self.api.fetch_project_status(&query).await?;
        let verdict = StatusEvaluator::evaluate(&project_status);
        GateReportLogger::print_verdict(&verdict);

        if verdict.passed {
            return Ok(CheckOutcome::Passed(verdict));
        }

        GateReportLogger::print_conditions(&project_status);
        if self.settings.fail_on_miss {
            Err(GateError::QualityGateNotPassed {
                status: verdict.status,
                failed_conditions: verdict.summary,
            })
        } else {
            log::warn!("{}", verdict.failure_message());
            Ok(CheckOutcome::NotPassed(verdict))
        }
    }

    async fn status_query(&self, mode: ResolutionMode) -> GateResult<StatusQuery> {
        let query = match mode {
            ResolutionMode::Integrated { task_handle } => {
                let poller = TaskPoller::new(
                    self.api,
                    self.sleeper,
                    self.settings.check_task_attempts,
                    self.settings.check_task_interval_secs,
                );
                StatusQuery::AnalysisId(poller.resolve(&task_handle).await?)
            }
            ResolutionMode::Simple { project_key } => StatusQuery::Project { project_key, target: None },
            ResolutionMode::Advanced { project_key, target } => StatusQuery::Project {
                project_key,
                target: Some(target),
            },
        };
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use url::Url;
    use crate::enums::gate_status::GateStatus;
    use crate::enums::resolution_mode::ProjectTarget;
    use crate::enums::task_status::TaskStatus;
    use crate::structs::sonar::condition::Condition;
    use crate::structs::sonar::project_status::ProjectStatus;
    use crate::structs::sonar::task::Task;
    use crate::traits::sleeper::MockSleeper;
    use crate::traits::sonar_api::MockSonarApi;
    use crate::traits::task_handle_source::MockTaskHandleSource;

    fn settings() -> GateSettings {
        GateSettings {
            host_url: Url::parse("http://localhost:9000").unwrap(),
            project_key: "proj".to_string(),
            login: None,
            password: None,
            branch: None,
            pull_request: None,
            skip: false,
            fail_on_miss: true,
            check_task_attempts: 10,
            check_task_interval_secs: 5,
            build_dir: PathBuf::from("target"),
        }
    }

    fn failing_status() -> ProjectStatus {
        ProjectStatus {
            status: GateStatus::Error,
            ignored_conditions: false,
            conditions: vec![
                Condition::new(GateStatus::Ok, "a"),
                Condition::new(GateStatus::Error, "b"),
                Condition::new(GateStatus::None, "c"),
            ],
        }
    }

    fn ok_status() -> ProjectStatus {
        ProjectStatus {
            status: GateStatus::Ok,
            ignored_conditions: false,
            conditions: vec![],
        }
    }

    fn no_handle() -> MockTaskHandleSource {
        let mut handles = MockTaskHandleSource::new();
        handles.expect_find_task_handle().returning(|| Ok(None));
        handles
    }

    #[tokio::test]
    async fn skip_makes_no_calls() {
        let settings = GateSettings { skip: true, ..settings() };
        let api = MockSonarApi::new();
        let mut handles = MockTaskHandleSource::new();
        handles.expect_find_task_handle().never();
        let sleeper = MockSleeper::new();

        let outcome = QualityGateCheck::new(&settings, &api, &handles, &sleeper).run().await.unwrap();
        assert_eq!(outcome, CheckOutcome::Skipped);
    }

    #[tokio::test]
    async fn simple_mode_queries_by_project_key() {
        let settings = settings();
        let mut api = MockSonarApi::new();
        api.expect_fetch_task().never();
        api.expect_fetch_project_status()
            .withf(|query| *query == StatusQuery::Project { project_key: "proj".to_string(), target: None })
            .times(1)
            .returning(|_| Ok(ok_status()));
        let sleeper = MockSleeper::new();

        let outcome = QualityGateCheck::new(&settings, &api, &no_handle(), &sleeper).run().await.unwrap();
        assert!(matches!(outcome, CheckOutcome::Passed(verdict) if verdict.status == GateStatus::Ok));
    }

    #[tokio::test]
    async fn integrated_mode_queries_by_resolved_analysis_id() {
        let settings = settings();
        let mut handles = MockTaskHandleSource::new();
        handles.expect_find_task_handle().returning(|| Ok(Some("T1".to_string())));
        let mut api = MockSonarApi::new();
        let mut calls = 0;
        api.expect_fetch_task().times(2).returning(move |_| {
            calls += 1;
            Ok(Task {
                status: if calls == 1 { TaskStatus::Pending } else { TaskStatus::Success },
                analysis_id: if calls == 1 { None } else { Some("AN-1".to_string()) },
                id: Some("T1".to_string()),
                component_key: None,
                error_message: None,
            })
        });
        api.expect_fetch_project_status()
            .withf(|query| *query == StatusQuery::AnalysisId("AN-1".to_string()))
            .times(1)
            .returning(|_| Ok(ok_status()));
        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().times(1).returning(|_| Ok(()));

        let outcome = QualityGateCheck::new(&settings, &api, &handles, &sleeper).run().await.unwrap();
        assert!(matches!(outcome, CheckOutcome::Passed(_)));
    }

    #[tokio::test]
    async fn advanced_mode_ignores_task_handle() {
        let settings = GateSettings { branch: Some("develop".to_string()), ..settings() };
        let mut handles = MockTaskHandleSource::new();
        handles.expect_find_task_handle().never();
        let mut api = MockSonarApi::new();
        api.expect_fetch_project_status()
            .withf(|query| {
                *query
                    == StatusQuery::Project {
                        project_key: "proj".to_string(),
                        target: Some(ProjectTarget::Branch("develop".to_string())),
                    }
            })
            .times(1)
            .returning(|_| Ok(ok_status()));
        let sleeper = MockSleeper::new();

        let outcome = QualityGateCheck::new(&settings, &api, &handles, &sleeper).run().await.unwrap();
        assert!(matches!(outcome, CheckOutcome::Passed(_)));
    }

    #[tokio::test]
    async fn failed_gate_is_an_error_by_default() {
        let settings = settings();
        let mut api = MockSonarApi::new();
        api.expect_fetch_project_status().returning(|_| Ok(failing_status()));
        let sleeper = MockSleeper::new();

        let error = QualityGateCheck::new(&settings, &api, &no_handle(), &sleeper).run().await.unwrap_err();
        assert_eq!(error.to_string(), "Quality Gate not passed (status: ERROR)! Failed metric(s): b:ERROR");
    }

    #[tokio::test]
    async fn failed_gate_only_warns_without_fail_on_miss() {
        let settings = GateSettings { fail_on_miss: false, ..settings() };
        let mut api = MockSonarApi::new();
        api.expect_fetch_project_status().returning(|_| Ok(failing_status()));
        let sleeper = MockSleeper::new();

        let outcome = QualityGateCheck::new(&settings, &api, &no_handle(), &sleeper).run().await.unwrap();
        match outcome {
            CheckOutcome::NotPassed(verdict) => assert_eq!(verdict.summary, "b:ERROR"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn resolution_errors_stop_before_status_query() {
        let settings = settings();
        let mut handles = MockTaskHandleSource::new();
        handles.expect_find_task_handle().returning(|| Ok(Some("T1".to_string())));
        let mut api = MockSonarApi::new();
        api.expect_fetch_task().times(1).returning(|_| {
            Ok(Task {
                status: TaskStatus::Canceled,
                analysis_id: None,
                id: None,
                component_key: None,
                error_message: None,
            })
        });
        api.expect_fetch_project_status().never();
        let sleeper = MockSleeper::new();

        let error = QualityGateCheck::new(&settings, &api, &handles, &sleeper).run().await.unwrap_err();
        assert!(matches!(error, GateError::UnsuitableTaskStatus { status: TaskStatus::Canceled }));
    }
}
