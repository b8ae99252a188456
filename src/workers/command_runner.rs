use std::future::Future;
use std::io;
use std::path::Path;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::CONFIG_FILE_NAME;
use crate::enums::check_outcome::CheckOutcome;
use crate::enums::commands::{CheckArgs, Commands};
use crate::errors::{GateError, GateResult};
use crate::services::mode_selector::ModeSelector;
use crate::services::quality_gate_check::QualityGateCheck;
use crate::services::report_task_reader::ReportTaskReader;
use crate::services::sonar_client::SonarClient;
use crate::structs::config::gate_settings::GateSettings;
use crate::traits::sleeper::TokioSleeper;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    /// Run `command` until it finishes or Ctrl-C is pressed, whichever comes
    /// first. One listener covers every await point of the command.
    pub async fn run_command(&mut self, command: Commands) -> GateResult<()> {
        self.start_time = Some(Instant::now());

        let result = until_interrupted(self.dispatch(command), tokio::signal::ctrl_c()).await;

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn dispatch(&self, command: Commands) -> GateResult<()> {
        match command {
            Commands::Check(args) => self.check_command(&args).await.map(|_| ()),
            Commands::Init => self.init_command(),
            Commands::Validate(args) => self.validate_command(&args),
        }
    }

    fn load_settings(args: &CheckArgs) -> GateResult<GateSettings> {
        let config = ConfigManager::load(args.config.as_deref())?;
        ConfigManager::resolve(args, config)
    }

    async fn check_command(&self, args: &CheckArgs) -> GateResult<CheckOutcome> {
        let settings = Self::load_settings(args)?;
        log::debug!("{:?}", settings);

        let client = SonarClient::from_settings(&settings)?;
        let handles = ReportTaskReader::new(&settings.build_dir);

        QualityGateCheck::new(&settings, &client, &handles, &TokioSleeper).run().await
    }

    fn init_command(&self) -> GateResult<()> {
        log::info!("🚀 Initializing sonar-quality-gate configuration...");
        ConfigManager::create_sample_config(Path::new(CONFIG_FILE_NAME))?;
        log::info!("📝 Edit the configuration file to set your project key and credentials.");
        log::info!("🔧 Run 'sonar-quality-gate validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self, args: &CheckArgs) -> GateResult<()> {
        log::info!("🔍 Validating sonar-quality-gate configuration...");

        let settings = Self::load_settings(args)?;
        log::info!("✅ Configuration is valid");
        log::info!("   🌐 Host: {}", settings.host_url);
        log::info!("   📦 Project: {}", settings.project_key);
        log::info!("   🔑 Authentication: {}", if settings.login.is_some() { "yes" } else { "no" });
        log::info!(
            "   🔁 Task check: {} attempts every {}s",
            settings.check_task_attempts,
            settings.check_task_interval_secs
        );
        log::info!("   🚦 Fail on miss: {}", settings.fail_on_miss);

        if settings.skip {
            log::info!("⏭️ The check is configured to be skipped");
            return Ok(());
        }

        let handles = ReportTaskReader::new(&settings.build_dir);
        log::info!("   📄 Report task file: {}", handles.report_task_path().display());
        let mode = ModeSelector::select(
            &settings.project_key,
            settings.branch.as_deref(),
            settings.pull_request.as_deref(),
            &handles,
        )?;
        log::info!("   🎯 Mode: {}", mode.name());
        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive `work` to completion unless `interrupt` fires first. A listener that
/// fails to install does not cancel the work.
pub async fn until_interrupted<W, I>(work: W, interrupt: I) -> GateResult<()>
where
    W: Future<Output = GateResult<()>>,
    I: Future<Output = io::Result<()>>,
{
    tokio::select! {
        result = work => result,
        Ok(()) = interrupt => Err(GateError::interrupted("running the command")),
    }
}
