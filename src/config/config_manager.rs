use std::fs;
use std::path::{Path, PathBuf};
use url::Url;
use crate::config::constants::{
    CONFIG_FILE_NAME, HOME_CONFIG_DIR, HOME_CONFIG_FILE_NAME, SONAR_HOST_URL_ENV, SONAR_TOKEN_ENV,
};
use crate::enums::commands::CheckArgs;
use crate::errors::{GateError, GateResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::helpers::string_helper::{is_blank, non_blank};
use crate::structs::config::config::Config;
use crate::structs::config::gate_settings::GateSettings;

const SAMPLE_CONFIG: &str = r#"# sonar-quality-gate configuration
# Command-line flags override every value in this file.

# Sonar host url (falls back to $SONAR_HOST_URL, then http://localhost:9000)
host_url = "http://localhost:9000"

# Project key used inside sonar
project_key = "com.example:my-project"

# Login name or token (falls back to $SONAR_TOKEN)
# login = "squ_0123456789abcdef"
# password = ""

# Check a branch or a pull request instead of the last analysis ("advanced" mode)
# branch = "develop"
# pull_request = "42"

# Skip the check entirely
skip = false

# Fail when the quality gate is not passed, otherwise only warn
fail_on_miss = true

# How often to request the analysis task before giving up, and the pause in between
check_task_attempts = 10
check_task_interval_secs = 5

# Directory holding sonar/report-task.txt of a previous scanner run
build_dir = "target"
"#;

pub struct ConfigManager;

impl ConfigManager {

    /// Load the config file. An explicit path must exist; the default
    /// locations are optional.
    pub fn load(explicit_path: Option<&Path>) -> GateResult<Config> {
        let path = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(GateError::config_error(format!(
                        "configuration file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::default_locations().into_iter().find(|p| p.exists()),
        };

        match path {
            Some(path) => {
                log::debug!("📋 Loading config from: {}", path.display());
                let content = fs::read_to_string(&path).map_err(|e| {
                    GateError::config_error(format!("cannot read '{}': {}", path.display(), e))
                })?;
                Ok(toml::from_str(&content)?)
            }
            None => Ok(Config::default()),
        }
    }

    fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(HOME_CONFIG_DIR).join(HOME_CONFIG_FILE_NAME));
        }
        locations
    }

    pub fn create_sample_config(path: &Path) -> GateResult<()> {
        if path.exists() {
            return Err(GateError::config_error(format!(
                "'{}' already exists, refusing to overwrite it",
                path.display()
            )));
        }
        fs::write(path, SAMPLE_CONFIG)
            .map_err(|e| GateError::config_error(format!("cannot write '{}': {}", path.display(), e)))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    /// Merge flags, config file and environment into validated settings.
    pub fn resolve(args: &CheckArgs, file: Config) -> GateResult<GateSettings> {
        Self::resolve_with_env(args, file, |key| std::env::var(key).ok())
    }

    pub fn resolve_with_env<F>(args: &CheckArgs, file: Config, env: F) -> GateResult<GateSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_url = non_blank(args.host_url.clone())
            .or_else(|| non_blank(file.host_url))
            .or_else(|| non_blank(env(SONAR_HOST_URL_ENV)))
            .unwrap_or_else(ConfigHelper::default_host_url);

        let settings = GateSettings {
            host_url: Self::parse_host_url(&host_url)?,
            project_key: non_blank(args.project_key.clone())
                .or_else(|| non_blank(file.project_key))
                .unwrap_or_default(),
            login: non_blank(args.login.clone())
                .or_else(|| non_blank(file.login))
                .or_else(|| non_blank(env(SONAR_TOKEN_ENV))),
            password: non_blank(args.password.clone()).or_else(|| non_blank(file.password)),
            branch: non_blank(args.branch.clone()).or_else(|| non_blank(file.branch)),
            pull_request: non_blank(args.pull_request.clone()).or_else(|| non_blank(file.pull_request)),
            skip: args.skip || file.skip.unwrap_or(false),
            fail_on_miss: !args.no_fail_on_miss
                && file.fail_on_miss.unwrap_or_else(ConfigHelper::default_fail_on_miss),
            check_task_attempts: args
                .check_task_attempts
                .or(file.check_task_attempts)
                .unwrap_or_else(ConfigHelper::default_check_task_attempts),
            check_task_interval_secs: args
                .check_task_interval
                .or(file.check_task_interval_secs)
                .unwrap_or_else(ConfigHelper::default_check_task_interval_secs),
            build_dir: args
                .build_dir
                .clone()
                .or(file.build_dir)
                .unwrap_or_else(ConfigHelper::default_build_dir),
        };

        // a skipped check never talks to the server
        if !settings.skip {
            Self::validate(&settings)?;
        }
        Ok(settings)
    }

    fn parse_host_url(host_url: &str) -> GateResult<Url> {
        let url = Url::parse(host_url)
            .map_err(|e| GateError::config_error(format!("invalid sonar host url '{}': {}", host_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(GateError::config_error(format!("invalid sonar host url '{}'", host_url)));
        }
        Ok(url)
    }

    pub fn validate(settings: &GateSettings) -> GateResult<()> {
        if is_blank(settings.login.as_deref()) && !is_blank(settings.password.as_deref()) {
            return Err(GateError::config_error("you cannot specify 'sonar.password' without 'sonar.login'"));
        }
        if is_blank(Some(settings.project_key.as_str())) {
            return Err(GateError::config_error(
                "no project key configured, use --project-key or 'project_key' in the config file",
            ));
        }
        if !is_blank(settings.branch.as_deref()) && !is_blank(settings.pull_request.as_deref()) {
            return Err(GateError::config_error("you cannot specify both a branch and a pull request"));
        }
        Ok(())
    }
}
