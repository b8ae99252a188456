use std::path::PathBuf;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Check the quality gate and fail if it is not passed
    Check(CheckArgs),
    /// Write a sample configuration file to the current directory
    Init,
    /// Validate the configuration without contacting the server
    Validate(CheckArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Sonar host url, e.g. http://localhost:9000
    #[clap(long)]
    pub host_url: Option<String>,
    /// Project key used inside sonar
    #[clap(short, long)]
    pub project_key: Option<String>,
    /// Sonar login name or token
    #[clap(long)]
    pub login: Option<String>,
    /// Password for the sonar login name
    #[clap(long)]
    pub password: Option<String>,
    /// Branch to check the quality gate for
    #[clap(short, long)]
    pub branch: Option<String>,
    /// Pull request to check the quality gate for
    #[clap(long)]
    pub pull_request: Option<String>,
    /// Skip the check
    #[clap(long)]
    pub skip: bool,
    /// Only warn when the quality gate is not passed
    #[clap(long)]
    pub no_fail_on_miss: bool,
    /// How often the task details are requested before giving up
    #[clap(long)]
    pub check_task_attempts: Option<u32>,
    /// Seconds to wait between two task detail requests
    #[clap(long)]
    pub check_task_interval: Option<u64>,
    /// Build directory holding sonar/report-task.txt
    #[clap(long)]
    pub build_dir: Option<PathBuf>,
    /// Configuration file to read instead of the default locations
    #[clap(short, long)]
    pub config: Option<PathBuf>,
}
