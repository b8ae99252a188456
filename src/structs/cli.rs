use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "sonar-quality-gate", version)]
#[clap(about = "Check the SonarQube quality gate of a project", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}
