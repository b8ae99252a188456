use std::process::ExitCode;
use clap::Parser;
use sonar_quality_gate::structs::cli::Cli;
use sonar_quality_gate::workers::command_runner::CommandRunner;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = format!("warn,sonar_quality_gate={}", level);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match CommandRunner::new().run_command(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        // a failed gate carries no cause chain
        Err(e) if e.is_gate_failure() => {
            log::error!("🚦 {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("❌ {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
