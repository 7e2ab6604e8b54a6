//! `mech-quickstart logs`: follow the service container's output.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ProcessHandoff;

/// Arguments for the logs command.
#[derive(Args, Debug, Default)]
pub struct LogsArgs {
    /// Number of lines to show from the end of the log
    #[arg(short = 'n', long)]
    pub tail: Option<u32>,

    /// Print the current log and exit instead of following it
    #[arg(long)]
    pub no_follow: bool,
}

/// Hand over to `docker logs` for the configured container.
///
/// # Errors
///
/// Returns an error if `docker` cannot be executed.
pub fn run(app: &AppContext, args: &LogsArgs) -> Result<ExitCode> {
    let argv = docker_logs_args(&app.config.service.container, args);
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
    app.handoff.handoff("docker", &argv)
}

/// Arguments passed to `docker` for the logs command.
#[must_use]
pub fn docker_logs_args(container: &str, args: &LogsArgs) -> Vec<String> {
    let mut argv = vec!["logs".to_string()];
    if !args.no_follow {
        argv.push("--follow".to_string());
    }
    if let Some(n) = args.tail {
        argv.push("--tail".to_string());
        argv.push(n.to_string());
    }
    argv.push(container.to_string());
    argv
}
