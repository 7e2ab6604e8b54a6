//! Mech Quickstart - launcher for the Mech autonomous agent service

use std::process::ExitCode;

use clap::Parser;
use mech_quickstart_cli::cli::Cli;
use mech_quickstart_cli::domain::LaunchError;
use mech_quickstart_cli::logging;
use mech_quickstart_cli::output::json;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let as_json = cli.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => report_error(&e, as_json),
    }
}

fn report_error(err: &anyhow::Error, as_json: bool) -> ExitCode {
    let code = err
        .downcast_ref::<LaunchError>()
        .map_or(1, LaunchError::exit_code);
    let message = format!("{err:#}");

    match json::format_error(&message, code) {
        Ok(obj) if as_json => println!("{obj}"),
        _ => eprintln!("Error: {message}"),
    }
    ExitCode::from(code)
}
