//! `mech-quickstart validate`: check the agent's configuration artifacts.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::validate::validate_artifacts;
use crate::output::human::HumanRenderer;
use crate::output::json;

/// Arguments for the validate command.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Metadata-hash descriptor to check [default: from config]
    #[arg(long, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// API-key map to check [default: from config]
    #[arg(long, value_name = "FILE")]
    pub api_keys: Option<PathBuf>,
}

/// Run the validate command. Exits 1 when any problem is found.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read.
pub fn run(app: &AppContext, args: ValidateArgs) -> Result<ExitCode> {
    let mut paths = app.config.artifacts.clone();
    if let Some(p) = args.metadata {
        paths.metadata_hash = p;
    }
    if let Some(p) = args.api_keys {
        paths.api_keys = p;
    }

    let report = validate_artifacts(&app.fs, &paths)?;

    if app.is_json() {
        println!("{}", json::to_pretty(&report)?);
    } else {
        HumanRenderer::new(&app.output).render_validation(&report);
    }

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
