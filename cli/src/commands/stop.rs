//! `mech-quickstart stop`: stop the running service.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::CommandRunner;
use crate::application::services::service_status::is_set_up;
use crate::infra::handoff::exit_code_from_status;

/// Run the stop procedure in the foreground.
///
/// Does nothing when the quickstart has never been set up in this directory.
///
/// # Errors
///
/// Returns an error if the confirmation prompt fails or the stop procedure
/// cannot be spawned.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let ctx = &app.output;

    if !is_set_up(&app.fs, &app.config.service.home) {
        ctx.info("Nothing to stop: the service has not been set up in this directory.");
        return Ok(ExitCode::SUCCESS);
    }

    if !app.confirm("Stop the Mech service?", true)? {
        ctx.warn("Aborted; the service is still running.");
        return Ok(ExitCode::SUCCESS);
    }

    let stop = &app.config.launcher.stop;
    ctx.info("Stopping the Mech service...");
    let status = app
        .runner
        .run_status(stop.program(), &stop.args())
        .await
        .with_context(|| format!("cannot run '{stop}'"))?;

    if status.success() {
        ctx.success("Service stopped.");
    } else {
        ctx.error(&format!("'{stop}' failed ({status})"));
    }
    Ok(exit_code_from_status(status))
}
