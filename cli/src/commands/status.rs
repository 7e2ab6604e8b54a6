//! `mech-quickstart status`: container state and persisted settings.

use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;

use crate::app::AppContext;
use crate::application::services::service_status::service_status;
use crate::output::human::HumanRenderer;
use crate::output::{json, progress};

/// Run the status command.
///
/// # Errors
///
/// Returns an error if the local quickstart config exists but cannot be read
/// or parsed.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let pb = progress::spinner_if(
        app.output.show_progress() && !app.is_json(),
        "checking service...",
    );
    let report = service_status(&app.runner, &app.fs, &app.config.service, Utc::now()).await;
    pb.finish_and_clear();
    let report = report?;

    if app.is_json() {
        println!("{}", json::to_pretty(&report)?);
    } else {
        HumanRenderer::new(&app.output).render_status(&report);
    }
    Ok(ExitCode::SUCCESS)
}
