//! `mech-quickstart doctor`: prerequisite diagnostics.

use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::services::doctor::run_doctor;
use crate::domain::health::{DoctorChecks, collect_issues};
use crate::output::human::HumanRenderer;
use crate::output::json;
use crate::output::reporter::{SilentReporter, TerminalReporter};

#[derive(Serialize)]
struct DoctorJson<'a> {
    status: &'static str,
    checks: &'a DoctorChecks,
    issues: &'a [String],
}

/// Run the doctor command. Exits 1 when any issue is found.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let repository_check = &app.config.launcher.repository_check;
    let checks = if app.is_json() {
        run_doctor(&app.runner, &SilentReporter, repository_check).await?
    } else {
        run_doctor(&app.runner, &TerminalReporter::new(&app.output), repository_check).await?
    };
    let issues = collect_issues(&checks);

    if app.is_json() {
        let out = DoctorJson {
            status: if issues.is_empty() { "healthy" } else { "unhealthy" },
            checks: &checks,
            issues: &issues,
        };
        println!("{}", json::to_pretty(&out)?);
    } else {
        HumanRenderer::new(&app.output).render_doctor(&checks, &issues);
    }

    Ok(if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
