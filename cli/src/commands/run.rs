//! `mech-quickstart run`: the quickstart launcher (also the default command).

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::launch::launch;
use crate::output::human::HumanRenderer;
use crate::output::reporter::{SilentReporter, TerminalReporter};

/// Run the launcher sequence and hand over to the service entry point.
/// Under `--json` stdout is left entirely to the entry point.
///
/// # Errors
///
/// Propagates [`crate::domain::LaunchError`] from the launch sequence.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let plan = &app.config.launcher;
    if app.is_json() {
        return launch(&app.runner, &app.handoff, plan, &SilentReporter).await;
    }
    HumanRenderer::new(&app.output).render_title("Mech Quickstart");
    let reporter = TerminalReporter::new(&app.output);
    launch(&app.runner, &app.handoff, plan, &reporter).await
}
