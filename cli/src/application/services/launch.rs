//! Application service: the launcher sequence.
//!
//! Repository guard → prior-instance reaper → dependency resolver → handoff.
//! The sequence is linear: the only step allowed to fail without aborting is
//! the reaper, since a first run has no prior instance to stop.

use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::ports::{CommandRunner, ProcessHandoff, ProgressReporter};
use crate::domain::command::CommandSpec;
use crate::domain::config::LauncherSection;
use crate::domain::error::LaunchError;

/// Run the full launch sequence and hand over to the entry point.
///
/// On Unix a successful handoff replaces this process, so the function only
/// returns on failure or on platforms where the child is waited on.
///
/// # Errors
///
/// Returns [`LaunchError::NotARepository`] before any side effect when the
/// working directory is not a git checkout, [`LaunchError::DependencyInstall`]
/// when the install step fails, and [`LaunchError::Handoff`] when the entry
/// point cannot be executed.
pub async fn launch(
    runner: &impl CommandRunner,
    handoff: &impl ProcessHandoff,
    plan: &LauncherSection,
    reporter: &impl ProgressReporter,
) -> Result<ExitCode> {
    ensure_repository(runner, &plan.repository_check).await?;

    reporter.step("stopping any previous instance...");
    reap_previous(runner, &plan.stop).await;

    reporter.step(&format!("installing dependencies ({})...", plan.install));
    install_dependencies(runner, &plan.install).await?;
    reporter.success("dependencies installed");

    reporter.step("starting the Mech service...");
    info!(command = %plan.entry_point, "handing off");
    handoff
        .handoff(plan.entry_point.program(), &plan.entry_point.args())
        .map_err(|e| {
            LaunchError::Handoff {
                command: plan.entry_point.to_string(),
                reason: format!("{e:#}"),
            }
            .into()
        })
}

/// Fail unless `check` exits successfully. A check that cannot even be
/// spawned (no `git` on PATH) counts as failure.
///
/// # Errors
///
/// Returns [`LaunchError::NotARepository`].
pub async fn ensure_repository(runner: &impl CommandRunner, check: &CommandSpec) -> Result<()> {
    match runner.run_silent(check.program(), &check.args()).await {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            debug!(%status, command = %check, "repository check failed");
            Err(LaunchError::NotARepository.into())
        }
        Err(e) => {
            debug!(error = %format!("{e:#}"), command = %check, "repository check could not run");
            Err(LaunchError::NotARepository.into())
        }
    }
}

/// Best-effort stop of a previous instance. Output and failures are swallowed.
pub async fn reap_previous(runner: &impl CommandRunner, stop: &CommandSpec) {
    match runner.run_silent(stop.program(), &stop.args()).await {
        Ok(status) if status.success() => debug!(command = %stop, "previous instance stopped"),
        Ok(status) => debug!(%status, command = %stop, "stop procedure failed; ignoring"),
        Err(e) => debug!(error = %format!("{e:#}"), command = %stop, "stop procedure unavailable; ignoring"),
    }
}

/// Run the dependency manager with its output visible to the user.
///
/// # Errors
///
/// Returns [`LaunchError::DependencyInstall`] carrying the manager's exit code,
/// or [`LaunchError::InstallerUnavailable`] when the manager cannot be spawned.
pub async fn install_dependencies(runner: &impl CommandRunner, install: &CommandSpec) -> Result<()> {
    match runner.run_status(install.program(), &install.args()).await {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(LaunchError::DependencyInstall {
            command: install.to_string(),
            code: status.code().unwrap_or(1),
        }
        .into()),
        Err(e) => {
            debug!(error = %format!("{e:#}"), command = %install, "dependency manager could not run");
            Err(LaunchError::InstallerUnavailable {
                command: install.to_string(),
                reason: format!("{e:#}"),
            }
            .into())
        }
    }
}
