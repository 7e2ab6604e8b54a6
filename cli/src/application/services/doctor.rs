//! Application service: prerequisite diagnostics.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::application::services::launch::ensure_repository;
use crate::domain::command::CommandSpec;
use crate::domain::health::{DoctorChecks, PREREQUISITES, ToolRequirement, evaluate};

/// Probe every prerequisite tool and the working directory.
///
/// The service never touches `OutputContext` or any presentation type;
/// rendering is the caller's responsibility.
///
/// # Errors
///
/// Currently infallible; probe failures are recorded as failed checks.
pub async fn run_doctor(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    repository_check: &CommandSpec,
) -> Result<DoctorChecks> {
    reporter.step("checking prerequisites...");
    let mut tools = Vec::with_capacity(PREREQUISITES.len());
    for req in PREREQUISITES {
        let banner = probe_banner(runner, req).await;
        tools.push(evaluate(req, banner.as_deref()));
    }

    reporter.step("checking working directory...");
    let in_repository = ensure_repository(runner, repository_check).await.is_ok();

    let native_windows = cfg!(target_os = "windows");
    if native_windows {
        reporter.warn("native Windows detected; the quickstart needs WSL2");
    }
    reporter.success("diagnostics complete");

    Ok(DoctorChecks {
        tools,
        in_repository,
        native_windows,
    })
}

/// The tool's version banner, or `None` when it is missing or failed.
/// Some tools (older Pythons) print their version on stderr.
async fn probe_banner(runner: &impl CommandRunner, req: &ToolRequirement) -> Option<String> {
    let out = runner.run(req.program, req.args).await.ok()?;
    if !out.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&out.stdout).trim().to_string();
    if stdout.is_empty() {
        Some(String::from_utf8_lossy(&out.stderr).trim().to_string())
    } else {
        Some(stdout)
    }
}
