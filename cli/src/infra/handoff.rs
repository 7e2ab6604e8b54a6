//! Infrastructure implementation of the `ProcessHandoff` port.

use std::io::Write as _;
use std::process::{Command, ExitCode, ExitStatus};

use anyhow::{Context, Result};

use crate::application::ports::ProcessHandoff;

/// Replaces the current process with the target program on Unix (`execvp`),
/// so signals, the controlling terminal and the exit code belong to the
/// agent from then on. Elsewhere the child is spawned with inherited stdio
/// and waited on.
pub struct ExecHandoff;

impl ProcessHandoff for ExecHandoff {
    #[cfg(unix)]
    fn handoff(&self, program: &str, args: &[&str]) -> Result<ExitCode> {
        use std::os::unix::process::CommandExt as _;

        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        // exec only returns on failure.
        let err = Command::new(program).args(args).exec();
        Err(err).with_context(|| format!("failed to execute {program}"))
    }

    #[cfg(not(unix))]
    fn handoff(&self, program: &str, args: &[&str]) -> Result<ExitCode> {
        let _ = std::io::stdout().flush();
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to execute {program}"))?;
        Ok(exit_code_from_status(status))
    }
}

/// Map a child's exit status to this process's exit code. Signals and codes
/// outside `0..=255` become `1`.
#[must_use]
pub fn exit_code_from_status(status: ExitStatus) -> ExitCode {
    status
        .code()
        .and_then(|c| u8::try_from(c).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
