//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. `main` downcasts to [`LaunchError`] to pick the
//! process exit code.

use thiserror::Error;

// ── Launch errors ─────────────────────────────────────────────────────────────

/// Fatal outcomes of the launcher sequence.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(
        "This script must be run from inside the mech-quickstart git repository.\n\
         Clone it first: git clone https://github.com/valory-xyz/mech-quickstart.git"
    )]
    NotARepository,

    #[error("Dependency installation failed: '{command}' exited with status {code}.")]
    DependencyInstall { command: String, code: i32 },

    #[error("Dependency installation failed: cannot run '{command}': {reason}")]
    InstallerUnavailable { command: String, reason: String },

    #[error("Cannot start '{command}': {reason}")]
    Handoff { command: String, reason: String },
}

impl LaunchError {
    /// Process exit code for this failure.
    ///
    /// A failed dependency install exits with the manager's own status so
    /// callers see the same code they would from running it directly.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotARepository
            | Self::InstallerUnavailable { .. }
            | Self::Handoff { .. } => 1,
            Self::DependencyInstall { code, .. } => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1)
            }
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors in the launcher configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("command must be a non-empty list whose first element names a program")]
    EmptyCommand,
}
