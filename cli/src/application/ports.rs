//! Ports: the seams between use-case services and the outside world.
//!
//! `crate::infra` provides the production implementations; tests provide
//! recording mocks.
//!
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::{ExitCode, ExitStatus, Output};

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations apply their configured default timeout and must kill
    /// the child when it fires.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with inherited stdio and return its exit status.
    /// No timeout.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
    /// Run a program with stdin, stdout and stderr attached to the null
    /// device and return its exit status. No timeout.
    async fn run_silent(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Process Handoff Port ──────────────────────────────────────────────────────

/// Transfers control to another program for the rest of the process lifetime.
pub trait ProcessHandoff {
    /// Hand the terminal over to `program`.
    ///
    /// Where the platform allows it the current process image is replaced and
    /// this call only returns on failure. Otherwise the child is waited on and
    /// its exit code returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be executed.
    fn handoff(&self, program: &str, args: &[&str]) -> Result<ExitCode>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Read-only access to local files. The launcher never writes.
pub trait LocalFs {
    /// Read a UTF-8 file, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than the file being absent.
    fn read_to_string(&self, path: &Path) -> Result<Option<String>>;
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;
}
