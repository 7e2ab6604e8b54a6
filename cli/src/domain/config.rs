//! Domain types for the launcher configuration.
//!
//! Pure types only, no I/O. Loading lives in
//! `crate::infra::config`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::command::CommandSpec;

/// Default container name of the agent's ABCI service.
pub const DEFAULT_CONTAINER: &str = "mech_quickstart_abci_0";

/// Default directory the agent keeps its local state in.
pub const DEFAULT_HOME: &str = ".mech_quickstart";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level launcher configuration (`quickstart.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// The four-step launch sequence.
    pub launcher: LauncherSection,
    /// Where the running service lives.
    pub service: ServiceSection,
    /// Agent configuration artifacts checked by `validate`.
    pub artifacts: ArtifactPaths,
}

/// Commands making up the launch sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherSection {
    /// Succeeds only inside a version-controlled working tree.
    pub repository_check: CommandSpec,
    /// Stops a previously started service. Output is discarded during launch.
    pub stop: CommandSpec,
    /// Installs and locks the dependency set.
    pub install: CommandSpec,
    /// The agent's own entry point.
    pub entry_point: CommandSpec,
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            repository_check: builtin(&["git", "rev-parse", "--git-dir"]),
            stop: builtin(&["./stop_service.sh"]),
            install: builtin(&["poetry", "install"]),
            entry_point: builtin(&["poetry", "run", "python", "run_service.py"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceSection {
    /// Docker container running the agent.
    pub container: String,
    /// Agent state directory, relative to the working directory.
    pub home: PathBuf,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            home: PathBuf::from(DEFAULT_HOME),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactPaths {
    pub metadata_hash: PathBuf,
    pub api_keys: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            metadata_hash: PathBuf::from(".metadata_hash.json"),
            api_keys: PathBuf::from(".api_keys.json"),
        }
    }
}

#[allow(clippy::expect_used)] // built-in commands are non-empty literals
fn builtin(parts: &[&str]) -> CommandSpec {
    CommandSpec::new(parts[0], parts[1..].iter().copied()).expect("built-in command is valid")
}

// ── Unit tests ───────────────────────────────────────────────────────────────
