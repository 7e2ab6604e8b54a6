//! Service status types and pure parsing of `docker inspect` output.

use chrono::{DateTime, Utc};
use mech_common::LocalConfig;
use serde::Serialize;

/// `docker inspect` format string producing `<status>|<started-at>`.
pub const INSPECT_FORMAT: &str = "{{.State.Status}}|{{.State.StartedAt}}";

/// State of the agent container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ContainerState {
    Running { started_at: Option<DateTime<Utc>> },
    /// Exists but is not running; carries Docker's own status word
    /// (`exited`, `created`, `paused`, ...).
    Stopped { status: String },
    NotFound,
    /// Docker itself could not be queried.
    Unknown,
}

impl ContainerState {
    /// Seconds since the container started, if running with a known start time.
    #[must_use]
    pub fn uptime_seconds(&self, now: DateTime<Utc>) -> Option<u64> {
        match self {
            Self::Running {
                started_at: Some(started),
            } => u64::try_from((now - *started).num_seconds()).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Running { .. } => "running",
            Self::Stopped { status } => status,
            Self::NotFound => "not found",
            Self::Unknown => "unknown",
        }
    }
}

/// Summary of the agent's persisted settings, safe to print.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LocalSettings {
    pub chain: Option<String>,
    pub rpc: Option<String>,
    pub use_staking: Option<bool>,
    pub mech_address: Option<String>,
    pub agent_id: Option<u64>,
    pub metadata_hash: Option<String>,
}

impl From<&LocalConfig> for LocalSettings {
    fn from(cfg: &LocalConfig) -> Self {
        Self {
            chain: cfg.chain_name(),
            rpc: cfg.redacted_rpc(),
            use_staking: cfg.use_staking,
            mech_address: cfg.mech_address.clone(),
            agent_id: cfg.agent_id,
            metadata_hash: cfg.metadata_hash.clone(),
        }
    }
}

/// Everything `status` reports.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub container: String,
    #[serde(flatten)]
    pub state: ContainerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,
    /// `None` when the agent has never been set up in this directory.
    pub settings: Option<LocalSettings>,
}

/// Parse successful `docker inspect --format INSPECT_FORMAT` output.
#[must_use]
pub fn parse_inspect(stdout: &str) -> ContainerState {
    let line = stdout.lines().next().unwrap_or_default().trim();
    let (status, started) = line.split_once('|').unwrap_or((line, ""));
    if status == "running" {
        let started_at = DateTime::parse_from_rfc3339(started.trim())
            .ok()
            .map(|t| t.with_timezone(&Utc));
        ContainerState::Running { started_at }
    } else if status.is_empty() {
        ContainerState::Unknown
    } else {
        ContainerState::Stopped {
            status: status.to_string(),
        }
    }
}

/// Classify a failed `docker inspect` from its stderr.
#[must_use]
pub fn classify_inspect_failure(stderr: &str) -> ContainerState {
    let lower = stderr.to_ascii_lowercase();
    if lower.contains("no such object") || lower.contains("no such container") {
        ContainerState::NotFound
    } else {
        ContainerState::Unknown
    }
}

/// Format uptime seconds as human-readable string.
///
/// Returns "Xh Ym" if hours > 0, otherwise "Xm".
#[must_use]
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
