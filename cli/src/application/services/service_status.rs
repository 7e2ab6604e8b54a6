//! Application service: service status and local settings.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use mech_common::{LOCAL_CONFIG_FILE, LocalConfig};
use tracing::debug;

use crate::application::ports::{CommandRunner, LocalFs};
use crate::domain::config::ServiceSection;
use crate::domain::status::{
    ContainerState, INSPECT_FORMAT, LocalSettings, StatusReport, classify_inspect_failure,
    parse_inspect,
};

/// Path of the agent's persisted settings under `home`.
#[must_use]
pub fn local_config_path(home: &Path) -> PathBuf {
    home.join(LOCAL_CONFIG_FILE)
}

/// Whether the agent has ever been set up in this directory.
pub fn is_set_up(fs: &impl LocalFs, home: &Path) -> bool {
    fs.exists(&local_config_path(home))
}

/// Load the agent's persisted settings, `None` when never set up.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or decoded.
pub fn load_local_config(fs: &impl LocalFs, home: &Path) -> Result<Option<LocalConfig>> {
    let path = local_config_path(home);
    let Some(text) = fs.read_to_string(&path)? else {
        return Ok(None);
    };
    let cfg = LocalConfig::from_json(&text)
        .with_context(|| format!("cannot parse {}", path.display()))?;
    Ok(Some(cfg))
}

/// Query Docker for the agent container's state. Never fails: Docker being
/// absent or unreachable is reported as [`ContainerState::Unknown`].
pub async fn container_state(runner: &impl CommandRunner, container: &str) -> ContainerState {
    let args = ["inspect", "--format", INSPECT_FORMAT, container];
    match runner.run("docker", &args).await {
        Ok(out) if out.status.success() => parse_inspect(&String::from_utf8_lossy(&out.stdout)),
        Ok(out) => classify_inspect_failure(&String::from_utf8_lossy(&out.stderr)),
        Err(e) => {
            debug!(error = %format!("{e:#}"), "docker inspect could not run");
            ContainerState::Unknown
        }
    }
}

/// Build the full status report.
///
/// # Errors
///
/// Returns an error if the local settings file exists but is unreadable.
pub async fn service_status(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    service: &ServiceSection,
    now: DateTime<Utc>,
) -> Result<StatusReport> {
    let state = container_state(runner, &service.container).await;
    let settings = load_local_config(fs, &service.home)?.map(|cfg| LocalSettings::from(&cfg));

    Ok(StatusReport {
        container: service.container.clone(),
        uptime_seconds: state.uptime_seconds(now),
        state,
        settings,
    })
}
