//! Launcher configuration loading.
//!
//! The file is looked up in order: `$MECH_QUICKSTART_CONFIG`, `./quickstart.yaml`,
//! `~/.mech-quickstart/config.yaml`. When none exists the built-in defaults
//! apply. The launcher never writes configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::config::LauncherConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MECH_QUICKSTART_CONFIG";

/// Project-local config file name.
pub const PROJECT_CONFIG: &str = "quickstart.yaml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Env(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl ConfigSource {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Env(p) | Self::Project(p) | Self::User(p) => Some(p.as_path()),
            Self::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(p) => write!(f, "{} (from {CONFIG_ENV})", p.display()),
            Self::Project(p) | Self::User(p) => write!(f, "{}", p.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Read-only YAML configuration store.
pub struct YamlConfigStore {
    cwd: PathBuf,
    env_override: Option<PathBuf>,
    home: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(cwd: PathBuf, env_override: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            cwd,
            env_override,
            home,
        }
    }

    /// Store rooted at the process working directory and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let env_override = std::env::var_os(CONFIG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(Self::new(cwd, env_override, dirs::home_dir()))
    }

    /// Resolve which file (if any) supplies the configuration.
    #[must_use]
    pub fn locate(&self) -> ConfigSource {
        if let Some(path) = &self.env_override {
            return ConfigSource::Env(path.clone());
        }
        let project = self.cwd.join(PROJECT_CONFIG);
        if project.is_file() {
            return ConfigSource::Project(project);
        }
        if let Some(home) = &self.home {
            let user = home.join(".mech-quickstart").join("config.yaml");
            if user.is_file() {
                return ConfigSource::User(user);
            }
        }
        ConfigSource::Defaults
    }

    /// Load the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the located file cannot be read or parsed. An
    /// explicit `$MECH_QUICKSTART_CONFIG` pointing at a missing file is an error.
    pub fn load(&self) -> Result<(LauncherConfig, ConfigSource)> {
        let source = self.locate();
        let Some(path) = source.path() else {
            return Ok((LauncherConfig::default(), source));
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok((LauncherConfig::default(), source));
        }
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        tracing::debug!(source = %source, "loaded launcher config");
        Ok((config, source))
    }
}
