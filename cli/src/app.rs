//! Shared state for command handlers.
//!
//! Built once per invocation from the global flags. `version` never builds
//! one, so a broken config file cannot stop it.

use anyhow::Result;

use crate::domain::config::LauncherConfig;
use crate::infra::{ConfigSource, ExecHandoff, StdLocalFs, TokioCommandRunner, YamlConfigStore};
use crate::output::OutputContext;

/// Environment variables that answer "yes" to every prompt.
const ASSUME_YES_ENV: [&str; 2] = ["CI", "MECH_QUICKSTART_YES"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// `--no-color`, `--quiet` and `--json`.
pub struct OutputFlags {
    pub no_color: bool,
    pub quiet: bool,
    pub json: bool,
}

/// `--yes`.
pub struct BehaviourFlags {
    pub yes: bool,
}

pub struct AppFlags {
    pub output: OutputFlags,
    pub behaviour: BehaviourFlags,
}

pub struct AppContext {
    pub output: OutputContext,
    pub mode: OutputMode,
    pub runner: TokioCommandRunner,
    pub handoff: ExecHandoff,
    pub fs: StdLocalFs,
    pub config: LauncherConfig,
    /// Where `config` was read from, for `config` and debug logs.
    pub config_source: ConfigSource,
    /// Prompts return their default without asking.
    pub non_interactive: bool,
}

impl AppContext {
    /// Load the launcher configuration and set up output.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read or
    /// parsed, or if `$MECH_QUICKSTART_CONFIG` names a missing file.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let assume_yes = ASSUME_YES_ENV
            .iter()
            .any(|var| std::env::var_os(var).is_some());

        let (config, config_source) = YamlConfigStore::from_env()?.load()?;

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode: if flags.output.json {
                OutputMode::Json
            } else {
                OutputMode::Human
            },
            runner: TokioCommandRunner::default(),
            handoff: ExecHandoff,
            fs: StdLocalFs,
            config,
            config_source,
            non_interactive: flags.behaviour.yes || assume_yes,
        })
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Yes/no prompt. Returns `default` unasked when non-interactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
