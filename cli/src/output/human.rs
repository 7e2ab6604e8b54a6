//! Human-readable rendering of status, doctor, validation and config reports.

use owo_colors::OwoColorize as _;

use crate::domain::artifacts::{FileReport, ValidationReport};
use crate::domain::config::LauncherConfig;
use crate::domain::health::DoctorChecks;
use crate::domain::status::{ContainerState, StatusReport, format_uptime};
use crate::output::OutputContext;

/// Prints reports for a terminal reader.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Boxed title, as printed at the start of every quickstart script.
    pub fn render_title(&self, text: &str) {
        if self.ctx.quiet {
            return;
        }
        let border = "=".repeat(text.chars().count() + 8);
        println!();
        println!("{}", border.style(self.ctx.styles.banner));
        println!("    {}", text.style(self.ctx.styles.banner));
        println!("{}", border.style(self.ctx.styles.banner));
        println!();
    }

    /// Render container state and persisted settings.
    pub fn render_status(&self, status: &StatusReport) {
        let state = match &status.state {
            ContainerState::Running { .. } => {
                format!("{}", "Running".style(self.ctx.styles.ok))
            }
            ContainerState::Stopped { status } => {
                format!("{} ({status})", "Stopped".style(self.ctx.styles.failure))
            }
            ContainerState::NotFound => format!("{}", "Not found".style(self.ctx.styles.failure)),
            ContainerState::Unknown => {
                format!("{}", "Unknown".style(self.ctx.styles.caution))
            }
        };

        self.ctx.kv("Service:", &status.container);
        self.ctx.kv("Status:", &state);
        if let Some(uptime) = status.uptime_seconds {
            self.ctx.kv("Uptime:", &format_uptime(uptime));
        }

        match status.state {
            ContainerState::Unknown => self.ctx.warn("Docker is not reachable. Is the daemon running?"),
            ContainerState::Stopped { .. } | ContainerState::NotFound => {
                self.ctx.info("Start it with: mech-quickstart");
            }
            ContainerState::Running { .. } => {}
        }

        self.ctx.blank();
        self.ctx.section("Configuration:");
        let Some(settings) = &status.settings else {
            self.ctx.info("Not set up yet. Run: mech-quickstart");
            return;
        };
        let unset = "(not set)";
        self.ctx.kv("Chain:", settings.chain.as_deref().unwrap_or(unset));
        self.ctx.kv("RPC:", settings.rpc.as_deref().unwrap_or(unset));
        self.ctx.kv(
            "Staking:",
            match settings.use_staking {
                Some(true) => "enabled",
                Some(false) => "disabled",
                None => unset,
            },
        );
        self.ctx.kv("Mech address:", settings.mech_address.as_deref().unwrap_or(unset));
        self.ctx.kv(
            "Agent ID:",
            &settings
                .agent_id
                .map_or_else(|| unset.to_string(), |id| id.to_string()),
        );
        self.ctx.kv("Metadata hash:", settings.metadata_hash.as_deref().unwrap_or(unset));

        if matches!(status.state, ContainerState::Running { .. }) {
            self.ctx.blank();
            self.ctx.info("Follow logs: mech-quickstart logs");
        }
    }

    /// Render doctor results.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String]) {
        println!();
        println!("  {}", "Mech Quickstart Health Check".style(self.ctx.styles.banner));
        println!();

        println!("  Prerequisites:");
        for tool in &checks.tools {
            let label = match (&tool.version, &tool.required) {
                (Some(v), Some(req)) => format!("{} {v} (need {req})", tool.name),
                (Some(v), None) => format!("{} {v}", tool.name),
                (None, _) if tool.found => tool.name.clone(),
                (None, _) => format!("{} not found", tool.name),
            };
            self.print_check(tool.found && tool.version_ok, &label);
        }
        println!();

        println!("  Working directory:");
        self.print_check(checks.in_repository, "Inside a git checkout");
        if checks.native_windows {
            self.print_check(false, "Native Windows detected; use WSL2");
        }
        println!();

        if issues.is_empty() {
            println!(
                "  {} Everything looks good!",
                "✓".style(self.ctx.styles.ok)
            );
        } else {
            println!(
                "  {} Found {} issue(s):",
                "✗".style(self.ctx.styles.failure),
                issues.len()
            );
            for issue in issues {
                println!("    - {issue}");
            }
        }
    }

    /// Render artifact validation results.
    pub fn render_validation(&self, report: &ValidationReport) {
        self.render_file_report("Metadata hash file", &report.metadata_hash);
        self.render_file_report("API keys file", &report.api_keys);
    }

    fn render_file_report(&self, title: &str, file: &FileReport) {
        if file.is_ok() {
            self.ctx.success(&format!("{title} ({}) is valid", file.path));
            return;
        }
        self.ctx.error(&format!(
            "{title} ({}) has {} problem(s):",
            file.path,
            file.problems.len()
        ));
        for problem in &file.problems {
            eprintln!("      - {problem}");
        }
    }

    /// Render the effective launcher configuration.
    pub fn render_config(&self, config: &LauncherConfig, source: &str) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({source})").style(self.ctx.styles.banner)
        );
        println!();
        println!("  {}", "Launcher:".style(self.ctx.styles.section));
        let cmd = self.ctx.styles.command;
        for (key, command) in [
            ("repository_check:", &config.launcher.repository_check),
            ("stop:", &config.launcher.stop),
            ("install:", &config.launcher.install),
            ("entry_point:", &config.launcher.entry_point),
        ] {
            println!("    {key:<18} {}", command.style(cmd));
        }
        println!();
        println!("  {}", "Service:".style(self.ctx.styles.section));
        println!("    {:<18} {}", "container:", config.service.container);
        println!("    {:<18} {}", "home:", config.service.home.display());
        println!();
        println!("  {}", "Artifacts:".style(self.ctx.styles.section));
        println!("    {:<18} {}", "metadata_hash:", config.artifacts.metadata_hash.display());
        println!("    {:<18} {}", "api_keys:", config.artifacts.api_keys.display());
        println!();
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "✓".style(self.ctx.styles.ok));
        } else {
            println!("    {} {msg}", "✗".style(self.ctx.styles.failure));
        }
    }
}
