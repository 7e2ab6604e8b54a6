//! Prerequisite checks and pure diagnostic functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use std::sync::LazyLock;

use regex::Regex;
use semver::{Version, VersionReq};
use serde::Serialize;

// ── Requirements ──────────────────────────────────────────────────────────────

/// A tool the quickstart needs on `PATH`, and how to ask it for its version.
#[derive(Debug, Clone, Copy)]
pub struct ToolRequirement {
    /// Display name.
    pub name: &'static str,
    pub program: &'static str,
    pub args: &'static [&'static str],
    /// Semver requirement; `None` means any version will do.
    pub requirement: Option<&'static str>,
    /// Where to get it.
    pub hint: &'static str,
}

/// Tools listed in the quickstart README.
pub const PREREQUISITES: &[ToolRequirement] = &[
    ToolRequirement {
        name: "git",
        program: "git",
        args: &["--version"],
        requirement: None,
        hint: "https://git-scm.com/downloads",
    },
    ToolRequirement {
        name: "docker",
        program: "docker",
        args: &["--version"],
        requirement: Some(">=20.10, <25"),
        hint: "https://docs.docker.com/engine/install/",
    },
    ToolRequirement {
        name: "docker compose",
        program: "docker",
        args: &["compose", "version"],
        requirement: Some(">=2"),
        hint: "https://docs.docker.com/compose/install/",
    },
    ToolRequirement {
        name: "python",
        program: "python3",
        args: &["--version"],
        requirement: Some(">=3.10, <3.12"),
        hint: "https://www.python.org/downloads/",
    },
    ToolRequirement {
        name: "poetry",
        program: "poetry",
        args: &["--version"],
        requirement: Some(">=1.8.3"),
        hint: "https://python-poetry.org/docs/#installation",
    },
];

// ── Types ─────────────────────────────────────────────────────────────────────

/// Result of probing a single tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCheck {
    pub name: String,
    /// Whether the version probe ran and exited successfully.
    pub found: bool,
    pub version: Option<String>,
    pub required: Option<String>,
    /// `true` when the version satisfies the requirement, or could not be
    /// parsed (an unrecognised version string is not treated as a failure).
    pub version_ok: bool,
    #[serde(skip)]
    pub hint: &'static str,
}

/// All doctor results.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorChecks {
    pub tools: Vec<ToolCheck>,
    /// Whether the working directory is a git checkout.
    pub in_repository: bool,
    /// Running on Windows outside WSL2.
    pub native_windows: bool,
}

// ── Pure functions ────────────────────────────────────────────────────────────

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // compile-time constant pattern
    Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("valid regex")
});

/// Pull the first `major.minor[.patch]` out of a `--version` banner, e.g.
/// `"Poetry (version 1.8.3)"` or `"Docker Compose version v2.24.5"`.
#[must_use]
pub fn extract_version(banner: &str) -> Option<Version> {
    let caps = VERSION_RE.captures(banner)?;
    let part = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());
    Some(Version::new(part(1)?, part(2)?, part(3).unwrap_or(0)))
}

/// Evaluate a tool from its probe output. `banner` is `None` when the probe
/// could not be spawned or exited non-zero.
#[must_use]
pub fn evaluate(req: &ToolRequirement, banner: Option<&str>) -> ToolCheck {
    let Some(banner) = banner else {
        return ToolCheck {
            name: req.name.to_string(),
            found: false,
            version: None,
            required: req.requirement.map(str::to_owned),
            version_ok: false,
            hint: req.hint,
        };
    };

    let version = extract_version(banner);
    let version_ok = match (req.requirement.and_then(|r| VersionReq::parse(r).ok()), &version) {
        (Some(wanted), Some(v)) => wanted.matches(v),
        _ => true,
    };

    ToolCheck {
        name: req.name.to_string(),
        found: true,
        version: version.map(|v| v.to_string()),
        required: req.requirement.map(str::to_owned),
        version_ok,
        hint: req.hint,
    }
}

/// Collect actionable issues from check results.
#[must_use]
pub fn collect_issues(checks: &DoctorChecks) -> Vec<String> {
    let mut issues = Vec::new();
    if checks.native_windows {
        issues.push("Native Windows is not supported; run the quickstart inside WSL2".to_string());
    }
    for tool in &checks.tools {
        if !tool.found {
            issues.push(format!("{} is not installed ({})", tool.name, tool.hint));
        } else if !tool.version_ok {
            issues.push(format!(
                "{} {} does not satisfy {}",
                tool.name,
                tool.version.as_deref().unwrap_or("unknown"),
                tool.required.as_deref().unwrap_or("*"),
            ));
        }
    }
    if !checks.in_repository {
        issues.push("Current directory is not a git checkout of mech-quickstart".to_string());
    }
    issues
}

// ── Unit tests ───────────────────────────────────────────────────────────────
