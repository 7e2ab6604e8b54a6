//! Shared helpers for integration tests.

#![allow(clippy::expect_used, dead_code)]

use std::path::Path;

use assert_cmd::Command;

/// The binary, isolated from the caller's configuration and CI settings.
pub fn mech(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mech-quickstart"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("HOME", dir)
        .env_remove("MECH_QUICKSTART_CONFIG")
        .env_remove("MECH_QUICKSTART_YES")
        .env_remove("MECH_QUICKSTART_LOG")
        .env_remove("CI");
    cmd
}

/// A YAML flow sequence (JSON is valid YAML).
pub fn yaml_list(parts: &[&str]) -> String {
    serde_json::to_string(parts).expect("serializable")
}

/// Write `quickstart.yaml` into `dir` with the four launcher commands.
pub fn write_launcher_config(
    dir: &Path,
    repository_check: &[&str],
    stop: &[&str],
    install: &[&str],
    entry_point: &[&str],
) {
    let yaml = format!(
        "launcher:\n  repository_check: {}\n  stop: {}\n  install: {}\n  entry_point: {}\n",
        yaml_list(repository_check),
        yaml_list(stop),
        yaml_list(install),
        yaml_list(entry_point),
    );
    std::fs::write(dir.join("quickstart.yaml"), yaml).expect("write config");
}

/// Contents of `calls.log` written by the scripted commands, or empty.
pub fn call_log(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("calls.log")).unwrap_or_default()
}
