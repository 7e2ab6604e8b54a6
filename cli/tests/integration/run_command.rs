//! End-to-end tests for the launcher sequence, with every external command
//! replaced by a shell script that appends to `calls.log`.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::path::Path;

use predicates::prelude::*;

use crate::helpers::{call_log, mech, write_launcher_config};

const OK: &[&str] = &["sh", "-c", "exit 0"];
const STOP: &[&str] = &["sh", "-c", "echo REAPER-OUTPUT; echo stop >> calls.log"];
const INSTALL: &[&str] = &["sh", "-c", "echo install >> calls.log"];
/// Records each argument in brackets so argument boundaries are visible.
const ENTRY: &[&str] = &[
    "sh",
    "-c",
    "printf entry >> calls.log; printf ' [%s]' \"$@\" >> calls.log; echo >> calls.log; exit 7",
    "entry",
    "a b",
    "c",
];

/// Every file in `dir` except `calls.log`, with its contents.
fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    std::fs::read_dir(dir)
        .expect("read dir")
        .flatten()
        .filter(|e| e.path().is_file() && e.file_name() != "calls.log")
        .map(|e| {
            (
                e.file_name().to_string_lossy().to_string(),
                std::fs::read(e.path()).expect("read file"),
            )
        })
        .collect()
}

#[test]
fn test_run_outside_repository_exits_one_without_side_effects() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(dir.path(), &["sh", "-c", "exit 128"], STOP, INSTALL, ENTRY);

    mech(dir.path())
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be run from inside"));

    assert_eq!(call_log(dir.path()), "");
}

#[test]
fn test_run_with_missing_repository_check_program_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(
        dir.path(),
        &["mech-quickstart-no-such-git"],
        STOP,
        INSTALL,
        ENTRY,
    );

    mech(dir.path()).assert().code(1);

    assert_eq!(call_log(dir.path()), "");
}

#[test]
fn test_run_success_hands_off_with_unaltered_arguments() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(dir.path(), OK, STOP, INSTALL, ENTRY);

    mech(dir.path()).arg("run").assert().code(7);

    assert_eq!(call_log(dir.path()), "stop\ninstall\nentry [a b] [c]\n");
}

#[test]
fn test_no_subcommand_runs_the_launcher() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(dir.path(), OK, STOP, INSTALL, ENTRY);

    mech(dir.path()).assert().code(7);

    assert_eq!(call_log(dir.path()), "stop\ninstall\nentry [a b] [c]\n");
}

#[test]
fn test_run_discards_cleanup_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(dir.path(), OK, STOP, INSTALL, ENTRY);

    mech(dir.path())
        .assert()
        .stdout(predicate::str::contains("REAPER-OUTPUT").not())
        .stderr(predicate::str::contains("REAPER-OUTPUT").not());
}

#[test]
fn test_run_failing_cleanup_does_not_abort() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(
        dir.path(),
        OK,
        &["sh", "-c", "echo stop >> calls.log; exit 3"],
        INSTALL,
        ENTRY,
    );

    mech(dir.path()).assert().code(7);

    assert_eq!(call_log(dir.path()), "stop\ninstall\nentry [a b] [c]\n");
}

#[test]
fn test_run_missing_stop_script_does_not_abort() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(dir.path(), OK, &["./stop_service.sh"], INSTALL, ENTRY);

    mech(dir.path()).assert().code(7);

    assert_eq!(call_log(dir.path()), "install\nentry [a b] [c]\n");
}

#[test]
fn test_run_install_failure_propagates_code_and_skips_handoff() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(
        dir.path(),
        OK,
        STOP,
        &["sh", "-c", "echo install >> calls.log; echo 'resolver failed' >&2; exit 4"],
        ENTRY,
    );

    mech(dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("resolver failed"))
        .stderr(predicate::str::contains("Dependency installation failed"));

    assert_eq!(call_log(dir.path()), "stop\ninstall\n");
}

#[test]
fn test_run_unexecutable_entry_point_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(dir.path(), OK, STOP, INSTALL, &["./run_service.missing"]);

    mech(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot start"));

    assert_eq!(call_log(dir.path()), "stop\ninstall\n");
}

#[test]
fn test_run_leaves_configuration_files_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(dir.path(), OK, STOP, INSTALL, ENTRY);
    std::fs::write(dir.path().join(".api_keys.json"), r#"{"openai": ["sk-1"]}"#)
        .expect("write keys");
    std::fs::write(dir.path().join(".metadata_hash.json"), "{}").expect("write descriptor");
    let before = snapshot(dir.path());

    mech(dir.path()).assert().code(7);

    assert_eq!(snapshot(dir.path()), before);
    assert!(!dir.path().join(".mech_quickstart").exists());
}

#[test]
fn test_run_missing_package_manager_exits_one_without_handoff() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(
        dir.path(),
        OK,
        STOP,
        &["mech-quickstart-no-such-poetry", "install"],
        ENTRY,
    );

    mech(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "cannot run 'mech-quickstart-no-such-poetry install'",
        ))
        .stderr(predicate::str::contains("exited with status").not());

    assert_eq!(call_log(dir.path()), "stop\n");
}

#[test]
fn test_run_accepts_any_no_color_value() {
    for value in ["1", "anything", "true", ""] {
        let dir = tempfile::tempdir().expect("tempdir");
        write_launcher_config(dir.path(), OK, STOP, INSTALL, ENTRY);

        mech(dir.path()).env("NO_COLOR", value).assert().code(7);

        assert_eq!(
            call_log(dir.path()),
            "stop\ninstall\nentry [a b] [c]\n",
            "NO_COLOR={value:?}"
        );
    }
}

#[test]
fn test_run_json_keeps_launcher_progress_off_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_launcher_config(dir.path(), OK, STOP, INSTALL, &["sh", "-c", "exit 0"]);

    mech(dir.path())
        .args(["run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
