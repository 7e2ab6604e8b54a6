//! Unit tests for the launcher sequence.

#![allow(clippy::expect_used)]

use std::process::ExitCode;

use mech_quickstart_cli::application::services::launch::launch;
use mech_quickstart_cli::domain::{CommandSpec, LaunchError, LauncherSection};

use crate::mocks::{NoopReporter, RecordingHandoff, RecordingRunner, Reply, same_exit};

const GIT_CHECK: &str = "git rev-parse --git-dir";
const STOP: &str = "./stop_service.sh";
const INSTALL: &str = "poetry install";

fn plan() -> LauncherSection {
    LauncherSection::default()
}

fn launch_error(err: &anyhow::Error) -> &LaunchError {
    err.downcast_ref::<LaunchError>()
        .expect("error should be a LaunchError")
}

#[tokio::test]
async fn test_launch_outside_repository_aborts_before_side_effects() {
    let runner = RecordingRunner::new().on(GIT_CHECK, Reply::Exit(128));
    let handoff = RecordingHandoff::exiting(0);

    let err = launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect_err("launch should fail outside a repository");

    assert!(matches!(launch_error(&err), LaunchError::NotARepository));
    assert_eq!(launch_error(&err).exit_code(), 1);
    assert_eq!(runner.calls(), vec![format!("silent:{GIT_CHECK}")]);
    assert!(handoff.calls().is_empty());
}

#[tokio::test]
async fn test_launch_without_git_binary_is_not_a_repository() {
    let runner = RecordingRunner::new().on(GIT_CHECK, Reply::SpawnError);
    let handoff = RecordingHandoff::exiting(0);

    let err = launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect_err("launch should fail without git");

    assert!(matches!(launch_error(&err), LaunchError::NotARepository));
    assert_eq!(runner.count(STOP), 0);
    assert_eq!(runner.count(INSTALL), 0);
}

#[tokio::test]
async fn test_launch_success_runs_steps_in_order_and_hands_off_once() {
    let runner = RecordingRunner::new();
    let handoff = RecordingHandoff::exiting(0);

    let code = launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect("launch should succeed");

    assert!(same_exit(code, ExitCode::SUCCESS));
    assert_eq!(
        runner.calls(),
        vec![
            format!("silent:{GIT_CHECK}"),
            format!("silent:{STOP}"),
            format!("status:{INSTALL}"),
        ]
    );
    assert_eq!(
        handoff.calls(),
        vec![vec!["poetry", "run", "python", "run_service.py"]]
    );
}

#[tokio::test]
async fn test_launch_cleanup_attempted_once_when_nothing_is_running() {
    let runner = RecordingRunner::new().on(STOP, Reply::Exit(1));
    let handoff = RecordingHandoff::exiting(0);

    launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect("a failing stop procedure must not abort");

    assert_eq!(runner.count(STOP), 1);
    assert_eq!(handoff.calls().len(), 1);
}

#[tokio::test]
async fn test_launch_cleanup_spawn_failure_is_ignored() {
    let runner = RecordingRunner::new().on(STOP, Reply::SpawnError);
    let handoff = RecordingHandoff::exiting(0);

    launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect("a missing stop script must not abort");

    assert_eq!(runner.count(STOP), 1);
    assert_eq!(runner.count(INSTALL), 1);
    assert_eq!(handoff.calls().len(), 1);
}

#[tokio::test]
async fn test_launch_install_failure_prevents_handoff_and_keeps_code() {
    let runner = RecordingRunner::new().on(INSTALL, Reply::Exit(3));
    let handoff = RecordingHandoff::exiting(0);

    let err = launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect_err("install failure should be fatal");

    match launch_error(&err) {
        LaunchError::DependencyInstall { command, code } => {
            assert_eq!(command, INSTALL);
            assert_eq!(*code, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(launch_error(&err).exit_code(), 3);
    assert!(handoff.calls().is_empty());
}

#[tokio::test]
async fn test_launch_missing_package_manager_exits_one() {
    let runner = RecordingRunner::new().on(INSTALL, Reply::SpawnError);
    let handoff = RecordingHandoff::exiting(0);

    let err = launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect_err("missing poetry should be fatal");

    assert!(matches!(
        launch_error(&err),
        LaunchError::InstallerUnavailable { command, .. } if command == INSTALL
    ));
    assert_eq!(launch_error(&err).exit_code(), 1);
    assert!(!err.to_string().contains("exited with status"));
    assert!(handoff.calls().is_empty());
}

#[tokio::test]
async fn test_launch_passes_entry_point_arguments_unaltered() {
    let mut plan = plan();
    plan.entry_point = CommandSpec::new(
        "python",
        ["run_service.py", "--attended=false", "two words", ""],
    )
    .expect("valid command");
    let runner = RecordingRunner::new();
    let handoff = RecordingHandoff::exiting(0);

    launch(&runner, &handoff, &plan, &NoopReporter)
        .await
        .expect("launch should succeed");

    assert_eq!(
        handoff.calls(),
        vec![vec![
            "python",
            "run_service.py",
            "--attended=false",
            "two words",
            ""
        ]]
    );
}

#[tokio::test]
async fn test_launch_propagates_entry_point_exit_code() {
    let runner = RecordingRunner::new();
    let handoff = RecordingHandoff::exiting(42);

    let code = launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect("handoff ran");

    assert!(same_exit(code, ExitCode::from(42)));
}

#[tokio::test]
async fn test_launch_unexecutable_entry_point_is_handoff_error() {
    let runner = RecordingRunner::new();
    let handoff = RecordingHandoff::failing();

    let err = launch(&runner, &handoff, &plan(), &NoopReporter)
        .await
        .expect_err("handoff failure should surface");

    assert!(matches!(launch_error(&err), LaunchError::Handoff { .. }));
    assert_eq!(launch_error(&err).exit_code(), 1);
    assert_eq!(handoff.calls().len(), 1);
}
