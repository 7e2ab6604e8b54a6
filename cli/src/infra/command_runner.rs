//! Infrastructure implementation of the `CommandRunner` port.
//!
//! Three stdio modes: captured (probes, with a timeout), inherited (steps the
//! user should watch) and discarded (the reaper and the repository check).

use std::process::{ExitStatus, Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::debug;

use crate::application::ports::CommandRunner;

/// Default timeout for captured probe commands (`docker inspect`, `--version`).
pub const DEFAULT_CMD_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs programs on the tokio runtime.
///
/// Captured runs race the child against `timeout` with `tokio::select!` and
/// kill it explicitly on expiry; dropping a timed-out future alone leaves the
/// process running on Windows.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_CMD_TIMEOUT)
    }
}

#[derive(Clone, Copy)]
enum Streams {
    Captured,
    Inherited,
    Discarded,
}

fn spawn(program: &str, args: &[&str], streams: Streams) -> Result<Child> {
    let mut cmd = Command::new(program);
    cmd.args(args).kill_on_drop(true);
    match streams {
        Streams::Captured => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        }
        Streams::Inherited => {}
        Streams::Discarded => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }
    }
    debug!(program, ?args, "spawning");
    cmd.spawn()
        .with_context(|| format!("failed to spawn {program}"))
}

async fn drain(stream: Option<impl AsyncRead + Unpin>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut s) = stream {
        let _ = s.read_to_end(&mut buf).await;
    }
    buf
}

async fn wait(mut child: Child, program: &str) -> Result<ExitStatus> {
    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for {program}"))?;
    debug!(program, %status, "exited");
    Ok(status)
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = spawn(program, args, Streams::Captured)?;
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Pipes are drained alongside wait(): a child blocked on a full pipe
        // never exits.
        tokio::select! {
            (status, stdout, stderr) = async {
                tokio::join!(child.wait(), drain(stdout), drain(stderr))
            } => Ok(Output {
                status: status.with_context(|| format!("waiting for {program}"))?,
                stdout,
                stderr,
            }),
            () = tokio::time::sleep(self.timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", self.timeout.as_secs())
            }
        }
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        wait(spawn(program, args, Streams::Inherited)?, program).await
    }

    async fn run_silent(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        wait(spawn(program, args, Streams::Discarded)?, program).await
    }
}
