//! Child process spawning with signal forwarding.

use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use awssume_core::{AwssumeError, Result};

/// What to run and which variables to add to the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Added on top of the current process environment.
    pub env: Vec<(String, String)>,
}

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    Exited(i32),
    /// Terminated by the given signal number.
    Signaled(i32),
}

impl ChildExit {
    /// Exit code to propagate, using the shell convention `128 + signo` for
    /// signaled children.
    pub fn code(&self) -> i32 {
        match self {
            ChildExit::Exited(code) => *code,
            ChildExit::Signaled(signo) => 128 + signo,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ChildExit::Exited(0))
    }

    fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildExit::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signo) = status.signal() {
                return ChildExit::Signaled(signo);
            }
        }

        ChildExit::Exited(1)
    }
}

/// Runs a command to completion with inherited stdio.
#[async_trait]
pub trait ProcessSpawner: Send + Sync {
    async fn run(&self, spec: &CommandSpec) -> Result<ChildExit>;
}

/// [`ProcessSpawner`] using `tokio::process`.
///
/// While the child runs, the first SIGINT or SIGTERM the parent receives is
/// forwarded to the child. The relay is torn down once the child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessSpawner;

impl TokioProcessSpawner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessSpawner for TokioProcessSpawner {
    async fn run(&self, spec: &CommandSpec) -> Result<ChildExit> {
        let exec_err = |source: std::io::Error| AwssumeError::Exec {
            command: spec.program.clone(),
            args: spec.args.clone(),
            source,
        };

        // Handlers go in before the spawn so an early SIGINT cannot kill the
        // parent and orphan the child.
        let relay = signal_relay::SignalRelay::install().map_err(exec_err)?;

        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(exec_err)?;

        tracing::debug!(program = %spec.program, pid = ?child.id(), "child spawned");

        let forwarder = child.id().and_then(|pid| relay.forward_to(pid));

        let status = child.wait().await;

        if let Some(forwarder) = forwarder {
            forwarder.abort();
        }

        let exit = ChildExit::from_status(status.map_err(exec_err)?);
        tracing::debug!(?exit, "child finished");
        Ok(exit)
    }
}

#[cfg(unix)]
mod signal_relay {
    use nix::sys::signal::{self as nix_signal, kill};
    use nix::unistd::Pid;
    use tokio::signal::unix::{Signal, SignalKind, signal};
    use tokio::task::JoinHandle;

    /// SIGINT/SIGTERM listeners, registered before the child exists.
    pub(super) struct SignalRelay {
        interrupt: Signal,
        terminate: Signal,
    }

    impl SignalRelay {
        pub(super) fn install() -> std::io::Result<Self> {
            Ok(Self {
                interrupt: signal(SignalKind::interrupt())?,
                terminate: signal(SignalKind::terminate())?,
            })
        }

        /// Starts a one-shot task forwarding the first signal to `pid`.
        pub(super) fn forward_to(self, pid: u32) -> Option<JoinHandle<()>> {
            let Self {
                mut interrupt,
                mut terminate,
            } = self;

            Some(tokio::spawn(async move {
                let sig = tokio::select! {
                    _ = interrupt.recv() => nix_signal::Signal::SIGINT,
                    _ = terminate.recv() => nix_signal::Signal::SIGTERM,
                };

                let Ok(raw) = i32::try_from(pid) else {
                    return;
                };
                tracing::debug!(signal = %sig, pid, "forwarding signal to child");
                if let Err(e) = kill(Pid::from_raw(raw), sig) {
                    tracing::warn!(signal = %sig, pid, error = %e, "failed to forward signal");
                }
            }))
        }
    }
}

#[cfg(not(unix))]
mod signal_relay {
    use tokio::task::JoinHandle;

    pub(super) struct SignalRelay;

    impl SignalRelay {
        pub(super) fn install() -> std::io::Result<Self> {
            Ok(Self)
        }

        pub(super) fn forward_to(self, _pid: u32) -> Option<JoinHandle<()>> {
            None
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec {
            program: "/bin/sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
            env: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_exit_code_is_propagated() {
        let exit = TokioProcessSpawner::new().run(&sh("exit 7")).await.unwrap();
        assert_eq!(exit, ChildExit::Exited(7));
        assert_eq!(exit.code(), 7);
    }

    #[tokio::test]
    async fn test_env_is_added() {
        let mut spec = sh(r#"test "$AWSSUME_TEST_VAR" = expected && test -n "$PATH""#);
        spec.env
            .push(("AWSSUME_TEST_VAR".to_string(), "expected".to_string()));

        let exit = TokioProcessSpawner::new().run(&spec).await.unwrap();
        assert!(exit.success());
    }

    #[tokio::test]
    async fn test_signaled_child() {
        let exit = TokioProcessSpawner::new()
            .run(&sh("kill -KILL $$"))
            .await
            .unwrap();
        assert_eq!(exit, ChildExit::Signaled(9));
        assert_eq!(exit.code(), 137);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_sigterm_is_forwarded_to_child() {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;
        use std::time::Duration;

        let sender = tokio::spawn(async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            kill(Pid::this(), Signal::SIGTERM).unwrap();
        });

        let exit = TokioProcessSpawner::new()
            .run(&sh("trap 'exit 3' TERM; sleep 5 & wait"))
            .await
            .unwrap();
        sender.await.unwrap();

        assert_eq!(exit, ChildExit::Exited(3));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let spec = CommandSpec {
            program: "/nonexistent/awssume-test-binary".to_string(),
            args: vec!["x".to_string()],
            env: Vec::new(),
        };

        let err = TokioProcessSpawner::new().run(&spec).await.unwrap_err();
        assert!(matches!(err, AwssumeError::Exec { .. }));
    }
}
