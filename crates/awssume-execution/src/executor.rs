use std::fmt;

use awssume_core::{Result, RoleRegistry};

use crate::process::{ChildExit, CommandSpec, ProcessSpawner};
use crate::sts::{AssumeRoleRequest, RoleAssumer};

/// Default STS session duration: one hour.
pub const DEFAULT_SESSION_DURATION_SECS: i64 = 60 * 60;

/// A request to run a command as a configured Role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRequest {
    pub alias: String,
    pub session_duration: i64,
    pub command: String,
    pub args: Vec<String>,
}

/// Progress of a single execution. Strictly linear; the last phase reached
/// is what `exec` reports in its logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecPhase {
    Idle,
    CredentialsRequested,
    CredentialsReceived,
    ChildSpawned,
    ChildExited,
    ChildSignaled,
}

impl fmt::Display for ExecPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecPhase::Idle => "idle",
            ExecPhase::CredentialsRequested => "credentials-requested",
            ExecPhase::CredentialsReceived => "credentials-received",
            ExecPhase::ChildSpawned => "child-spawned",
            ExecPhase::ChildExited => "child-exited",
            ExecPhase::ChildSignaled => "child-signaled",
        };
        f.write_str(name)
    }
}

/// Runs commands with credentials of an assumed Role.
///
/// The STS call and the process launch are both behind traits, so the flow
/// can be exercised without AWS or real subprocesses.
pub struct RoleExecutor<A, P> {
    assumer: A,
    spawner: P,
}

impl<A: RoleAssumer, P: ProcessSpawner> RoleExecutor<A, P> {
    pub fn new(assumer: A, spawner: P) -> Self {
        Self { assumer, spawner }
    }

    /// Assumes the Role named by `request.alias` and runs the command with the
    /// resulting credentials added to its environment.
    ///
    /// A non-zero exit of the child is not an error; it is returned as
    /// [`ChildExit`] for the caller to propagate.
    ///
    /// # Errors
    ///
    /// * `RoleNotFound` if no Role has the alias
    /// * `AssumeRole` if STS rejects the call
    /// * `Exec` if the command cannot be started
    pub async fn exec(&self, roles: &RoleRegistry, request: &ExecRequest) -> Result<ChildExit> {
        let mut phase = ExecPhase::Idle;
        tracing::debug!(%phase, alias = %request.alias);

        let role = roles.by_alias(&request.alias)?;

        phase = ExecPhase::CredentialsRequested;
        tracing::debug!(%phase, arn = %role.arn(), session = %role.session_name());
        let credentials = self
            .assumer
            .assume_role(&AssumeRoleRequest {
                role_arn: role.arn().to_string(),
                role_session_name: role.session_name().to_string(),
                duration_seconds: request.session_duration,
            })
            .await?;

        phase = ExecPhase::CredentialsReceived;
        tracing::debug!(%phase, access_key_id = %credentials.access_key_id);

        let spec = CommandSpec {
            program: request.command.clone(),
            args: request.args.clone(),
            env: credentials.env_vars(),
        };

        phase = ExecPhase::ChildSpawned;
        tracing::debug!(%phase, command = %spec.program, args = ?spec.args);
        let exit = self.spawner.run(&spec).await?;

        phase = match exit {
            ChildExit::Exited(_) => ExecPhase::ChildExited,
            ChildExit::Signaled(_) => ExecPhase::ChildSignaled,
        };
        tracing::info!(%phase, code = exit.code(), alias = %request.alias, "command finished");

        Ok(exit)
    }
}
