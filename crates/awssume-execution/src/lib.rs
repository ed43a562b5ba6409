//! Running commands as an assumed IAM Role.
//!
//! [`RoleExecutor`] ties the two external collaborators together: a
//! [`RoleAssumer`] that trades a Role ARN for temporary credentials, and a
//! [`ProcessSpawner`] that launches the child with those credentials in its
//! environment.

pub mod credentials;
pub mod executor;
pub mod process;
pub mod shell;
pub mod sts;

pub use credentials::TemporaryCredentials;
pub use executor::{DEFAULT_SESSION_DURATION_SECS, ExecPhase, ExecRequest, RoleExecutor};
pub use process::{ChildExit, CommandSpec, ProcessSpawner, TokioProcessSpawner};
pub use shell::default_shell;
pub use sts::{AssumeRoleRequest, RoleAssumer, StsRoleAssumer};
