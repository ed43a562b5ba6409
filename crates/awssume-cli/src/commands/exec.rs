use anyhow::Result;
use std::path::Path;

use awssume_core::fs::FileSystem;
use awssume_execution::{
    ExecRequest, RoleExecutor, StsRoleAssumer, TokioProcessSpawner, default_shell,
};
use awssume_infrastructure::ConfigStore;

/// Runs `command` as the Role `alias` and returns the exit code to propagate.
pub async fn run<F: FileSystem>(
    store: &ConfigStore<F>,
    path: &Path,
    alias: String,
    session_duration: i64,
    command: Vec<String>,
) -> Result<i32> {
    let config = store.load(path)?;
    let (command, args) = split_command(command, default_shell)?;

    let assumer = StsRoleAssumer::from_env().await?;
    let executor = RoleExecutor::new(assumer, TokioProcessSpawner::new());

    let exit = executor
        .exec(
            &config.roles,
            &ExecRequest {
                alias,
                session_duration,
                command,
                args,
            },
        )
        .await?;

    Ok(exit.code())
}

/// Splits `command` into program and arguments, asking `fallback` for a
/// program when none was given.
fn split_command(
    command: Vec<String>,
    fallback: impl FnOnce() -> awssume_core::Result<String>,
) -> Result<(String, Vec<String>)> {
    let mut parts = command.into_iter();
    match parts.next() {
        Some(program) => Ok((program, parts.collect())),
        None => Ok((fallback()?, Vec::new())),
    }
}
