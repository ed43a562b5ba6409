use anyhow::Result;
use std::path::Path;

use awssume_core::fs::FileSystem;
use awssume_core::{Arn, Role};
use awssume_infrastructure::ConfigStore;

pub fn run<F: FileSystem>(
    store: &ConfigStore<F>,
    path: &Path,
    arn: &str,
    alias: &str,
    session_name: &str,
) -> Result<()> {
    let arn: Arn = arn.parse()?;
    let mut config = store.load(path)?;

    config.roles.add(Role::new(arn, alias, session_name))?;
    store.save(&config)?;

    tracing::info!(alias, "role added");
    Ok(())
}
