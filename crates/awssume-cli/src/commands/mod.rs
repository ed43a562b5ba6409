pub mod add;
pub mod convert;
pub mod exec;
pub mod list;
pub mod remove;
pub mod version;

use anyhow::{Context, Result};
use std::path::PathBuf;

use awssume_infrastructure::AwssumePaths;

/// Resolves the configuration path: the `--config` value if given, else
/// `~/.config/awssume`.
pub fn config_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => AwssumePaths::config_file().context("error resolving configuration path"),
    }
}
