use anyhow::Result;
use std::path::Path;

use awssume_core::ConfigFormat;
use awssume_core::fs::FileSystem;
use awssume_infrastructure::ConfigStore;

/// Rewrites the configuration in `format` (`json`, `yaml`/`yml`, `toml`).
pub fn run<F: FileSystem>(store: &ConfigStore<F>, path: &Path, format: &str) -> Result<()> {
    let format: ConfigFormat = format.parse()?;
    let mut config = store.load(path)?;
    store.convert(&mut config, format)?;
    Ok(())
}
