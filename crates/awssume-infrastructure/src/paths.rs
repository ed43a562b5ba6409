//! Default location of the awssume configuration file.
//!
//! ```text
//! ~/.config/
//! └── awssume.{yaml,json,toml}   # exactly one of these
//! ```
//!
//! The path is `~/.config/awssume` on every platform, matching the layout the
//! tool has always used rather than the platform's native config directory.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("cannot find home directory")]
    HomeDirNotFound,
}

pub struct AwssumePaths;

impl AwssumePaths {
    /// Config path relative to the home directory, without extension.
    pub const DEFAULT_CONFIG_FILE_PATH: &'static str = ".config/awssume";

    /// Returns the default config path without extension.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `/home/alice/.config/awssume`
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine home directory
    pub fn config_file() -> Result<PathBuf, PathError> {
        dirs::home_dir()
            .map(|home| home.join(Self::DEFAULT_CONFIG_FILE_PATH))
            .ok_or(PathError::HomeDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = AwssumePaths::config_file().unwrap();
        assert!(config_file.ends_with(".config/awssume"));
        assert!(config_file.extension().is_none());
    }

    #[test]
    fn test_path_error_message() {
        assert_eq!(
            PathError::HomeDirNotFound.to_string(),
            "cannot find home directory"
        );
    }
}
