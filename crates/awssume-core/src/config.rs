//! The loaded configuration: where it lives, its format, and its roles.

use std::path::{Path, PathBuf};

use crate::format::ConfigFormat;
use crate::role::RoleRegistry;

/// In-memory view of the configuration file.
///
/// Only `roles` is persisted; the path and format are bookkeeping derived
/// from which file was found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    path: PathBuf,
    format: ConfigFormat,
    pub roles: RoleRegistry,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>, format: ConfigFormat, roles: RoleRegistry) -> Self {
        Self {
            path: path.into(),
            format,
            roles,
        }
    }

    /// Path of the configuration file without its extension.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    pub fn set_format(&mut self, format: ConfigFormat) {
        self.format = format;
    }

    /// Full path for the current format, e.g. `~/.config/awssume.yaml`.
    pub fn file_path(&self) -> PathBuf {
        file_path_for(&self.path, self.format)
    }
}

/// Appends the format's extension to a path that has none.
///
/// The path is treated as a plain string so that dotted names such as
/// `my.config` keep their dot.
pub fn file_path_for(path_without_extension: &Path, format: ConfigFormat) -> PathBuf {
    let mut os = path_without_extension.as_os_str().to_owned();
    os.push(".");
    os.push(format.extension());
    PathBuf::from(os)
}
