//! Supported configuration file formats.

use std::fmt;
use std::str::FromStr;

use crate::error::AwssumeError;

/// The serialization format of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigFormat {
    Json,
    Toml,
    #[default]
    Yaml,
    /// Sentinel for unrecognized extensions. Never persisted.
    Unknown,
}

impl ConfigFormat {
    /// Formats probed on disk, in probe order.
    pub const SUPPORTED: [ConfigFormat; 3] =
        [ConfigFormat::Json, ConfigFormat::Yaml, ConfigFormat::Toml];

    /// Maps a file extension (with or without a leading dot) to a format.
    ///
    /// Matching is case-sensitive; `yml` is accepted as YAML. Anything else,
    /// including the empty string, is [`ConfigFormat::Unknown`].
    pub fn from_extension(ext: &str) -> Self {
        match ext.strip_prefix('.').unwrap_or(ext) {
            "json" => ConfigFormat::Json,
            "toml" => ConfigFormat::Toml,
            "yaml" | "yml" => ConfigFormat::Yaml,
            _ => ConfigFormat::Unknown,
        }
    }

    /// The canonical file extension, or the `UNKNOWN` marker.
    ///
    /// The marker is not a valid extension and must never be used to build a
    /// file path.
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Unknown => "UNKNOWN",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ConfigFormat::Unknown)
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Strict parsing for user input; unlike [`ConfigFormat::from_extension`]
/// this rejects anything that does not name a real format.
impl FromStr for ConfigFormat {
    type Err = AwssumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ConfigFormat::from_extension(s) {
            ConfigFormat::Unknown => Err(AwssumeError::UnsupportedConfigFormat(s.to_string())),
            format => Ok(format),
        }
    }
}
