//! Error types for awssume.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error used to carry failures from external collaborators (AWS SDK, OS).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A shared error type for every awssume crate.
///
/// All variants are terminal for the current invocation; nothing in the
/// workspace retries on any of them.
#[derive(Error, Debug)]
pub enum AwssumeError {
    /// The input is not a well-formed `arn:partition:service:region:account:resource` string.
    #[error("malformed ARN '{input}': {reason}")]
    MalformedIdentifier { input: String, reason: &'static str },

    #[error("no role with alias {0} found")]
    RoleNotFound(String),

    #[error("role {0} already exists")]
    RoleExists(String),

    /// More than one of `<path>.json`, `<path>.yaml`, `<path>.toml` exists.
    #[error("multiple configuration files detected: {}", display_paths(.found))]
    MultipleConfigsDetected { found: Vec<PathBuf> },

    #[error("unsupported config file format: {0}")]
    UnsupportedConfigFormat(String),

    /// Serialization error
    #[error("error serializing {format}: {message}")]
    Marshal { format: String, message: String },

    /// Deserialization error
    #[error("error deserializing {format}: {message}")]
    Unmarshal { format: String, message: String },

    #[error("error reading file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing to file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error loading AWS config: {0}")]
    LoadAwsConfig(String),

    #[error("error assuming Role {arn}: {source}")]
    AssumeRole {
        arn: String,
        #[source]
        source: BoxError,
    },

    #[error("error executing command {command} (args {args:?}): {source}")]
    Exec {
        command: String,
        args: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("no shell found")]
    NoShellFound,
}

impl AwssumeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn malformed(input: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedIdentifier {
            input: input.into(),
            reason,
        }
    }

    pub fn role_not_found(alias: impl Into<String>) -> Self {
        Self::RoleNotFound(alias.into())
    }

    pub fn role_exists(alias: impl Into<String>) -> Self {
        Self::RoleExists(alias.into())
    }

    pub fn marshal(format: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Marshal {
            format: format.into(),
            message: err.to_string(),
        }
    }

    pub fn unmarshal(format: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Unmarshal {
            format: format.into(),
            message: err.to_string(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn assume_role(arn: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::AssumeRole {
            arn: arn.into(),
            source: source.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_role_not_found(&self) -> bool {
        matches!(self, Self::RoleNotFound(_))
    }

    pub fn is_role_exists(&self) -> bool {
        matches!(self, Self::RoleExists(_))
    }

    pub fn is_malformed_identifier(&self) -> bool {
        matches!(self, Self::MalformedIdentifier { .. })
    }

    pub fn is_multiple_configs(&self) -> bool {
        matches!(self, Self::MultipleConfigsDetected { .. })
    }

    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedConfigFormat(_))
    }

    /// Check if this error came from the STS collaborator
    pub fn is_assume_role(&self) -> bool {
        matches!(self, Self::AssumeRole { .. })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A type alias for `Result<T, AwssumeError>`.
pub type Result<T> = std::result::Result<T, AwssumeError>;
