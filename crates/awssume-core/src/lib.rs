//! Domain types for awssume.
//!
//! - [`arn`]: parsing and serialization of Amazon Resource Names
//! - [`role`]: the Role model and the in-memory [`RoleRegistry`](role::RoleRegistry)
//! - [`format`]: supported configuration file formats
//! - [`config`]: the loaded configuration
//! - [`fs`]: the filesystem seam used by the config store

pub mod arn;
pub mod config;
pub mod error;
pub mod format;
pub mod fs;
pub mod role;

pub use arn::Arn;
pub use config::Config;
pub use error::{AwssumeError, Result};
pub use format::ConfigFormat;
pub use role::{Role, RoleRegistry};
