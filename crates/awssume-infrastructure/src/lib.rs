pub mod dto;
pub mod fs;
pub mod paths;
pub mod storage;

pub use crate::fs::{MemoryFileSystem, OsFileSystem};
pub use crate::paths::AwssumePaths;
pub use crate::storage::ConfigStore;
