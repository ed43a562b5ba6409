//! [`FileSystem`](awssume_core::fs::FileSystem) implementations.

mod memory;
mod os;

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;
