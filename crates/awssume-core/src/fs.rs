//! Filesystem abstraction used by the config store.
//!
//! Implementations live in `awssume-infrastructure`: one backed by the OS and
//! one in-memory for tests.

use std::io;
use std::path::Path;

/// The filesystem operations the config store needs.
pub trait FileSystem: Send + Sync {
    /// Returns whether a file exists at `path`.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Reads the whole file. Missing files yield `ErrorKind::NotFound`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Writes `contents`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Creates an empty file, truncating an existing one.
    fn create(&self, path: &Path) -> io::Result<()>;

    fn remove(&self, path: &Path) -> io::Result<()>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        (**self).exists(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn create(&self, path: &Path) -> io::Result<()> {
        (**self).create(path)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        (**self).remove(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }
}
