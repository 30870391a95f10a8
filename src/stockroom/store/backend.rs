use crate::error::Result;
use std::path::{Path, PathBuf};

/// Raw text storage.
///
/// Paths are interpreted relative to the backend's root; absolute paths are
/// used as-is.
pub trait StorageBackend {
    /// Read a whole file.
    /// Returns Ok(None) if it does not exist, Err on any other I/O failure.
    fn read_text(&self, path: &Path) -> Result<Option<String>>;

    /// Replace a file's contents.
    /// Implementations should not leave a partially written file behind.
    fn write_text(&self, path: &Path, contents: &str) -> Result<()>;

    /// Make sure the root location exists before writing category files.
    fn ensure_root(&self) -> Result<()> {
        Ok(())
    }

    /// The full location a path resolves to (for messages).
    fn resolve(&self, path: &Path) -> PathBuf;
}
