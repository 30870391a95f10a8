use super::backend::StorageBackend;
use crate::error::{Result, StockError};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since stockroom is single-threaded,
/// which lets the `StorageBackend` trait take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<HashMap<PathBuf, String>>,
    failing_writes: RefCell<HashSet<PathBuf>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for every path.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make writes to one specific path fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.failing_writes.borrow_mut().insert(path.into());
    }

    /// Test helper to seed a file directly.
    pub fn put(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read_text(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() || self.failing_writes.borrow().contains(path) {
            return Err(StockError::Store(format!(
                "Simulated write error for {}",
                path.display()
            )));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        PathBuf::from("memory://").join(path)
    }
}
