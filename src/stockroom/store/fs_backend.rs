use super::backend::StorageBackend;
use crate::error::{Result, StockError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn tmp_path_for(target: &Path) -> PathBuf {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        target.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

impl StorageBackend for FsBackend {
    fn read_text(&self, path: &Path) -> Result<Option<String>> {
        let path = self.resolve(path);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StockError::io(path, e)),
        }
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        let target = self.resolve(path);

        // Atomic write: a crash leaves either the old or the new file.
        let tmp = Self::tmp_path_for(&target);
        fs::write(&tmp, contents).map_err(|e| StockError::io(&target, e))?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(StockError::io(&target, e));
        }
        Ok(())
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| StockError::io(&self.root, e))?;
        }
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
