//! # Configuration
//!
//! Stockroom configuration is loaded with [`confique`] from TOML files.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Explicit file**: `--config <file>` (must exist).
//! 2. **Local Config**: `./stockroom.toml` in the working directory.
//! 3. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! `--data-dir` on the command line overrides `data_dir` from any file.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | `.` | Directory holding the three category CSV files |
//! | `color` | `true` | Colorize terminal output |

use crate::error::{Result, StockError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stockroom.toml";

/// Configuration for stockroom, stored in `stockroom.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StockroomConfig {
    /// Directory holding electronics/food/medicine inventory files.
    #[config(default = ".")]
    pub data_dir: PathBuf,

    /// Colorize terminal output.
    #[config(default = true)]
    pub color: bool,
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            color: true,
        }
    }
}

impl StockroomConfig {
    /// Loads configuration from the standard locations, with an optional
    /// explicit file taking precedence.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let user_file = ProjectDirs::from("", "", "stockroom")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME));
        Self::load_from(explicit, Path::new(CONFIG_FILENAME), user_file.as_deref())
    }

    pub fn load_from(explicit: Option<&Path>, local: &Path, user: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(StockError::Store(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        builder = builder.file(local);
        if let Some(path) = user {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_no_files_exist() {
        let dir = TempDir::new().unwrap();
        let config =
            StockroomConfig::load_from(None, &dir.path().join(CONFIG_FILENAME), None).unwrap();
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_local_file_overrides_user_file() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("local.toml");
        let user = dir.path().join("user.toml");
        fs::write(&local, "data_dir = \"/srv/stock\"\n").unwrap();
        fs::write(&user, "data_dir = \"/home/me\"\ncolor = false\n").unwrap();

        let config = StockroomConfig::load_from(None, &local, Some(&user)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/stock"));
        assert!(!config.color);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(StockroomConfig::load_from(Some(&missing), &dir.path().join("x.toml"), None).is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join(CONFIG_FILENAME);
        fs::write(&local, "color = \"sometimes\"\n").unwrap();
        assert!(matches!(
            StockroomConfig::load_from(None, &local, None),
            Err(StockError::Config(_))
        ));
    }

    #[test]
    fn test_data_dir_override() {
        let config = StockroomConfig::default().with_data_dir(Some(PathBuf::from("inv")));
        assert_eq!(config.data_dir, PathBuf::from("inv"));
        let config = config.with_data_dir(None);
        assert_eq!(config.data_dir, PathBuf::from("inv"));
    }
}
