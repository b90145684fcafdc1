//! Testing utilities for nook
//!
//! Fixture builders for items, plus a temporary config file
//! wrapper. Only available when compiled with `cfg(test)`.

use crate::catalog::Item;
use crate::config::NookConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Item with the given name and neighborhood, placed at (1, 1)
#[must_use]
pub fn item_in(name: &str, neighborhood: &str) -> Item {
    Item::new(name, neighborhood, format!("{name} description"), 1.0, 1.0, "test-image")
}

/// Config file in a temporary directory that is removed on drop
///
/// # Examples
/// ```ignore
/// let cfg = TestConfigFile::with_contents("detail_span = 0.5\n");
/// let config = NookConfig::load_from(cfg.path()).unwrap();
/// ```
pub struct TestConfigFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TestConfigFile {
    /// Path inside a fresh temporary directory; the file itself does not exist yet
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nook").join("config.toml");
        Self { _dir: dir, path }
    }

    /// Temporary config file holding `contents`
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_contents(contents: &str) -> Self {
        let file = Self::empty();
        if let Some(parent) = file.path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&file.path, contents).expect("Failed to write config file");
        file
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file through the normal config path
    ///
    /// # Panics
    /// Panics if loading fails.
    #[must_use]
    pub fn load(&self) -> NookConfig {
        NookConfig::load_from(&self.path).expect("Failed to load test config")
    }
}
