//! Platform directory resolution.
//!
//! Locates the config, data and log directories following OS conventions
//! (XDG on Linux, Known Folders on Windows, Library on macOS). The default
//! catalog lives in the data directory.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while resolving or creating directories.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// An I/O error occurred (e.g., directory creation failed).
    #[error("platform I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Directories used by the `legend` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the default `catalog.ron`.
    pub data_dir: PathBuf,
    /// Holds the JSON log written by debug builds.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "color-legend";

/// File name of the catalog looked up in the data directory.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.ron";

impl AppDirs {
    /// Resolve directories without creating them.
    ///
    /// `config_override` replaces the config directory (the `--config` flag);
    /// logs then live beneath it as well.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if no override is given and the
    /// OS does not expose a configuration directory.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self, PlatformError> {
        let config_dir = match config_override {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(PlatformError::NoConfigDir)?
                .join(APP_NAME),
        };

        Ok(Self::with_data_base(config_dir, dirs::data_dir()))
    }

    /// Data lives in `<data_base>/color-legend`, or next to the config when
    /// the OS has no data directory.
    fn with_data_base(config_dir: PathBuf, data_base: Option<PathBuf>) -> Self {
        let data_dir = data_base
            .map(|dir| dir.join(APP_NAME))
            .unwrap_or_else(|| config_dir.clone());

        Self {
            log_dir: config_dir.join("logs"),
            config_dir,
            data_dir,
        }
    }

    /// Resolve directories rooted under a custom base path.
    ///
    /// Useful for testing without touching real OS directories.
    pub fn resolve_with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.join("config"),
            data_dir: app_dir.join("data"),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Create the config and data directories on disk.
    ///
    /// The log directory is created lazily by the logger.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Io`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Catalog used when neither config nor CLI names one.
    pub fn default_catalog_path(&self) -> PathBuf {
        self.data_dir.join(DEFAULT_CATALOG_FILE)
    }
}
