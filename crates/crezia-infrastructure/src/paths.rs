//! Unified path management for Crezia files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/crezia/            # Config directory (or the --config-dir override)
//! ├── config.toml              # Application configuration
//! ├── store.toml               # Durable key-value store (session snapshot)
//! └── logs/                    # Application logs
//!     └── crezia.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

use crezia_core::error::{CreziaError, Result};

const APP_DIR_NAME: &str = "crezia";

/// The files and directories Crezia manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// `config.toml`
    Config,
    /// `store.toml`
    KeyValueStore,
    /// `logs/`
    Logs,
}

/// Resolves Crezia paths, rooted either at the platform config directory or
/// at an explicit base directory.
#[derive(Debug, Clone)]
pub struct CreziaPaths {
    base: Option<PathBuf>,
}

impl CreziaPaths {
    /// Creates a resolver. `None` uses the platform default.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the root directory every other path hangs off.
    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| CreziaError::config("Cannot find config directory")),
        }
    }

    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf> {
        let root = self.config_dir()?;
        Ok(match service {
            ServiceType::Config => root.join("config.toml"),
            ServiceType::KeyValueStore => root.join("store.toml"),
            ServiceType::Logs => root.join("logs"),
        })
    }
}
