//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` and caches it.

use std::path::Path;
use std::sync::{Arc, RwLock};

use crezia_core::config::CreziaConfig;
use crezia_core::error::{CreziaError, Result};

use crate::paths::{CreziaPaths, ServiceType};
use crate::storage::AtomicTomlFile;

/// Loads and caches [`CreziaConfig`].
///
/// A missing file yields the defaults. A file that exists but does not parse
/// is reported as a `Config` error rather than silently ignored.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<CreziaConfig>>,
    config: Arc<RwLock<Option<CreziaConfig>>>,
}

impl ConfigService {
    pub fn new(base: Option<&Path>) -> Result<Self> {
        let path = CreziaPaths::new(base).get_path(ServiceType::Config)?;
        Ok(Self {
            file: Arc::new(AtomicTomlFile::new(path)),
            config: Arc::new(RwLock::new(None)),
        })
    }

    /// Returns the configuration, reading the file on first access.
    pub fn get_config(&self) -> Result<CreziaConfig> {
        if let Some(cached) = self.read_cache()? {
            return Ok(cached);
        }

        let loaded = self
            .file
            .load()
            .map_err(|e| {
                CreziaError::config(format!("{}: {}", self.file.path().display(), e))
            })?
            .unwrap_or_default();

        tracing::debug!(path = %self.file.path().display(), "Loaded configuration");

        let mut cache = self
            .config
            .write()
            .map_err(|e| CreziaError::internal(format!("Config cache poisoned: {}", e)))?;
        *cache = Some(loaded.clone());

        Ok(loaded)
    }

    fn read_cache(&self) -> Result<Option<CreziaConfig>> {
        let cache = self
            .config
            .read()
            .map_err(|e| CreziaError::internal(format!("Config cache poisoned: {}", e)))?;
        Ok(cache.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        assert_eq!(service.get_config().unwrap(), CreziaConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "[latency]\ntool_delay_ms = 0\n\n[quota]\nfree_daily_limit = 3\n",
        )
        .unwrap();

        let config = ConfigService::new(Some(temp_dir.path()))
            .unwrap()
            .get_config()
            .unwrap();
        assert_eq!(config.latency.tool_delay_ms, 0);
        assert_eq!(config.latency.login_delay_ms, 1000);
        assert_eq!(config.quota.free_daily_limit, 3);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "[quota\n").unwrap();

        let err = ConfigService::new(Some(temp_dir.path()))
            .unwrap()
            .get_config()
            .unwrap_err();
        assert!(matches!(err, CreziaError::Config(_)));
    }

    #[test]
    fn test_config_is_read_once() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        assert_eq!(service.get_config().unwrap().quota.free_daily_limit, 10);

        std::fs::write(
            temp_dir.path().join("config.toml"),
            "[quota]\nfree_daily_limit = 20\n",
        )
        .unwrap();
        assert_eq!(service.get_config().unwrap().quota.free_daily_limit, 10);
    }
}
