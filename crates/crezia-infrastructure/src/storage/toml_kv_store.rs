//! File-backed key-value store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crezia_core::error::Result;
use crezia_core::session::KeyValueStore;
use serde::{Deserialize, Serialize};

use super::atomic_toml::AtomicTomlFile;
use crate::paths::{CreziaPaths, ServiceType};

/// On-disk layout of `store.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Durable [`KeyValueStore`] persisted to a single TOML document.
///
/// Every call goes to disk; there is no cache, so two processes sharing the
/// file see each other's writes (last writer wins).
pub struct TomlKeyValueStore {
    file: AtomicTomlFile<StoreDocument>,
}

impl TomlKeyValueStore {
    /// Opens the store at the default location for `base`.
    pub fn new(base: Option<&Path>) -> Result<Self> {
        let path = CreziaPaths::new(base).get_path(ServiceType::KeyValueStore)?;
        Ok(Self::at(path))
    }

    /// Opens the store at an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl KeyValueStore for TomlKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .file
            .load()?
            .and_then(|mut doc| doc.entries.remove(key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(StoreDocument::default(), |doc| {
            doc.entries.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn delete(&self, key: &str) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update(StoreDocument::default(), |doc| {
            doc.entries.remove(key);
            Ok(())
        })
    }
}
