//! Atomic TOML file operations.
//!
//! Writes go to a temporary sibling file that is fsynced and renamed over the
//! target, so readers see either the old or the new document. Read-modify-write
//! updates hold an exclusive lock file for their whole duration.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crezia_core::error::{CreziaError, Result};
use serde::{Serialize, de::DeserializeOwned};

/// A handle to a TOML document on disk.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the document.
    ///
    /// - `Ok(None)`: the file does not exist or is blank
    /// - `Err`: the file could not be read or parsed
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Serializes `data` and replaces the file atomically.
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Loads the document (or `default_value`), applies `f`, and saves the
    /// result, all under an exclusive lock. Nothing is written if `f` fails.
    ///
    /// A document that exists but does not parse is replaced by
    /// `default_value`. Read failures are still returned.
    pub fn update<F, R>(&self, default_value: T, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> Result<R>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = match self.load() {
            Ok(loaded) => loaded.unwrap_or(default_value),
            Err(e @ CreziaError::Serialization { .. }) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Replacing unreadable document: {}",
                    e
                );
                default_value
            }
            Err(e) => return Err(e),
        };
        let outcome = f(&mut data)?;
        self.save(&data)?;

        Ok(outcome)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| CreziaError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| CreziaError::io("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock guard, released when the handle closes on drop.
///
/// The lock file itself stays on disk. Removing it while held would let a
/// waiter lock the unlinked inode while a newcomer locks a fresh file.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            FileExt::lock_exclusive(&file)
                .map_err(|e| CreziaError::io(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { _file: file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        name: String,
        count: u32,
    }

    fn counter(count: u32) -> Counter {
        Counter {
            name: "usage".to_string(),
            count,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("test.toml"));

        file.save(&counter(42)).unwrap();

        assert_eq!(file.load().unwrap(), Some(counter(42)));
    }

    #[test]
    fn test_load_missing_or_blank_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.toml");
        let file = AtomicTomlFile::<Counter>::new(path.clone());
        assert!(file.load().unwrap().is_none());

        fs::write(&path, "  \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "count = [").unwrap();

        let err = AtomicTomlFile::<Counter>::new(path).load().unwrap_err();
        assert!(matches!(err, CreziaError::Serialization { .. }));
    }

    #[test]
    fn test_update_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("nested/test.toml"));

        file.update(counter(0), |c| {
            c.count += 10;
            Ok(())
        })
        .unwrap();
        let seen = file
            .update(counter(0), |c| {
                c.count += 5;
                Ok(c.count)
            })
            .unwrap();

        assert_eq!(seen, 15);
        assert_eq!(file.load().unwrap().unwrap().count, 15);
    }

    #[test]
    fn test_failed_update_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("test.toml"));
        file.save(&counter(1)).unwrap();

        let result: Result<()> = file.update(counter(0), |c| {
            c.count = 99;
            Err(CreziaError::internal("abort"))
        });

        assert!(result.is_err());
        assert_eq!(file.load().unwrap().unwrap().count, 1);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.toml");
        let file = AtomicTomlFile::<Counter>::new(path.clone());

        file.update(counter(0), |_| Ok(())).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".test.toml.tmp").exists());
    }

    #[test]
    fn test_lock_file_is_kept_and_reusable() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("test.toml"));

        file.update(counter(0), |_| Ok(())).unwrap();
        assert!(temp_dir.path().join("test.lock").exists());

        // A second update must be able to take the same lock again.
        let seen = file
            .update(counter(0), |c| {
                c.count += 1;
                Ok(c.count)
            })
            .unwrap();
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_update_replaces_unparsable_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.toml");
        fs::write(&path, "not = [valid").unwrap();
        let file = AtomicTomlFile::<Counter>::new(path);

        file.update(counter(7), |c| {
            c.count += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(file.load().unwrap(), Some(counter(8)));
    }
}
