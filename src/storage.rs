use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt storage file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize storage: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to replace storage file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Flat string key-value store persisted as a TOML file.
///
/// Every call reads the file fresh and every write lands on disk before
/// returning, so separate handles on the same path always agree.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)?;
        log::debug!("Stored {} = {} in {}", key, value, self.path.display());
        Ok(())
    }

    /// Remove a key. Returns whether it was present.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let (mut entries, corrupt) = self.entries_for_write()?;
        let removed = entries.remove(key).is_some();
        if !removed && !corrupt {
            return Ok(false);
        }
        self.write(&entries)?;
        log::debug!("Removed {} from {}", key, self.path.display());
        Ok(removed)
    }

    /// Current entries, or an empty map if the file is corrupt. The flag
    /// reports whether the file has to be rewritten to clear the corruption.
    fn entries_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.entries() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Parse { path, source }) => {
                log::warn!(
                    "Discarding corrupt storage file {}: {}",
                    path.display(),
                    source
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let content = toml::to_string_pretty(entries)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}
