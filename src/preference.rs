use crate::storage::{LocalStorage, StorageError};

/// Storage key holding the selected package manager id.
pub const PACKAGE_MANAGER_KEY: &str = "npmx-pm";
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// A single value bound to a storage key, falling back to a default.
#[derive(Debug, Clone)]
pub struct StoredValue {
    storage: LocalStorage,
    key: &'static str,
    default: &'static str,
}

impl StoredValue {
    pub fn new(storage: LocalStorage, key: &'static str, default: &'static str) -> Self {
        Self {
            storage,
            key,
            default,
        }
    }

    pub fn key(&self) -> &str {
        self.key
    }

    /// Last written value, or the default when unset or unreadable.
    pub fn get(&self) -> String {
        match self.storage.get(self.key) {
            Ok(Some(value)) => value,
            Ok(None) => self.default.to_string(),
            Err(e) => {
                log::warn!("Failed to read {}, using default: {}", self.key, e);
                self.default.to_string()
            }
        }
    }

    pub fn set(&self, value: &str) -> Result<(), StorageError> {
        self.storage.set(self.key, value)
    }

    pub fn reset(&self) -> Result<(), StorageError> {
        self.storage.remove(self.key)?;
        Ok(())
    }
}

pub fn selected_package_manager(storage: LocalStorage) -> StoredValue {
    StoredValue::new(storage, PACKAGE_MANAGER_KEY, DEFAULT_PACKAGE_MANAGER)
}
