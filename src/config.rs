use anyhow::Result;
use std::path::PathBuf;

use crate::storage::LocalStorage;

/// Overrides the data directory (defaults to `~/.npmx`).
pub const HOME_ENV: &str = "NPMX_HOME";

pub struct Config;

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let home =
            home::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".npmx"))
    }

    pub fn storage_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("storage.toml"))
    }

    pub fn storage() -> Result<LocalStorage> {
        let storage = LocalStorage::open(Self::storage_path()?);
        log::debug!("Using storage at {}", storage.path().display());
        Ok(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_lives_in_config_dir() {
        let storage = Config::storage().unwrap();
        assert_eq!(storage.path(), Config::storage_path().unwrap());
        assert!(storage.path().ends_with("storage.toml"));
    }
}
