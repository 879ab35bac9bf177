use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a JSR metadata lookup, as produced by the registry service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsrPackageInfo {
    pub exists: bool,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl JsrPackageInfo {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid JSR package info")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Scope and name of the native JSR package, if one is published.
    pub fn native_package(&self) -> Option<(&str, &str)> {
        if !self.exists {
            return None;
        }
        let scope = self.scope.as_deref().filter(|s| !s.is_empty())?;
        let name = self.name.as_deref().filter(|n| !n.is_empty())?;
        Some((scope, name))
    }

    pub fn has_native_package(&self) -> bool {
        self.native_package().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full() {
        let info = JsrPackageInfo::from_json(r#"{"exists":true,"scope":"std","name":"path"}"#)
            .unwrap();
        assert_eq!(info.native_package(), Some(("std", "path")));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let info = JsrPackageInfo::from_json(
            r#"{"exists":true,"scope":"luca","name":"flag","latestVersion":"1.0.0"}"#,
        )
        .unwrap();
        assert!(info.has_native_package());
    }

    #[test]
    fn test_missing_package() {
        let info = JsrPackageInfo::from_json(r#"{"exists":false}"#).unwrap();
        assert_eq!(info.scope, None);
        assert!(!info.has_native_package());
    }

    #[test]
    fn test_exists_without_scope() {
        let info = JsrPackageInfo {
            exists: true,
            scope: Some(String::new()),
            name: Some("path".to_string()),
        };
        assert!(!info.has_native_package());
    }

    #[test]
    fn test_invalid_json() {
        assert!(JsrPackageInfo::from_json("not json").is_err());
        assert!(JsrPackageInfo::from_json(r#"{"scope":"std"}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("jsr.json");
        std::fs::write(&path, r#"{"exists":true,"scope":"std","name":"fs"}"#).unwrap();

        let info = JsrPackageInfo::load(&path).unwrap();
        assert_eq!(info.native_package(), Some(("std", "fs")));
    }
}
