use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A package manager the front end knows how to format commands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManager {
    pub id: &'static str,
    pub label: &'static str,
    /// Verb used to add a dependency (`install`, `add`)
    pub action: &'static str,
    /// Command used to run a package without installing it
    pub execute: &'static str,
}

/// Known package managers, in display order.
pub static PACKAGE_MANAGERS: [PackageManager; 6] = [
    PackageManager {
        id: "npm",
        label: "npm",
        action: "install",
        execute: "npx",
    },
    PackageManager {
        id: "pnpm",
        label: "pnpm",
        action: "add",
        execute: "pnpm dlx",
    },
    PackageManager {
        id: "yarn",
        label: "yarn",
        action: "add",
        execute: "yarn dlx",
    },
    PackageManager {
        id: "bun",
        label: "bun",
        action: "add",
        execute: "bunx",
    },
    PackageManager {
        id: "deno",
        label: "deno",
        action: "add",
        execute: "deno run",
    },
    PackageManager {
        id: "vlt",
        label: "vlt",
        action: "install",
        execute: "vlt x",
    },
];

/// Look up a package manager by its exact id.
pub fn find_package_manager(id: &str) -> Option<&'static PackageManager> {
    PACKAGE_MANAGERS.iter().find(|pm| pm.id == id)
}

impl PackageManager {
    /// Check if this package manager's binary is on PATH
    pub fn is_available(&self) -> bool {
        which::which(self.label).is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerId {
    Npm,
    Pnpm,
    Yarn,
    Bun,
    Deno,
    Vlt,
}

impl PackageManagerId {
    pub fn all() -> [PackageManagerId; 6] {
        [
            Self::Npm,
            Self::Pnpm,
            Self::Yarn,
            Self::Bun,
            Self::Deno,
            Self::Vlt,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
            Self::Deno => "deno",
            Self::Vlt => "vlt",
        }
    }

    pub fn descriptor(&self) -> &'static PackageManager {
        // Variants are declared in table order
        &PACKAGE_MANAGERS[*self as usize]
    }
}

impl fmt::Display for PackageManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown package manager '{0}' (expected one of: npm, pnpm, yarn, bun, deno, vlt)")]
pub struct UnknownPackageManager(pub String);

impl FromStr for PackageManagerId {
    type Err = UnknownPackageManager;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownPackageManager(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_ids() {
        for id in ["npm", "pnpm", "yarn", "bun", "deno", "vlt"] {
            let pm = find_package_manager(id).unwrap();
            assert_eq!(pm.id, id);
        }
    }

    #[test]
    fn test_find_unknown_id() {
        assert!(find_package_manager("cargo").is_none());
        assert!(find_package_manager("NPM").is_none());
        assert!(find_package_manager("").is_none());
    }

    #[test]
    fn test_every_id_has_descriptor() {
        for id in PackageManagerId::all() {
            assert_eq!(id.descriptor().id, id.as_str());
        }
    }

    #[test]
    fn test_table_verbs() {
        let pnpm = find_package_manager("pnpm").unwrap();
        assert_eq!(pnpm.action, "add");
        assert_eq!(pnpm.execute, "pnpm dlx");

        let vlt = find_package_manager("vlt").unwrap();
        assert_eq!(vlt.action, "install");
        assert_eq!(vlt.execute, "vlt x");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!("deno".parse::<PackageManagerId>(), Ok(PackageManagerId::Deno));
        assert_eq!(PackageManagerId::Bun.to_string(), "bun");

        let err = "pip".parse::<PackageManagerId>().unwrap_err();
        assert_eq!(err, UnknownPackageManager("pip".to_string()));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PackageManagerId::Yarn).unwrap();
        assert_eq!(json, "\"yarn\"");
        let id: PackageManagerId = serde_json::from_str("\"vlt\"").unwrap();
        assert_eq!(id, PackageManagerId::Vlt);
    }
}
