//! Install and execute command formatting.
//!
//! All functions here are pure. An unknown package manager id never fails,
//! it just produces an empty command.

use super::jsr::JsrPackageInfo;
use super::manager::find_package_manager;

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallCommandOptions<'a> {
    pub package_name: &'a str,
    /// Raw package manager id, usually read back from the stored preference
    pub package_manager: &'a str,
    pub version: Option<&'a str>,
    pub jsr_info: Option<&'a JsrPackageInfo>,
}

impl<'a> InstallCommandOptions<'a> {
    pub fn new(package_name: &'a str, package_manager: &'a str) -> Self {
        Self {
            package_name,
            package_manager,
            version: None,
            jsr_info: None,
        }
    }

    pub fn with_version(mut self, version: Option<&'a str>) -> Self {
        self.version = version;
        self
    }

    pub fn with_jsr_info(mut self, jsr_info: Option<&'a JsrPackageInfo>) -> Self {
        self.jsr_info = jsr_info;
        self
    }
}

/// Package specifier for the selected package manager.
///
/// Deno prefers `jsr:@scope/name` when the package is published on JSR and
/// falls back to npm compatibility (`npm:name`) otherwise.
pub fn package_specifier(options: &InstallCommandOptions) -> String {
    if options.package_manager == "deno" {
        if let Some((scope, name)) = options.jsr_info.and_then(|info| info.native_package()) {
            return format!("jsr:@{}/{}", scope, name);
        }
        return format!("npm:{}", options.package_name);
    }

    options.package_name.to_string()
}

/// Install command split into parts: the command, the verb, and the
/// versioned specifier. Useful when the command is styled apart from its args.
pub fn install_command_parts(options: &InstallCommandOptions) -> Vec<String> {
    let Some(pm) = find_package_manager(options.package_manager) else {
        return Vec::new();
    };

    let spec = package_specifier(options);
    let version = match options.version {
        Some(v) if !v.is_empty() => format!("@{}", v),
        _ => String::new(),
    };

    vec![
        pm.label.to_string(),
        pm.action.to_string(),
        format!("{}{}", spec, version),
    ]
}

pub fn install_command(options: &InstallCommandOptions) -> String {
    install_command_parts(options).join(" ")
}

pub fn execute_command_parts(options: &InstallCommandOptions) -> Vec<String> {
    let Some(pm) = find_package_manager(options.package_manager) else {
        return Vec::new();
    };

    vec![pm.execute.to_string(), package_specifier(options)]
}

pub fn execute_command(options: &InstallCommandOptions) -> String {
    execute_command_parts(options).join(" ")
}
