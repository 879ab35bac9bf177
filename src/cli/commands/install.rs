use anyhow::Result;
use std::path::Path;

use super::PackageArgs;
use crate::cli::Output;
use crate::config::Config;
use crate::packages::{
    execute_command_parts, find_package_manager, install_command_parts, InstallCommandOptions,
    JsrPackageInfo,
};
use crate::preference::selected_package_manager;

pub async fn install(target: &PackageArgs, version: Option<&str>) -> Result<()> {
    let (name, pinned) = split_package_arg(&target.package);
    let version = version.or(pinned);
    let pm = resolve_package_manager(target)?;
    let jsr_info = load_jsr_info(target.jsr_info.as_deref())?;

    let options = InstallCommandOptions::new(name, &pm)
        .with_version(version)
        .with_jsr_info(jsr_info.as_ref());

    print_parts(&install_command_parts(&options), target.parts, &pm);
    Ok(())
}

pub async fn exec(target: &PackageArgs) -> Result<()> {
    let (name, _) = split_package_arg(&target.package);
    let pm = resolve_package_manager(target)?;
    let jsr_info = load_jsr_info(target.jsr_info.as_deref())?;

    let options = InstallCommandOptions::new(name, &pm).with_jsr_info(jsr_info.as_ref());

    print_parts(&execute_command_parts(&options), target.parts, &pm);
    Ok(())
}

/// Explicit --pm wins over the stored preference
fn resolve_package_manager(target: &PackageArgs) -> Result<String> {
    if let Some(id) = target.pm {
        return Ok(id.as_str().to_string());
    }
    let pm = selected_package_manager(Config::storage()?).get();
    log::debug!("Using preferred package manager: {}", pm);
    Ok(pm)
}

fn load_jsr_info(arg: Option<&str>) -> Result<Option<JsrPackageInfo>> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    let info = if arg.trim_start().starts_with('{') {
        JsrPackageInfo::from_json(arg)?
    } else {
        JsrPackageInfo::load(Path::new(arg))?
    };
    Ok(Some(info))
}

fn print_parts(parts: &[String], one_per_line: bool, pm: &str) {
    if parts.is_empty() {
        log::warn!("No command for package manager '{}'", pm);
        if find_package_manager(pm).is_none() {
            Output::error(&format!(
                "Unknown package manager '{}'. Run `npmx pm select` to pick one.",
                pm
            ));
        }
        return;
    }

    if one_per_line {
        for part in parts {
            println!("{}", part);
        }
    } else {
        println!("{}", parts.join(" "));
    }
}

/// Split `name@version` into its parts. A leading `@` belongs to the scope.
pub(crate) fn split_package_arg(arg: &str) -> (&str, Option<&str>) {
    match arg.rfind('@') {
        Some(idx) if idx > 0 => {
            let (name, version) = (&arg[..idx], &arg[idx + 1..]);
            (name, Some(version).filter(|v| !v.is_empty()))
        }
        _ => (arg, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_name() {
        assert_eq!(split_package_arg("vue"), ("vue", None));
    }

    #[test]
    fn test_split_versioned_name() {
        assert_eq!(split_package_arg("vue@3.4.0"), ("vue", Some("3.4.0")));
    }

    #[test]
    fn test_split_scoped_name() {
        assert_eq!(split_package_arg("@nuxt/kit"), ("@nuxt/kit", None));
        assert_eq!(
            split_package_arg("@nuxt/kit@3.12.0"),
            ("@nuxt/kit", Some("3.12.0"))
        );
    }

    #[test]
    fn test_split_trailing_at() {
        assert_eq!(split_package_arg("vue@"), ("vue", None));
    }

    #[test]
    fn test_inline_jsr_info() {
        let info = load_jsr_info(Some(r#"{"exists":true,"scope":"std","name":"path"}"#))
            .unwrap()
            .unwrap();
        assert!(info.has_native_package());
        assert!(load_jsr_info(None).unwrap().is_none());
    }
}
