pub mod command;
pub mod jsr;
pub mod manager;

pub use command::{
    execute_command, execute_command_parts, install_command, install_command_parts,
    package_specifier, InstallCommandOptions,
};
pub use jsr::JsrPackageInfo;
pub use manager::{
    find_package_manager, PackageManager, PackageManagerId, UnknownPackageManager,
    PACKAGE_MANAGERS,
};
