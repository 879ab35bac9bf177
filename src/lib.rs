pub mod cli;
pub mod config;
pub mod packages;
pub mod preference;
pub mod storage;

pub use config::Config;
pub use preference::{selected_package_manager, StoredValue};
pub use storage::{LocalStorage, StorageError};
