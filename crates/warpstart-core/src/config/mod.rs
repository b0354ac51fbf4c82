//! Configuration: data directory, store location, and the app catalog

mod catalog;
mod loader;

pub use catalog::AppCatalog;
pub(crate) use catalog::{DIR_PLACEHOLDER, URL_PLACEHOLDER, WORKSPACE_PLACEHOLDER};
pub use loader::{ConfigLoader, WarpstartConfig, CONFIG_FILE_NAME, DEFAULT_STORE_FILE};
