//! # warpstart-core
//!
//! Core library for the warpstart launcher providing:
//! - The project registry and its JSON-backed store
//! - The app catalog that maps app tags to invocations
//! - Project building from interactive answers
//! - The launcher that opens apps and runs commands
//!
//! # Examples
//!
//! ```no_run
//! use warpstart_core::{Launcher, RegistryStore, WarpstartConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WarpstartConfig::load()?;
//! let store = RegistryStore::open(config.store_path())?;
//! let registry = store.load()?;
//!
//! if let Some(project) = registry.get("dev") {
//!     Launcher::system().launch(project);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod launcher;
pub mod store;
pub mod types;
pub mod utils;

pub use builder::{split_commands, ProjectBuilder};
pub use config::{AppCatalog, ConfigLoader, WarpstartConfig};
pub use error::{Error, Result};
pub use launcher::{
    CommandOutcome, LaunchObserver, LaunchReport, Launcher, ProcessRunner, SystemRunner,
    TracingObserver,
};
pub use store::RegistryStore;
pub use types::{AppTag, Project, Registry};
