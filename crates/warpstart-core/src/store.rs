//! JSON-backed registry store
//!
//! The registry lives in a single file mapping project name to
//! `{"apps": [...], "commands": [...]}`. Every save rewrites the whole file;
//! there is no locking, so the last writer wins.

use crate::error::{Error, Result};
use crate::types::Registry;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use tracing::debug;

/// Indentation used when writing the registry file
const INDENT: &[u8] = b"    ";

/// Registry persisted at an explicit file path
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: Utf8PathBuf,
}

impl RegistryStore {
    /// Bind a store to `path`, creating its directory and an empty
    /// registry file if they do not exist yet
    pub fn open(path: impl Into<Utf8PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };

        if let Some(parent) = store.path.parent() {
            if !parent.as_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !store.path.exists() {
            debug!("Initializing empty project store at {}", store.path);
            store.save(&Registry::new())?;
        }

        Ok(store)
    }

    /// Read the registry from disk
    ///
    /// A whitespace-only file reads as an empty registry. Entries with a
    /// blank name are skipped with a warning.
    pub fn load(&self) -> Result<Registry> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Registry::new());
        }

        let mut registry: Registry = serde_json::from_str(&content)
            .map_err(|e| Error::corrupt_store(self.path.as_str(), e))?;
        registry.sync_names();

        debug!("Loaded {} project(s) from {}", registry.len(), self.path);
        Ok(registry)
    }

    /// Overwrite the registry file
    pub fn save(&self, registry: &Registry) -> Result<()> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        registry.serialize(&mut serializer)?;
        buf.push(b'\n');

        fs::write(&self.path, buf)?;
        debug!("Saved {} project(s) to {}", registry.len(), self.path);
        Ok(())
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
