//! App catalog: the invocation template for each app tag
//!
//! Templates are whitespace-separated words that may contain the
//! placeholders `{dir}`, `{workspace}` and `{url}`.

use crate::error::{Error, Result};
use crate::types::AppTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder for the project directory
pub const DIR_PLACEHOLDER: &str = "{dir}";

/// Placeholder for the editor workspace file
pub const WORKSPACE_PLACEHOLDER: &str = "{workspace}";

/// Placeholder for the browser URL
pub const URL_PLACEHOLDER: &str = "{url}";

/// Lookup table from app tag to invocation template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppCatalog {
    templates: BTreeMap<AppTag, String>,
}

impl Default for AppCatalog {
    fn default() -> Self {
        let templates = AppTag::all()
            .into_iter()
            .map(|tag| (tag, Self::default_template(tag).to_string()))
            .collect();
        Self { templates }
    }
}

impl AppCatalog {
    /// Built-in template for a tag
    pub fn default_template(tag: AppTag) -> &'static str {
        match tag {
            AppTag::Browser => "firefox {url}",
            AppTag::Editor => "code {dir}",
            AppTag::EditorWorkspace => "code {workspace}",
            AppTag::Terminal => "xfce4-terminal --working-directory={dir}",
            AppTag::DatabaseGui => "mongodb-compass",
            AppTag::ApiClient => "postman",
            AppTag::FileManager => "thunar {dir}",
        }
    }

    /// Template for a tag, falling back to the built-in one
    pub fn template(&self, tag: AppTag) -> &str {
        self.templates
            .get(&tag)
            .map(String::as_str)
            .unwrap_or_else(|| Self::default_template(tag))
    }

    /// Replace the template for a tag
    pub fn set(&mut self, tag: AppTag, template: impl Into<String>) -> Result<()> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(Error::invalid_config(format!(
                "App template for '{}' must not be empty",
                tag
            )));
        }
        self.templates.insert(tag, template);
        Ok(())
    }

    /// Overlay templates on top of this catalog
    pub fn merge(mut self, overlay: BTreeMap<AppTag, String>) -> Result<Self> {
        for (tag, template) in overlay {
            self.set(tag, template)?;
        }
        Ok(self)
    }
}
