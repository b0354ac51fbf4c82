//! Core types: projects, the registry, and app tags

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Applications offered by the create flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppTag {
    /// Web browser, optionally opened on a URL
    Browser,
    /// Code editor opened on the project directory
    Editor,
    /// Code editor opened on a workspace file
    EditorWorkspace,
    /// Terminal started in the project directory
    Terminal,
    /// Database GUI client
    DatabaseGui,
    /// HTTP API client
    ApiClient,
    /// File manager opened on the project directory
    FileManager,
}

impl AppTag {
    /// Get all app tags in menu order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Browser,
            Self::Editor,
            Self::EditorWorkspace,
            Self::Terminal,
            Self::DatabaseGui,
            Self::ApiClient,
            Self::FileManager,
        ]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Editor => "editor",
            Self::EditorWorkspace => "editor-workspace",
            Self::Terminal => "terminal",
            Self::DatabaseGui => "database-gui",
            Self::ApiClient => "api-client",
            Self::FileManager => "file-manager",
        }
    }

    /// Get the label shown in the app selection menu
    pub fn label(&self) -> &'static str {
        match self {
            Self::Browser => "firefox",
            Self::Editor => "code",
            Self::EditorWorkspace => "code workspace",
            Self::Terminal => "xfce4-terminal",
            Self::DatabaseGui => "mongodb-compass",
            Self::ApiClient => "postman",
            Self::FileManager => "thunar",
        }
    }

    /// Whether the invocation needs a workspace file
    pub fn needs_workspace(&self) -> bool {
        matches!(self, Self::EditorWorkspace)
    }

    /// Whether the invocation can take a URL
    pub fn takes_url(&self) -> bool {
        matches!(self, Self::Browser)
    }
}

impl std::fmt::Display for AppTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named bundle of apps to open and commands to run
///
/// The name is the registry key, so it is not part of the stored entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(skip)]
    pub name: String,

    /// Invocations spawned detached, in order
    #[serde(default)]
    pub apps: Vec<String>,

    /// Shell commands run to completion, in order
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// All stored projects, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    projects: BTreeMap<String, Project>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Project names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    /// Insert a project under its name, returning the project it replaced
    pub fn insert(&mut self, project: Project) -> Option<Project> {
        self.projects.insert(project.name.clone(), project)
    }

    pub fn remove(&mut self, name: &str) -> Option<Project> {
        self.projects.remove(name)
    }

    /// Copy each key into its project's name after deserializing
    ///
    /// Entries with a blank name cannot be selected, so they are dropped.
    pub(crate) fn sync_names(&mut self) {
        self.projects.retain(|name, _| {
            if name.trim().is_empty() {
                warn!("Skipping project with a blank name");
                return false;
            }
            true
        });
        for (name, project) in self.projects.iter_mut() {
            project.name.clone_from(name);
        }
    }
}

impl FromIterator<Project> for Registry {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        let mut registry = Self::new();
        for project in iter {
            registry.insert(project);
        }
        registry
    }
}
