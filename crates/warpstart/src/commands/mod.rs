//! Interactive flows (open, create, remove)
//!
//! The top-level menu loops until a project is opened or the user cancels
//! the menu. Creating or removing a project, or trying to open one from an
//! empty registry, comes back to the menu.

mod create;
mod open;
mod remove;

use anyhow::Result;
use warpstart_core::{
    AppCatalog, Launcher, ProcessRunner, Registry, RegistryStore, WarpstartConfig,
};

use crate::output;
use crate::prompt::{Prompter, TerminalPrompter};

/// Shown when there is nothing to open or remove
const EMPTY_REGISTRY_MESSAGE: &str = "No projects found. Create one first.";

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Create,
    Remove,
}

impl MenuAction {
    pub fn all() -> [Self; 3] {
        [Self::Open, Self::Create, Self::Remove]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open a project",
            Self::Create => "Create a project",
            Self::Remove => "Remove a project",
        }
    }
}

/// Where to go after a flow finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Menu,
    Exit,
}

/// State shared by the flows of one interactive run
pub struct Session<'a, P, R> {
    pub(crate) store: &'a RegistryStore,
    pub(crate) catalog: &'a AppCatalog,
    pub(crate) prompter: P,
    pub(crate) launcher: Launcher<R>,
}

/// Run the interactive launcher against the configured store
pub fn run(config: &WarpstartConfig) -> Result<()> {
    let store = RegistryStore::open(config.store_path())?;
    tracing::debug!("Using project store {}", store.path());

    Session::new(&store, &config.apps, TerminalPrompter, Launcher::system()).run()
}

impl<'a, P: Prompter, R: ProcessRunner> Session<'a, P, R> {
    pub fn new(
        store: &'a RegistryStore,
        catalog: &'a AppCatalog,
        prompter: P,
        launcher: Launcher<R>,
    ) -> Self {
        Self {
            store,
            catalog,
            prompter,
            launcher,
        }
    }

    /// Show the menu until a flow exits or the menu is cancelled
    pub fn run(&mut self) -> Result<()> {
        let actions = MenuAction::all();
        let labels: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();

        loop {
            let Some(index) = self.prompter.select("What do you want to do?", &labels)? else {
                return Ok(());
            };

            let next = match actions[index] {
                MenuAction::Open => open::run(self)?,
                MenuAction::Create => create::run(self)?,
                MenuAction::Remove => remove::run(self)?,
            };

            if next == Next::Exit {
                return Ok(());
            }
        }
    }

    /// Load the registry and pick a project by name; `None` if the
    /// registry is empty or the user cancels
    pub(crate) fn select_project(&mut self, prompt: &str) -> Result<Option<(Registry, String)>> {
        let registry = self.store.load()?;
        if registry.is_empty() {
            output::error(EMPTY_REGISTRY_MESSAGE);
            return Ok(None);
        }

        let names = registry.names();
        let selection = self.prompter.select(prompt, &names)?;
        Ok(selection.map(|index| (registry, names[index].clone())))
    }
}
