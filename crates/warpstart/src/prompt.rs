//! Interactive prompts
//!
//! The flows talk to a [`Prompter`] so they can be driven by scripted
//! answers in tests; [`TerminalPrompter`] is the dialoguer-backed one.

use anyhow::Result;
use camino::Utf8PathBuf;
use dialoguer::{Input, MultiSelect, Select};
use warpstart_core::utils::expand_tilde;

/// What a path prompt must point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
}

/// Source of answers for the interactive flows
pub trait Prompter {
    /// Pick one item; `None` when the user cancels
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    /// Pick any number of items
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Free text
    fn text(&mut self, prompt: &str, allow_empty: bool) -> Result<String>;

    /// An existing path of the given kind, with `~` expanded
    fn path(&mut self, prompt: &str, default: &str, kind: PathKind) -> Result<Utf8PathBuf>;
}

/// Prompts on the terminal with dialoguer
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(selection)
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let selection = MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .interact()?;
        Ok(selection)
    }

    fn text(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .validate_with(move |value: &String| -> Result<(), &'static str> {
                if !allow_empty && value.trim().is_empty() {
                    Err("Value must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(value)
    }

    fn path(&mut self, prompt: &str, default: &str, kind: PathKind) -> Result<Utf8PathBuf> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(move |value: &String| validate_path(value, kind))
            .interact_text()?;
        Ok(expand_tilde(value.trim())?)
    }
}

/// Check that `value` names an existing directory or file
pub fn validate_path(value: &str, kind: PathKind) -> Result<(), String> {
    let path = expand_tilde(value.trim()).map_err(|e| e.to_string())?;
    match kind {
        PathKind::Directory if path.is_dir() => Ok(()),
        PathKind::Directory => Err(format!("{} is not a directory", path)),
        PathKind::File if path.is_file() => Ok(()),
        PathKind::File => Err(format!("{} is not a file", path)),
    }
}
