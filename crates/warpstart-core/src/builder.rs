//! Project building: resolving app tags into invocations
//!
//! Each selected tag is looked up in the [`AppCatalog`] and its template is
//! rendered with the project directory, workspace file and URL. A word whose
//! placeholder has no value is dropped, so `firefox {url}` without a URL
//! renders as plain `firefox`.

use crate::config::{AppCatalog, DIR_PLACEHOLDER, URL_PLACEHOLDER, WORKSPACE_PLACEHOLDER};
use crate::error::{Error, Result};
use crate::types::{AppTag, Project};
use camino::Utf8PathBuf;
use tracing::debug;

/// Builds a [`Project`] from create-flow answers
#[derive(Debug, Clone)]
pub struct ProjectBuilder<'a> {
    catalog: &'a AppCatalog,
    name: String,
    directory: Option<Utf8PathBuf>,
    apps: Vec<AppTag>,
    workspace: Option<Utf8PathBuf>,
    url: Option<String>,
    commands: Vec<String>,
}

impl<'a> ProjectBuilder<'a> {
    pub fn new(name: impl Into<String>, catalog: &'a AppCatalog) -> Self {
        Self {
            catalog,
            name: name.into(),
            directory: None,
            apps: Vec::new(),
            workspace: None,
            url: None,
            commands: Vec::new(),
        }
    }

    /// Project directory used by the editor, terminal and file manager
    pub fn directory(mut self, directory: impl Into<Utf8PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Selected apps, in selection order
    pub fn apps(mut self, apps: impl IntoIterator<Item = AppTag>) -> Self {
        self.apps = apps.into_iter().collect();
        self
    }

    /// Workspace file opened by [`AppTag::EditorWorkspace`]
    pub fn workspace(mut self, workspace: impl Into<Utf8PathBuf>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    /// URL opened by [`AppTag::Browser`]; blank means no URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn commands(mut self, commands: Vec<String>) -> Self {
        self.commands = commands;
        self
    }

    /// Commands from the comma-separated input field
    pub fn commands_input(self, input: &str) -> Self {
        self.commands(split_commands(input))
    }

    /// Resolve a single tag to its invocation string
    pub fn resolve(&self, tag: AppTag) -> Result<String> {
        if tag.needs_workspace() && self.workspace_value().is_empty() {
            return Err(Error::missing_workspace(tag.as_str()));
        }

        let values = [
            (DIR_PLACEHOLDER, self.directory_value()),
            (WORKSPACE_PLACEHOLDER, self.workspace_value()),
            (URL_PLACEHOLDER, self.url_value()),
        ];
        render(self.catalog.template(tag), &values)
    }

    pub fn build(self) -> Result<Project> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::invalid_project_name(self.name.as_str()));
        }

        let apps = self
            .apps
            .iter()
            .map(|&tag| self.resolve(tag))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Built project '{}' with {} app(s) and {} command(s)",
            name,
            apps.len(),
            self.commands.len()
        );

        Ok(Project {
            name: name.to_string(),
            apps,
            commands: self.commands,
        })
    }

    fn directory_value(&self) -> &str {
        self.directory.as_ref().map(|d| d.as_str()).unwrap_or("")
    }

    fn workspace_value(&self) -> &str {
        self.workspace.as_ref().map(|w| w.as_str()).unwrap_or("")
    }

    fn url_value(&self) -> &str {
        self.url.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Split the command input on commas
///
/// `\,` yields a literal comma. Entries are trimmed and empty entries are
/// dropped, so `"echo a, echo b"` gives `["echo a", "echo b"]`.
pub fn split_commands(input: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                chars.next();
                current.push(',');
            }
            ',' => commands.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    commands.push(current);

    commands
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

fn render(template: &str, values: &[(&str, &str)]) -> Result<String> {
    let mut words = Vec::new();
    for word in template.split_whitespace() {
        if let Some(rendered) = render_word(word, values)? {
            words.push(rendered);
        }
    }
    Ok(words.join(" "))
}

/// Substitute placeholders in one word; `None` drops the word
fn render_word(word: &str, values: &[(&str, &str)]) -> Result<Option<String>> {
    let mut out = String::with_capacity(word.len());
    let mut rest = word;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match values.iter().find(|(placeholder, _)| tail.starts_with(placeholder)) {
            Some((_, value)) if value.is_empty() => return Ok(None),
            Some((placeholder, value)) => {
                out.push_str(&quote(value)?);
                rest = &tail[placeholder.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);

    Ok(Some(out))
}

/// Shell-quote a value unless it only holds characters that need none
fn quote(value: &str) -> Result<String> {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./,:+=@%~".contains(c));
    if plain {
        return Ok(value.to_string());
    }

    shlex::try_quote(value)
        .map(|quoted| quoted.into_owned())
        .map_err(|e| Error::unquotable_value(value, e.to_string()))
}
