//! Create a project from interactive answers
//!
//! An existing project with the same name is replaced without asking.

use anyhow::Result;
use warpstart_core::{AppTag, ProcessRunner, ProjectBuilder};

use super::{Next, Session};
use crate::output;
use crate::prompt::{PathKind, Prompter};

#[cfg(windows)]
const DEFAULT_PROJECT_DIR: &str = "C:\\";

#[cfg(not(windows))]
const DEFAULT_PROJECT_DIR: &str = "~/";

pub(super) fn run<P: Prompter, R: ProcessRunner>(session: &mut Session<'_, P, R>) -> Result<Next> {
    let name = prompt_name(&mut session.prompter)?;

    let directory = session.prompter.path(
        "Enter project path:",
        DEFAULT_PROJECT_DIR,
        PathKind::Directory,
    )?;

    let apps = prompt_apps(&mut session.prompter)?;

    let mut builder = ProjectBuilder::new(name.as_str(), session.catalog)
        .directory(directory.clone())
        .apps(apps.iter().copied());

    if apps.iter().any(AppTag::needs_workspace) {
        let workspace = session.prompter.path(
            "Enter code workspace file path:",
            directory.as_str(),
            PathKind::File,
        )?;
        builder = builder.workspace(workspace);
    }

    if apps.iter().any(AppTag::takes_url) {
        let url = session
            .prompter
            .text("Enter URL to open in the browser (optional):", true)?;
        builder = builder.url(url);
    }

    let commands = session
        .prompter
        .text("Enter commands to execute (comma-separated):", true)?;
    let project = builder.commands_input(&commands).build()?;
    let name = project.name.clone();

    let mut registry = session.store.load()?;
    if registry.insert(project).is_some() {
        tracing::debug!("Replacing existing project '{}'", name);
    }
    session.store.save(&registry)?;

    output::success(&format!("Project '{}' created successfully!", name));
    Ok(Next::Menu)
}

fn prompt_name<P: Prompter>(prompter: &mut P) -> Result<String> {
    loop {
        let name = prompter.text("Enter project name:", false)?;
        if !name.trim().is_empty() {
            return Ok(name);
        }
        output::warning("Project name must not be empty");
    }
}

fn prompt_apps<P: Prompter>(prompter: &mut P) -> Result<Vec<AppTag>> {
    let tags = AppTag::all();
    let labels: Vec<String> = tags.iter().map(|t| t.label().to_string()).collect();

    loop {
        let selected = prompter.multi_select("Select applications to open:", &labels)?;
        if !selected.is_empty() {
            return Ok(selected.into_iter().map(|index| tags[index]).collect());
        }
        output::warning("Select at least one application");
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{Answer, Fixture};
    use serde_json::json;

    const MENU_CREATE: Answer = Answer::Select(Some(1));
    const MENU_CANCEL: Answer = Answer::Select(None);

    #[test]
    fn test_create_terminal_project() {
        let fixture = Fixture::new();
        let (prompter, runner) = fixture.run(vec![
            MENU_CREATE,
            Answer::Text("dev"),
            Answer::Path("/tmp/x"),
            Answer::Multi(vec![3]),
            Answer::Text("echo hi"),
            MENU_CANCEL,
        ]);

        assert_eq!(
            fixture.json(),
            json!({
                "dev": {
                    "apps": ["xfce4-terminal --working-directory=/tmp/x"],
                    "commands": ["echo hi"]
                }
            })
        );
        assert_eq!(
            prompter.prompts,
            vec![
                "What do you want to do?",
                "Enter project name:",
                "Enter project path:",
                "Select applications to open:",
                "Enter commands to execute (comma-separated):",
                "What do you want to do?",
            ]
        );
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn test_create_with_workspace_and_browser() {
        let fixture = Fixture::new();
        let (prompter, _) = fixture.run(vec![
            MENU_CREATE,
            Answer::Text("web"),
            Answer::Path("/srv/web"),
            Answer::Multi(vec![0, 2, 6]),
            Answer::Path("/srv/web/web.code-workspace"),
            Answer::Text(""),
            Answer::Text("npm install, npm run dev"),
            MENU_CANCEL,
        ]);

        assert_eq!(
            fixture.json(),
            json!({
                "web": {
                    "apps": [
                        "firefox",
                        "code /srv/web/web.code-workspace",
                        "thunar /srv/web"
                    ],
                    "commands": ["npm install", "npm run dev"]
                }
            })
        );
        assert!(prompter
            .prompts
            .contains(&"Enter code workspace file path:".to_string()));
        assert!(prompter
            .prompts
            .contains(&"Enter URL to open in the browser (optional):".to_string()));
    }

    #[test]
    fn test_create_browser_with_url() {
        let fixture = Fixture::new();
        fixture.run(vec![
            MENU_CREATE,
            Answer::Text("docs"),
            Answer::Path("/srv/docs"),
            Answer::Multi(vec![0]),
            Answer::Text("http://localhost:3000"),
            Answer::Text(""),
            MENU_CANCEL,
        ]);

        assert_eq!(
            fixture.json(),
            json!({"docs": {"apps": ["firefox http://localhost:3000"], "commands": []}})
        );
    }

    #[test]
    fn test_create_reprompts_for_blank_name_and_no_apps() {
        let fixture = Fixture::new();
        let (prompter, _) = fixture.run(vec![
            MENU_CREATE,
            Answer::Text("   "),
            Answer::Text("ops"),
            Answer::Path("/srv/ops"),
            Answer::Multi(vec![]),
            Answer::Multi(vec![5]),
            Answer::Text("make deploy"),
            MENU_CANCEL,
        ]);

        let name_prompts = prompter
            .prompts
            .iter()
            .filter(|p| *p == "Enter project name:")
            .count();
        assert_eq!(name_prompts, 2);
        assert_eq!(
            fixture.json(),
            json!({"ops": {"apps": ["postman"], "commands": ["make deploy"]}})
        );
    }

    #[test]
    fn test_create_overwrites_existing_project() {
        let fixture =
            Fixture::with_registry(json!({"dev": {"apps": ["postman"], "commands": ["old"]}}));
        fixture.run(vec![
            MENU_CREATE,
            Answer::Text("dev"),
            Answer::Path("/tmp/x"),
            Answer::Multi(vec![1]),
            Answer::Text("echo a, echo b"),
            MENU_CANCEL,
        ]);

        let registry = fixture.registry();
        assert_eq!(registry.len(), 1);
        let project = registry.get("dev").unwrap();
        assert_eq!(project.apps, vec!["code /tmp/x"]);
        assert_eq!(project.commands, vec!["echo a", "echo b"]);
    }

    #[test]
    fn test_create_returns_to_menu() {
        let fixture = Fixture::new();
        fixture.run(vec![
            MENU_CREATE,
            Answer::Text("one"),
            Answer::Path("/tmp/one"),
            Answer::Multi(vec![4]),
            Answer::Text(""),
            MENU_CREATE,
            Answer::Text("two"),
            Answer::Path("/tmp/two"),
            Answer::Multi(vec![4]),
            Answer::Text(""),
            MENU_CANCEL,
        ]);

        assert_eq!(fixture.registry().names(), vec!["one", "two"]);
    }
}
