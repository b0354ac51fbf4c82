//! Open a project: spawn its apps, then run its commands

use anyhow::{Context, Result};
use std::io;
use warpstart_core::{CommandOutcome, LaunchObserver, ProcessRunner, TracingObserver};

use super::{Next, Session};
use crate::output;
use crate::prompt::Prompter;

/// Prints launch steps and forwards them to the tracing observer
struct ConsoleObserver;

impl LaunchObserver for ConsoleObserver {
    fn on_app_opening(&self, app: &str) {
        output::step("Opening", app);
        TracingObserver.on_app_opening(app);
    }

    fn on_app_failed(&self, app: &str, error: &io::Error) {
        TracingObserver.on_app_failed(app, error);
    }

    fn on_command_running(&self, command: &str) {
        output::step("Running", command);
        TracingObserver.on_command_running(command);
    }

    fn on_command_finished(&self, outcome: &CommandOutcome) {
        TracingObserver.on_command_finished(outcome);
    }
}

pub(super) fn run<P: Prompter, R: ProcessRunner>(session: &mut Session<'_, P, R>) -> Result<Next> {
    let Some((registry, name)) = session.select_project("Select a project to open:")? else {
        return Ok(Next::Menu);
    };

    let project = registry
        .get(&name)
        .with_context(|| format!("Project '{}' not found", name))?;

    let report = session.launcher.launch_with(project, &ConsoleObserver);

    if report.all_succeeded() {
        output::success(&format!("Project '{}' launched successfully!", name));
    } else {
        output::warning(&format!(
            "Project '{}' launched with errors ({} app(s) failed to open, {} command(s) failed)",
            name,
            report.failed.len(),
            report.commands.iter().filter(|c| !c.succeeded()).count()
        ));
    }
    Ok(Next::Exit)
}
