//! Project launcher
//!
//! Opens every app of a project as a detached process, then runs its
//! commands one after another. Nothing here is fatal: a missing app binary
//! or a failing command is reported and the sequence carries on.
//!
//! Apps are tokenized into an argument vector and spawned without a shell,
//! each in its own process group.
//! Commands are free-form shell text and run through the platform shell.

use crate::types::Project;
use std::io;
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, warn};

/// Process-spawning seam used by [`Launcher`]
///
/// [`SystemRunner`] starts real processes; tests provide a recording
/// implementation.
pub trait ProcessRunner {
    /// Start `program` detached with stdout and stderr discarded.
    /// Must not wait for the process.
    fn spawn_detached(&mut self, program: &str, args: &[String]) -> io::Result<()>;

    /// Run `command` through the shell and wait for it.
    /// Returns the exit code, or `None` if the process was killed by a signal.
    fn run_shell(&mut self, command: &str) -> io::Result<Option<i32>>;
}

/// Runs processes on the local machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    #[cfg(windows)]
    fn shell() -> (&'static str, &'static str) {
        ("cmd", "/C")
    }

    #[cfg(not(windows))]
    fn shell() -> (&'static str, &'static str) {
        ("sh", "-c")
    }
}

impl ProcessRunner for SystemRunner {
    fn spawn_detached(&mut self, program: &str, args: &[String]) -> io::Result<()> {
        if which::which(program).is_err() {
            debug!("{} was not found on PATH", program);
        }

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut command);

        let mut child = command.spawn()?;
        debug!("Spawned {} (pid {})", program, child.id());

        // Reap the app when it exits so short-lived launchers do not linger
        // as zombies while a blocking command runs.
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }

    fn run_shell(&mut self, command: &str) -> io::Result<Option<i32>> {
        let (shell, flag) = Self::shell();
        let output = duct::cmd(shell, [flag, command]).unchecked().run()?;
        Ok(output.status.code())
    }
}

/// Put the app in its own process group so terminal signals aimed at
/// warpstart or its commands (Ctrl-C) do not reach it
#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut Command) {}

/// Callbacks for launch progress
///
/// All methods default to doing nothing.
pub trait LaunchObserver {
    /// Called before an app is spawned
    fn on_app_opening(&self, _app: &str) {}

    /// Called when an app could not be spawned
    fn on_app_failed(&self, _app: &str, _error: &io::Error) {}

    /// Called before a command runs
    fn on_command_running(&self, _command: &str) {}

    /// Called after a command finished or failed to start
    fn on_command_finished(&self, _outcome: &CommandOutcome) {}
}

/// Observer that logs launch progress with `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LaunchObserver for TracingObserver {
    fn on_app_opening(&self, app: &str) {
        debug!("Opening: {}", app);
    }

    fn on_app_failed(&self, app: &str, error: &io::Error) {
        warn!("Failed to open '{}': {}", app, error);
    }

    fn on_command_running(&self, command: &str) {
        debug!("Running: {}", command);
    }

    fn on_command_finished(&self, outcome: &CommandOutcome) {
        if let Some(error) = &outcome.error {
            warn!("Command '{}' could not start: {}", outcome.command, error);
        } else if !outcome.succeeded() {
            warn!(
                "Command '{}' exited with status {}",
                outcome.command,
                outcome
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string())
            );
        }
    }
}

/// Result of one command run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub command: String,
    pub exit_code: Option<i32>,
    /// Set when the shell itself could not be started
    pub error: Option<String>,
}

impl CommandOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none() && self.exit_code == Some(0)
    }
}

/// What happened during a launch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchReport {
    /// Apps that were spawned
    pub opened: Vec<String>,
    /// Apps that could not be spawned
    pub failed: Vec<String>,
    /// Commands in the order they ran
    pub commands: Vec<CommandOutcome>,
}

impl LaunchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty() && self.commands.iter().all(CommandOutcome::succeeded)
    }
}

/// Launches projects through a [`ProcessRunner`]
#[derive(Debug, Default)]
pub struct Launcher<R = SystemRunner> {
    runner: R,
}

impl Launcher<SystemRunner> {
    /// Launcher that starts real processes
    pub fn system() -> Self {
        Self::new(SystemRunner)
    }
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Launch a project, logging progress with `tracing`
    pub fn launch(&mut self, project: &Project) -> LaunchReport {
        self.launch_with(project, &TracingObserver)
    }

    /// Launch a project: all apps first, then each command in turn
    pub fn launch_with(&mut self, project: &Project, observer: &dyn LaunchObserver) -> LaunchReport {
        let mut report = LaunchReport::default();

        for app in &project.apps {
            let Some((program, args)) = tokenize(app) else {
                continue;
            };

            observer.on_app_opening(app);
            match self.runner.spawn_detached(&program, &args) {
                Ok(()) => report.opened.push(app.clone()),
                Err(e) => {
                    observer.on_app_failed(app, &e);
                    report.failed.push(app.clone());
                }
            }
        }

        for command in &project.commands {
            if command.trim().is_empty() {
                continue;
            }

            observer.on_command_running(command);
            let outcome = match self.runner.run_shell(command) {
                Ok(exit_code) => CommandOutcome {
                    command: command.clone(),
                    exit_code,
                    error: None,
                },
                Err(e) => CommandOutcome {
                    command: command.clone(),
                    exit_code: None,
                    error: Some(e.to_string()),
                },
            };
            observer.on_command_finished(&outcome);
            report.commands.push(outcome);
        }

        debug!(
            "Launched '{}': {} app(s) opened, {} failed, {} command(s) run",
            project.name,
            report.opened.len(),
            report.failed.len(),
            report.commands.len()
        );
        report
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }
}

/// Split an app invocation into program and arguments
///
/// Uses POSIX shell-word rules. An invocation with unbalanced quotes falls
/// back to splitting on whitespace.
fn tokenize(app: &str) -> Option<(String, Vec<String>)> {
    let words = shlex::split(app)
        .unwrap_or_else(|| app.split_whitespace().map(str::to_string).collect());
    let mut words = words.into_iter();
    let program = words.next()?;
    Some((program, words.collect()))
}
