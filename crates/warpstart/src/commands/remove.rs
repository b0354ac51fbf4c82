//! Remove a project (no confirmation step)

use anyhow::Result;
use warpstart_core::ProcessRunner;

use super::{Next, Session};
use crate::output;
use crate::prompt::Prompter;

pub(super) fn run<P: Prompter, R: ProcessRunner>(session: &mut Session<'_, P, R>) -> Result<Next> {
    let Some((mut registry, name)) = session.select_project("Select a project to remove:")? else {
        return Ok(Next::Menu);
    };

    registry.remove(&name);
    session.store.save(&registry)?;

    output::success(&format!("Project '{}' removed successfully!", name));
    Ok(Next::Menu)
}
