//! `clean init`: lay out the project tree and record the project root.

use std::path::Path;

use tracing::debug;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let root = super::working_dir()?;

    if !args.yes && !global.quiet && !confirm(&root)? {
        return Err(CliError::Cancelled);
    }

    let context = super::project_service(config)?.init(&root)?;
    debug!(root = %root.display(), "Project tree ready");

    output.success(&format!("Initialised Clean project in {}", root.display()))?;
    output.info(&format!(
        "Import prefix: \"{}clean/...\"",
        context.import_prefix()
    ))?;
    output.json(&context)?;
    Ok(())
}

/// Ask before touching the directory; only when attached to a terminal.
#[cfg(feature = "interactive")]
fn confirm(root: &Path) -> CliResult<bool> {
    if !console::Term::stderr().is_term() {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt(format!("Create the Clean project tree in {}?", root.display()))
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "confirmation prompt failed".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(_root: &Path) -> CliResult<bool> {
    Ok(true)
}
