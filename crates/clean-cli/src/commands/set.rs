//! `clean set folder`: re-point the project record.

use crate::{
    cli::SetCommands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(cmd: SetCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        SetCommands::Folder => {
            let root = super::working_dir()?;
            let context = super::project_service(config)?.set_folder(&root)?;

            output.success(&format!("Project folder set to {}", root.display()))?;
            output.json(&context)?;
        }
    }
    Ok(())
}
