//! Command handlers, one module per subcommand.
//!
//! Handlers wire the adapters into the core services and translate results
//! into output; they hold no scaffolding rules of their own.

use std::path::PathBuf;

use clean_adapters::{FileConfigStore, LocalFilesystem};
use clean_core::application::ProjectService;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

pub mod add;
pub mod completions;
pub mod config;
pub mod init;
pub mod set;

/// Store for the project record named by the configuration.
fn record_store(config: &AppConfig) -> CliResult<FileConfigStore> {
    config
        .record_path()
        .map(FileConfigStore::new)
        .ok_or(CliError::RecordLocationUnknown)
}

fn project_service(config: &AppConfig) -> CliResult<ProjectService> {
    Ok(ProjectService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(record_store(config)?),
    ))
}

fn working_dir() -> CliResult<PathBuf> {
    std::env::current_dir().with_cli_context(|| "Failed to read the current directory")
}
