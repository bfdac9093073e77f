//! Configuration record adapter.
//!
//! The record lives in `~/.clean/cleanrc` unless the CLI points it elsewhere.

use std::{
    io,
    path::{Path, PathBuf},
};

use clean_core::{
    application::{ApplicationError, ProjectConfig, ports::ConfigStore},
    error::CleanResult,
};
use directories::BaseDirs;
use tracing::debug;

use crate::filesystem::map_io_error;

/// Configuration record stored as a one-line text file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub const DIR_NAME: &'static str = ".clean";
    pub const FILE_NAME: &'static str = "cleanrc";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.clean/cleanrc`, or `None` when no home directory can be found.
    pub fn default_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| {
            dirs.home_dir()
                .join(Self::DIR_NAME)
                .join(Self::FILE_NAME)
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> CleanResult<ProjectConfig> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ApplicationError::configuration(format!(
                    "no record at {}",
                    self.path.display()
                ))
                .into());
            }
            Err(e) => return Err(map_io_error(&self.path, e, "read configuration")),
        };

        debug!(path = %self.path.display(), "Read configuration record");
        ProjectConfig::parse(&text)
    }

    fn save(&self, config: &ProjectConfig) -> CleanResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        std::fs::write(&self.path, config.to_record())
            .map_err(|e| map_io_error(&self.path, e, "write configuration"))?;

        debug!(path = %self.path.display(), "Wrote configuration record");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}
