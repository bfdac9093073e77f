//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `clean-adapters` crate provides implementations.

use crate::application::ProjectConfig;
use crate::error::CleanResult;
use std::path::Path;

/// Port for filesystem operations on generated units.
///
/// Implemented by:
/// - `clean_adapters::filesystem::LocalFilesystem` (production)
/// - `clean_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Units are plain UTF-8 text, read and rewritten whole
/// - No locking: one process mutates a project at a time
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CleanResult<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> CleanResult<String>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> CleanResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the persisted project configuration record.
///
/// Implemented by:
/// - `clean_adapters::config_store::FileConfigStore`
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Load the record; `ConfigurationNotFound` if there is none.
    fn load(&self) -> CleanResult<ProjectConfig>;

    /// Persist the record, replacing any previous one.
    fn save(&self, config: &ProjectConfig) -> CleanResult<()>;

    /// Whether a record has been written before.
    fn exists(&self) -> bool;
}
