//! Application layer errors.
//!
//! These errors represent failures in orchestration and storage, not in text
//! structure. Structural errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Reading or writing a unit or the configuration record failed.
    #[error("Storage unavailable at {path}: {reason}")]
    StorageUnavailable { path: PathBuf, reason: String },

    /// The configuration record is missing or names no source root.
    #[error("Configuration not found: {reason}")]
    ConfigurationNotFound { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Storage lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn storage(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationNotFound {
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StorageUnavailable { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
                "Run 'clean init' if the project folders do not exist yet".into(),
            ],
            Self::ConfigurationNotFound { .. } => vec![
                "Go to your project folder and run 'clean init' or 'clean set folder'".into(),
                "The project folder must lie below a 'src' directory, e.g. ~/go/src/shop".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StorageUnavailable { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::ConfigurationNotFound { .. } => ErrorCategory::Configuration,
        }
    }
}
