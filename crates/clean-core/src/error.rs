//! Unified error handling for Clean Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Clean Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanError {
    /// Errors from the domain layer (names, text structure).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (storage, configuration).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CleanError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }

    pub fn is_structure_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::StructureNotFound { .. }))
    }

    pub fn is_storage_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::StorageUnavailable { .. })
        )
    }

    pub fn is_configuration_not_found(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::ConfigurationNotFound { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CleanResult<T> = Result<T, CleanError>;
