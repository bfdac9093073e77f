// ============================================================================
// domain/errors.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep one per step)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Structural Errors (text could not be located)
    // ========================================================================
    #[error("{what} '{name}' not found")]
    StructureNotFound { what: &'static str, name: String },
}

impl DomainError {
    pub(crate) fn interface_not_found(name: &str) -> Self {
        Self::StructureNotFound {
            what: "interface declaration",
            name: name.to_string(),
        }
    }

    pub(crate) fn record_not_found(name: &str) -> Self {
        Self::StructureNotFound {
            what: "struct declaration",
            name: name.to_string(),
        }
    }

    pub(crate) fn unbalanced_record(name: &str) -> Self {
        Self::StructureNotFound {
            what: "closing brace of struct",
            name: name.to_string(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("'{}' is not a valid identifier", name),
                "Names start with a letter and contain only letters, digits and '_'".into(),
                "Examples: Order, AddItemToOrder".into(),
            ],
            Self::StructureNotFound { name, .. } => vec![
                format!("Could not find the generated code for '{}'", name),
                "Declare the interactor first: clean add interactor <NAME>".into(),
                "Generated declarations must not be renamed or reformatted".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::StructureNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
