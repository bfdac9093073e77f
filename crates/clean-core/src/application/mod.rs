//! Application layer for Clean.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService, ScaffoldService)
//! - **Context**: The configuration record and the import prefix derived from it
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! text rules itself. All of those live in `crate::domain`.

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

pub use context::{ProjectConfig, ProjectContext, import_prefix};

// Re-export main services
pub use services::{
    ProjectService, ScaffoldReport, ScaffoldService, StepOutcome, StepReport, StepSummary,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigStore, Filesystem};

pub use error::ApplicationError;
