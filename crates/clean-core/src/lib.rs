//! Clean Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Clean
//! boilerplate generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            clean-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ProjectService, ScaffoldService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, ConfigStore)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    clean-adapters (Infrastructure)      │
//! │ (LocalFilesystem, FileConfigStore, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (LayerKind, UnitId, locator, splice)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clean_core::prelude::*;
//! # fn run(filesystem: Box<dyn Filesystem>) -> CleanResult<()> {
//!
//! let context = ProjectContext::new("/home/ann/go/src/shop/")?;
//! let service = ScaffoldService::new(filesystem, context);
//!
//! let owner = Identifier::parse("OrderHandler")?;
//! service.declare_interactor(&owner);
//!
//! let report = service.attach_use_case(&Identifier::parse("AddItemToOrder")?, &owner);
//! if let Some(e) = report.first_failure() {
//!     eprintln!("{e}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProjectConfig, ProjectContext, ProjectService, ScaffoldReport, ScaffoldService,
        StepOutcome, StepReport,
        ports::{ConfigStore, Filesystem},
    };
    pub use crate::domain::{Identifier, LayerKind, ProjectLayout, ProjectStructure, UnitId};
    pub use crate::error::{CleanError, CleanResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
