// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Clean.
//!
//! This module contains pure logic with no I/O. Reading and writing units is
//! done by the application layer through ports.
//!
//! ## Pieces
//!
//! - **naming**: capitalise/decapitalise, directory labels
//! - **value_objects**: `LayerKind`, `Identifier`
//! - **locator**: byte offsets of interface bodies and struct ends
//! - **splice**: text insertion and the idempotency guard
//! - **entities**: unit identity and text, project layout, directory tree
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod locator;
pub mod naming;
pub mod splice;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    layout::ProjectLayout,
    project_structure::ProjectStructure,
    unit::{MethodExtension, UnitId},
};

pub use error::{DomainError, ErrorCategory};

pub use locator::{locate_interface_body, locate_record_method_region};
pub use splice::{already_has, splice};
pub use value_objects::{Identifier, LayerKind};
