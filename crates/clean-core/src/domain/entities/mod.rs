pub mod common;
pub mod layout;
pub mod project_structure;
pub mod unit;

pub use crate::domain::DomainError;
pub use layout::ProjectLayout;
pub use project_structure::ProjectStructure;
pub use unit::{MethodExtension, UnitId};
