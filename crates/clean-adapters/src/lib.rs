//! Infrastructure adapters for Clean.
//!
//! This crate implements the ports defined in `clean-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_store;
pub mod filesystem;

// Re-export commonly used adapters
pub use config_store::FileConfigStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
