use std::path::{Path, PathBuf};

use crate::domain::entities::unit::UnitId;

/// Where generated units live below a project's base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    source_root: PathBuf,
}

impl ProjectLayout {
    /// Directory under the base directory that holds every layer.
    pub const SOURCE_DIR: &'static str = "clean";

    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            source_root: base_dir.as_ref().join(Self::SOURCE_DIR),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn unit_path(&self, unit: &UnitId) -> PathBuf {
        self.source_root
            .join(unit.kind.rel_path())
            .join(unit.file_name())
    }

    pub fn test_unit_path(&self, unit: &UnitId) -> PathBuf {
        self.source_root
            .join(unit.kind.rel_path())
            .join("test")
            .join(unit.test_file_name())
    }
}
