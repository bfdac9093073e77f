use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Directory tree a fresh project needs before any unit can be generated.
///
/// Contains no behaviour beyond bookkeeping; the project service
/// materialises it through the filesystem port.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) directories: Vec<RelativePath>,
}

impl ProjectStructure {
    /// Relative directories created by `clean init`, parents first.
    pub const DIRECTORIES: [&'static str; 21] = [
        "clean",
        "clean/entity",
        "clean/ifadapter",
        "clean/ifadapter/controller",
        "clean/ifadapter/controller/test",
        "clean/ifadapter/gateway",
        "clean/ifadapter/gateway/test",
        "clean/ifadapter/presenter",
        "clean/ifadapter/presenter/test",
        "clean/ifadapter/view",
        "clean/ifadapter/view/test",
        "clean/ifadapter/view/viewmodel",
        "clean/usecase",
        "clean/usecase/interactor",
        "clean/usecase/interactor/test",
        "clean/usecase/reqmodel",
        "clean/usecase/reqmodel/validator",
        "clean/usecase/reqmodel/validator/test",
        "clean/usecase/respmodel",
        "lib",
        "cmd",
    ];

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: Vec::new(),
        }
    }

    /// The standard Clean Architecture tree rooted at `root`.
    pub fn standard(root: impl Into<PathBuf>) -> Self {
        Self::DIRECTORIES
            .iter()
            .fold(Self::new(root), |s, dir| s.with_directory(*dir))
    }

    pub fn add_directory(&mut self, path: impl Into<RelativePath>) {
        self.directories.push(path.into());
    }

    pub fn with_directory(mut self, path: impl Into<RelativePath>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() {
            return Err(DomainError::InvalidName {
                name: self.root.display().to_string(),
                reason: "project structure is empty".into(),
            });
        }

        let mut seen = HashSet::new();
        for dir in &self.directories {
            if !seen.insert(dir.as_path()) {
                return Err(DomainError::InvalidName {
                    name: dir.to_string(),
                    reason: "duplicate directory".into(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (root-joined) directory paths, in creation order.
    pub fn directories(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.directories.iter().map(|d| self.root.join(d))
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }
}
