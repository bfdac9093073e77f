//! Project configuration record and the per-invocation context derived from it.
//!
//! The record is a single line, `directory=<absolute-path>/`. From the base
//! directory it names, the module import prefix is derived: everything after
//! the last `src` path segment, e.g. `/home/ann/go/src/shop/` gives `shop/`.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::{
    application::ApplicationError,
    domain::ProjectLayout,
    error::CleanResult,
};

/// The persisted configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    base_dir: PathBuf,
}

impl ProjectConfig {
    pub const KEY: &'static str = "directory";

    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Parse the record text. Only the first line is significant.
    pub fn parse(text: &str) -> CleanResult<Self> {
        let line = text.lines().next().unwrap_or("").trim_end_matches('\r');
        let (key, value) = line.split_once('=').ok_or_else(|| {
            ApplicationError::configuration("record has no 'directory=' entry")
        })?;

        if key.trim() != Self::KEY {
            return Err(ApplicationError::configuration(format!(
                "unexpected key '{}' in record",
                key.trim()
            ))
            .into());
        }
        if value.is_empty() {
            return Err(ApplicationError::configuration("record names no directory").into());
        }

        Ok(Self::new(value))
    }

    /// Render the record, always with a trailing separator and newline.
    pub fn to_record(&self) -> String {
        let dir = self.base_dir.display().to_string();
        let sep = if dir.ends_with('/') || dir.ends_with('\\') {
            ""
        } else {
            "/"
        };
        format!("{}={dir}{sep}\n", Self::KEY)
    }
}

/// Module import prefix for a base directory.
///
/// Fails with `ConfigurationNotFound` when no path segment equals `src`, or
/// when a segment is not valid UTF-8.
pub fn import_prefix(base_dir: &Path) -> CleanResult<String> {
    let segments = base_dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s),
            _ => None,
        })
        .map(|s| {
            s.to_str().ok_or_else(|| {
                ApplicationError::configuration(format!(
                    "'{}' contains a segment that is not valid UTF-8",
                    base_dir.display()
                ))
            })
        })
        .collect::<Result<Vec<&str>, _>>()?;

    let src = segments.iter().rposition(|s| *s == "src").ok_or_else(|| {
        ApplicationError::configuration(format!(
            "'{}' does not lie below a 'src' directory",
            base_dir.display()
        ))
    })?;

    Ok(segments[src + 1..]
        .iter()
        .map(|s| format!("{s}/"))
        .collect())
}

/// Immutable per-invocation context threaded through the services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectContext {
    base_dir: PathBuf,
    import_prefix: String,
}

impl ProjectContext {
    pub fn new(base_dir: impl Into<PathBuf>) -> CleanResult<Self> {
        let base_dir = base_dir.into();
        let import_prefix = import_prefix(&base_dir)?;
        Ok(Self {
            base_dir,
            import_prefix,
        })
    }

    pub fn from_config(config: &ProjectConfig) -> CleanResult<Self> {
        Self::new(config.base_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn import_prefix(&self) -> &str {
        &self.import_prefix
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.base_dir)
    }
}
