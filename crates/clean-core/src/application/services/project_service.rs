//! Project Service - directory tree and configuration record.
//!
//! `init` lays out the directory tree and records the project root;
//! `set_folder` only re-points the record. Every other command starts from
//! `load_context`.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, ProjectConfig, ProjectContext,
        ports::{ConfigStore, Filesystem},
    },
    domain::ProjectStructure,
    error::CleanResult,
};

pub struct ProjectService {
    filesystem: Box<dyn Filesystem>,
    config_store: Box<dyn ConfigStore>,
}

impl ProjectService {
    pub fn new(filesystem: Box<dyn Filesystem>, config_store: Box<dyn ConfigStore>) -> Self {
        Self {
            filesystem,
            config_store,
        }
    }

    /// Create the standard directory tree under `root` and record `root`.
    ///
    /// The root must lie below a `src` directory; this is checked before
    /// anything is created. Existing directories are left as they are.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn init(&self, root: &Path) -> CleanResult<ProjectContext> {
        let context = ProjectContext::new(root)?;

        let structure = ProjectStructure::standard(root);
        structure.validate()?;

        for dir in structure.directories() {
            debug!(path = %dir.display(), "Creating directory");
            self.filesystem.create_dir_all(&dir)?;
        }

        self.config_store.save(&ProjectConfig::new(root))?;
        info!(
            directories = structure.directory_count(),
            prefix = context.import_prefix(),
            "Project initialized"
        );
        Ok(context)
    }

    /// Re-point an existing record at `root`.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn set_folder(&self, root: &Path) -> CleanResult<ProjectContext> {
        if !self.config_store.exists() {
            return Err(ApplicationError::configuration(
                "no configuration record yet; run 'clean init' first",
            )
            .into());
        }

        let context = ProjectContext::new(root)?;
        self.config_store.save(&ProjectConfig::new(root))?;
        info!(prefix = context.import_prefix(), "Project folder updated");
        Ok(context)
    }

    /// Context for the recorded project.
    pub fn load_context(&self) -> CleanResult<ProjectContext> {
        let config = self.config_store.load()?;
        debug!(base = %config.base_dir().display(), "Loaded configuration record");
        ProjectContext::from_config(&config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::{
        ports::output::{MockConfigStore, MockFilesystem},
        services::testing::FakeFs,
    };

    #[test]
    fn init_creates_tree_and_saves_record() {
        let fs = FakeFs::default();
        let mut store = MockConfigStore::new();
        store
            .expect_save()
            .withf(|c| c.base_dir() == Path::new("/go/src/shop"))
            .times(1)
            .returning(|_| Ok(()));

        let svc = ProjectService::new(Box::new(fs.clone()), Box::new(store));
        let ctx = svc.init(Path::new("/go/src/shop")).unwrap();

        assert_eq!(ctx.import_prefix(), "shop/");
        for rel in ProjectStructure::DIRECTORIES {
            assert!(fs.has_dir(&PathBuf::from("/go/src/shop").join(rel)), "{rel}");
        }
    }

    #[test]
    fn init_outside_src_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        let mut store = MockConfigStore::new();
        store.expect_save().never();

        let svc = ProjectService::new(Box::new(fs), Box::new(store));
        let err = svc.init(Path::new("/home/ann/shop")).unwrap_err();
        assert!(err.is_configuration_not_found());
    }

    #[test]
    fn init_stops_on_storage_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .returning(|p| Err(ApplicationError::storage(p, "read-only filesystem").into()));
        let mut store = MockConfigStore::new();
        store.expect_save().never();

        let svc = ProjectService::new(Box::new(fs), Box::new(store));
        let err = svc.init(Path::new("/go/src/shop")).unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn set_folder_requires_existing_record() {
        let mut store = MockConfigStore::new();
        store.expect_exists().return_const(false);
        store.expect_save().never();

        let svc = ProjectService::new(Box::new(FakeFs::default()), Box::new(store));
        let err = svc.set_folder(Path::new("/go/src/shop")).unwrap_err();
        assert!(err.is_configuration_not_found());
    }

    #[test]
    fn set_folder_rewrites_record_only() {
        let mut store = MockConfigStore::new();
        store.expect_exists().return_const(true);
        store.expect_save().times(1).returning(|_| Ok(()));
        let fs = FakeFs::default();

        let svc = ProjectService::new(Box::new(fs.clone()), Box::new(store));
        let ctx = svc.set_folder(Path::new("/go/src/github.com/ann/shop/")).unwrap();

        assert_eq!(ctx.import_prefix(), "github.com/ann/shop/");
        assert!(fs.files().is_empty());
    }

    #[test]
    fn load_context_derives_prefix() {
        let mut store = MockConfigStore::new();
        store
            .expect_load()
            .returning(|| Ok(ProjectConfig::new("/users/john/go/src/myproject/")));

        let svc = ProjectService::new(Box::new(FakeFs::default()), Box::new(store));
        let ctx = svc.load_context().unwrap();
        assert_eq!(ctx.import_prefix(), "myproject/");
    }

    #[test]
    fn load_context_without_src_fails() {
        let mut store = MockConfigStore::new();
        store
            .expect_load()
            .returning(|| Ok(ProjectConfig::new("/home/ann/shop/")));

        let svc = ProjectService::new(Box::new(FakeFs::default()), Box::new(store));
        assert!(svc.load_context().unwrap_err().is_configuration_not_found());
    }
}
