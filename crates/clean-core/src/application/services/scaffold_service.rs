//! Scaffold Service - fans one command out over the generated units.
//!
//! Two use cases:
//! 1. `declare_interactor`: bootstrap the five method-bearing units of an owner
//! 2. `attach_use_case`: grow every unit of an owner by one use case
//!
//! Each (LayerKind, owner) step re-reads its unit, decides, and rewrites it.
//! A failed step is recorded and the remaining steps still run; nothing is
//! rolled back.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ProjectContext, ports::Filesystem},
    domain::{
        DomainError, Identifier, LayerKind, ProjectLayout, UnitId, already_has, locator,
        locate_interface_body, locate_record_method_region, splice,
    },
    error::{CleanError, CleanResult},
};

/// What happened to one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The unit did not exist and was written from scratch.
    Created,
    /// The unit existed and new text was spliced in.
    Extended,
    /// The requested declaration or method was already there.
    AlreadyPresent,
    /// The step was not attempted.
    Skipped { reason: String },
    /// The step aborted; other steps are unaffected.
    Failed(CleanError),
}

impl StepOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Extended => "extended",
            Self::AlreadyPresent => "already-present",
            Self::Skipped { .. } => "skipped",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether the unit on disk changed.
    pub fn wrote(&self) -> bool {
        matches!(self, Self::Created | Self::Extended)
    }
}

/// Outcome of one (LayerKind, owner) step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: LayerKind,
    pub path: PathBuf,
    pub outcome: StepOutcome,
}

/// Flattened view of a step for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    pub kind: LayerKind,
    pub path: PathBuf,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<&StepReport> for StepSummary {
    fn from(step: &StepReport) -> Self {
        let detail = match &step.outcome {
            StepOutcome::Skipped { reason } => Some(reason.clone()),
            StepOutcome::Failed(e) => Some(e.to_string()),
            _ => None,
        };
        Self {
            kind: step.kind,
            path: step.path.clone(),
            outcome: step.outcome.label(),
            detail,
        }
    }
}

/// Every step of one command, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub steps: Vec<StepReport>,
}

impl ScaffoldReport {
    pub fn outcome(&self, kind: LayerKind) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| s.kind == kind).map(|s| &s.outcome)
    }

    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(|s| s.outcome.is_failure())
    }

    pub fn first_failure(&self) -> Option<&CleanError> {
        self.steps.iter().find_map(|s| match &s.outcome {
            StepOutcome::Failed(e) => Some(e),
            _ => None,
        })
    }

    pub fn summaries(&self) -> Vec<StepSummary> {
        self.steps.iter().map(StepSummary::from).collect()
    }

    fn push(&mut self, kind: LayerKind, path: PathBuf, result: CleanResult<StepOutcome>) {
        let outcome = match result {
            Ok(outcome) => {
                debug!(%kind, path = %path.display(), outcome = outcome.label(), "Step done");
                outcome
            }
            Err(e) => {
                warn!(%kind, path = %path.display(), error = %e, "Step failed");
                StepOutcome::Failed(e)
            }
        };
        self.steps.push(StepReport {
            kind,
            path,
            outcome,
        });
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    context: ProjectContext,
    layout: ProjectLayout,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>, context: ProjectContext) -> Self {
        let layout = context.layout();
        Self {
            filesystem,
            context,
            layout,
        }
    }

    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// Bootstrap the method-bearing units of `owner`.
    ///
    /// Kinds are independent: units that already exist keep their header and
    /// only get the declaration block if it is missing.
    #[instrument(skip_all, fields(owner = %owner))]
    pub fn declare_interactor(&self, owner: &Identifier) -> ScaffoldReport {
        info!("Declaring interactor");
        let mut report = ScaffoldReport::default();

        for kind in LayerKind::METHOD_BEARING {
            let unit = UnitId::new(kind, owner.clone());
            let path = self.layout.unit_path(&unit);
            let result = self.bootstrap(&unit);
            report.push(kind, path, result);
        }

        report
    }

    /// Attach `use_case` to every unit of `owner`.
    ///
    /// Data-only units are only touched once the owner's presenter exists.
    #[instrument(skip_all, fields(owner = %owner, use_case = %use_case))]
    pub fn attach_use_case(&self, use_case: &Identifier, owner: &Identifier) -> ScaffoldReport {
        info!("Attaching use case");
        let presenter = UnitId::new(LayerKind::BoundaryOut, owner.clone());
        let presenter_exists = self.filesystem.exists(&self.layout.unit_path(&presenter));
        let mut report = ScaffoldReport::default();

        for kind in LayerKind::ALL {
            let unit = UnitId::new(kind, owner.clone());
            let path = self.layout.unit_path(&unit);

            let result = if kind.is_method_bearing() {
                self.extend_methods(&unit, use_case)
            } else if presenter_exists {
                self.extend_models(&unit, use_case)
            } else {
                Ok(StepOutcome::Skipped {
                    reason: format!("presenter for '{owner}' does not exist yet"),
                })
            };
            report.push(kind, path, result);
        }

        report
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn bootstrap(&self, unit: &UnitId) -> CleanResult<StepOutcome> {
        let path = self.layout.unit_path(unit);
        let fresh = !self.filesystem.exists(&path);

        let mut text = if fresh {
            unit.header(self.context.import_prefix())
        } else {
            self.filesystem.read_file(&path)?
        };

        let declared = already_has(&text, &locator::interface_opener(&unit.interface_name()));
        if !declared {
            text.push_str(&unit.declaration_block());
            self.filesystem.write_file(&path, &text)?;
        }

        let tested = unit.kind.is_method_bearing() && self.ensure_test_unit(unit)?;

        Ok(match (fresh, declared, tested) {
            (true, _, _) => StepOutcome::Created,
            (false, true, false) => StepOutcome::AlreadyPresent,
            (false, _, _) => StepOutcome::Extended,
        })
    }

    /// Write the companion test unit if it is missing; true when written.
    fn ensure_test_unit(&self, unit: &UnitId) -> CleanResult<bool> {
        let path = self.layout.test_unit_path(unit);
        if self.filesystem.exists(&path) {
            return Ok(false);
        }
        self.filesystem.write_file(&path, UnitId::test_unit())?;
        debug!(path = %path.display(), "Wrote companion test unit");
        Ok(true)
    }

    fn extend_methods(&self, unit: &UnitId, use_case: &Identifier) -> CleanResult<StepOutcome> {
        let Some(ext) = unit.extension(use_case) else {
            return Ok(StepOutcome::Skipped {
                reason: format!("{} units carry no methods", unit.kind),
            });
        };

        let path = self.layout.unit_path(unit);
        if !self.filesystem.exists(&path) {
            return Err(DomainError::interface_not_found(&unit.interface_name()).into());
        }
        let text = self.filesystem.read_file(&path)?;

        if already_has(&text, &ext.token) {
            // Only the first method name is guarded; report, don't repair.
            if !text.contains(&format!(") {}", ext.token)) {
                warn!(
                    unit = %unit,
                    token = %ext.token,
                    "Signature present but no implementing method found"
                );
            }
            return Ok(StepOutcome::AlreadyPresent);
        }

        let at = locate_interface_body(&text, &unit.interface_name())?;
        let text = splice(&text, at, &ext.interface_fragment());
        let at = locate_record_method_region(&text, &unit.record_name())?;
        let text = splice(&text, at, &ext.record_fragment());

        self.filesystem.write_file(&path, &text)?;
        Ok(StepOutcome::Extended)
    }

    fn extend_models(&self, unit: &UnitId, use_case: &Identifier) -> CleanResult<StepOutcome> {
        let path = self.layout.unit_path(unit);

        if !self.filesystem.exists(&path) {
            let text = unit.model_header() + &unit.model_records(use_case);
            self.filesystem.write_file(&path, &text)?;
            return Ok(StepOutcome::Created);
        }

        let mut text = self.filesystem.read_file(&path)?;
        if already_has(&text, &UnitId::model_token(use_case)) {
            return Ok(StepOutcome::AlreadyPresent);
        }
        text.push_str(&unit.model_records(use_case));
        self.filesystem.write_file(&path, &text)?;
        Ok(StepOutcome::Extended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::output::MockFilesystem,
        services::testing::FakeFs,
    };

    fn id(s: &str) -> Identifier {
        Identifier::parse(s).unwrap()
    }

    fn context() -> ProjectContext {
        ProjectContext::new("/go/src/shop/").unwrap()
    }

    fn service(fs: &FakeFs) -> ScaffoldService {
        ScaffoldService::new(Box::new(fs.clone()), context())
    }

    fn unit_path(kind: LayerKind, owner: &str) -> PathBuf {
        context()
            .layout()
            .unit_path(&UnitId::new(kind, id(owner)))
    }

    #[test]
    fn declare_creates_five_units_and_tests() {
        let fs = FakeFs::with_layout(&context());
        let report = service(&fs).declare_interactor(&id("Order"));

        assert_eq!(report.steps.len(), 5);
        assert!(report.steps.iter().all(|s| s.outcome == StepOutcome::Created));

        let text = fs.read(&unit_path(LayerKind::BusinessLogic, "Order")).unwrap();
        assert!(text.contains("\t\"shop/clean/ifadapter/presenter\"\n"));
        assert!(text.contains("type Order interface {\n"));
        assert!(text.contains("type order struct {\n"));
        assert!(fs.read(&PathBuf::from(
            "/go/src/shop/clean/usecase/interactor/test/order_test.go"
        ))
        .is_some());
        // data-only units are not bootstrapped
        assert!(fs.read(&unit_path(LayerKind::RequestModel, "Order")).is_none());
    }

    #[test]
    fn declare_twice_is_idempotent() {
        let fs = FakeFs::with_layout(&context());
        let svc = service(&fs);
        svc.declare_interactor(&id("Order"));
        let first = fs.read(&unit_path(LayerKind::BoundaryIn, "Order")).unwrap();

        let report = svc.declare_interactor(&id("Order"));
        let second = fs.read(&unit_path(LayerKind::BoundaryIn, "Order")).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.matches("type Order interface {").count(), 1);
        assert!(report
            .steps
            .iter()
            .all(|s| s.outcome == StepOutcome::AlreadyPresent));
    }

    #[test]
    fn declare_appends_block_to_foreign_file() {
        let fs = FakeFs::with_layout(&context());
        let path = unit_path(LayerKind::Renderer, "Order");
        fs.put(&path, "package view\n");

        let report = service(&fs).declare_interactor(&id("Order"));
        assert_eq!(report.outcome(LayerKind::Renderer), Some(&StepOutcome::Extended));
        let text = fs.read(&path).unwrap();
        assert!(text.starts_with("package view\n"));
        assert!(text.contains("type Order interface {\n"));
    }

    #[test]
    fn attach_twice_adds_one_method() {
        let fs = FakeFs::with_layout(&context());
        let svc = service(&fs);
        svc.declare_interactor(&id("Order"));

        let first = svc.attach_use_case(&id("AddItem"), &id("Order"));
        assert!(!first.has_failures());
        assert_eq!(
            first.outcome(LayerKind::Validator),
            Some(&StepOutcome::Extended)
        );
        assert_eq!(
            first.outcome(LayerKind::ResponseModel),
            Some(&StepOutcome::Created)
        );

        let second = svc.attach_use_case(&id("AddItem"), &id("Order"));
        assert!(second
            .steps
            .iter()
            .all(|s| s.outcome == StepOutcome::AlreadyPresent));

        let text = fs.read(&unit_path(LayerKind::Validator, "Order")).unwrap();
        assert_eq!(text.matches("\tValidateAddItem(").count(), 1);
        assert_eq!(text.matches(") ValidateAddItem(").count(), 1);
    }

    #[test]
    fn attach_without_presenter_skips_models() {
        let fs = FakeFs::with_layout(&context());
        let report = service(&fs).attach_use_case(&id("AddItem"), &id("Order"));

        for kind in LayerKind::DATA_ONLY {
            assert!(matches!(
                report.outcome(kind),
                Some(StepOutcome::Skipped { .. })
            ));
            assert!(fs.read(&unit_path(kind, "Order")).is_none());
        }
    }

    #[test]
    fn attach_without_declare_is_structure_not_found() {
        let fs = FakeFs::with_layout(&context());
        let report = service(&fs).attach_use_case(&id("RemoveItem"), &id("Order"));

        for kind in LayerKind::METHOD_BEARING {
            match report.outcome(kind) {
                Some(StepOutcome::Failed(e)) => assert!(e.is_structure_not_found()),
                other => panic!("{kind}: unexpected {other:?}"),
            }
        }
        assert!(fs.files().is_empty());
    }

    #[test]
    fn broken_unit_fails_only_its_step() {
        let fs = FakeFs::with_layout(&context());
        let svc = service(&fs);
        svc.declare_interactor(&id("Order"));
        fs.put(
            &unit_path(LayerKind::Renderer, "Order"),
            "package view\n\ntype Order interface {\n}\n",
        );

        let report = svc.attach_use_case(&id("AddItem"), &id("Order"));
        match report.outcome(LayerKind::Renderer) {
            Some(StepOutcome::Failed(e)) => assert!(e.is_structure_not_found()),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            report.outcome(LayerKind::BusinessLogic),
            Some(&StepOutcome::Extended)
        );
        // the broken unit was not half-written
        assert_eq!(
            fs.read(&unit_path(LayerKind::Renderer, "Order")).unwrap(),
            "package view\n\ntype Order interface {\n}\n"
        );
    }

    #[test]
    fn existing_model_unit_gets_appended() {
        let fs = FakeFs::with_layout(&context());
        let svc = service(&fs);
        svc.declare_interactor(&id("Order"));
        svc.attach_use_case(&id("AddItem"), &id("Order"));
        let report = svc.attach_use_case(&id("RemoveItem"), &id("Order"));

        assert_eq!(
            report.outcome(LayerKind::ViewModel),
            Some(&StepOutcome::Extended)
        );
        let text = fs.read(&unit_path(LayerKind::ViewModel, "Order")).unwrap();
        assert_eq!(text.matches("package viewmodel").count(), 1);
        assert!(text.contains("type AddItemErrVal struct {\n"));
        assert!(text.contains("type RemoveItemErrVal struct {\n"));
    }

    #[test]
    fn model_guard_ignores_line_endings() {
        let fs = FakeFs::with_layout(&context());
        let svc = service(&fs);
        svc.declare_interactor(&id("Order"));
        let path = unit_path(LayerKind::ResponseModel, "Order");
        fs.put(
            &path,
            "package respmodel\r\n\r\ntype AddItem struct {\r\n}\r\n",
        );

        let report = svc.attach_use_case(&id("AddItem"), &id("Order"));
        assert_eq!(
            report.outcome(LayerKind::ResponseModel),
            Some(&StepOutcome::AlreadyPresent)
        );
        let text = fs.read(&path).unwrap();
        assert_eq!(text.matches("type AddItem struct {").count(), 1);
    }

    #[test]
    fn redeclare_restores_missing_test_unit() {
        let original = FakeFs::with_layout(&context());
        service(&original).declare_interactor(&id("Order"));

        // same units, companion tests gone
        let fs = FakeFs::with_layout(&context());
        for kind in LayerKind::METHOD_BEARING {
            let path = unit_path(kind, "Order");
            fs.put(&path, &original.read(&path).unwrap());
        }

        let report = service(&fs).declare_interactor(&id("Order"));
        assert!(report.steps.iter().all(|s| s.outcome == StepOutcome::Extended));
        assert!(fs
            .read(&PathBuf::from(
                "/go/src/shop/clean/ifadapter/view/test/order_test.go"
            ))
            .is_some());
        let view = fs.read(&unit_path(LayerKind::Renderer, "Order")).unwrap();
        assert_eq!(view.matches("type Order interface {").count(), 1);
    }

    #[test]
    fn write_failure_is_storage_unavailable_and_isolated() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().returning(|path, _| {
            if path.to_string_lossy().contains("presenter") {
                Err(ApplicationError::storage(path, "disk full").into())
            } else {
                Ok(())
            }
        });

        let svc = ScaffoldService::new(Box::new(fs), context());
        let report = svc.declare_interactor(&id("Order"));

        match report.outcome(LayerKind::BoundaryOut) {
            Some(StepOutcome::Failed(e)) => assert!(e.is_storage_unavailable()),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            report.outcome(LayerKind::Validator),
            Some(&StepOutcome::Created)
        );
        assert!(report.first_failure().is_some());
    }

    #[test]
    fn read_failure_aborts_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_file()
            .returning(|path| Err(ApplicationError::storage(path, "permission denied").into()));
        fs.expect_write_file().never();

        let svc = ScaffoldService::new(Box::new(fs), context());
        let report = svc.attach_use_case(&id("AddItem"), &id("Order"));
        assert_eq!(report.steps.len(), 8);
        assert!(report
            .steps
            .iter()
            .all(|s| matches!(&s.outcome, StepOutcome::Failed(e) if e.is_storage_unavailable())));
    }

    #[test]
    fn summaries_carry_details() {
        let fs = FakeFs::with_layout(&context());
        let report = service(&fs).attach_use_case(&id("AddItem"), &id("Order"));
        let summaries = report.summaries();
        assert_eq!(summaries[0].outcome, "failed");
        assert!(summaries[0].detail.as_deref().unwrap().contains("Order"));
    }
}
