//! `clean add interactor|usecase`: grow the generated units.

use clean_adapters::LocalFilesystem;
use clean_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::Identifier,
    error::CleanError,
};
use tracing::info;

use crate::{
    cli::{AddCommands, AddInteractorArgs, AddUsecaseArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: AddCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        AddCommands::Interactor(args) => add_interactor(args, config, output),
        AddCommands::Usecase(args) => add_usecase(args, config, output),
    }
}

fn add_interactor(
    args: AddInteractorArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let owner = parse_name(&args.name)?;
    let service = scaffold_service(config)?;

    output.header(&format!("Interactor {}", owner.exported()))?;
    let report = service.declare_interactor(&owner);
    finish(report, &service, output)
}

fn add_usecase(args: AddUsecaseArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let use_case = parse_name(&args.use_case)?;
    let owner = parse_name(&args.interactor)?;
    let service = scaffold_service(config)?;

    output.header(&format!(
        "Use case {} on {}",
        use_case.exported(),
        owner.exported()
    ))?;
    let report = service.attach_use_case(&use_case, &owner);
    finish(report, &service, output)
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn parse_name(raw: &str) -> CliResult<Identifier> {
    Identifier::parse(raw).map_err(|e| CliError::Core(CleanError::from(e)))
}

/// Context is resolved before any unit is touched.
fn scaffold_service(config: &AppConfig) -> CliResult<ScaffoldService> {
    let context = super::project_service(config)?.load_context()?;
    Ok(ScaffoldService::new(Box::new(LocalFilesystem::new()), context))
}

fn finish(report: ScaffoldReport, service: &ScaffoldService, output: &OutputManager) -> CliResult<()> {
    output.report(&report, service.context().base_dir())?;

    let total = report.steps.len();
    let failed = report.steps.iter().filter(|s| s.outcome.is_failure()).count();
    let written = report.steps.iter().filter(|s| s.outcome.wrote()).count();
    info!(total, failed, written, "Scaffolding finished");

    match report.first_failure() {
        Some(first) => Err(CliError::StepsFailed {
            failed,
            total,
            first: first.clone(),
        }),
        None => {
            if written == 0 {
                output.info("Nothing to do; everything was already in place")?;
            }
            Ok(())
        }
    }
}
