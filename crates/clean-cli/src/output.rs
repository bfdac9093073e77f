//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;

use clean_core::application::{ScaffoldReport, StepOutcome, StepReport};
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` in the config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_config(&config.output.format).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON modes.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout; only written in JSON mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.resolved_format != OutputFormat::Json {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// One line per step, paths shown relative to `base`.
    ///
    /// Failed steps are printed even in quiet mode.
    pub fn report(&self, report: &ScaffoldReport, base: &Path) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(&report.summaries());
        }
        for step in &report.steps {
            if self.quiet && !step.outcome.is_failure() {
                continue;
            }
            self.term.write_line(&self.step_line(step, base))?;
        }
        Ok(())
    }

    fn step_line(&self, step: &StepReport, base: &Path) -> String {
        let path = step
            .path
            .strip_prefix(base)
            .unwrap_or(step.path.as_path())
            .display();
        let (symbol, detail) = match &step.outcome {
            StepOutcome::Created | StepOutcome::Extended => ("\u{2713}", String::new()),
            StepOutcome::AlreadyPresent => ("\u{00b7}", String::new()),
            StepOutcome::Skipped { reason } => ("\u{26a0}", format!(" ({reason})")),
            StepOutcome::Failed(e) => ("\u{2717}", format!(": {e}")),
        };
        let label = format!("{:<15}", step.outcome.label());

        if self.no_color {
            return format!("{symbol} {label} {path}{detail}");
        }
        match &step.outcome {
            StepOutcome::Created | StepOutcome::Extended => {
                format!("{} {} {path}", symbol.green().bold(), label.green())
            }
            StepOutcome::AlreadyPresent => format!("{} {} {path}", symbol.dimmed(), label.dimmed()),
            StepOutcome::Skipped { .. } => format!(
                "{} {} {path}{}",
                symbol.yellow().bold(),
                label.yellow(),
                detail.dimmed()
            ),
            StepOutcome::Failed(_) => format!(
                "{} {} {path}{}",
                symbol.red().bold(),
                label.red(),
                detail.red()
            ),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn is_silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use clean_core::{application::ApplicationError, domain::LayerKind};

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn step(outcome: StepOutcome) -> StepReport {
        StepReport {
            kind: LayerKind::Validator,
            path: PathBuf::from("/go/src/shop/clean/usecase/reqmodel/validator/order.go"),
            outcome,
        }
    }

    #[test]
    fn plain_step_lines_are_relative_and_uncoloured() {
        let out = make_manager(false, OutputFormat::Plain);
        let base = Path::new("/go/src/shop");

        let line = out.step_line(&step(StepOutcome::Extended), base);
        assert_eq!(
            line,
            "\u{2713} extended        clean/usecase/reqmodel/validator/order.go"
        );

        let failed = StepOutcome::Failed(ApplicationError::storage("/x", "denied").into());
        let line = out.step_line(&step(failed), base);
        assert!(line.starts_with("\u{2717} failed"));
        assert!(line.ends_with(": Storage unavailable at /x: denied"));
    }

    #[test]
    fn skipped_line_carries_reason() {
        let out = make_manager(false, OutputFormat::Plain);
        let line = out.step_line(
            &step(StepOutcome::Skipped {
                reason: "presenter missing".into(),
            }),
            Path::new("/elsewhere"),
        );
        assert!(line.contains("/go/src/shop/clean/usecase/reqmodel/validator/order.go"));
        assert!(line.ends_with("(presenter missing)"));
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    #[test]
    fn only_human_format_is_coloured() {
        assert!(make_manager(false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, OutputFormat::Plain).supports_color());
        assert!(!make_manager(false, OutputFormat::Json).supports_color());
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }
}
