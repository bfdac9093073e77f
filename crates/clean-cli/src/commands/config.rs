//! `clean config`: inspect the tool configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
            output.print(&value)?;
            output.json(&serde_json::json!({ "key": key, "value": value }))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&render_toml(config)?)?;
            output.json(config)?;
        }

        ConfigCommands::Path => {
            let record = config
                .record_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            output.print(&format!("config: {}", AppConfig::config_path().display()))?;
            output.print(&format!("record: {record}"))?;
            output.json(&serde_json::json!({
                "config": AppConfig::config_path(),
                "record": record,
            }))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn render_toml(config: &AppConfig) -> CliResult<String> {
    let mut shown = config.clone();
    shown.project.record = config.record_path();
    toml::to_string_pretty(&shown).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn toml_lists_sections() {
        let mut cfg = AppConfig::default();
        cfg.project.record = Some(PathBuf::from("/r/cleanrc"));
        let text = render_toml(&cfg).unwrap();
        assert!(text.contains("[project]"));
        assert!(text.contains("record = \"/r/cleanrc\""));
        assert!(text.contains("[output]"));
        assert!(text.contains("format = \"auto\""));
    }
}
