//! `redeem config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Unset optional values print as an empty string.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "data.path" => Ok(config
            .data
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "defaults.user" => Ok(config
            .defaults
            .user
            .map(|u| u.to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::InvalidInput {
            message: format!(
                "Unknown config key: '{key}' (known: data.path, defaults.user, output.no_color, output.format)"
            ),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn get_known_keys() {
        let mut cfg = AppConfig::default();
        cfg.defaults.user = Some(3);
        cfg.data.path = Some(PathBuf::from("data"));

        assert_eq!(get_config_value(&cfg, "defaults.user").unwrap(), "3");
        assert_eq!(get_config_value(&cfg, "data.path").unwrap(), "data");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "table");
    }

    #[test]
    fn unset_values_are_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.user").unwrap(), "");
        assert_eq!(get_config_value(&cfg, "data.path").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
