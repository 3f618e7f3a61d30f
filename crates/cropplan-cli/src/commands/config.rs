//! `cropplan config` — inspect configuration values.

use serde_json::Value;

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
            if output.wants_json() {
                return output.json(&config);
            }
            output.header("Current Configuration:")?;
            output.data(config.to_toml()?.trim_end())?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `planner.area`. Tables print as JSON.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::UnknownConfigKey {
        key: key.to_string(),
    };

    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&root, |node, part| node.get(part))
        .ok_or_else(unknown)?;

    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "planner.season").unwrap(), "Spring");
        assert_eq!(get_config_value(&cfg, "planner.area").unwrap(), "20.0");
        assert_eq!(get_config_value(&cfg, "planner.people").unwrap(), "2");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_section_prints_json() {
        let cfg = AppConfig::default();
        let section = get_config_value(&cfg, "output").unwrap();
        assert!(section.contains("\"no_color\":false"));
    }

    #[test]
    fn unset_dataset_path_is_unknown() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "data.path"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "planner.colour"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }
}
