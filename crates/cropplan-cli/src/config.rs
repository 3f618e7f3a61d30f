//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CROPPLAN_PLANNER__AREA=12`, `CROPPLAN_DATA__PATH=...`
//! 3. Config file: `--config FILE`, otherwise the platform config file and
//!    `./cropplan.toml` (the local file wins)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliResult;

/// File name used by `cropplan init --local` and picked up from the
/// working directory.
pub const LOCAL_CONFIG: &str = "cropplan.toml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "CROPPLAN";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for `cropplan plan`.
    pub planner: PlannerConfig,
    /// Dataset location.
    #[serde(default)]
    pub data: DataConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub season: String,
    pub area: f64,
    pub people: u32,
    pub max_categories: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            planner: PlannerConfig {
                season: "Spring".into(),
                area: 20.0,
                people: 2,
                max_categories: cropplan_core::domain::DEFAULT_MAX_CATEGORIES as u32,
            },
            data: DataConfig::default(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config`. It must exist;
    /// the implicit locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "using explicit config file");
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                builder = builder
                    .add_source(File::from(Self::config_path()).required(false))
                    .add_source(File::from(Path::new(LOCAL_CONFIG)).required(false));
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the platform configuration file.
    ///
    /// Falls back to `./cropplan.toml` when no home directory is known.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cropplan", "cropplan")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// Serialise as a commented TOML document for `cropplan init`.
    pub fn to_toml(&self) -> CliResult<String> {
        let body = toml::to_string_pretty(self).map_err(|e| crate::error::CliError::ConfigError {
            message: format!("serialising configuration: {e}"),
            source: Some(Box::new(e)),
        })?;
        Ok(format!(
            "# cropplan configuration\n\
             # Every key can be overridden with CROPPLAN_<SECTION>__<KEY>.\n\n{body}"
        ))
    }
}
