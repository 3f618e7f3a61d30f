//! One module per subcommand.
//!
//! Handlers translate arguments into core calls and render the result.
//! No planning logic lives here.

use tracing::info;

use cropplan_adapters::InMemoryCatalog;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod info;
pub mod init;
pub mod list;
pub mod plan;

/// Open the plant catalog. `--dataset` beats the `data.path` config key;
/// without either the built-in discovery order applies.
pub(crate) fn open_catalog(global: &GlobalArgs, config: &AppConfig) -> CliResult<InMemoryCatalog> {
    let explicit = global.dataset.as_deref().or(config.data.path.as_deref());
    let (catalog, source) = InMemoryCatalog::discover(explicit)?;
    info!(%source, "plant catalog ready");
    Ok(catalog)
}
