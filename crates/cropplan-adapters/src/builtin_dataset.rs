//! Built-in dataset discovery.
//!
//! [`load`] is the single entry point the CLI uses to obtain plant records.
//!
//! # Dataset resolution order
//!
//! 1. **explicit path**: `--dataset FILE` or the `data.path` config key.
//!    A missing or malformed explicit file is an error; there is no
//!    silent fallback.
//! 2. **`$CROPPLAN_DATASET`**: environment variable override. Treated
//!    like an explicit path, so a file that does not exist is an error.
//! 3. **`./datasets/vegetables.dataset.csv`**: relative to the current
//!    working directory.
//! 4. **`<executable-dir>/datasets/vegetables.dataset.csv`**: sibling to
//!    the `cropplan` binary.
//! 5. **embedded**: the copy compiled into the binary.
//!
//! Candidates 3 and 4 that do not exist are skipped. One that exists but fails
//! to parse is an error, since the user evidently meant to use it.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use cropplan_core::{domain::PlantRecord, error::CropPlanResult};

use crate::dataset_loader::{DatasetLoader, parse_csv};

/// Environment variable naming a dataset file.
pub const DATASET_ENV: &str = "CROPPLAN_DATASET";

/// Relative location of the bundled dataset.
pub const DEFAULT_DATASET_PATH: &str = "datasets/vegetables.dataset.csv";

/// The dataset compiled into the binary.
pub const EMBEDDED_CSV: &str = include_str!("../../../datasets/vegetables.dataset.csv");

/// Where the loaded records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded => f.write_str("built-in dataset"),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load plant records following the resolution order in the module docs.
#[instrument(skip_all, fields(explicit = ?explicit))]
pub fn load(explicit: Option<&Path>) -> CropPlanResult<(DatasetSource, Vec<PlantRecord>)> {
    let from_env = std::env::var_os(DATASET_ENV).map(PathBuf::from);
    load_from(explicit, from_env)
}

/// [`load`] with the environment override passed in.
fn load_from(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
) -> CropPlanResult<(DatasetSource, Vec<PlantRecord>)> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()));
    if let Some(path) = named {
        let records = DatasetLoader::new(&path).load()?;
        info!(path = %path.display(), count = records.len(), "dataset loaded");
        return Ok((DatasetSource::File(path), records));
    }

    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate dataset path");

        if !candidate.is_file() {
            debug!(path = %candidate.display(), "not a file, skipping");
            continue;
        }

        let records = DatasetLoader::new(&candidate).load()?;
        info!(path = %candidate.display(), count = records.len(), "dataset loaded");
        return Ok((DatasetSource::File(candidate), records));
    }

    let records = embedded()?;
    info!(count = records.len(), "using built-in dataset");
    Ok((DatasetSource::Embedded, records))
}

/// Parse the embedded dataset.
pub fn embedded() -> CropPlanResult<Vec<PlantRecord>> {
    parse_csv(EMBEDDED_CSV.as_bytes())
}

// ── Resolution helpers ────────────────────────────────────────────────────────

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    paths.push(PathBuf::from(DEFAULT_DATASET_PATH));

    if let Some(exe_sibling) = exe_sibling_dataset() {
        paths.push(exe_sibling);
    }

    paths
}

fn exe_sibling_dataset() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join(DEFAULT_DATASET_PATH)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropplan_core::domain::{Category, Season};
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn embedded_dataset_parses() {
        let records = embedded().unwrap();
        assert!(records.len() >= 40);
    }

    #[test]
    fn embedded_dataset_covers_every_season() {
        let records = embedded().unwrap();
        for season in Season::ALL {
            assert!(
                records.iter().any(|r| season.matches(&r.season)),
                "no plants for {season}"
            );
        }
    }

    #[test]
    fn embedded_dataset_has_unique_names() {
        let records = embedded().unwrap();
        let names: HashSet<_> = records.iter().map(|r| r.name.to_lowercase()).collect();
        assert_eq!(names.len(), records.len());
    }

    #[test]
    fn embedded_dataset_uses_known_categories() {
        let records = embedded().unwrap();
        assert!(records.iter().all(|r| {
            cropplan_core::domain::heuristics::is_known(&Category::new(&r.category))
        }));
    }

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mine.csv");
        fs::write(&path, "Name,Category,Season\nOkra,Fruit,Summer\n").unwrap();

        let (source, records) = load(Some(&path)).unwrap();
        assert_eq!(source, DatasetSource::File(path));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load(Some(&dir.path().join("missing.csv"))).is_err());
    }

    #[test]
    fn env_path_is_used_when_no_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("env.csv");
        fs::write(&path, "Name,Category,Season\nKale,Leafy,Winter\n").unwrap();

        let (source, records) = load_from(None, Some(path.clone())).unwrap();
        assert_eq!(source, DatasetSource::File(path));
        assert_eq!(records[0].name, "Kale");
    }

    #[test]
    fn env_path_that_does_not_exist_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("typo.csv");
        assert!(load_from(None, Some(missing)).is_err());
    }

    #[test]
    fn explicit_path_beats_env_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mine.csv");
        fs::write(&path, "Name,Category,Season\nOkra,Fruit,Summer\n").unwrap();

        let (source, _) = load_from(Some(&path), Some(dir.path().join("typo.csv"))).unwrap();
        assert_eq!(source, DatasetSource::File(path));
    }

    #[test]
    fn source_display() {
        assert_eq!(DatasetSource::Embedded.to_string(), "built-in dataset");
    }
}
