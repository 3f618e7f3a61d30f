//! Plant dataset loader.
//!
//! Parses plant datasets into domain [`PlantRecord`]s. Three formats are
//! understood, picked by file extension:
//!
//! # CSV (`.csv`)
//!
//! Header names follow the published vegetable dataset:
//!
//! ```text
//! Name,Category,Season,Origin,Availability,Shelf Life (days),Storage Requirements,Growing Conditions,Health Benefits
//! Carrot,Root,Spring,Afghanistan,Year-round,21,Cool and humid,Loose sandy soil,"Vitamin A, fibre"
//! ```
//!
//! # TOML (`.toml`)
//!
//! ```toml
//! [[plant]]
//! name            = "Carrot"
//! category        = "Root"
//! season          = "Spring"
//! shelf_life_days = 21
//! health_benefits = "Vitamin A, fibre"
//! ```
//!
//! # JSON (`.json`)
//!
//! An array of objects with the same snake_case keys as TOML.
//!
//! Only `Name`, `Category` and `Season` are required. Shelf life that is
//! blank, unparseable, negative or NaN becomes 0. A row with a blank
//! required field fails the whole load, reporting its 1-based data row.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use cropplan_core::{
    application::ApplicationError,
    domain::{DomainValidator as validator, PlantRecord, parse_shelf_life},
    error::CropPlanResult,
};

// ── Formats ───────────────────────────────────────────────────────────────────

/// On-disk dataset format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Toml,
    Json,
}

impl DatasetFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ── Raw row types ─────────────────────────────────────────────────────────────

/// One CSV row as it appears on disk. Every cell is text; shelf life is
/// coerced afterwards so a bad number never aborts the load.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Season", default)]
    season: String,
    #[serde(rename = "Origin", default)]
    origin: String,
    #[serde(rename = "Availability", default)]
    availability: String,
    #[serde(rename = "Shelf Life (days)", default)]
    shelf_life: String,
    #[serde(rename = "Storage Requirements", default)]
    storage_requirements: String,
    #[serde(rename = "Growing Conditions", default)]
    growing_conditions: String,
    #[serde(rename = "Health Benefits", default)]
    health_benefits: String,
}

impl From<CsvRow> for PlantRecord {
    fn from(row: CsvRow) -> Self {
        let mut record = PlantRecord::new(row.name, row.category, row.season);
        record.origin = row.origin;
        record.availability = row.availability;
        record.shelf_life_days = parse_shelf_life(&row.shelf_life);
        record.storage_requirements = row.storage_requirements;
        record.growing_conditions = row.growing_conditions;
        record.health_benefits = row.health_benefits;
        record
    }
}

/// A structured (TOML/JSON) row. Shelf life may be a number or a string.
#[derive(Debug, Deserialize)]
struct StructuredRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    season: String,
    #[serde(default)]
    origin: String,
    #[serde(default)]
    availability: String,
    #[serde(default)]
    shelf_life_days: Option<ShelfLife>,
    #[serde(default)]
    storage_requirements: String,
    #[serde(default)]
    growing_conditions: String,
    #[serde(default)]
    health_benefits: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShelfLife {
    Days(f64),
    Text(String),
}

impl From<StructuredRow> for PlantRecord {
    fn from(row: StructuredRow) -> Self {
        let shelf_life = match row.shelf_life_days {
            Some(ShelfLife::Days(days)) => days,
            Some(ShelfLife::Text(text)) => parse_shelf_life(&text),
            None => 0.0,
        };
        let mut record =
            PlantRecord::new(row.name, row.category, row.season).with_shelf_life(shelf_life);
        record.origin = row.origin;
        record.availability = row.availability;
        record.storage_requirements = row.storage_requirements;
        record.growing_conditions = row.growing_conditions;
        record.health_benefits = row.health_benefits;
        record
    }
}

#[derive(Debug, Deserialize)]
struct TomlDataset {
    #[serde(default)]
    plant: Vec<StructuredRow>,
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse CSV from any reader.
pub fn parse_csv<R: Read>(reader: R) -> CropPlanResult<Vec<PlantRecord>> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(|e| ApplicationError::DatasetInvalid {
            row: index + 1,
            reason: e.to_string(),
        })?;
        records.push(row.into());
    }

    validated(records)
}

/// Parse a TOML dataset of `[[plant]]` tables.
pub fn parse_toml(raw: &str) -> CropPlanResult<Vec<PlantRecord>> {
    let dataset: TomlDataset =
        toml::from_str(raw).map_err(|e| ApplicationError::DatasetInvalid {
            row: 0,
            reason: e.to_string(),
        })?;
    validated(dataset.plant.into_iter().map(Into::into).collect())
}

/// Parse a JSON array of plant objects.
pub fn parse_json(raw: &str) -> CropPlanResult<Vec<PlantRecord>> {
    let rows: Vec<StructuredRow> =
        serde_json::from_str(raw).map_err(|e| ApplicationError::DatasetInvalid {
            row: 0,
            reason: e.to_string(),
        })?;
    validated(rows.into_iter().map(Into::into).collect())
}

fn validated(records: Vec<PlantRecord>) -> CropPlanResult<Vec<PlantRecord>> {
    validator::validate_dataset(&records).map_err(|(index, err)| {
        ApplicationError::DatasetInvalid {
            row: index + 1,
            reason: err.to_string(),
        }
    })?;
    Ok(records)
}

// ── File loader ───────────────────────────────────────────────────────────────

/// Loads a dataset file from disk.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file. The format comes from the extension;
    /// files without a known extension are read as CSV.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> CropPlanResult<Vec<PlantRecord>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::DatasetUnavailable {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        let format = DatasetFormat::from_path(&self.path).unwrap_or(DatasetFormat::Csv);
        debug!(?format, bytes = raw.len(), "parsing dataset");

        let records = match format {
            DatasetFormat::Csv => parse_csv(raw.as_bytes()),
            DatasetFormat::Toml => parse_toml(&raw),
            DatasetFormat::Json => parse_json(&raw),
        }?;

        debug!(records = records.len(), "dataset parsed");
        Ok(records)
    }
}
