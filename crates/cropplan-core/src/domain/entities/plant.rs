//! Plant entities: the raw dataset row and its estimated counterpart.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    planning::estimator::{self, Estimate},
    value_objects::{Category, canonical_case, sanitize_shelf_life},
};

// ── PlantRecord ──────────────────────────────────────────────────────────────

/// One row of the plant dataset, as handed over by a data provider.
///
/// `name`, `category` and `season` are required; everything else is
/// descriptive and only passed through (the planner reads
/// `shelf_life_days` and echoes `health_benefits`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub name: String,
    pub category: String,
    pub season: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub shelf_life_days: f64,
    #[serde(default)]
    pub storage_requirements: String,
    #[serde(default)]
    pub growing_conditions: String,
    #[serde(default)]
    pub health_benefits: String,
}

impl PlantRecord {
    /// Create a record with the three required fields; descriptive fields
    /// start empty and shelf life at zero.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        season: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            season: season.into(),
            origin: String::new(),
            availability: String::new(),
            shelf_life_days: 0.0,
            storage_requirements: String::new(),
            growing_conditions: String::new(),
            health_benefits: String::new(),
        }
    }

    pub fn with_shelf_life(mut self, days: f64) -> Self {
        self.shelf_life_days = sanitize_shelf_life(days);
        self
    }

    pub fn with_health_benefits(mut self, benefits: impl Into<String>) -> Self {
        self.health_benefits = benefits.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Check the fields the planner cannot do without.
    ///
    /// Data providers call this at load time so malformed rows never reach
    /// the planner.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "Name" });
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "Category" });
        }
        if self.season.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "Season" });
        }
        Ok(())
    }

    /// Case-insensitive, whitespace-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

// ── EstimatedPlant ───────────────────────────────────────────────────────────

/// A [`PlantRecord`] enriched with heuristic area, growth time and yield.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatedPlant {
    pub name: String,
    pub category: Category,
    pub season: String,
    /// m² one plant occupies.
    pub area_m2: f64,
    /// Days to maturity, rounded to 2 decimals.
    pub growth_days: f64,
    /// kg harvested per plant, rounded to 2 decimals.
    pub yield_kg: f64,
    /// `yield_kg / area_m2`. Informational only; never used for ranking.
    pub density: f64,
    pub health_benefits: String,
}

impl EstimatedPlant {
    /// Run the estimator over a record.
    pub fn from_record(record: &PlantRecord) -> Self {
        let category = Category::new(&record.category);
        let Estimate {
            area_m2,
            growth_days,
            yield_kg,
        } = estimator::estimate(&category, record.shelf_life_days);

        let density = if area_m2 > 0.0 {
            yield_kg / area_m2
        } else {
            0.0
        };

        Self {
            name: record.name.trim().to_string(),
            category,
            season: canonical_case(&record.season),
            area_m2,
            growth_days,
            yield_kg,
            density,
            health_benefits: record.health_benefits.trim().to_string(),
        }
    }

    /// A plant can only be packed if it occupies space and produces food.
    pub fn is_viable(&self) -> bool {
        self.area_m2 > 0.0 && self.yield_kg > 0.0
    }

    /// One-line summary, e.g. "Carrot (Root) grows in Spring and takes 81 days."
    pub fn description(&self) -> String {
        format!(
            "{} ({}) grows in {} and takes {} days.",
            self.name, self.category, self.season, self.growth_days
        )
    }
}
