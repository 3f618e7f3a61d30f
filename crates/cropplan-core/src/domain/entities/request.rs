//! The `PlanRequest` value and its builder.
//!
//! A `PlanRequest` is the validated description of the garden the user
//! wants planned. Once one exists, planning cannot fail: every remaining
//! "impossible" situation (no plants in season, nothing fits) resolves to
//! the empty plan.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::Season};

/// Default number of distinct categories to plan for.
pub const DEFAULT_MAX_CATEGORIES: usize = 5;

/// Largest plot accepted, in m². Keeps per-category unit counts well
/// inside `u32` and the running area sum exact enough to terminate.
pub const MAX_TOTAL_AREA_M2: f64 = 1_000_000.0;

/// A fully-validated planning request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRequest {
    total_area_m2: f64,
    season: Season,
    people: u32,
    max_categories: usize,
    /// Excluded plant names, trimmed and lower-cased.
    excluded: BTreeSet<String>,
}

impl PlanRequest {
    /// Start building a new `PlanRequest`.
    pub fn builder() -> PlanRequestBuilder {
        PlanRequestBuilder::new()
    }

    pub const fn total_area_m2(&self) -> f64 {
        self.total_area_m2
    }
    pub const fn season(&self) -> Season {
        self.season
    }
    pub const fn people(&self) -> u32 {
        self.people
    }
    pub const fn max_categories(&self) -> usize {
        self.max_categories
    }
    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }

    /// Whether a plant name is on the exclusion list (any letter case).
    pub fn is_excluded(&self, name: &str) -> bool {
        !self.excluded.is_empty() && self.excluded.contains(&normalize_name(name))
    }

    /// Re-check invariants, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.total_area_m2.is_finite() || self.total_area_m2 < 0.0 {
            return Err(DomainError::InvalidRequest(format!(
                "total area must be a non-negative number of m², got {}",
                self.total_area_m2
            )));
        }
        if self.total_area_m2 > MAX_TOTAL_AREA_M2 {
            return Err(DomainError::InvalidRequest(format!(
                "total area must not exceed {MAX_TOTAL_AREA_M2} m², got {}",
                self.total_area_m2
            )));
        }
        if self.max_categories == 0 {
            return Err(DomainError::InvalidRequest(
                "max categories must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PlanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} m² in {} for {} people (max {} categories)",
            self.total_area_m2, self.season, self.people, self.max_categories
        )?;
        if !self.excluded.is_empty() {
            write!(f, ", excluding {}", self.excluded.len())?;
        }
        Ok(())
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`PlanRequest`].
///
/// `total_area` and `season` are required; `people` defaults to 1 and
/// `max_categories` to [`DEFAULT_MAX_CATEGORIES`].
#[derive(Debug, Default)]
pub struct PlanRequestBuilder {
    total_area_m2: Option<f64>,
    season: Option<Season>,
    people: Option<u32>,
    max_categories: Option<usize>,
    excluded: BTreeSet<String>,
}

impl PlanRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_area(mut self, m2: f64) -> Self {
        self.total_area_m2 = Some(m2);
        self
    }

    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Set the season from free text ("summer", "FALL").
    pub fn season_str(self, season: &str) -> Result<Self, DomainError> {
        Ok(self.season(season.parse()?))
    }

    pub fn people(mut self, people: u32) -> Self {
        self.people = Some(people);
        self
    }

    pub fn max_categories(mut self, max: usize) -> Self {
        self.max_categories = Some(max);
        self
    }

    /// Exclude one plant by name. Blank names are ignored.
    pub fn exclude(mut self, name: impl AsRef<str>) -> Self {
        let name = normalize_name(name.as_ref());
        if !name.is_empty() {
            self.excluded.insert(name);
        }
        self
    }

    pub fn exclude_all<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().fold(self, |builder, name| builder.exclude(name))
    }

    pub fn build(self) -> Result<PlanRequest, DomainError> {
        let request = PlanRequest {
            total_area_m2: self
                .total_area_m2
                .ok_or(DomainError::MissingRequiredField { field: "total_area" })?,
            season: self
                .season
                .ok_or(DomainError::MissingRequiredField { field: "season" })?,
            people: self.people.unwrap_or(1),
            max_categories: self.max_categories.unwrap_or(DEFAULT_MAX_CATEGORIES),
            excluded: self.excluded,
        };
        request.validate()?;
        Ok(request)
    }
}
