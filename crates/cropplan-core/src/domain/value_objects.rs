//! Domain value objects: Season, Category, ShelfLife.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Dataset text is messy ("summer", "SUMMER", " Summer "), so every
//! comparison in the planner goes through [`canonical_case`] first: trim,
//! upper-case the first character, lower-case the rest.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalise free text to the single capitalisation used for comparisons.
///
/// `"  leafy "` → `"Leafy"`, `"SUMMER"` → `"Summer"`, `""` → `""`.
pub fn canonical_case(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// ── Season ───────────────────────────────────────────────────────────────────

/// A growing season accepted by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Canonical spelling, as it appears (after [`canonical_case`]) in datasets.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    /// Whether a raw dataset season string names this season.
    pub fn matches(&self, raw: &str) -> bool {
        canonical_case(raw) == self.as_str()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "autumn" | "fall" => Ok(Self::Autumn),
            "winter" => Ok(Self::Winter),
            other => Err(DomainError::UnknownSeason(other.to_string())),
        }
    }
}

// ── Category ─────────────────────────────────────────────────────────────────

/// A plant category in canonical case.
///
/// Categories are open-ended: the dataset may carry categories the
/// heuristics table has never heard of, which then fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(raw: &str) -> Self {
        Self(canonical_case(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

// ── Shelf life ───────────────────────────────────────────────────────────────

/// Coerce a raw shelf-life cell to days.
///
/// Anything that is not a finite, non-negative number (blank, "n/a",
/// "-3", "NaN") becomes `0.0`. Never fails.
pub fn parse_shelf_life(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map(sanitize_shelf_life)
        .unwrap_or(0.0)
}

/// Clamp an already-numeric shelf life to the valid domain.
pub fn sanitize_shelf_life(days: f64) -> f64 {
    if days.is_finite() && days >= 0.0 {
        days
    } else {
        0.0
    }
}
