//! Category heuristics table.
//!
//! Rough agronomic estimates per plant category: how much ground one plant
//! needs, how long it takes to mature, and what it yields. These numbers
//! are domain knowledge, not computed, and candidate ranking depends on the
//! exact values, so edit them with care.
//!
//! The three tables are independent. In particular the yield table has a
//! `Leaf` row but no `Leafy` row, so `Leafy` plants get the default yield.
//! Both happen to be 0.2 kg.
//!
//! Lookups are by canonical category (see
//! [`canonical_case`](crate::domain::value_objects::canonical_case)); unknown
//! categories fall back to [`DEFAULT_AREA_M2`], [`DEFAULT_GROWTH_DAYS`] and
//! [`DEFAULT_YIELD_KG`].

use crate::domain::value_objects::Category;

/// Area (m²) assumed for a category missing from [`AREA_PER_PLANT`].
pub const DEFAULT_AREA_M2: f64 = 0.3;
/// Growth time (days) assumed for a category missing from [`GROWTH_DAYS`].
pub const DEFAULT_GROWTH_DAYS: f64 = 60.0;
/// Yield (kg) assumed for a category missing from [`YIELD_PER_PLANT`].
pub const DEFAULT_YIELD_KG: f64 = 0.2;

/// Estimated area required per plant, in m².
pub static AREA_PER_PLANT: &[(&str, f64)] = &[
    ("Root", 0.25),      // carrots, turnips: dense spacing, roots grow down
    ("Leafy", 0.20),     // lettuce, spinach
    ("Fruit", 0.50),     // tomatoes, zucchini, peppers: need support
    ("Flower", 0.40),    // cauliflower, broccoli
    ("Tuber", 0.45),     // potatoes: wide spacing
    ("Legume", 0.35),    // beans, peas: trellises
    ("Bulb", 0.20),      // onions, garlic
    ("Grain", 0.30),     // corn, barley: row spacing
    ("Stem", 0.50),      // celery, leek: tall, need airflow
    ("Herb", 0.15),      // basil, parsley: very dense
    ("Cactus", 0.80),    // slow-growing, large
    ("Succulent", 0.70), // spaced like cactus
    ("Fern", 0.60),      // lateral spread
];

/// Estimated growth time per plant, in days.
pub static GROWTH_DAYS: &[(&str, f64)] = &[
    ("Root", 90.0),
    ("Leafy", 45.0),
    ("Fruit", 80.0),
    ("Flower", 70.0),
    ("Tuber", 100.0),
    ("Legume", 75.0),
    ("Bulb", 110.0),
    ("Grain", 120.0),
    ("Stem", 60.0),
    ("Herb", 40.0),
    ("Cactus", 150.0),
    ("Succulent", 180.0),
    ("Fern", 90.0),
];

/// Estimated average yield per plant, in kg.
pub static YIELD_PER_PLANT: &[(&str, f64)] = &[
    ("Root", 0.4),
    ("Leaf", 0.2),
    ("Fruit", 2.0),
    ("Flower", 0.6),
    ("Tuber", 1.5),
    ("Legume", 0.7),
    ("Bulb", 0.3),
    ("Grain", 0.8),
    ("Stem", 0.5),
    ("Herb", 0.1),
    ("Cactus", 0.3),
    ("Succulent", 0.2),
    ("Fern", 0.15),
];

/// The three base estimates for one category, before shelf-life adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryHeuristics {
    pub area_m2: f64,
    pub growth_days: f64,
    pub yield_kg: f64,
}

impl CategoryHeuristics {
    /// Look up all three base values for a category.
    pub fn for_category(category: &Category) -> Self {
        Self {
            area_m2: area_per_plant(category),
            growth_days: base_growth_days(category),
            yield_kg: base_yield(category),
        }
    }
}

pub fn area_per_plant(category: &Category) -> f64 {
    lookup(AREA_PER_PLANT, category).unwrap_or(DEFAULT_AREA_M2)
}

pub fn base_growth_days(category: &Category) -> f64 {
    lookup(GROWTH_DAYS, category).unwrap_or(DEFAULT_GROWTH_DAYS)
}

pub fn base_yield(category: &Category) -> f64 {
    lookup(YIELD_PER_PLANT, category).unwrap_or(DEFAULT_YIELD_KG)
}

/// Whether the category has a row in any of the three tables.
pub fn is_known(category: &Category) -> bool {
    [AREA_PER_PLANT, GROWTH_DAYS, YIELD_PER_PLANT]
        .iter()
        .any(|table| lookup(table, category).is_some())
}

fn lookup(table: &[(&str, f64)], category: &Category) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == category.as_str())
        .map(|(_, value)| *value)
}
