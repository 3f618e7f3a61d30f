//! Per-plant estimates from category heuristics and shelf life.
//!
//! Shelf life is used as a proxy for how slowly a plant grows:
//!
//! | shelf life   | growth days        |
//! |--------------|--------------------|
//! | > 30 days    | base × 1.1 (slow)  |
//! | < 10 days    | base × 0.9 (fast)  |
//! | otherwise    | base               |
//!
//! Yield then scales with the *adjusted* growth time:
//!
//! | growth days  | yield              |
//! |--------------|--------------------|
//! | > 70         | base × 1.1         |
//! | < 30         | base × 0.9         |
//! | otherwise    | base               |

use crate::domain::{heuristics::CategoryHeuristics, value_objects::Category};

use super::round_to;

const SLOW_SHELF_LIFE_DAYS: f64 = 30.0;
const FAST_SHELF_LIFE_DAYS: f64 = 10.0;
const LONG_GROWTH_DAYS: f64 = 70.0;
const SHORT_GROWTH_DAYS: f64 = 30.0;

/// The three heuristic estimates for one plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub area_m2: f64,
    pub growth_days: f64,
    pub yield_kg: f64,
}

/// Estimate area, growth time and yield for a plant.
///
/// Pure: the same `(category, shelf_life_days)` always gives the same
/// estimate.
pub fn estimate(category: &Category, shelf_life_days: f64) -> Estimate {
    let base = CategoryHeuristics::for_category(category);
    let growth_days = adjusted_growth_days(base.growth_days, shelf_life_days);
    let yield_kg = adjusted_yield(base.yield_kg, growth_days);

    Estimate {
        area_m2: base.area_m2,
        growth_days,
        yield_kg,
    }
}

/// Growth time after the shelf-life adjustment, rounded to 2 decimals.
pub fn adjusted_growth_days(base_days: f64, shelf_life_days: f64) -> f64 {
    let days = if shelf_life_days > SLOW_SHELF_LIFE_DAYS {
        base_days * 1.1
    } else if shelf_life_days < FAST_SHELF_LIFE_DAYS {
        base_days * 0.9
    } else {
        base_days
    };
    round_to(days, 2)
}

/// Yield after the growth-time adjustment, rounded to 2 decimals.
///
/// `growth_days` must already be adjusted for shelf life.
pub fn adjusted_yield(base_yield: f64, growth_days: f64) -> f64 {
    let yield_kg = if growth_days > LONG_GROWTH_DAYS {
        base_yield * 1.1
    } else if growth_days < SHORT_GROWTH_DAYS {
        base_yield * 0.9
    } else {
        base_yield
    };
    round_to(yield_kg, 2)
}
