//! The garden planning pipeline.
//!
//! ```text
//! records ─► select_candidates ─► rank_categories ─► allocate ─► summarize ─► GardenPlan
//!              (estimator)
//! ```
//!
//! Every stage is a pure function over explicit values. The only shared
//! state is the read-only [`heuristics`](crate::domain::heuristics) table,
//! so concurrent calls with different inputs are independent.

pub mod allocation;
pub mod estimator;
pub mod selection;
pub mod stats;

use serde::Serialize;
use std::fmt;

use crate::domain::entities::{
    plan::GardenPlan, plant::PlantRecord, request::PlanRequest,
};

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Why a plan came out empty.
///
/// None of these are errors: each resolves to the same all-zero plan. The
/// reason is kept so the surrounding application can explain the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// No dataset record is grown in the requested season.
    NoSeasonMatch,
    /// Every in-season record was excluded or not viable.
    NoViableCandidates,
    /// Candidates existed but not a single unit fit the area.
    NothingFits,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NoSeasonMatch => "no plants grow in this season",
            Self::NoViableCandidates => "every in-season plant was excluded",
            Self::NothingFits => "no plant fits in the available area",
        };
        f.write_str(msg)
    }
}

/// Plan a garden from a dataset snapshot.
///
/// Deterministic: the same records and request always give the same plan.
pub fn plan_garden(records: &[PlantRecord], request: &PlanRequest) -> GardenPlan {
    let best = match selection::select_candidates(records, request.season(), |name| {
        request.is_excluded(name)
    }) {
        Ok(best) => best,
        Err(reason) => return GardenPlan::empty(request.clone(), reason),
    };

    let ranked = allocation::rank_categories(best, request.max_categories());
    let allocation = allocation::allocate(ranked, request.total_area_m2());
    let stats = stats::summarize(&allocation, request.people());

    let selections = allocation.into_placed();
    if selections.is_empty() {
        return GardenPlan::empty(request.clone(), EmptyReason::NothingFits);
    }

    GardenPlan::new(request.clone(), selections, stats)
}
