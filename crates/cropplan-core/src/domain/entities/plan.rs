//! The garden plan returned by a planning call.

use serde::Serialize;

use crate::domain::{
    entities::{plant::EstimatedPlant, request::PlanRequest},
    planning::EmptyReason,
};

/// One chosen category: its representative plant and how many to sow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySelection {
    #[serde(flatten)]
    pub plant: EstimatedPlant,
    pub units: u32,
}

impl CategorySelection {
    pub fn new(plant: EstimatedPlant, units: u32) -> Self {
        Self { plant, units }
    }

    /// Health benefits for display, `"N/A"` when the dataset left it blank.
    pub fn health_benefits(&self) -> &str {
        if self.plant.health_benefits.is_empty() {
            "N/A"
        } else {
            &self.plant.health_benefits
        }
    }
}

/// Aggregate metrics over a plan.
///
/// The all-zero value ([`GardenStats::default`]) is the single "empty"
/// terminal state shared by every kind of impossible request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GardenStats {
    /// Number of entries in the plan.
    pub plant_types: usize,
    /// Sum of units across entries.
    pub total_plants: u64,
    /// m², rounded to 2 decimals.
    pub used_area_m2: f64,
    /// kg, rounded to 2 decimals.
    pub total_yield_kg: f64,
    /// kg, rounded to 2 decimals; 0 when planning for nobody.
    pub yield_per_person_kg: f64,
    /// Unweighted mean over entries, rounded to 1 decimal.
    pub average_growth_days: f64,
}

impl GardenStats {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// A finished garden plan. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenPlan {
    request: PlanRequest,
    selections: Vec<CategorySelection>,
    stats: GardenStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_reason: Option<EmptyReason>,
}

impl GardenPlan {
    pub(crate) fn new(
        request: PlanRequest,
        selections: Vec<CategorySelection>,
        stats: GardenStats,
    ) -> Self {
        debug_assert!(selections.iter().all(|s| s.units > 0));
        Self {
            request,
            selections,
            stats,
            empty_reason: None,
        }
    }

    /// The empty plan: no selections, all statistics zero.
    pub fn empty(request: PlanRequest, reason: EmptyReason) -> Self {
        Self {
            request,
            selections: Vec::new(),
            stats: GardenStats::default(),
            empty_reason: Some(reason),
        }
    }

    pub fn request(&self) -> &PlanRequest {
        &self.request
    }

    /// Entries in descending yield-per-plant order, all with `units > 0`.
    pub fn selections(&self) -> &[CategorySelection] {
        &self.selections
    }

    pub fn stats(&self) -> &GardenStats {
        &self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Why the plan came out empty. `None` for a plan with selections.
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        self.empty_reason
    }
}
