// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the garden planner.
//!
//! Pure planning logic with no I/O. Loading datasets, configuration and
//! rendering live behind the ports in the application layer.
//!
//! - **Synchronous**: no async, no suspension points
//! - **No I/O**: datasets arrive as an in-memory snapshot
//! - **Immutable results**: a `GardenPlan` never changes once returned
//!
// Public API
pub mod entities;
pub mod error;
pub mod heuristics;
pub mod planning;
pub mod value_objects;

mod validation;

pub use entities::{
    CategorySelection, DEFAULT_MAX_CATEGORIES, EstimatedPlant, GardenPlan, GardenStats,
    MAX_TOTAL_AREA_M2, PlanRequest, PlanRequestBuilder, PlantRecord,
};

pub use error::{DomainError, ErrorCategory};

pub use planning::{EmptyReason, plan_garden};

pub use value_objects::{Category, Season, canonical_case, parse_shelf_life};

pub use validation::DomainValidator;
