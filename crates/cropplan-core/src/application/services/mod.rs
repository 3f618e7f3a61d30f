//! Application services - orchestrate use cases.
//!
//! `PlannerService` plans a garden over the catalog's current snapshot;
//! `PlantInfoService` answers name lookups for the plant explorer.

pub mod planner_service;
pub mod plant_info_service;

pub use planner_service::PlannerService;
pub use plant_info_service::PlantInfoService;
