pub mod plan;
pub mod plant;
pub mod request;

pub use plan::{CategorySelection, GardenPlan, GardenStats};
pub use plant::{EstimatedPlant, PlantRecord};
pub use request::{DEFAULT_MAX_CATEGORIES, MAX_TOTAL_AREA_M2, PlanRequest, PlanRequestBuilder};
