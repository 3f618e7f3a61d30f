//! Application layer for the planner.
//!
//! - **Services**: use case orchestration (`PlannerService`, `PlantInfoService`)
//! - **Ports**: the `PlantCatalog` trait adapters implement
//! - **Errors**: dataset and lookup failures
//!
//! Planning rules live in `crate::domain`; this layer only fetches data and
//! hands it over.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{PlannerService, PlantInfoService};

pub use ports::PlantCatalog;

pub use error::ApplicationError;
