//! cropplan core: garden planning over a plant dataset.
//!
//! Domain and application layers of the `cropplan` tool, laid out as
//! ports and adapters.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          cropplan-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (PlannerService, PlantInfoService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (PlantCatalog)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    cropplan-adapters (Infrastructure)   │
//! │  (InMemoryCatalog, CSV/TOML loaders)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (heuristics, estimator, allocator, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cropplan_core::domain::{PlanRequest, PlantRecord, Season, plan_garden};
//!
//! let records = vec![
//!     PlantRecord::new("Basil", "Herb", "Summer").with_shelf_life(20.0),
//! ];
//! let request = PlanRequest::builder()
//!     .total_area(1.0)
//!     .season(Season::Summer)
//!     .people(2)
//!     .build()
//!     .unwrap();
//!
//! let plan = plan_garden(&records, &request);
//! assert_eq!(plan.selections()[0].units, 6);
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub mod prelude {
    pub use crate::application::{PlannerService, PlantCatalog, PlantInfoService};
    pub use crate::domain::{
        Category, CategorySelection, EmptyReason, GardenPlan, GardenStats, PlanRequest,
        PlantRecord, Season, plan_garden,
    };
    pub use crate::error::{CropPlanError, CropPlanResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
