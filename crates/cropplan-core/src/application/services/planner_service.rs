//! Planner Service - the "plan my garden" use case.
//!
//! 1. Validate the request
//! 2. Take an immutable snapshot of the catalog
//! 3. Run the pure planning pipeline over it

use tracing::{debug, info, instrument};

use crate::{
    application::ports::PlantCatalog,
    domain::{DomainValidator as validator, GardenPlan, PlanRequest, plan_garden},
    error::{CropPlanError, CropPlanResult},
};

/// Main planning service.
pub struct PlannerService {
    catalog: Box<dyn PlantCatalog>,
}

impl PlannerService {
    pub fn new(catalog: Box<dyn PlantCatalog>) -> Self {
        Self { catalog }
    }

    /// Plan a garden for `request`.
    ///
    /// An impossible request (nothing in season, nothing fits) is an empty
    /// plan, not an error. Errors only come from the catalog.
    #[instrument(
        skip_all,
        fields(
            season = %request.season(),
            area = request.total_area_m2(),
            people = request.people(),
            max_categories = request.max_categories()
        )
    )]
    pub fn plan_garden(&self, request: &PlanRequest) -> CropPlanResult<GardenPlan> {
        validator::validate_request(request).map_err(CropPlanError::Domain)?;

        let records = self.catalog.snapshot()?;
        debug!(records = records.len(), "Catalog snapshot taken");

        let in_season = records
            .iter()
            .filter(|record| request.season().matches(&record.season))
            .count();
        debug!(in_season, "Records matching season");

        let plan = plan_garden(&records, request);

        match plan.empty_reason() {
            Some(reason) => info!(%reason, "Planned an empty garden"),
            None => info!(
                categories = plan.stats().plant_types,
                units = plan.stats().total_plants,
                used_area = plan.stats().used_area_m2,
                "Garden planned"
            ),
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{ApplicationError, ports::output::MockPlantCatalog},
        domain::{EmptyReason, PlantRecord, Season},
    };

    fn catalog_with(records: Vec<PlantRecord>) -> Box<MockPlantCatalog> {
        let mut catalog = MockPlantCatalog::new();
        catalog
            .expect_snapshot()
            .returning(move || Ok(records.clone()));
        Box::new(catalog)
    }

    fn request(season: Season, area: f64) -> PlanRequest {
        PlanRequest::builder()
            .total_area(area)
            .season(season)
            .people(2)
            .build()
            .unwrap()
    }

    #[test]
    fn plans_over_catalog_snapshot() {
        let service = PlannerService::new(catalog_with(vec![
            PlantRecord::new("Basil", "Herb", "Summer").with_shelf_life(20.0),
        ]));

        let plan = service.plan_garden(&request(Season::Summer, 1.0)).unwrap();
        assert_eq!(plan.selections()[0].units, 6);
        assert_eq!(plan.stats().yield_per_person_kg, 0.3);
    }

    #[test]
    fn empty_catalog_gives_empty_plan() {
        let service = PlannerService::new(catalog_with(Vec::new()));

        let plan = service.plan_garden(&request(Season::Spring, 20.0)).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.empty_reason(), Some(EmptyReason::NoSeasonMatch));
    }

    #[test]
    fn catalog_errors_propagate() {
        let mut catalog = MockPlantCatalog::new();
        catalog
            .expect_snapshot()
            .times(1)
            .returning(|| Err(ApplicationError::StoreLockError.into()));
        let service = PlannerService::new(Box::new(catalog));

        let err = service
            .plan_garden(&request(Season::Spring, 20.0))
            .unwrap_err();
        assert!(err.is_retryable());
    }
}
