//! Implementation of the `cropplan plan` command.
//!
//! Responsibility: merge CLI arguments over configuration into a
//! `PlanRequest`, call the planner service, and display the plan.

use tracing::{debug, instrument};

use cropplan_core::{
    application::PlannerService,
    domain::{GardenPlan, PlanRequest},
    error::CropPlanError,
};

use crate::{
    cli::{GlobalArgs, PlanArgs, PlanFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const RULE: &str = "-----------------------------------------";

/// Execute `cropplan plan`.
#[instrument(skip_all)]
pub fn execute(
    args: PlanArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args, &config)?;
    debug!(%request, "Plan request resolved");

    let catalog = super::open_catalog(&global, &config)?;
    let service = PlannerService::new(Box::new(catalog));
    let plan = service.plan_garden(&request)?;

    let format = args.format.unwrap_or(if output.wants_json() {
        PlanFormat::Json
    } else {
        PlanFormat::Table
    });

    match format {
        PlanFormat::Json => output.json(&plan),
        PlanFormat::Table => render_summary(&plan, &output),
    }
}

/// Flags win over config values.
fn build_request(args: &PlanArgs, config: &AppConfig) -> CliResult<PlanRequest> {
    let planner = &config.planner;
    let season = args.season.as_deref().unwrap_or(&planner.season);

    PlanRequest::builder()
        .total_area(args.area.unwrap_or(planner.area))
        .season_str(season)
        .and_then(|builder| {
            builder
                .people(args.people.unwrap_or(planner.people))
                .max_categories(args.max_categories.unwrap_or(planner.max_categories) as usize)
                .exclude_all(&args.exclude)
                .build()
        })
        .map_err(|e| CliError::Core(CropPlanError::Domain(e)))
}

fn render_summary(plan: &GardenPlan, output: &OutputManager) -> CliResult<()> {
    let request = plan.request();

    output.data("")?;
    output.data(&output.accent("=== GARDEN SUMMARY ==="))?;
    output.data(&format!("Season: {}", request.season()))?;
    output.data(&format!("Total area (m²): {}", request.total_area_m2()))?;
    output.data(&format!("People: {}", request.people()))?;
    output.data(&format!("Max categories: {}", request.max_categories()))?;

    let excluded: Vec<&str> = request.excluded().collect();
    if !excluded.is_empty() {
        output.data(&format!("Excluded plants: {}", excluded.join(", ")))?;
    }

    if let Some(reason) = plan.empty_reason() {
        output.data("")?;
        output.data("No plants found for this configuration.")?;
        output.data(&output.muted(&format!("({reason})")))?;
        return Ok(());
    }

    output.data("")?;
    output.data("Plants chosen:")?;
    output.data(RULE)?;
    for selection in plan.selections() {
        let plant = &selection.plant;
        output.data(&format!(
            "{} ({}) - units={}, area={}, yield={}, days={}",
            plant.name,
            plant.category,
            selection.units,
            plant.area_m2,
            plant.yield_kg,
            plant.growth_days
        ))?;
        output.data(&output.muted(&format!("  Health: {}", selection.health_benefits())))?;
    }
    output.data(RULE)?;

    let stats = plan.stats();
    output.data("")?;
    output.data("Stats:")?;
    output.data(&format!("Plant types: {}", stats.plant_types))?;
    output.data(&format!("Total plants: {}", stats.total_plants))?;
    output.data(&format!("Used area (m²): {:.2}", stats.used_area_m2))?;
    output.data(&format!("Total yield (kg): {:.2}", stats.total_yield_kg))?;
    output.data(&format!("Yield per person (kg): {:.2}", stats.yield_per_person_kg))?;
    output.data(&format!(
        "Average growth time (days): {:.1}",
        stats.average_growth_days
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropplan_core::domain::Season;

    fn args() -> PlanArgs {
        PlanArgs {
            area: None,
            season: None,
            people: None,
            max_categories: None,
            exclude: Vec::new(),
            format: None,
        }
    }

    #[test]
    fn config_supplies_defaults() {
        let request = build_request(&args(), &AppConfig::default()).unwrap();
        assert_eq!(request.season(), Season::Spring);
        assert_eq!(request.total_area_m2(), 20.0);
        assert_eq!(request.people(), 2);
        assert_eq!(request.max_categories(), 5);
    }

    #[test]
    fn flags_override_config() {
        let args = PlanArgs {
            area: Some(3.5),
            season: Some("fall".into()),
            people: Some(6),
            max_categories: Some(2),
            exclude: vec!["  Pumpkin ".into()],
            format: None,
        };
        let request = build_request(&args, &AppConfig::default()).unwrap();
        assert_eq!(request.season(), Season::Autumn);
        assert_eq!(request.total_area_m2(), 3.5);
        assert_eq!(request.people(), 6);
        assert_eq!(request.max_categories(), 2);
        assert!(request.is_excluded("PUMPKIN"));
    }

    #[test]
    fn unknown_season_is_a_user_error() {
        let args = PlanArgs {
            season: Some("monsoon".into()),
            ..args()
        };
        let err = build_request(&args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn negative_area_is_a_user_error() {
        let args = PlanArgs {
            area: Some(-1.0),
            ..args()
        };
        let err = build_request(&args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn zero_max_categories_from_config_is_rejected() {
        let mut config = AppConfig::default();
        config.planner.max_categories = 0;
        assert!(build_request(&args(), &config).is_err());
    }
}
