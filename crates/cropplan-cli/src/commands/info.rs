//! `cropplan info` — the plant explorer.

use tracing::instrument;

use cropplan_core::{
    application::PlantInfoService,
    domain::{EstimatedPlant, PlantRecord},
};

use crate::{
    cli::{GlobalArgs, InfoArgs, PlanFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `cropplan info NAME`.
#[instrument(skip_all)]
pub fn execute(
    args: InfoArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = args.joined_name();
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "plant name must not be blank".into(),
            source: None,
        });
    }

    let catalog = super::open_catalog(&global, &config)?;
    let record = PlantInfoService::new(Box::new(catalog)).get_info(&name)?;

    if args.format == PlanFormat::Json || output.wants_json() {
        return output.json(&record);
    }

    output.data(&output.accent(&format!("Information about {}", record.name)))?;
    for (label, value) in fields(&record) {
        output.data(&format!("{label:<22}{value}"))?;
    }
    output.data("")?;
    output.data(&output.muted(&EstimatedPlant::from_record(&record).description()))?;

    Ok(())
}

/// Label/value pairs in dataset column order.
fn fields(record: &PlantRecord) -> [(&'static str, String); 8] {
    [
        ("Category:", record.category.clone()),
        ("Season:", record.season.clone()),
        ("Origin:", record.origin.clone()),
        ("Availability:", record.availability.clone()),
        ("Shelf life:", format!("{} days", record.shelf_life_days)),
        ("Storage:", record.storage_requirements.clone()),
        ("Growing conditions:", record.growing_conditions.clone()),
        ("Health benefits:", record.health_benefits.clone()),
    ]
}
