//! Implementation of the `cropplan list` command.

use serde::Serialize;
use tracing::{debug, instrument};

use cropplan_core::{
    application::{PlantInfoService, ports::PlantCatalog},
    domain::{Category, PlantRecord, Season, canonical_case},
    error::CropPlanError,
};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One listed plant.
#[derive(Debug, Serialize)]
struct PlantRow {
    name: String,
    category: String,
    season: String,
}

#[instrument(skip_all)]
pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let season = args
        .season
        .as_deref()
        .map(str::parse::<Season>)
        .transpose()
        .map_err(|e| CliError::Core(CropPlanError::Domain(e)))?;
    let category = args.category.as_deref().map(Category::new);

    let catalog = super::open_catalog(&global, &config)?;
    let records = catalog.snapshot()?;
    let rows = select_rows(&records, season, category.as_ref());
    debug!(total = records.len(), shown = rows.len(), "Plants filtered");

    let format = if output.wants_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if rows.is_empty() {
                output.warning("No plants match these filters")?;
                return Ok(());
            }
            output.header(&format!("Plants ({}):", rows.len()))?;
            let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
            for row in &rows {
                output.data(&format!(
                    "  {:<width$}  {:<10}  {}",
                    row.name, row.category, row.season
                ))?;
            }
            if category.is_none() {
                let categories = PlantInfoService::new(Box::new(catalog)).categories()?;
                let names: Vec<&str> = categories.iter().map(Category::as_str).collect();
                output.print("")?;
                output.print(&output.muted(&format!("Categories: {}", names.join(", "))))?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.data(&row.name)?;
            }
        }
        ListFormat::Json => output.json(&rows)?,
        ListFormat::Csv => {
            output.data("name,category,season")?;
            for row in &rows {
                output.data(&format!(
                    "{},{},{}",
                    csv_field(&row.name),
                    csv_field(&row.category),
                    csv_field(&row.season)
                ))?;
            }
        }
    }

    Ok(())
}

/// Rows sorted by name, filtered by season and category.
fn select_rows(
    records: &[PlantRecord],
    season: Option<Season>,
    category: Option<&Category>,
) -> Vec<PlantRow> {
    let mut rows: Vec<PlantRow> = records
        .iter()
        .filter(|r| season.is_none_or(|s| s.matches(&r.season)))
        .filter(|r| category.is_none_or(|c| Category::new(&r.category) == *c))
        .map(|r| PlantRow {
            name: r.name.trim().to_string(),
            category: canonical_case(&r.category),
            season: canonical_case(&r.season),
        })
        .collect();
    rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    rows
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PlantRecord> {
        vec![
            PlantRecord::new("Tomato", "Fruit", "Summer"),
            PlantRecord::new("carrot", "root", "spring"),
            PlantRecord::new("Basil", "Herb", "Summer"),
            PlantRecord::new("Beet", "Root", "Autumn"),
        ]
    }

    fn names(rows: &[PlantRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn rows_are_sorted_by_name() {
        let rows = select_rows(&records(), None, None);
        assert_eq!(names(&rows), ["Basil", "Beet", "carrot", "Tomato"]);
    }

    #[test]
    fn season_filter() {
        let rows = select_rows(&records(), Some(Season::Summer), None);
        assert_eq!(names(&rows), ["Basil", "Tomato"]);
    }

    #[test]
    fn category_filter_ignores_case() {
        let root = Category::new("ROOT");
        let rows = select_rows(&records(), None, Some(&root));
        assert_eq!(names(&rows), ["Beet", "carrot"]);
        assert_eq!(rows[1].category, "Root");
        assert_eq!(rows[1].season, "Spring");
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("Kale"), "Kale");
        assert_eq!(csv_field("Pak choi, baby"), "\"Pak choi, baby\"");
    }
}
