//! Plant Info Service - lookups for the plant explorer.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::PlantCatalog},
    domain::{Category, PlantRecord},
    error::CropPlanResult,
};

/// Read-only queries over the plant catalog.
pub struct PlantInfoService {
    catalog: Box<dyn PlantCatalog>,
}

impl PlantInfoService {
    pub fn new(catalog: Box<dyn PlantCatalog>) -> Self {
        Self { catalog }
    }

    /// Full record for a plant name. Matching is exact after trimming and
    /// ignores letter case; the first match in dataset order wins.
    #[instrument(skip(self))]
    pub fn get_info(&self, name: &str) -> CropPlanResult<PlantRecord> {
        let record = self
            .catalog
            .snapshot()?
            .into_iter()
            .find(|record| record.has_name(name));

        match record {
            Some(record) => {
                debug!(category = %record.category, "Plant found");
                Ok(record)
            }
            None => Err(ApplicationError::PlantNotFound {
                name: name.trim().to_string(),
            }
            .into()),
        }
    }

    /// Distinct canonical categories, in first-seen dataset order.
    pub fn categories(&self) -> CropPlanResult<Vec<Category>> {
        let mut seen = BTreeSet::new();
        let categories = self
            .catalog
            .snapshot()?
            .iter()
            .map(|record| Category::new(&record.category))
            .filter(|category| seen.insert(category.clone()))
            .collect();
        Ok(categories)
    }
}
