//! Driven (output) ports - implemented by infrastructure.

use crate::domain::PlantRecord;
use crate::error::CropPlanResult;

/// Port for the plant dataset.
///
/// Implemented by:
/// - `cropplan_adapters::catalog::InMemoryCatalog` (loaded CSV/TOML or the
///   built-in dataset)
///
/// Record order is significant: category tie-breaks during planning follow
/// it, so implementations must return records in dataset order.
#[cfg_attr(test, mockall::automock)]
pub trait PlantCatalog: Send + Sync {
    /// An owned, immutable copy of every record, in dataset order.
    fn snapshot(&self) -> CropPlanResult<Vec<PlantRecord>>;

    /// Number of records.
    fn len(&self) -> CropPlanResult<usize> {
        self.snapshot().map(|records| records.len())
    }

    fn is_empty(&self) -> CropPlanResult<bool> {
        self.len().map(|len| len == 0)
    }
}
