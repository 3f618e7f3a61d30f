//! In-memory plant catalog.

use std::{
    path::Path,
    sync::{Arc, RwLock},
};

use cropplan_core::{
    application::{ApplicationError, ports::PlantCatalog},
    domain::{DomainValidator as validator, PlantRecord},
    error::{CropPlanError, CropPlanResult},
};

use crate::builtin_dataset::{self, DatasetSource};

/// Thread-safe, insertion-ordered plant catalog.
///
/// Cloning shares the underlying records. `snapshot` hands out an owned
/// copy, so a planning call never sees a concurrent `insert` or `replace`.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Vec<PlantRecord>>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-validated records.
    pub fn from_records(records: Vec<PlantRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(records)),
        }
    }

    /// Catalog over the embedded dataset.
    pub fn with_builtin() -> CropPlanResult<Self> {
        builtin_dataset::embedded().map(Self::from_records)
    }

    /// Catalog over whichever dataset the discovery order resolves to.
    pub fn discover(explicit: Option<&Path>) -> CropPlanResult<(Self, DatasetSource)> {
        let (source, records) = builtin_dataset::load(explicit)?;
        Ok((Self::from_records(records), source))
    }

    /// Append one record after validating it.
    pub fn insert(&self, record: PlantRecord) -> CropPlanResult<()> {
        validator::validate_record(&record).map_err(CropPlanError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.push(record);
        Ok(())
    }

    /// Replace every record at once.
    pub fn replace(&self, records: Vec<PlantRecord>) -> CropPlanResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = records;
        Ok(())
    }

    pub fn clear(&self) -> CropPlanResult<()> {
        self.replace(Vec::new())
    }
}

impl PlantCatalog for InMemoryCatalog {
    fn snapshot(&self) -> CropPlanResult<Vec<PlantRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn len(&self) -> CropPlanResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.len())
    }
}
