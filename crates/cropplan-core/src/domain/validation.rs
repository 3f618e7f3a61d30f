use crate::domain::{
    entities::{PlanRequest, PlantRecord},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Entities own their rules; this is the single entry point adapters call
/// before handing data to the planner.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &PlanRequest) -> Result<(), DomainError> {
        request.validate()
    }

    pub fn validate_record(record: &PlantRecord) -> Result<(), DomainError> {
        record.validate()
    }

    /// Validate every record, reporting the first failure with its
    /// zero-based position in the dataset.
    pub fn validate_dataset(records: &[PlantRecord]) -> Result<(), (usize, DomainError)> {
        records
            .iter()
            .enumerate()
            .try_for_each(|(index, record)| record.validate().map_err(|err| (index, err)))
    }
}
