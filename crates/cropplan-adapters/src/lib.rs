//! Infrastructure adapters for cropplan.
//!
//! Implements the `PlantCatalog` port from `cropplan-core` and owns all
//! dataset I/O: CSV, TOML and JSON parsing and built-in dataset discovery.

pub mod builtin_dataset;
pub mod catalog;
pub mod dataset_loader;

pub use builtin_dataset::DatasetSource;
pub use catalog::InMemoryCatalog;
pub use dataset_loader::{DatasetFormat, DatasetLoader};
