//! Data module - CSV loading, cleaning and per-period datasets

mod dataset;
mod loader;
mod processor;

pub use dataset::Dataset;
pub use loader::{DataLoader, LoaderError};
pub use processor::DataProcessor;

/// Observation date column
pub const DATE_COL: &str = "Date";
/// Pollutant species code column
pub const SPECIE_COL: &str = "Specie";
/// Daily median measurement column
pub const MEDIAN_COL: &str = "median";

/// Columns every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = [DATE_COL, SPECIE_COL, MEDIAN_COL];
