//! Data module - CSV loading, filtering and aggregation

mod loader;
mod processor;
pub mod regions;
mod table;

pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError};
pub use table::{CoverageRecord, CoverageTable};

/// Column names of the input dataset.
pub mod columns {
    pub const REGION_CODE: &str = "LOCAL_NAME";
    pub const INDICATOR: &str = "INDICATOR";
    pub const AGE: &str = "AGE";
    pub const COVERAGE: &str = "PC_COVERAGE";
    pub const YEAR: &str = "YEAR";
    pub const DEV_INDEX: &str = "MHDI_I";
    /// Added by the filter stage
    pub const REGION_LABEL: &str = "REGION";
}
