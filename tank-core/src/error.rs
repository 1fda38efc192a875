/// Error types for the tankage core library
use thiserror::Error;

/// Why a coordinate cell could not be converted to decimal degrees.
///
/// These are row-level conditions: the row is kept for every non-spatial
/// aggregate and only dropped from map views.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// The text did not split into exactly degrees, minutes and seconds
    #[error("expected 3 colon-separated fields, found {found}")]
    FieldCount { found: usize },

    /// One of the three fields is not a number
    #[error("{field} field is not numeric: {value:?}")]
    NonNumeric { field: &'static str, value: String },
}

/// Structural failures while reading the sheet export.
///
/// Any of these aborts the load: no partial dataset is returned.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// A required column header is not present
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to read the input file
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
