/// Error types for the survey libraries
use thiserror::Error;

/// Raised when a condition identifier is not one of the ten tracked conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown condition identifier: {0}")]
pub struct UnknownConditionError(pub String);

/// Main error type for loading and aggregating survey data
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Condition identifier not in the registry
    #[error(transparent)]
    UnknownCondition(#[from] UnknownConditionError),

    /// Input file lacks a required header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A field could not be interpreted
    #[error("Invalid value {value:?} in column {column} (row {row})")]
    InvalidValue {
        column: &'static str,
        row: u64,
        value: String,
    },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to open or decompress the input file
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using SurveyError
pub type Result<T> = std::result::Result<T, SurveyError>;
