//! Error types for tabula-stats

use tabula_io::ColumnType;
use thiserror::Error;

/// Result type alias for stats operations
pub type StatsResult<T> = std::result::Result<T, StatsError>;

/// Errors raised while computing a report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The requested column is not in the table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A numeric reduction was requested on a non-numeric column
    #[error("Type mismatch: column {feature} has dtype {dtype}, expected a numeric dtype")]
    TypeMismatch { feature: String, dtype: ColumnType },
}
