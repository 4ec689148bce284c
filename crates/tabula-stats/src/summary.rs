//! Descriptive summary of a single column
//!
//! Counts are taken over every column type. Mean, minimum and maximum are
//! only reported for numeric columns and are `None` otherwise.

use crate::error::{StatsError, StatsResult};
use crate::moments::NumericMoments;
use serde::{Deserialize, Serialize};
use tabula_io::{ColumnType, DataTable};
use tracing::debug;

/// Summary statistics for one column of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FeatureSummaryRecord")]
pub struct FeatureSummary {
    /// Column name
    pub feature: String,
    /// Column dtype, e.g. `int64` or `string`
    pub dtype: String,
    /// Number of non-missing values
    pub count: usize,
    /// Number of distinct non-missing values
    pub unique: usize,
    /// Number of missing values
    pub missing: usize,
    /// Mean of the present values (numeric columns only)
    pub mean: Option<f64>,
    /// Minimum present value (numeric columns only)
    pub min: Option<f64>,
    /// Maximum present value (numeric columns only)
    pub max: Option<f64>,
}

impl FeatureSummary {
    /// Whether numeric statistics were computed
    pub fn is_numeric(&self) -> bool {
        self.mean.is_some()
    }

    /// Total rows covered by the summary
    pub fn total(&self) -> usize {
        self.count + self.missing
    }

    /// Serialize to pretty-printed JSON
    ///
    /// A NaN statistic (all-missing numeric column) is written as `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse JSON produced by [`FeatureSummary::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Wire form of [`FeatureSummary`]
///
/// A NaN statistic is written as `null`, so a numeric dtype with a `null`
/// statistic is read back as `Some(NaN)`.
#[derive(Deserialize)]
struct FeatureSummaryRecord {
    feature: String,
    dtype: String,
    count: usize,
    unique: usize,
    missing: usize,
    mean: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl From<FeatureSummaryRecord> for FeatureSummary {
    fn from(record: FeatureSummaryRecord) -> Self {
        let numeric = ColumnType::from_name(&record.dtype).is_some_and(|t| t.is_numeric());
        let restore = |stat: Option<f64>| {
            if numeric {
                Some(stat.unwrap_or(f64::NAN))
            } else {
                stat
            }
        };

        Self {
            feature: record.feature,
            dtype: record.dtype,
            count: record.count,
            unique: record.unique,
            missing: record.missing,
            mean: restore(record.mean),
            min: restore(record.min),
            max: restore(record.max),
        }
    }
}

/// Compute basic summary statistics for a single column
///
/// For an all-missing numeric column, `mean`, `min` and `max` are each
/// `Some(NaN)`.
pub fn summarize_feature(table: &DataTable, feature: &str) -> StatsResult<FeatureSummary> {
    let column = table
        .column(feature)
        .ok_or_else(|| StatsError::ColumnNotFound(feature.to_string()))?;

    let moments = NumericMoments::from_column(column);

    let summary = FeatureSummary {
        feature: feature.to_string(),
        dtype: column.dtype().to_string(),
        count: column.valid_count(),
        unique: column.distinct_count(),
        missing: column.null_count(),
        mean: moments.map(|m| m.mean),
        min: moments.map(|m| m.min),
        max: moments.map(|m| m.max),
    };

    debug!(
        feature,
        dtype = %summary.dtype,
        count = summary.count,
        missing = summary.missing,
        "summarized feature"
    );

    Ok(summary)
}
