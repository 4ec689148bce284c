//! Mean comparison of one column across two slices

use crate::error::{StatsError, StatsResult};
use crate::moments::NumericMoments;
use serde::{Deserialize, Serialize};
use tabula_io::DataTable;
use tracing::debug;

/// Label used for the first slice when none is given
pub const DEFAULT_SLICE_1_NAME: &str = "slice_1";

/// Label used for the second slice when none is given
pub const DEFAULT_SLICE_2_NAME: &str = "slice_2";

/// Mean of one column in two slices and their signed difference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanComparison {
    pub feature: String,
    pub slice_1_name: String,
    pub slice_2_name: String,
    #[serde(with = "crate::moments::nan_as_null")]
    pub slice_1_mean: f64,
    #[serde(with = "crate::moments::nan_as_null")]
    pub slice_2_mean: f64,
    /// `slice_1_mean - slice_2_mean`
    #[serde(with = "crate::moments::nan_as_null")]
    pub difference: f64,
}

impl MeanComparison {
    /// Serialize to pretty-printed JSON
    ///
    /// A NaN mean or difference is written as `null` and read back as NaN.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse JSON produced by [`MeanComparison::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Compare the mean of a numeric column between two slices
///
/// The slices are labelled `slice_1` and `slice_2`.
pub fn compare_slices_mean(
    table1: &DataTable,
    table2: &DataTable,
    feature: &str,
) -> StatsResult<MeanComparison> {
    compare_slices_mean_named(
        table1,
        table2,
        feature,
        DEFAULT_SLICE_1_NAME,
        DEFAULT_SLICE_2_NAME,
    )
}

/// Compare the mean of a numeric column between two labelled slices
///
/// Each mean skips missing values. A slice with no present values has a
/// NaN mean, and the difference is then NaN as well.
pub fn compare_slices_mean_named(
    table1: &DataTable,
    table2: &DataTable,
    feature: &str,
    name1: &str,
    name2: &str,
) -> StatsResult<MeanComparison> {
    let mean1 = column_mean(table1, feature)?;
    let mean2 = column_mean(table2, feature)?;

    debug!(feature, name1, name2, mean1, mean2, "compared slice means");

    Ok(MeanComparison {
        feature: feature.to_string(),
        slice_1_name: name1.to_string(),
        slice_2_name: name2.to_string(),
        slice_1_mean: mean1,
        slice_2_mean: mean2,
        difference: mean1 - mean2,
    })
}

fn column_mean(table: &DataTable, feature: &str) -> StatsResult<f64> {
    let column = table
        .column(feature)
        .ok_or_else(|| StatsError::ColumnNotFound(feature.to_string()))?;

    NumericMoments::from_column(column)
        .map(|m| m.mean)
        .ok_or_else(|| StatsError::TypeMismatch {
            feature: feature.to_string(),
            dtype: column.dtype(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_io::{ColumnType, DataColumn};

    fn table(name: &str, column: impl Into<DataColumn>) -> DataTable {
        DataTable::new().with_column(name, column).unwrap()
    }

    #[test]
    fn test_default_names() {
        let t1 = table("x", vec![1i64, 2, 3]);
        let t2 = table("x", vec![4i64, 5, 6]);
        let cmp = compare_slices_mean(&t1, &t2, "x").unwrap();

        assert_eq!(cmp.feature, "x");
        assert_eq!(cmp.slice_1_name, "slice_1");
        assert_eq!(cmp.slice_2_name, "slice_2");
        assert_eq!(cmp.slice_1_mean, 2.0);
        assert_eq!(cmp.slice_2_mean, 5.0);
        assert_eq!(cmp.difference, -3.0);
    }

    #[test]
    fn test_custom_names() {
        let t1 = table("score", vec![Some(10.0f64), None]);
        let t2 = table("score", vec![4.0f64, 6.0]);
        let cmp = compare_slices_mean_named(&t1, &t2, "score", "treated", "control").unwrap();

        assert_eq!(cmp.slice_1_name, "treated");
        assert_eq!(cmp.slice_2_name, "control");
        assert_eq!(cmp.slice_1_mean, 10.0);
        assert_eq!(cmp.difference, 5.0);
    }

    #[test]
    fn test_mixed_numeric_dtypes() {
        let t1 = table("x", vec![1i32, 2]);
        let t2 = table("x", vec![0.5f32, 0.5]);
        let cmp = compare_slices_mean(&t1, &t2, "x").unwrap();
        assert_eq!(cmp.difference, 1.0);
    }

    #[test]
    fn test_missing_in_second_table() {
        let t1 = table("x", vec![1i64]);
        let t2 = table("y", vec![1i64]);
        assert_eq!(
            compare_slices_mean(&t1, &t2, "x"),
            Err(StatsError::ColumnNotFound("x".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        let t1 = table("c", vec!["a", "b"]);
        let t2 = table("c", vec!["a"]);
        assert_eq!(
            compare_slices_mean(&t1, &t2, "c"),
            Err(StatsError::TypeMismatch {
                feature: "c".to_string(),
                dtype: ColumnType::String,
            })
        );
    }

    #[test]
    fn test_empty_slice_is_nan() {
        let t1 = table("x", Vec::<Option<f64>>::new());
        let t2 = table("x", vec![1.0f64]);
        let cmp = compare_slices_mean(&t1, &t2, "x").unwrap();
        assert!(cmp.slice_1_mean.is_nan());
        assert!(cmp.difference.is_nan());
        assert_eq!(cmp.slice_2_mean, 1.0);
    }

    #[test]
    fn test_json_roundtrip_with_empty_slice() {
        let t1 = table("x", Vec::<Option<f64>>::new());
        let t2 = table("x", vec![1.0f64]);
        let cmp = compare_slices_mean(&t1, &t2, "x").unwrap();

        let json = cmp.to_json().unwrap();
        assert!(json.contains("\"slice_1_mean\": null"));

        let back = MeanComparison::from_json(&json).unwrap();
        assert_eq!(back.feature, "x");
        assert_eq!(back.slice_1_name, "slice_1");
        assert!(back.slice_1_mean.is_nan());
        assert!(back.difference.is_nan());
        assert_eq!(back.slice_2_mean, 1.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let t1 = table("x", vec![1i64, 2, 3]);
        let t2 = table("x", vec![4i64, 5, 6]);
        let cmp = compare_slices_mean_named(&t1, &t2, "x", "a", "b").unwrap();
        let back = MeanComparison::from_json(&cmp.to_json().unwrap()).unwrap();
        assert_eq!(back, cmp);
    }
}
