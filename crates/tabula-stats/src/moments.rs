//! Numeric reductions shared by the summary and comparison reports

use tabula_io::DataColumn;
use tracing::trace;

/// Mean, minimum and maximum of a set of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericMoments {
    /// Arithmetic mean
    pub mean: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

impl NumericMoments {
    /// Reduce a slice of present values in a single pass
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            trace!("numeric reduction over zero values");
            return Self::empty();
        }

        let (sum, min, max) = values.iter().fold(
            (0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(sum, min, max), &x| (sum + x, min.min(x), max.max(x)),
        );

        Self {
            mean: sum / values.len() as f64,
            min,
            max,
        }
    }

    /// Reduce the non-missing values of a column
    ///
    /// Returns `None` when the column is not numeric.
    pub fn from_column(column: &DataColumn) -> Option<Self> {
        column
            .numeric_values()
            .map(|values| Self::from_values(&values))
    }

    /// Moments of an empty set (all NaN)
    fn empty() -> Self {
        Self {
            mean: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Serde adapter that writes a NaN statistic as `null` and reads `null`
/// back as NaN
///
/// Use with `#[serde(with = "crate::moments::nan_as_null")]` on `f64` fields.
pub mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
