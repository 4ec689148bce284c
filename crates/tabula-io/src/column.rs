//! Typed, nullable column storage

use crate::schema::ColumnType;
use std::collections::HashSet;

/// A column of data
///
/// `None` marks a missing entry. For the float variants a `NaN` value is
/// also missing.
#[derive(Debug, Clone, PartialEq)]
pub enum DataColumn {
    Float32(Vec<Option<f32>>),
    Float64(Vec<Option<f64>>),
    Int32(Vec<Option<i32>>),
    Int64(Vec<Option<i64>>),
    Bool(Vec<Option<bool>>),
    String(Vec<Option<String>>),
}

impl DataColumn {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            DataColumn::Float32(_) => ColumnType::Float32,
            DataColumn::Float64(_) => ColumnType::Float64,
            DataColumn::Int32(_) => ColumnType::Int32,
            DataColumn::Int64(_) => ColumnType::Int64,
            DataColumn::Bool(_) => ColumnType::Bool,
            DataColumn::String(_) => ColumnType::String,
        }
    }

    /// Get the number of elements, missing ones included
    pub fn len(&self) -> usize {
        match self {
            DataColumn::Float32(v) => v.len(),
            DataColumn::Float64(v) => v.len(),
            DataColumn::Int32(v) => v.len(),
            DataColumn::Int64(v) => v.len(),
            DataColumn::Bool(v) => v.len(),
            DataColumn::String(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of non-missing entries
    pub fn valid_count(&self) -> usize {
        match self {
            DataColumn::Float32(v) => v.iter().filter(|x| present_f32(x)).count(),
            DataColumn::Float64(v) => v.iter().filter(|x| present_f64(x)).count(),
            DataColumn::Int32(v) => v.iter().flatten().count(),
            DataColumn::Int64(v) => v.iter().flatten().count(),
            DataColumn::Bool(v) => v.iter().flatten().count(),
            DataColumn::String(v) => v.iter().flatten().count(),
        }
    }

    /// Number of missing entries
    pub fn null_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// Number of distinct non-missing values
    ///
    /// Float values are compared by bit pattern after folding `-0.0`
    /// into `0.0`.
    pub fn distinct_count(&self) -> usize {
        match self {
            DataColumn::Float32(v) => v
                .iter()
                .flatten()
                .filter(|x| !x.is_nan())
                .map(|&x| (x + 0.0).to_bits())
                .collect::<HashSet<_>>()
                .len(),
            DataColumn::Float64(v) => v
                .iter()
                .flatten()
                .filter(|x| !x.is_nan())
                .map(|&x| (x + 0.0).to_bits())
                .collect::<HashSet<_>>()
                .len(),
            DataColumn::Int32(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
            DataColumn::Int64(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
            DataColumn::Bool(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
            DataColumn::String(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
        }
    }

    /// Non-missing values widened to f64 (numeric types only)
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match self {
            DataColumn::Float32(v) => Some(
                v.iter()
                    .flatten()
                    .filter(|x| !x.is_nan())
                    .map(|&x| x as f64)
                    .collect(),
            ),
            DataColumn::Float64(v) => {
                Some(v.iter().flatten().copied().filter(|x| !x.is_nan()).collect())
            }
            DataColumn::Int32(v) => Some(v.iter().flatten().map(|&x| x as f64).collect()),
            DataColumn::Int64(v) => Some(v.iter().flatten().map(|&x| x as f64).collect()),
            DataColumn::Bool(_) | DataColumn::String(_) => None,
        }
    }
}

fn present_f32(x: &Option<f32>) -> bool {
    matches!(x, Some(v) if !v.is_nan())
}

fn present_f64(x: &Option<f64>) -> bool {
    matches!(x, Some(v) if !v.is_nan())
}

macro_rules! impl_from_values {
    ($ty:ty, $variant:ident) => {
        impl From<Vec<Option<$ty>>> for DataColumn {
            fn from(values: Vec<Option<$ty>>) -> Self {
                DataColumn::$variant(values)
            }
        }

        impl From<Vec<$ty>> for DataColumn {
            fn from(values: Vec<$ty>) -> Self {
                DataColumn::$variant(values.into_iter().map(Some).collect())
            }
        }
    };
}

impl_from_values!(f32, Float32);
impl_from_values!(f64, Float64);
impl_from_values!(i32, Int32);
impl_from_values!(i64, Int64);
impl_from_values!(bool, Bool);
impl_from_values!(String, String);

impl From<Vec<Option<&str>>> for DataColumn {
    fn from(values: Vec<Option<&str>>) -> Self {
        DataColumn::String(
            values
                .into_iter()
                .map(|v| v.map(str::to_string))
                .collect(),
        )
    }
}

impl From<Vec<&str>> for DataColumn {
    fn from(values: Vec<&str>) -> Self {
        DataColumn::String(values.into_iter().map(|v| Some(v.to_string())).collect())
    }
}
