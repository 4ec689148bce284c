//! Schema and column types for table description

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema describing the structure of a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors, in table order
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Data type
    pub dtype: ColumnType,

    /// Whether the column contains at least one missing value
    pub nullable: bool,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
            nullable: true,
        }
    }

    /// Set nullable
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Float32,
    Float64,
    Int32,
    Int64,
    Bool,
    String,
}

impl ColumnType {
    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        match self {
            ColumnType::Float32 | ColumnType::Float64 | ColumnType::Int32 | ColumnType::Int64 => {
                true
            }
            // Only integer and floating-point columns count as numeric, so
            // booleans get no mean/min/max even though 0/1 values could be averaged.
            ColumnType::Bool => false,
            ColumnType::String => false,
        }
    }

    /// Parse a dtype name as produced by [`ColumnType::as_str`]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "float32" => Some(ColumnType::Float32),
            "float64" => Some(ColumnType::Float64),
            "int32" => Some(ColumnType::Int32),
            "int64" => Some(ColumnType::Int64),
            "bool" => Some(ColumnType::Bool),
            "string" => Some(ColumnType::String),
            _ => None,
        }
    }

    /// Descriptive dtype name, e.g. `int64`
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Float32 => "float32",
            ColumnType::Float64 => "float64",
            ColumnType::Int32 => "int32",
            ColumnType::Int64 => "int64",
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_column_lookup() {
        let schema = DataSchema::new(
            vec![
                ColumnDescriptor::new("x", ColumnType::Float64),
                ColumnDescriptor::new("y", ColumnType::String),
            ],
            100,
        );

        assert!(schema.column("z").is_none());
        assert_eq!(schema.column("y").map(|c| c.dtype), Some(ColumnType::String));
        assert_eq!(schema.column_names(), vec!["x", "y"]);
    }

    #[test]
    fn test_column_type_properties() {
        assert!(ColumnType::Float64.is_numeric());
        assert!(ColumnType::Int32.is_numeric());
        assert!(!ColumnType::String.is_numeric());
        assert!(!ColumnType::Bool.is_numeric());
    }

    #[test]
    fn test_column_type_display() {
        assert_eq!(ColumnType::Int64.to_string(), "int64");
        assert_eq!(ColumnType::Float32.to_string(), "float32");
        assert_eq!(ColumnType::String.to_string(), "string");
    }

    #[test]
    fn test_column_type_from_name() {
        for dtype in [
            ColumnType::Float32,
            ColumnType::Float64,
            ColumnType::Int32,
            ColumnType::Int64,
            ColumnType::Bool,
            ColumnType::String,
        ] {
            assert_eq!(ColumnType::from_name(dtype.as_str()), Some(dtype));
        }
        assert_eq!(ColumnType::from_name("object"), None);
    }
}
