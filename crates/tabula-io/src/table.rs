//! In-memory table: ordered, uniquely named columns of equal length

use crate::column::DataColumn;
use crate::reader::{IoError, IoResult};
use crate::schema::{ColumnDescriptor, DataSchema};

/// An ordered collection of named columns
///
/// All columns share the same row count. Tables are read-only once built;
/// the stats functions only ever borrow them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    names: Vec<String>,
    columns: Vec<DataColumn>,
}

impl DataTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`DataTable::add_column`]
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        data: impl Into<DataColumn>,
    ) -> IoResult<Self> {
        self.add_column(name, data)?;
        Ok(self)
    }

    /// Append a column
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        data: impl Into<DataColumn>,
    ) -> IoResult<()> {
        let name = name.into();
        let data = data.into();

        if self.names.contains(&name) {
            return Err(IoError::DuplicateColumn(name));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != data.len() {
                return Err(IoError::LengthMismatch {
                    column: name,
                    expected: first.len(),
                    actual: data.len(),
                });
            }
        }

        self.names.push(name);
        self.columns.push(data);
        Ok(())
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&DataColumn> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Get a column by name, failing if absent
    pub fn get_column(&self, name: &str) -> IoResult<&DataColumn> {
        self.column(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
    }

    /// Get column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.names.iter().map(|s| s.as_str()).collect()
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, DataColumn::len)
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Iterate over `(name, column)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataColumn)> {
        self.names.iter().map(|s| s.as_str()).zip(self.columns.iter())
    }

    /// Describe the table without its data
    pub fn schema(&self) -> DataSchema {
        let columns = self
            .iter()
            .map(|(name, data)| {
                ColumnDescriptor::new(name, data.dtype()).with_nullable(data.null_count() > 0)
            })
            .collect();
        DataSchema::new(columns, self.num_rows())
    }
}
