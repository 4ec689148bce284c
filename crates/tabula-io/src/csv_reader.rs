//! CSV file reader with type inference

use crate::column::DataColumn;
use crate::config::CsvOptions;
use crate::reader::{DataReader, IoError, IoResult};
use crate::schema::{ColumnType, DataSchema};
use crate::table::DataTable;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// CSV reader
///
/// The source is parsed once on open; the reader then hands out copies of
/// the loaded table.
#[derive(Debug)]
pub struct CsvReader {
    path: Option<String>,
    table: DataTable,
}

impl CsvReader {
    /// Open a CSV file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_options(path, &CsvOptions::default())
    }

    /// Open a CSV file with options
    pub fn open_with_options(path: &str, options: &CsvOptions) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let table = load_table(BufReader::new(file), options)?;
        debug!(
            path,
            rows = table.num_rows(),
            columns = table.num_columns(),
            "loaded CSV file"
        );

        Ok(Self {
            path: Some(path.to_string()),
            table,
        })
    }

    /// Parse CSV text held in memory
    pub fn from_text(text: &str, options: &CsvOptions) -> IoResult<Self> {
        let table = load_table(text.as_bytes(), options)?;
        debug!(
            rows = table.num_rows(),
            columns = table.num_columns(),
            "loaded CSV text"
        );

        Ok(Self { path: None, table })
    }

    /// Consume the reader and return the loaded table
    pub fn into_table(self) -> DataTable {
        self.table
    }
}

impl DataReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.table.schema())
    }

    fn read_table(&self) -> IoResult<DataTable> {
        Ok(self.table.clone())
    }

    fn read_column(&self, name: &str) -> IoResult<DataColumn> {
        self.table.get_column(name).cloned()
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Parse delimited text into a table
fn load_table<R: Read>(input: R, options: &CsvOptions) -> IoResult<DataTable> {
    let delimiter = options
        .delimiter_byte()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(options.has_header)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(input);

    let mut headers: Vec<String> = if options.has_header {
        reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        Vec::new()
    };

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for result in reader.records() {
        let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;

        // Without a header the first record decides the width
        if !options.has_header && headers.is_empty() {
            headers = (0..record.len()).map(|i| format!("col_{}", i)).collect();
            cells = vec![Vec::new(); record.len()];
        }

        for (i, value) in record.iter().enumerate() {
            if i < cells.len() {
                cells[i].push(value.to_string());
            }
        }
    }

    let mut table = DataTable::new();
    for (name, values) in headers.into_iter().zip(cells) {
        let dtype = infer_type(&values, options);
        table.add_column(name, parse_column(&values, dtype, options))?;
    }

    Ok(table)
}

/// Infer column type from its non-null values
fn infer_type(values: &[String], options: &CsvOptions) -> ColumnType {
    let non_null: Vec<&str> = values
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !options.is_null(s))
        .collect();
    if non_null.is_empty() {
        return ColumnType::String;
    }

    if non_null.iter().all(|s| s.parse::<i64>().is_ok()) {
        return ColumnType::Int64;
    }

    if non_null.iter().all(|s| s.parse::<f64>().is_ok()) {
        return ColumnType::Float64;
    }

    if non_null.iter().all(|s| parse_bool(s).is_some()) {
        return ColumnType::Bool;
    }

    ColumnType::String
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// The cell contents, or `None` for a null token
fn non_null<'a>(s: &'a str, options: &CsvOptions) -> Option<&'a str> {
    if options.is_null(s) {
        None
    } else {
        Some(s)
    }
}

/// Parse column values into a DataColumn
fn parse_column(values: &[String], dtype: ColumnType, options: &CsvOptions) -> DataColumn {
    match dtype {
        ColumnType::Float32 => DataColumn::Float32(
            values
                .iter()
                .map(|s| non_null(s, options).and_then(|v| v.parse().ok()))
                .collect(),
        ),
        ColumnType::Float64 => DataColumn::Float64(
            values
                .iter()
                .map(|s| non_null(s, options).and_then(|v| v.parse().ok()))
                .collect(),
        ),
        ColumnType::Int32 => DataColumn::Int32(
            values
                .iter()
                .map(|s| non_null(s, options).and_then(|v| v.parse().ok()))
                .collect(),
        ),
        ColumnType::Int64 => DataColumn::Int64(
            values
                .iter()
                .map(|s| non_null(s, options).and_then(|v| v.parse().ok()))
                .collect(),
        ),
        ColumnType::Bool => DataColumn::Bool(
            values
                .iter()
                .map(|s| non_null(s, options).and_then(parse_bool))
                .collect(),
        ),
        ColumnType::String => DataColumn::String(
            values
                .iter()
                .map(|s| non_null(s, options).map(str::to_string))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["1", "2", "3"], ColumnType::Int64)]
    #[case(&["1.5", "2.7", "3.14"], ColumnType::Float64)]
    #[case(&["1", "", "2.5"], ColumnType::Float64)]
    #[case(&["true", "False", "TRUE"], ColumnType::Bool)]
    #[case(&["hello", "world"], ColumnType::String)]
    #[case(&["", "NA"], ColumnType::String)]
    fn test_infer_type(#[case] values: &[&str], #[case] expected: ColumnType) {
        assert_eq!(infer_type(&strings(values), &CsvOptions::default()), expected);
    }

    #[test]
    fn test_from_text_with_missing() {
        let text = "age,color\n20,red\n30,blue\n40,red\n,\n";
        let table = CsvReader::from_text(text, &CsvOptions::default())
            .unwrap()
            .into_table();

        assert_eq!(table.num_rows(), 4);
        assert_eq!(
            table.column("age"),
            Some(&DataColumn::from(vec![Some(20i64), Some(30), Some(40), None]))
        );
        assert_eq!(
            table.column("color"),
            Some(&DataColumn::from(vec![
                Some("red"),
                Some("blue"),
                Some("red"),
                None
            ]))
        );
    }

    #[test]
    fn test_custom_null_tokens() {
        let options = CsvOptions::default().with_null_values(["-"]);
        let table = CsvReader::from_text("x\n1.5\n-\nNA\n", &options)
            .unwrap()
            .into_table();
        // "NA" is no longer null, so the column falls back to text
        let x = table.column("x").unwrap();
        assert_eq!(x.dtype(), ColumnType::String);
        assert_eq!(x.null_count(), 1);
    }

    #[test]
    fn test_headerless() {
        let options = CsvOptions::default().with_header(false);
        let table = CsvReader::from_text("1,a\n2,b\n", &options)
            .unwrap()
            .into_table();
        assert_eq!(table.column_names(), vec!["col_0", "col_1"]);
        assert_eq!(table.num_rows(), 2);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = CsvReader::from_text("a,b\n1,2\n3\n", &CsvOptions::default());
        assert!(matches!(result, Err(IoError::InvalidFormat(_))));
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x, y").unwrap();
        writeln!(file, "1, 2.5").unwrap();
        writeln!(file, "2, NaN").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let reader = CsvReader::open(&path).unwrap();
        assert_eq!(reader.path(), Some(path.as_str()));

        let schema = reader.read_schema().unwrap();
        assert_eq!(schema.num_records, 2);
        assert_eq!(schema.column("x").unwrap().dtype, ColumnType::Int64);
        assert_eq!(schema.column("y").unwrap().dtype, ColumnType::Float64);
        assert!(schema.column("y").unwrap().nullable);
    }

    #[test]
    fn test_missing_file() {
        let result = CsvReader::open("/nonexistent/table.csv");
        assert!(matches!(result, Err(IoError::FileNotFound(_))));
    }
}
