//! Reader options for delimited text

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tokens read as missing values unless overridden
pub const DEFAULT_NULL_VALUES: &[&str] = &[
    "", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "<NA>", "#N/A",
];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid delimiter {0:?}: must be a single ASCII character")]
    InvalidDelimiter(char),

    #[error("Failed to parse options: {0}")]
    Parse(String),
}

/// Options for loading CSV/TSV text into a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: char,
    /// Whether the first record holds column names
    pub has_header: bool,
    /// Cell contents that denote a missing value
    pub null_values: Vec<String>,
    /// Trim surrounding whitespace from cells before parsing
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
            trim: true,
        }
    }
}

impl CsvOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab-separated preset
    pub fn tsv() -> Self {
        Self::default().with_delimiter('\t')
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the first record is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Replace the missing-value tokens
    pub fn with_null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a cell denotes a missing value
    pub fn is_null(&self, cell: &str) -> bool {
        self.null_values.iter().any(|n| n == cell)
    }

    /// The delimiter as a byte, as the csv crate wants it
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ConfigError::InvalidDelimiter(self.delimiter))
        }
    }

    /// Validate option values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.delimiter_byte().map(|_| ())
    }

    /// Load options from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let options: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Serialize options to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
