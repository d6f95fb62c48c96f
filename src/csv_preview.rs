//! Verbatim CSV preview.
//!
//! Loads a comma-separated file for display only: the first row becomes the
//! header, the rest become data rows, and every cell is kept as the exact
//! substring between commas. No schema, no type coercion, no write path.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}: file contains no rows")]
    Empty(String),
}

/// A CSV file split into header and data rows, cells untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Where the table came from, for display.
    pub source: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Load a CSV file from disk.
    pub fn load(path: &Path) -> Result<Self, CsvError> {
        let source = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| CsvError::Read {
            path: source.clone(),
            source: e,
        })?;
        Self::parse(source, &content)
    }

    /// Split CSV content into rows and cells.
    ///
    /// Blank lines are dropped; ragged rows are kept as-is.
    pub fn parse(source: impl Into<String>, content: &str) -> Result<Self, CsvError> {
        let source = source.into();

        let mut lines = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split(',').map(str::to_string).collect::<Vec<_>>());

        let header = match lines.next() {
            Some(header) => header,
            None => return Err(CsvError::Empty(source)),
        };
        let rows: Vec<Vec<String>> = lines.collect();

        Ok(Self { source, header, rows })
    }

    /// Widest row in the table, header included.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}
