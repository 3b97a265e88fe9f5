use std::path::Path;

use crate::delimiter::{Delimiter, complete_lines, detect_delimiter};
use crate::error::TableError;

/// Default number of leading bytes inspected for delimiter detection.
pub const DEFAULT_SAMPLE_BYTES: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Bytes sampled from the start of the file for delimiter detection.
    pub sample_bytes: usize,
    /// Drop the first non-comment line (a column header).
    pub skip_header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sample_bytes: DEFAULT_SAMPLE_BYTES,
            skip_header: false,
        }
    }
}

/// A rectangular table of `f64` values, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    delimiter: Delimiter,
    columns: usize,
    values: Vec<f64>,
}

impl Table {
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.values.len() / self.columns
    }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.values[index * self.columns..(index + 1) * self.columns]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.columns)
    }

    /// Copy out one column in row order.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.iter_rows().map(|row| row[index]).collect()
    }
}

/// Read a delimited numeric table from disk.
pub fn load_table(path: &Path, options: LoadOptions) -> Result<Table, TableError> {
    let bytes = std::fs::read(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(&bytes, options)?;
    tracing::info!(
        path = %path.display(),
        delimiter = %table.delimiter,
        rows = table.rows(),
        columns = table.columns,
        "loaded table"
    );
    Ok(table)
}

/// Parse delimited numeric text. The delimiter is detected from the first
/// `options.sample_bytes` bytes, then applied to the whole input.
pub fn parse_table(bytes: &[u8], options: LoadOptions) -> Result<Table, TableError> {
    let sample = complete_lines(bytes, options.sample_bytes);
    let delimiter = detect_delimiter(sample, options.skip_header)?;
    tracing::debug!(%delimiter, sample_len = sample.len(), "detected delimiter");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(options.skip_header)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(bytes);

    let mut columns = 0;
    let mut values = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if columns == 0 {
            columns = record.len();
        } else if record.len() != columns {
            return Err(TableError::Ragged {
                line,
                expected: columns,
                found: record.len(),
            });
        }

        for (column, field) in record.iter().enumerate() {
            // `str::parse` accepts "nan" and "inf"; neither is a sample.
            let value = field
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TableError::Parse {
                    line,
                    column: column + 1,
                    value: field.to_string(),
                })?;
            values.push(value);
        }
    }

    if values.is_empty() {
        return Err(TableError::EmptyTable);
    }

    Ok(Table {
        delimiter,
        columns,
        values,
    })
}
