use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not detect a consistent delimiter (tried ',', tab and space)")]
    DelimiterDetection,
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}, column {column}: '{value}' is not a finite number")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },
    #[error("line {line}: expected {expected} fields, found {found}")]
    Ragged {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("table has no data rows")]
    EmptyTable,
    #[error("invalid spectrum file format: expected two columns, found {columns}")]
    InvalidSpectrumFormat { columns: usize },
    #[error("invalid color matching table: expected four columns, found {columns}")]
    InvalidCmfFormat { columns: usize },
    #[error("wavelengths must be strictly increasing ({current} nm follows {previous} nm)")]
    UnsortedWavelengths { previous: f64, current: f64 },
}
