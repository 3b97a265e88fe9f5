//! Delimited-text tables of spectral samples.
//!
//! ```text
//!  .csv / .tsv / .txt
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ delimiter  │  ordered trial of ',', tab, ' ' on a byte sample
//!   └────────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │   table    │  numeric rows, fixed column count
//!   └────────────┘
//!        │
//!        ▼
//!   Spectrum (2 columns) / CmfTable (4 columns)
//! ```

pub mod delimiter;
pub mod error;
pub mod spectrum;
pub mod table;

pub use delimiter::{Delimiter, detect_delimiter};
pub use error::TableError;
pub use spectrum::{CmfTable, Spectrum};
pub use table::{LoadOptions, Table, load_table, parse_table};
