//! Proc macro that embeds the CIE 1931 2-degree standard observer color
//! matching functions from a CSV file at compile time.
//!
//! The table is checked while the crate builds (four numeric columns,
//! strictly increasing wavelengths) and expands to the file's text, so the
//! run-time table loader can treat the bundled reference as trusted input.

use proc_macro::TokenStream;
use std::path::PathBuf;
use syn::{LitStr, parse_macro_input};

/// Reads a CIE observer CSV and expands to a `&'static str` literal holding
/// its contents. Each row is `wavelength_nm,x_bar,y_bar,z_bar`.
///
/// The path is resolved relative to the calling crate's `CARGO_MANIFEST_DIR`.
///
/// ```ignore
/// const CIE_1931_CSV: &str = cie_data::cie_1931_source!("data/CIE_xyz_1931_2deg.csv");
/// ```
#[proc_macro]
pub fn cie_1931_source(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    let path = resolve_path(&lit.value());

    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .from_reader(contents.as_bytes());

    let mut prev_wl = f64::NEG_INFINITY;
    let mut rows = 0usize;
    for result in rdr.records() {
        let record =
            result.unwrap_or_else(|e| panic!("CSV parse error in {}: {e}", path.display()));
        assert_eq!(
            record.len(),
            4,
            "Expected 4 columns in {}, got {} at record {}",
            path.display(),
            record.len(),
            rows + 1,
        );

        let mut values = [0.0f64; 4];
        for (value, field) in values.iter_mut().zip(record.iter()) {
            *value = field
                .trim()
                .parse()
                .unwrap_or_else(|e| panic!("Invalid value '{field}' in {}: {e}", path.display()));
        }

        assert!(
            values.iter().all(|v| v.is_finite()),
            "Non-finite value in record {} of {}",
            rows + 1,
            path.display(),
        );

        let wl = values[0];
        assert!(
            wl > prev_wl,
            "Wavelengths in {} must be strictly increasing ({wl} follows {prev_wl})",
            path.display(),
        );
        assert!(
            values[1..].iter().all(|v| *v >= 0.0),
            "Negative color matching value at {wl} nm in {}",
            path.display(),
        );
        prev_wl = wl;
        rows += 1;
    }

    assert!(rows >= 2, "CSV file {} needs at least two rows", path.display());

    let path_str = path.display().to_string();
    // Referencing the file through include_str! keeps cargo's rebuild tracking.
    format!("{{ const _: &str = include_str!({path_str:?}); {contents:?} }}")
        .parse()
        .expect("failed to parse generated string literal")
}

/// Resolve a path relative to the calling crate's CARGO_MANIFEST_DIR.
fn resolve_path(relative: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let path = PathBuf::from(manifest_dir).join(relative);
    assert!(
        path.exists(),
        "CIE data file not found at {}",
        path.display()
    );
    path
}
