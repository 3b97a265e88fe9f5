use std::cmp::Ordering;
use std::path::Path;

use spectrum_data::{CmfTable, LoadOptions, TableError, load_table, parse_table};

use super::ColorError;

/// CIE 1931 2-degree standard observer, 360-830nm in 5nm steps.
/// Each row: wavelength_nm, x_bar, y_bar, z_bar.
const CIE_1931_CSV: &str = cie_data::cie_1931_source!("data/CIE_xyz_1931_2deg.csv");

/// Piecewise-linear function through `(xs[i], ys[i])`, zero outside
/// `[xs[0], xs[n-1]]`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearInterpolant {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolant {
    /// Returns `None` unless `xs` is non-empty, strictly increasing and the
    /// same length as `ys`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Option<Self> {
        let sorted = xs
            .windows(2)
            .all(|w| w[0].partial_cmp(&w[1]) == Some(Ordering::Less));
        (!xs.is_empty() && xs.len() == ys.len() && sorted).then_some(Self { xs, ys })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    pub fn eval(&self, x: f64) -> f64 {
        let (lo, hi) = self.domain();
        // Also rejects NaN.
        if !(lo..=hi).contains(&x) {
            return 0.0;
        }

        // First knot strictly above x; at least 1 because xs[0] <= x.
        let i = self.xs.partition_point(|&knot| knot <= x);
        if i == self.xs.len() {
            return self.ys[i - 1];
        }

        let (x0, x1) = (self.xs[i - 1], self.xs[i]);
        let (y0, y1) = (self.ys[i - 1], self.ys[i]);
        y0 + (x - x0) / (x1 - x0) * (y1 - y0)
    }
}

/// The three color matching functions as interpolants over a shared
/// wavelength grid.
#[derive(Clone, Debug)]
pub struct CmfReference {
    table: CmfTable,
    x_bar: LinearInterpolant,
    y_bar: LinearInterpolant,
    z_bar: LinearInterpolant,
}

impl CmfReference {
    pub fn new(table: CmfTable) -> Result<Self, ColorError> {
        let curve = |values: &[f64]| {
            LinearInterpolant::new(table.wavelengths().to_vec(), values.to_vec())
                .ok_or(ColorError::Table(TableError::EmptyTable))
        };
        Ok(Self {
            x_bar: curve(table.x_bar())?,
            y_bar: curve(table.y_bar())?,
            z_bar: curve(table.z_bar())?,
            table,
        })
    }

    /// The bundled CIE 1931 2-degree observer.
    pub fn cie_1931() -> Result<Self, ColorError> {
        let table = parse_table(CIE_1931_CSV.as_bytes(), LoadOptions::default())?;
        Self::new(CmfTable::from_table(&table)?)
    }

    /// Load a four-column CMF table from disk.
    pub fn load(path: &Path, options: LoadOptions) -> Result<Self, ColorError> {
        let table = load_table(path, options)?;
        Self::new(CmfTable::from_table(&table)?)
    }

    pub fn table(&self) -> &CmfTable {
        &self.table
    }

    pub fn domain(&self) -> (f64, f64) {
        self.x_bar.domain()
    }

    /// `[x_bar, y_bar, z_bar]` at one wavelength.
    pub fn evaluate(&self, wavelength: f64) -> [f64; 3] {
        [
            self.x_bar.eval(wavelength),
            self.y_bar.eval(wavelength),
            self.z_bar.eval(wavelength),
        ]
    }

    pub fn evaluate_all(&self, wavelengths: &[f64]) -> Vec<[f64; 3]> {
        wavelengths.iter().map(|&wl| self.evaluate(wl)).collect()
    }
}
