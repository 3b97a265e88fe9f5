use std::cmp::Ordering;
use std::path::Path;

use crate::error::TableError;
use crate::table::{LoadOptions, Table, load_table};

/// A measured or synthetic spectral power distribution in file order.
///
/// Wavelengths are expected to increase with even spacing and intensities to
/// be non-negative; neither is enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub wavelengths: Vec<f64>,
    pub intensities: Vec<f64>,
}

impl Spectrum {
    /// Split a two-column table into wavelengths and intensities.
    pub fn from_table(table: &Table) -> Result<Self, TableError> {
        if table.columns() != 2 {
            return Err(TableError::InvalidSpectrumFormat {
                columns: table.columns(),
            });
        }
        Ok(Self {
            wavelengths: table.column(0),
            intensities: table.column(1),
        })
    }

    pub fn load(path: &Path, options: LoadOptions) -> Result<Self, TableError> {
        Self::from_table(&load_table(path, options)?)
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Largest intensity, or `None` for an empty spectrum. A NaN sample makes
    /// the result NaN.
    pub fn max_intensity(&self) -> Option<f64> {
        self.intensities.iter().copied().reduce(|a, b| {
            if a.is_nan() || b.is_nan() {
                f64::NAN
            } else {
                a.max(b)
            }
        })
    }
}

/// Color matching function table: `(wavelength_nm, x_bar, y_bar, z_bar)`
/// rows. Only constructed through [`CmfTable::from_table`], so it always holds
/// at least one row with strictly increasing wavelengths.
#[derive(Clone, Debug, PartialEq)]
pub struct CmfTable {
    wavelengths: Vec<f64>,
    x_bar: Vec<f64>,
    y_bar: Vec<f64>,
    z_bar: Vec<f64>,
}

impl CmfTable {
    pub fn from_table(table: &Table) -> Result<Self, TableError> {
        if table.columns() != 4 {
            return Err(TableError::InvalidCmfFormat {
                columns: table.columns(),
            });
        }

        let wavelengths = table.column(0);
        let out_of_order = wavelengths
            .windows(2)
            .find(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less));
        if let Some(pair) = out_of_order {
            return Err(TableError::UnsortedWavelengths {
                previous: pair[0],
                current: pair[1],
            });
        }

        Ok(Self {
            wavelengths,
            x_bar: table.column(1),
            y_bar: table.column(2),
            z_bar: table.column(3),
        })
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn x_bar(&self) -> &[f64] {
        &self.x_bar
    }

    pub fn y_bar(&self) -> &[f64] {
        &self.y_bar
    }

    pub fn z_bar(&self) -> &[f64] {
        &self.z_bar
    }

    /// Rows as `(wavelength, [x_bar, y_bar, z_bar])`.
    pub fn rows(&self) -> impl Iterator<Item = (f64, [f64; 3])> + '_ {
        (0..self.len()).map(|i| {
            (
                self.wavelengths[i],
                [self.x_bar[i], self.y_bar[i], self.z_bar[i]],
            )
        })
    }
}
