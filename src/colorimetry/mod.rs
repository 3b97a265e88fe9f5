//! Spectrum → XYZ → (x, y) / sRGB conversion.

pub mod chromaticity;
pub mod cmf;
pub mod integrate;
pub mod srgb;

use std::fmt;
use std::path::PathBuf;

use glam::DVec3;
use serde::Serialize;
use spectrum_data::TableError;

pub use chromaticity::{Chromaticity, LocusPoint, chromaticity, spectral_locus};
pub use cmf::{CmfReference, LinearInterpolant};
pub use integrate::spectrum_to_xyz;
pub use srgb::{Rgb8, gamma_encode, xyz_to_rgb};

/// CIE 1931 tristimulus value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    pub fn to_vec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Xyz {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={}, Y={}, Z={}", self.x, self.y, self.z)
    }
}

/// Why a spectrum cannot be turned into a color.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Degeneracy {
    #[error("spectrum is empty")]
    Empty,
    #[error("intensity {0} is not finite")]
    NonFiniteIntensity(f64),
    #[error("maximum intensity {0} is not positive")]
    NonPositiveMaximum(f64),
    #[error("spectrum produces zero total intensity in XYZ space")]
    ZeroTristimulus,
}

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("file '{}' not found.", .0.display())]
    MissingFile(PathBuf),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("degenerate spectrum: {0}")]
    DegenerateSpectrum(Degeneracy),
    #[error("chromaticity is undefined when X + Y + Z = 0")]
    ZeroTristimulus,
}
