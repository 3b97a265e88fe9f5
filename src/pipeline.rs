use std::path::Path;

use serde::Serialize;
use spectrum_data::{Delimiter, LoadOptions, Spectrum, load_table};

use crate::colorimetry::{
    Chromaticity, CmfReference, ColorError, LocusPoint, Rgb8, Xyz, chromaticity, spectrum_to_xyz,
    xyz_to_rgb,
};

/// Everything derived from one spectrum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub xyz: Xyz,
    pub chromaticity: Chromaticity,
    pub rgb: Rgb8,
}

#[derive(Clone, Debug, Serialize)]
pub struct ColorReport {
    pub samples: usize,
    pub delimiter: Delimiter,
    #[serde(flatten)]
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locus: Option<Vec<LocusPoint>>,
}

pub fn convert(spectrum: &Spectrum, cmf: &CmfReference) -> Result<Color, ColorError> {
    let xyz = spectrum_to_xyz(spectrum, cmf)?;
    Ok(Color {
        xyz,
        chromaticity: chromaticity(xyz)?,
        rgb: xyz_to_rgb(xyz),
    })
}

/// Load a two-column spectrum file and convert it.
pub fn convert_file(
    path: &Path,
    options: LoadOptions,
    cmf: &CmfReference,
) -> Result<ColorReport, ColorError> {
    if !path.exists() {
        return Err(ColorError::MissingFile(path.to_path_buf()));
    }

    let table = load_table(path, options)?;
    let spectrum = Spectrum::from_table(&table)?;
    let color = convert(&spectrum, cmf)?;

    tracing::info!(
        path = %path.display(),
        x = color.chromaticity.x,
        y = color.chromaticity.y,
        rgb = %color.rgb,
        "converted spectrum"
    );

    Ok(ColorReport {
        samples: spectrum.len(),
        delimiter: table.delimiter(),
        color,
        locus: None,
    })
}
