use serde::Serialize;
use spectrum_data::CmfTable;

use super::{ColorError, Xyz};

/// CIE 1931 xy chromaticity coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

/// One point of the spectral locus: the chromaticity of a monochromatic
/// stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LocusPoint {
    pub wavelength_nm: f64,
    pub x: f64,
    pub y: f64,
}

pub fn chromaticity(xyz: Xyz) -> Result<Chromaticity, ColorError> {
    let sum = xyz.sum();
    if sum == 0.0 {
        return Err(ColorError::ZeroTristimulus);
    }
    Ok(Chromaticity {
        x: xyz.x / sum,
        y: xyz.y / sum,
    })
}

/// Chromaticity of every CMF row, tracing the horseshoe boundary of the
/// xy diagram. Rows whose functions all vanish are skipped.
pub fn spectral_locus(table: &CmfTable) -> Vec<LocusPoint> {
    table
        .rows()
        .filter_map(|(wavelength_nm, [x, y, z])| {
            let c = chromaticity(Xyz::new(x, y, z)).ok()?;
            Some(LocusPoint {
                wavelength_nm,
                x: c.x,
                y: c.y,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorimetry::CmfReference;

    #[test]
    fn normalizes_by_sum() {
        let c = chromaticity(Xyz::new(1.0, 2.0, 1.0)).unwrap();
        assert_eq!(c, Chromaticity { x: 0.25, y: 0.5 });
    }

    #[test]
    fn ignores_magnitude() {
        let a = chromaticity(Xyz::new(0.2, 0.3, 0.5)).unwrap();
        let b = chromaticity(Xyz::new(20.0, 30.0, 50.0)).unwrap();
        assert!((a.x - b.x).abs() < 1e-12);
        assert!((a.y - b.y).abs() < 1e-12);
    }

    #[test]
    fn zero_sum_is_rejected() {
        assert!(matches!(
            chromaticity(Xyz::new(0.0, 0.0, 0.0)),
            Err(ColorError::ZeroTristimulus)
        ));
    }

    #[test]
    fn locus_stays_inside_unit_triangle() {
        let cmf = CmfReference::cie_1931().unwrap();
        let locus = spectral_locus(cmf.table());
        assert_eq!(locus.len(), cmf.table().len());
        for p in &locus {
            assert!(p.x >= 0.0 && p.y >= 0.0, "{p:?}");
            assert!(p.x + p.y <= 1.0 + 1e-12, "{p:?}");
        }
    }

    #[test]
    fn locus_endpoints() {
        let cmf = CmfReference::cie_1931().unwrap();
        let locus = spectral_locus(cmf.table());
        // Violet end sits low on the diagram, red end far right.
        let first = locus.first().unwrap();
        let last = locus.last().unwrap();
        assert_eq!(first.wavelength_nm, 360.0);
        assert!(first.x > 0.16 && first.x < 0.18 && first.y < 0.01, "{first:?}");
        assert_eq!(last.wavelength_nm, 830.0);
        assert!(last.x > 0.72 && last.x < 0.74, "{last:?}");
    }
}
