use glam::DVec3;
use spectrum_data::Spectrum;

use super::cmf::CmfReference;
use super::{ColorError, Degeneracy, Xyz};

/// Integrate a spectrum against the color matching functions.
///
/// Intensities are scaled so the brightest sample is 1, then summed as
/// `X = Σ I(λᵢ)·x̄(λᵢ)` (likewise Y, Z) over the spectrum's own samples. This
/// is an unnormalized Riemann sum: it assumes evenly spaced input and does no
/// resampling.
pub fn spectrum_to_xyz(spectrum: &Spectrum, cmf: &CmfReference) -> Result<Xyz, ColorError> {
    if let Some(&bad) = spectrum.intensities.iter().find(|v| !v.is_finite()) {
        return Err(ColorError::DegenerateSpectrum(
            Degeneracy::NonFiniteIntensity(bad),
        ));
    }
    let max = spectrum
        .max_intensity()
        .ok_or(ColorError::DegenerateSpectrum(Degeneracy::Empty))?;
    if max <= 0.0 {
        return Err(ColorError::DegenerateSpectrum(
            Degeneracy::NonPositiveMaximum(max),
        ));
    }

    let weights = cmf.evaluate_all(&spectrum.wavelengths);
    tracing::trace!(
        x_bar = ?weights.iter().map(|w| w[0]).collect::<Vec<_>>(),
        y_bar = ?weights.iter().map(|w| w[1]).collect::<Vec<_>>(),
        z_bar = ?weights.iter().map(|w| w[2]).collect::<Vec<_>>(),
        "interpolated color matching functions"
    );

    let xyz: Xyz = spectrum
        .intensities
        .iter()
        .zip(&weights)
        .fold(DVec3::ZERO, |acc, (&intensity, &w)| {
            acc + DVec3::from_array(w) * (intensity / max)
        })
        .into();

    tracing::debug!(x = xyz.x, y = xyz.y, z = xyz.z, samples = spectrum.len(), "computed XYZ");

    if xyz.sum() == 0.0 {
        return Err(ColorError::DegenerateSpectrum(Degeneracy::ZeroTristimulus));
    }
    Ok(xyz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum(wavelengths: Vec<f64>, intensities: Vec<f64>) -> Spectrum {
        Spectrum {
            wavelengths,
            intensities,
        }
    }

    fn cmf() -> CmfReference {
        CmfReference::cie_1931().unwrap()
    }

    #[test]
    fn delta_at_grid_point_reproduces_row() {
        let cmf = cmf();
        let xyz = spectrum_to_xyz(&spectrum(vec![545.0, 550.0, 555.0], vec![0.0, 1.0, 0.0]), &cmf)
            .unwrap();
        assert!((xyz.x - 0.43345).abs() < 1e-9);
        assert!((xyz.y - 0.99495).abs() < 1e-9);
        assert!((xyz.z - 0.00875).abs() < 1e-9);
    }

    #[test]
    fn every_grid_row_is_reproduced_by_its_delta() {
        let cmf = cmf();
        for (wl, [x, y, z]) in cmf.table().rows() {
            if x + y + z == 0.0 {
                continue;
            }
            let xyz = spectrum_to_xyz(&spectrum(vec![wl], vec![1.0]), &cmf).unwrap();
            assert!((xyz.x - x).abs() < 1e-12, "{wl} nm");
            assert!((xyz.y - y).abs() < 1e-12, "{wl} nm");
            assert!((xyz.z - z).abs() < 1e-12, "{wl} nm");
        }
    }

    #[test]
    fn normalization_only_scales_magnitude() {
        let cmf = cmf();
        let wl = vec![500.0, 550.0, 600.0];
        let a = spectrum_to_xyz(&spectrum(wl.clone(), vec![0.5, 1.0, 0.25]), &cmf).unwrap();
        let b = spectrum_to_xyz(&spectrum(wl, vec![2.0, 4.0, 1.0]), &cmf).unwrap();
        assert!((a.x - b.x).abs() < 1e-12);
        assert!((a.y - b.y).abs() < 1e-12);
        assert!((a.z - b.z).abs() < 1e-12);
    }

    #[test]
    fn all_zero_spectrum_is_degenerate() {
        let err = spectrum_to_xyz(&spectrum(vec![500.0, 510.0], vec![0.0, 0.0]), &cmf())
            .unwrap_err();
        assert!(matches!(
            err,
            ColorError::DegenerateSpectrum(Degeneracy::NonPositiveMaximum(m)) if m == 0.0
        ));
    }

    #[test]
    fn negative_maximum_is_degenerate() {
        let err = spectrum_to_xyz(&spectrum(vec![500.0], vec![-1.0]), &cmf()).unwrap_err();
        assert!(matches!(
            err,
            ColorError::DegenerateSpectrum(Degeneracy::NonPositiveMaximum(_))
        ));
    }

    #[test]
    fn non_finite_intensity_is_degenerate() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let s = spectrum(vec![540.0, 550.0, 560.0], vec![0.5, bad, 1.0]);
            match spectrum_to_xyz(&s, &cmf()) {
                Err(ColorError::DegenerateSpectrum(Degeneracy::NonFiniteIntensity(v))) => {
                    assert!(v.is_nan() || v == bad, "{bad}");
                }
                other => panic!("expected NonFiniteIntensity for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_spectrum_is_degenerate() {
        let err = spectrum_to_xyz(&spectrum(vec![], vec![]), &cmf()).unwrap_err();
        assert!(matches!(err, ColorError::DegenerateSpectrum(Degeneracy::Empty)));
    }

    #[test]
    fn spectrum_outside_vision_is_degenerate() {
        let err = spectrum_to_xyz(&spectrum(vec![900.0, 950.0], vec![1.0, 1.0]), &cmf())
            .unwrap_err();
        assert!(matches!(
            err,
            ColorError::DegenerateSpectrum(Degeneracy::ZeroTristimulus)
        ));
    }
}
