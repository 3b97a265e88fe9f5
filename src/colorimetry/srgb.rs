use std::fmt;

use glam::{DMat3, DVec3};
use serde::Serialize;

use super::Xyz;

/// XYZ → linear sRGB (D65), IEC 61966-2-1 coefficients. Column-major.
const XYZ_TO_LINEAR_SRGB: DMat3 = DMat3::from_cols(
    DVec3::new(3.2406, -0.9689, 0.0557),
    DVec3::new(-1.5372, 1.8758, -0.2040),
    DVec3::new(-0.4986, 0.0415, 1.0570),
);

/// Linear values at or below this use the linear toe of the transfer curve.
const GAMMA_BREAKPOINT: f64 = 0.0031308;

/// 8-bit gamma-encoded sRGB, serialized as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb8(pub [u8; 3]);

impl Rgb8 {
    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "[{r}, {g}, {b}]")
    }
}

/// sRGB transfer function for a linear value in `[0, 1]`.
pub fn gamma_encode(v: f64) -> f64 {
    if v <= GAMMA_BREAKPOINT {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Map XYZ to display sRGB.
///
/// Out-of-gamut (negative) linear channels are clipped to 0 and the result is
/// scaled so the brightest channel is 1: this shows hue, not luminance.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb8 {
    let linear = XYZ_TO_LINEAR_SRGB * xyz.to_vec3();
    tracing::debug!(r = linear.x, g = linear.y, b = linear.z, "linear RGB before clipping");

    let clipped = linear.max(DVec3::ZERO);
    let peak = clipped.max_element();
    let normalized = if peak > 0.0 { clipped / peak } else { clipped };
    tracing::debug!(
        r = normalized.x,
        g = normalized.y,
        b = normalized.z,
        "normalized linear RGB"
    );

    let encoded = normalized.to_array().map(gamma_encode);
    tracing::debug!(?encoded, "gamma-encoded RGB");

    // Normalization keeps channels in [0, 1]; the clamp only guards rounding.
    Rgb8(encoded.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8))
}
