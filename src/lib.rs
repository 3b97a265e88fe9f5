//! Spectral power distribution → CIE 1931 XYZ, xy chromaticity and sRGB.
//!
//! ```text
//!  spectrum file ──► spectrum_data::load_table ──► Spectrum
//!                                                     │
//!  data/CIE_xyz_1931_2deg.csv ──► CmfReference ───────┤
//!                                                     ▼
//!                                          colorimetry::spectrum_to_xyz
//!                                                     │
//!                                   ┌─────────────────┴───────────────┐
//!                                   ▼                                 ▼
//!                        colorimetry::chromaticity          colorimetry::xyz_to_rgb
//! ```

pub mod colorimetry;
pub mod config;
pub mod pipeline;
