use serde::{Deserialize, Serialize};

use crate::length::AU_CM;
use crate::mass::{Mass, SOLAR_MASS_G};

/// A surface mass density using f64 precision.
///
/// The base unit is g/cm², the unit disc surface densities are evolved in.
///
/// # Examples
///
/// ```rust
/// use units::SurfaceDensity;
///
/// let sigma = SurfaceDensity::from_grams_per_cm2(10.0);
/// let ring = sigma.mass_over(1.0e27); // area in cm²
/// assert!((ring.to_grams() / 1.0e28 - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SurfaceDensity(f64); // Base unit: g/cm²

impl SurfaceDensity {
    /// Creates a new `SurfaceDensity` from a value in g/cm².
    pub fn from_grams_per_cm2(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `SurfaceDensity` from a value in M☉/AU².
    pub fn from_solar_masses_per_au2(value: f64) -> Self {
        Self(value * SOLAR_MASS_G / (AU_CM * AU_CM))
    }

    /// Returns the surface density in g/cm².
    pub fn to_grams_per_cm2(&self) -> f64 {
        self.0
    }

    /// Mass contained in an area given in cm².
    pub fn mass_over(&self, area_cm2: f64) -> Mass {
        Mass::from_grams(self.0 * area_cm2)
    }
}
