use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Mass of the Sun in grams (IAU 2015 nominal value).
pub const SOLAR_MASS_G: f64 = 1.98840987e33;

/// Mass of Jupiter in grams (IAU 2015 nominal value).
pub const JUPITER_MASS_G: f64 = 1.8981246e30;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit. Annulus masses are accumulated in grams
/// by the engine and converted here when they are reported or used as a
/// rate-table key (which is quoted in Jupiter masses).
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let star = Mass::from_solar_masses(1.0);
/// let disc = Mass::from_grams(1.0e31);
///
/// assert!(disc < star);
/// let jupiters = disc.to_jupiter_masses(); // ≈ 5.3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / JUPITER_MASS_G
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}
