use serde::{Deserialize, Serialize};

use crate::mass::{Mass, SOLAR_MASS_G};
use crate::time::{DYNAMICAL_TIMES_PER_YEAR, Time};

/// A mass-loss (or accretion) rate using f64 precision.
///
/// Solar masses per year is the base unit, which is how photoevaporation
/// rate tables are quoted. The removal engine works in grams per dynamical
/// time; [`MassRate::to_grams_per_dynamical_time`] is the conversion used at
/// that boundary:
///
/// ```text
/// 1 M☉/yr = M☉ / (2π) g per dynamical time
/// ```
///
/// # Examples
///
/// ```rust
/// use units::{MassRate, Time};
///
/// let wind = MassRate::from_solar_masses_per_year(1e-8);
/// let lost = wind.integrate(Time::from_years(1.0e6));
/// assert!((lost.to_solar_masses() - 1e-2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: Solar Masses per year

impl MassRate {
    /// Creates a new `MassRate` from a value in solar masses per year.
    pub fn from_solar_masses_per_year(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MassRate` from a value in grams per dynamical time.
    pub fn from_grams_per_dynamical_time(value: f64) -> Self {
        Self(value * DYNAMICAL_TIMES_PER_YEAR / SOLAR_MASS_G)
    }

    /// Returns the rate in solar masses per year.
    pub fn to_solar_masses_per_year(&self) -> f64 {
        self.0
    }

    /// Converts the rate to grams per dynamical time.
    pub fn to_grams_per_dynamical_time(&self) -> f64 {
        self.0 * SOLAR_MASS_G / DYNAMICAL_TIMES_PER_YEAR
    }

    /// Integrates the rate over a time period to get total mass.
    pub fn integrate(&self, duration: Time) -> Mass {
        Mass::from_solar_masses(self.0 * duration.to_years())
    }
}
