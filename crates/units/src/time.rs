use serde::{Deserialize, Serialize};

/// Dynamical times per year.
///
/// The dynamical time is 1/Ω at 1 AU around a solar-mass star, so an
/// orbital period of one year spans 2π of them.
pub const DYNAMICAL_TIMES_PER_YEAR: f64 = 2.0 * std::f64::consts::PI;

/// A physical time quantity using f64 precision.
///
/// Years are the base unit. Disc evolution codes step in dynamical times;
/// [`Time::to_dynamical_times`] converts.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let step = Time::from_years(1.0e4);
/// let dt = step.to_dynamical_times(); // ≈ 6.28e4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    /// Returns the time in years.
    pub fn to_years(&self) -> f64 {
        self.0
    }

    /// Converts the time to dynamical times.
    pub fn to_dynamical_times(&self) -> f64 {
        self.0 * DYNAMICAL_TIMES_PER_YEAR
    }
}
