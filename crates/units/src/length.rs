use serde::{Deserialize, Serialize};

/// One astronomical unit in centimeters (IAU 2012 definition).
pub const AU_CM: f64 = 1.495978707e13;

/// A physical length quantity using f64 precision.
///
/// The base unit is the astronomical unit, which is what disc grids are
/// laid out in. Areas and column masses are worked out in centimeters.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let edge = Length::from_au(100.0);
/// assert!(edge.to_cm() > 1.0e15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0 * AU_CM
    }

    /// Area of the annulus bounded by `self` (inner) and `outer`, in cm².
    ///
    /// A = π (R_out² − R_in²)
    pub fn annulus_area_cm2(self, outer: Length) -> f64 {
        let r_in = self.to_cm();
        let r_out = outer.to_cm();
        std::f64::consts::PI * (r_out * r_out - r_in * r_in)
    }
}
