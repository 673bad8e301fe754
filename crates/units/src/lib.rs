//! Physical units for disc photoevaporation.
//!
//! Disc models in `disc-wind` work in a mixed unit system: radii in AU,
//! surface densities in g/cm², masses in grams and times in *dynamical
//! times*, where one dynamical time is 1/Ω at 1 AU around a solar-mass star,
//! i.e. one year is 2π dynamical times. The newtypes here carry values in a
//! fixed base unit and provide the conversions the engine needs.

pub mod length;
pub mod mass;
pub mod mass_rate;
pub mod surface_density;
pub mod time;

#[cfg(test)]
mod mass_rate_test;

pub use length::{AU_CM, Length};
pub use mass::{JUPITER_MASS_G, Mass, SOLAR_MASS_G};
pub use mass_rate::MassRate;
pub use surface_density::SurfaceDensity;
pub use time::{DYNAMICAL_TIMES_PER_YEAR, Time};
