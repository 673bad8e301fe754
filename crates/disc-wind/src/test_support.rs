//! Shared fixtures for unit tests.

use units::Mass;

use crate::disc::{Disc, DustState};
use crate::table::{RateGrid, RateTable};

/// Five annuli between 10 and 60 AU with uniform Σ.
pub(crate) fn uniform_disc(sigma: f64) -> Disc {
    let edges = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
    Disc::isothermal(edges, vec![sigma; 5], 0.05, Mass::from_solar_masses(1.0), 1000.0)
        .expect("valid disc")
}

/// `n` annuli from 1 to 200 AU with Σ ∝ 1/R, normalised to `sigma_1au` at
/// 1 AU.
pub(crate) fn power_law_disc(n: usize, sigma_1au: f64) -> Disc {
    let edges: Vec<f64> = (0..=n)
        .map(|i| 1.0 * 200f64.powf(i as f64 / n as f64))
        .collect();
    let sigma: Vec<f64> = edges
        .windows(2)
        .map(|w| sigma_1au / (0.5 * (w[0] + w[1])))
        .collect();
    Disc::isothermal(edges, sigma, 0.05, Mass::from_solar_masses(1.0), 1000.0)
        .expect("valid disc")
}

/// Attach uniform two-population dust: 0.2% small grains of 1 µm and 0.8%
/// large grains of 1 mm.
pub(crate) fn with_dust(disc: Disc) -> Disc {
    let n = disc.n_cells();
    disc.with_dust(DustState::uniform(n, [0.002, 0.008], [1e-4, 0.1]))
        .expect("valid dust")
}

/// Analytic table: rate = `scale` × condition^`condition_power` ×
/// (R / 100 AU)^`radius_power`, undefined for conditions above `max_condition`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PowerLawTable {
    pub scale: f64,
    pub condition_power: f64,
    pub radius_power: f64,
    pub max_condition: f64,
}

impl PowerLawTable {
    pub(crate) fn new(scale: f64, condition_power: f64, radius_power: f64) -> Self {
        Self {
            scale,
            condition_power,
            radius_power,
            max_condition: f64::INFINITY,
        }
    }
}

impl RateTable for PowerLawTable {
    fn rate(&self, condition: f64, radius: f64) -> f64 {
        if !(condition > 0.0 && condition <= self.max_condition) {
            return f64::NAN;
        }
        self.scale * condition.powf(self.condition_power) * (radius / 100.0).powf(self.radius_power)
    }
}

/// Rate with a log-normal peak in radius, independent of the condition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PeakedTable {
    pub peak_au: f64,
}

impl RateTable for PeakedTable {
    fn rate(&self, _condition: f64, radius: f64) -> f64 {
        1e-7 * (-(radius / self.peak_au).ln().powi(2)).exp()
    }
}

/// Small FRIED-like grid for a solar-mass star at 1000 G0, with the rate
/// rising with both the condition and the radius.
pub(crate) fn sample_grid() -> RateGrid {
    RateGrid::from_fn(
        Mass::from_solar_masses(1.0),
        1000.0,
        vec![0.01, 0.1, 1.0, 10.0, 100.0, 1000.0],
        vec![1.0, 10.0, 50.0, 100.0, 250.0, 500.0],
        |c, r| 1e-9 * c.powf(0.5) * (r / 100.0).powi(2),
    )
    .expect("valid grid")
}
