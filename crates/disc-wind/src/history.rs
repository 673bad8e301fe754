//! Running record of wind activity across timesteps.

use serde::{Deserialize, Serialize};
use units::{Mass, MassRate};

/// State that outlives a single removal step.
///
/// Holds the current maximum entrained grain size per annulus, the log of
/// wind mass-loss rates (one entry per tracked step) and the total mass of
/// dust carried off by the wind. The engine itself is stateless; callers
/// pass this in by mutable reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassLossHistory {
    amax: Vec<f64>,
    rates: Vec<MassRate>,
    wind_dust_mass: f64,
}

impl MassLossHistory {
    /// Empty history with the entrained size set to `amax` (cm) in each of
    /// `n_cells` annuli.
    pub fn with_amax(n_cells: usize, amax: f64) -> Self {
        Self {
            amax: vec![amax; n_cells],
            ..Self::default()
        }
    }

    /// Current maximum entrained grain size per annulus (cm).
    pub fn amax(&self) -> &[f64] {
        &self.amax
    }

    pub(crate) fn set_amax(&mut self, amax: Vec<f64>) {
        self.amax = amax;
    }

    /// Logged wind mass-loss rates, oldest first.
    pub fn rates(&self) -> &[MassRate] {
        &self.rates
    }

    /// Most recently logged rate.
    pub fn latest_rate(&self) -> Option<MassRate> {
        self.rates.last().copied()
    }

    pub(crate) fn record_rate(&mut self, rate: MassRate) {
        self.rates.push(rate);
    }

    /// Dust mass removed by the wind so far.
    pub fn wind_dust_mass(&self) -> Mass {
        Mass::from_grams(self.wind_dust_mass)
    }

    pub(crate) fn add_wind_dust(&mut self, grams: f64) {
        self.wind_dust_mass += grams;
    }
}
