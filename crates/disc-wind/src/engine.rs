//! Per-annulus mass-loss rates and depletion timescales.
//!
//! All rates leaving this module are in grams per dynamical time and all
//! masses in grams, so that `rate * dt` with `dt` in dynamical times is a
//! mass that can be divided by an annulus area to give a change in Σ.

use tracing::debug;
use units::MassRate;

use crate::disc::Disc;
use crate::geometry::{annulus_areas, annulus_masses, cumulative_inward};
use crate::history::MassLossHistory;
use crate::rates::RateModel;
use crate::table::RateTable;

/// Raw rates and gas masses of each annulus.
#[derive(Debug, Clone, PartialEq)]
pub struct UnweightedRates {
    /// Mass-loss rate if the annulus were the disc edge (g per dynamical time)
    pub rate: Vec<f64>,
    /// Gas mass in the annulus (g)
    pub gas_mass: Vec<f64>,
}

/// Depletion bookkeeping for the timescale removal scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct MassLossState {
    /// Mass-loss rate (g per dynamical time)
    pub rate: Vec<f64>,
    /// Gas mass in the annulus (g)
    pub mass: Vec<f64>,
    /// Gas mass in the annulus and everything outside it (g)
    pub cumulative_mass: Vec<f64>,
    /// Time to strip the annulus and everything outside it (dynamical times)
    pub cumulative_time: Vec<f64>,
}

/// Rates redistributed over the optically thin part of the disc.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedRates {
    /// Effective mass-loss rate of each annulus (g per dynamical time)
    pub rate: Vec<f64>,
    /// Gas mass in the annulus (g)
    pub gas_mass: Vec<f64>,
    /// Normalised weight of each annulus; zero inside the transition
    pub weight: Vec<f64>,
    /// Index of the optically thin/thick transition
    pub transition: usize,
    /// Total mass-loss rate (g per dynamical time)
    pub total: f64,
}

/// Raw rate and gas mass of every annulus.
///
/// When `history` is given, the rate of the outermost annulus that still
/// holds gas is logged in M☉/yr.
pub fn unweighted_rates<T: RateTable>(
    model: &RateModel<T>,
    disc: &Disc,
    history: Option<&mut MassLossHistory>,
) -> UnweightedRates {
    let sigma_gas = disc.sigma_gas();
    let non_empty: Vec<bool> = sigma_gas.iter().map(|&s| s > 0.0).collect();

    let areas = annulus_areas(&disc.r_edge);
    let gas_mass = annulus_masses(&areas, &sigma_gas);

    let rate: Vec<f64> = model
        .mass_loss_rate(disc, &non_empty)
        .into_iter()
        .map(|mdot| MassRate::from_solar_masses_per_year(mdot).to_grams_per_dynamical_time())
        .collect();

    if let Some(history) = history {
        if let Some(edge) = non_empty.iter().rposition(|&filled| filled) {
            history.record_rate(MassRate::from_grams_per_dynamical_time(rate[edge]));
        }
    }

    UnweightedRates { rate, gas_mass }
}

/// Depletion time of each annulus, accumulated from the outer edge inward.
///
/// An annulus can only start losing mass once everything outside it has
/// gone, so the time to empty annulus *i* is the sum of the individual
/// depletion times of annuli *i..N*. Empty annuli contribute nothing; an
/// annulus with gas but no wind never empties.
pub fn get_timescale<T: RateTable>(
    model: &RateModel<T>,
    disc: &Disc,
    history: Option<&mut MassLossHistory>,
) -> MassLossState {
    let UnweightedRates { rate, gas_mass } = unweighted_rates(model, disc, history);

    let depletion_time: Vec<f64> = gas_mass
        .iter()
        .zip(&rate)
        .map(|(&mass, &rate)| if mass > 0.0 { mass / rate } else { 0.0 })
        .collect();

    MassLossState {
        cumulative_mass: cumulative_inward(&gas_mass),
        cumulative_time: cumulative_inward(&depletion_time),
        rate,
        mass: gas_mass,
    }
}

/// Weight the raw rates towards the optically thin outer disc.
///
/// The raw rate peaks at the optically thin/thick transition: inside it the
/// wind cannot be launched from the disc surface. Searching from the outer
/// edge, the first maximum marks the transition. The total rate is the
/// raw rate weighted by w ∝ R^1.5 Σ_G over annuli at or beyond the
/// transition, and is handed back out in proportion to the same weights.
///
/// When `history` is given, the total rate is logged in M☉/yr.
pub fn optically_thin_weighting<T: RateTable>(
    model: &RateModel<T>,
    disc: &Disc,
    history: Option<&mut MassLossHistory>,
) -> WeightedRates {
    let UnweightedRates { rate, gas_mass } = unweighted_rates(model, disc, None);

    let transition = outermost_maximum(&rate);
    let r_transition = disc.r[transition];

    let mut weight: Vec<f64> = disc
        .r
        .iter()
        .zip(disc.sigma_gas())
        .map(|(&r, sigma)| {
            if r >= r_transition {
                r.powf(1.5) * sigma
            } else {
                0.0
            }
        })
        .collect();

    let norm: f64 = weight.iter().sum();
    if norm > 0.0 {
        weight.iter_mut().for_each(|w| *w /= norm);
    } else {
        weight.fill(0.0);
    }

    let total: f64 = rate.iter().zip(&weight).map(|(r, w)| r * w).sum();
    let effective = weight.iter().map(|w| total * w).collect();

    debug!(
        transition,
        r_transition,
        total_msun_yr = MassRate::from_grams_per_dynamical_time(total).to_solar_masses_per_year(),
        "optically thin weighting"
    );

    if let Some(history) = history {
        history.record_rate(MassRate::from_grams_per_dynamical_time(total));
    }

    WeightedRates {
        rate: effective,
        gas_mass,
        weight,
        transition,
        total,
    }
}

/// Index of the largest value, preferring the outermost on ties.
fn outermost_maximum(values: &[f64]) -> usize {
    let mut best = values.len().saturating_sub(1);
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate().rev() {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}
