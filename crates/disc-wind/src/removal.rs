//! Removal schemes that apply the wind to the disc.
//!
//! Both schemes take `dt` in dynamical times and mutate `disc.sigma` in
//! place. Neither can fail: empty annuli, zero-mass divisions and a disc
//! that empties completely are handled by skipping the affected step.

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Mass, MassRate};

use crate::disc::Disc;
use crate::engine::{get_timescale, optically_thin_weighting};
use crate::entrainment::{dust_entrainment, facchini_limit};
use crate::geometry::annulus_areas;
use crate::history::MassLossHistory;
use crate::rates::{RateModel, RemovalScheme};
use crate::table::RateTable;

/// Summary of one removal step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalReport {
    /// Scheme that was applied
    pub scheme: RemovalScheme,
    /// Gas mass taken from the disc
    pub gas_mass_removed: Mass,
    /// Entrained dust mass taken from the disc
    pub dust_mass_removed: Mass,
    /// Annuli that held material before the step and none after it
    pub emptied_cells: usize,
}

/// Empty annuli from the outside in according to their cumulative
/// depletion time.
///
/// Every annulus whose cumulative depletion time is shorter than `dt` is
/// cleared. The next annulus inward is only partly stripped: it keeps the
/// fraction of its own depletion time that `dt` did not reach. Dust is not
/// treated separately; Σ is scaled as a whole.
///
/// The rate of the outermost filled annulus is logged to `history`. For
/// table providers the entrained size stored in `history` is refreshed from
/// that rate.
pub fn timescale_remove<T: RateTable>(
    model: &RateModel<T>,
    disc: &mut Disc,
    dt: f64,
    history: &mut MassLossHistory,
) -> RemovalReport {
    let state = get_timescale(model, disc, Some(&mut *history));
    let n = disc.n_cells();

    if model.table().is_some() {
        if let Some(rate) = history.latest_rate() {
            history.set_amax(facchini_limit(disc, &vec![rate.to_solar_masses_per_year(); n]));
        }
    }

    let initial_mass = disc.total_mass();
    let initially_filled = count_filled(&disc.sigma);

    let excess: Vec<f64> = state.cumulative_time.iter().map(|&t| dt - t).collect();

    let mut n_empty = 0;
    for (sigma, &e) in disc.sigma.iter_mut().zip(&excess) {
        if e > 0.0 {
            *sigma = 0.0;
            n_empty += 1;
        }
    }

    // Cleared annuli form a contiguous block at the outer edge because the
    // cumulative time never increases outward. The marginal annulus sits
    // just inside that block.
    if n_empty < n {
        let marginal = n - n_empty - 1;
        let outer_time = state.cumulative_time.get(marginal + 1).copied().unwrap_or(0.0);
        let own_time = state.cumulative_time[marginal] - outer_time;

        let remaining = (-excess[marginal]).max(0.0) / own_time;
        if own_time > 0.0 && remaining.is_finite() {
            disc.sigma[marginal] *= remaining;
        }
    }

    let removed = initial_mass - disc.total_mass();
    let report = RemovalReport {
        scheme: RemovalScheme::Timescale,
        gas_mass_removed: removed,
        dust_mass_removed: Mass::zero(),
        emptied_cells: initially_filled.saturating_sub(count_filled(&disc.sigma)),
    };

    debug!(
        dt,
        n_empty,
        removed_msun = removed.to_solar_masses(),
        "timescale removal"
    );

    report
}

/// Remove gas at the optically-thin-weighted rate, carrying entrained dust
/// with it.
///
/// For dusty discs the maximum entrained size stored in `history` is
/// refreshed from the total wind rate, the entrained dust is removed in
/// proportion to the fraction of each annulus' gas that went, and the dust
/// fractions are rebuilt from what is left. Removed dust accumulates in
/// `history`.
pub fn weighted_remove<T: RateTable>(
    model: &RateModel<T>,
    disc: &mut Disc,
    dt: f64,
    history: &mut MassLossHistory,
) -> RemovalReport {
    let weighted = optically_thin_weighting(model, disc, None);
    let n = disc.n_cells();
    let areas = annulus_areas(&disc.r_edge);
    let initially_filled = count_filled(&disc.sigma);

    // Dust state before any gas goes: total dust Σ and the share of it held
    // by the large grains.
    let dust_before = disc.dust.as_ref().map(|dust| {
        let sigma_dust = disc.sigma_dust_total();
        let f_m: Vec<f64> = (0..n)
            .map(|i| {
                if sigma_dust[i] > 0.0 {
                    dust.dust_frac[1][i] / (dust.dust_frac[0][i] + dust.dust_frac[1][i])
                } else {
                    0.0
                }
            })
            .collect();
        (sigma_dust, f_m)
    });

    let entrained = if disc.has_dust() {
        let total_rate: f64 = weighted.rate.iter().sum();
        let total_msun_yr =
            MassRate::from_grams_per_dynamical_time(total_rate).to_solar_masses_per_year();
        let mdot: Vec<f64> = weighted
            .rate
            .iter()
            .map(|&r| if r > 0.0 { total_msun_yr } else { 0.0 })
            .collect();

        history.set_amax(facchini_limit(disc, &mdot));
        dust_entrainment(disc, history.amax())
    } else {
        vec![0.0; n]
    };

    // Gas
    let gas_removed: Vec<f64> = weighted.rate.iter().map(|rate| rate * dt).collect();
    let mut gas_taken = 0.0;
    for ((sigma, &removed), &area) in disc.sigma.iter_mut().zip(&gas_removed).zip(&areas) {
        let available = *sigma * area;
        gas_taken += removed.min(available);
        *sigma = (*sigma - removed / area).max(0.0);
    }

    // Entrained dust, in proportion to the gas that left each annulus
    let mut dust_taken = 0.0;
    if let Some((sigma_dust, f_m)) = dust_before {
        let dust_removed: Vec<f64> = (0..n)
            .map(|i| {
                if weighted.gas_mass[i] > 0.0 {
                    entrained[i] * gas_removed[i] / weighted.gas_mass[i]
                } else {
                    0.0
                }
            })
            .collect();

        for ((sigma, &removed), &area) in disc.sigma.iter_mut().zip(&dust_removed).zip(&areas) {
            let available = *sigma * area;
            dust_taken += removed.min(available);
            *sigma = (*sigma - removed / area).max(0.0);
        }

        if let Some(dust) = disc.dust.as_mut() {
            for i in 0..n {
                if disc.sigma[i] > 0.0 {
                    let sigma_d = (sigma_dust[i] - dust_removed[i] / areas[i]).max(0.0);
                    let eps = sigma_d / disc.sigma[i];
                    dust.dust_frac[0][i] = eps * (1.0 - f_m[i]);
                    dust.dust_frac[1][i] = eps * f_m[i];
                } else {
                    dust.dust_frac[0][i] = 0.0;
                    dust.dust_frac[1][i] = 0.0;
                }
            }
        }

        history.add_wind_dust(dust_taken);
    }

    let report = RemovalReport {
        scheme: RemovalScheme::Weighted,
        gas_mass_removed: Mass::from_grams(gas_taken),
        dust_mass_removed: Mass::from_grams(dust_taken),
        emptied_cells: initially_filled.saturating_sub(count_filled(&disc.sigma)),
    };

    debug!(
        dt,
        transition = weighted.transition,
        gas_msun = report.gas_mass_removed.to_solar_masses(),
        dust_msun = report.dust_mass_removed.to_solar_masses(),
        "weighted removal"
    );

    report
}

fn count_filled(sigma: &[f64]) -> usize {
    sigma.iter().filter(|&&s| s > 0.0).count()
}
