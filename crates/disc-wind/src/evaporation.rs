//! Timestep entry point for external photoevaporation.
//!
//! [`ExternalPhotoevaporation`] pairs a rate provider with the history it
//! accumulates and applies one step of mass removal per call. The choice of
//! removal scheme follows from the provider:
//!
//! | provider | scheme |
//! |----------|--------|
//! | `Fixed`, `ByIntegratedMass` | [`timescale_remove`] |
//! | `BySurfaceDensity`, `ByExtrapolatedMass` | [`weighted_remove`] |

use tracing::{debug, instrument, warn};
use units::Time;

use crate::disc::Disc;
use crate::history::MassLossHistory;
use crate::rates::{RateModel, RemovalScheme};
use crate::removal::{RemovalReport, timescale_remove, weighted_remove};
use crate::table::{RateGrid, RateTable};

/// Relative mismatch between disc and table stellar mass that is reported.
const STELLAR_MASS_TOLERANCE: f64 = 1e-3;

/// External photoevaporation of a disc's outer edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalPhotoevaporation<T = RateGrid> {
    model: RateModel<T>,
    history: MassLossHistory,
}

impl<T: RateTable> ExternalPhotoevaporation<T> {
    /// Set up photoevaporation for `disc`.
    ///
    /// The entrained size starts at the fixed provider's `amax`, or zero for
    /// table providers. A table computed for a different star or FUV field
    /// than the disc's is accepted but reported.
    pub fn new(model: RateModel<T>, disc: &Disc) -> Self {
        let amax = match &model {
            RateModel::Fixed { amax, .. } => *amax,
            _ => 0.0,
        };

        if let Some(table) = model.table() {
            check_table(table, disc);
        }

        Self {
            history: MassLossHistory::with_amax(disc.n_cells(), amax),
            model,
        }
    }

    /// Resume from a previously accumulated history.
    pub fn with_history(model: RateModel<T>, history: MassLossHistory) -> Self {
        Self { model, history }
    }

    /// Active rate provider.
    pub fn model(&self) -> &RateModel<T> {
        &self.model
    }

    /// Accumulated wind history.
    pub fn history(&self) -> &MassLossHistory {
        &self.history
    }

    /// Split into the provider and its history.
    pub fn into_parts(self) -> (RateModel<T>, MassLossHistory) {
        (self.model, self.history)
    }

    /// Maximum grain size (cm) currently entrained at each annulus.
    pub fn max_size_entrained(&self, disc: &Disc) -> Vec<f64> {
        self.model.max_size_entrained(disc, &self.history)
    }

    /// Remove gas (and entrained dust) from the disc edge over `dt`
    /// dynamical times.
    ///
    /// Returns `None` when nothing was attempted: a non-positive fixed
    /// rate, a disc without gas, or an invalid `dt`.
    #[instrument(level = "debug", skip_all, fields(kind = ?self.model.kind(), dt = dt))]
    pub fn remove(&mut self, disc: &mut Disc, dt: f64) -> Option<RemovalReport> {
        remove_mass(&self.model, disc, dt, &mut self.history)
    }

    /// [`Self::remove`] with the step given as a [`Time`].
    pub fn remove_over(&mut self, disc: &mut Disc, step: Time) -> Option<RemovalReport> {
        self.remove(disc, step.to_dynamical_times())
    }
}

/// Apply one step of external photoevaporation, dispatching to the removal
/// scheme that matches the provider.
///
/// `dt` is in dynamical times. The disc is left untouched when the fixed
/// rate is not positive, when no annulus holds gas, or when `dt` is
/// negative or not finite.
pub fn remove_mass<T: RateTable>(
    model: &RateModel<T>,
    disc: &mut Disc,
    dt: f64,
    history: &mut MassLossHistory,
) -> Option<RemovalReport> {
    if !(dt.is_finite() && dt >= 0.0) {
        warn!(dt, "ignoring photoevaporation step with invalid dt");
        return None;
    }

    if let RateModel::Fixed { mdot, .. } = model {
        if *mdot <= 0.0 {
            return None;
        }
    }

    if !disc.has_gas() {
        debug!("disc has no gas left, skipping photoevaporation");
        return None;
    }

    let report = match model.kind().removal_scheme() {
        RemovalScheme::Timescale => timescale_remove(model, disc, dt, history),
        RemovalScheme::Weighted => weighted_remove(model, disc, dt, history),
    };

    Some(report)
}

fn check_table<T: RateTable>(table: &T, disc: &Disc) {
    if let Some(table_mass) = table.stellar_mass() {
        let disc_mass = disc.stellar_mass.to_solar_masses();
        let mismatch = (table_mass.to_solar_masses() - disc_mass).abs() / disc_mass;
        if mismatch > STELLAR_MASS_TOLERANCE {
            warn!(
                table_msun = table_mass.to_solar_masses(),
                disc_msun = disc_mass,
                "rate table computed for a different stellar mass"
            );
        }
    }

    if let Some(table_fuv) = table.fuv() {
        if table_fuv != disc.fuv {
            warn!(table_fuv, disc_fuv = disc.fuv, "rate table computed for a different FUV field");
        }
    }
}
