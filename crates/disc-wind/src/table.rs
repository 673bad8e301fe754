//! Precomputed mass-loss rate tables.
//!
//! External photoevaporation rates come from grids of hydrodynamic wind
//! models (e.g. the FRIED grid of Haworth et al. 2018), tabulated for a
//! given stellar mass and external FUV field as a function of a disc
//! property at the outer edge and the edge radius. The engine only depends
//! on the [`RateTable`] trait; [`RateGrid`] is a rectilinear implementation
//! that interpolates in log space.
//!
//! # Undefined values
//!
//! Queries outside the tabulated domain return NaN. Rate providers replace
//! those with a floor rate; tables must never extrapolate.

use serde::{Deserialize, Serialize};
use units::Mass;

use crate::error::TableError;

/// A pure lookup of the mass-loss rate (M☉/yr) at fixed stellar mass and
/// FUV flux.
pub trait RateTable {
    /// Rate for a disc whose edge sits at `radius` (AU) with local
    /// condition `condition` (surface density or mass, depending on the
    /// table). Returns NaN outside the table's domain.
    fn rate(&self, condition: f64, radius: f64) -> f64;

    /// Stellar mass the table was computed for, if known.
    fn stellar_mass(&self) -> Option<Mass> {
        None
    }

    /// FUV field (G0) the table was computed for, if known.
    fn fuv(&self) -> Option<f64> {
        None
    }
}

/// Rectilinear rate grid over (condition, radius).
///
/// Rates are stored condition-major: `rates[i * radii.len() + j]` is the
/// rate at `conditions[i]`, `radii[j]`. Interpolation is bilinear in
/// (ln condition, ln radius) on ln rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRateGrid")]
pub struct RateGrid {
    stellar_mass: Mass,
    fuv: f64,
    conditions: Vec<f64>,
    radii: Vec<f64>,
    rates: Vec<f64>,
}

/// Unvalidated grid as it appears on the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRateGrid {
    stellar_mass: Mass,
    fuv: f64,
    conditions: Vec<f64>,
    radii: Vec<f64>,
    rates: Vec<f64>,
}

impl TryFrom<RawRateGrid> for RateGrid {
    type Error = TableError;

    fn try_from(raw: RawRateGrid) -> Result<Self, Self::Error> {
        RateGrid::new(raw.stellar_mass, raw.fuv, raw.conditions, raw.radii, raw.rates)
    }
}

impl RateGrid {
    /// Build a grid, validating its axes and values.
    ///
    /// # Errors
    /// Returns a [`TableError`] if an axis has fewer than two nodes or is
    /// not positive and strictly increasing, if `rates` does not have
    /// `conditions.len() * radii.len()` entries, or if any rate is not
    /// positive and finite.
    pub fn new(
        stellar_mass: Mass,
        fuv: f64,
        conditions: Vec<f64>,
        radii: Vec<f64>,
        rates: Vec<f64>,
    ) -> Result<Self, TableError> {
        check_axis("condition", &conditions)?;
        check_axis("radius", &radii)?;

        let expected = conditions.len() * radii.len();
        if rates.len() != expected {
            return Err(TableError::ShapeMismatch {
                expected,
                actual: rates.len(),
            });
        }
        if let Some(index) = rates.iter().position(|r| !(r.is_finite() && *r > 0.0)) {
            return Err(TableError::InvalidRate {
                index,
                value: rates[index],
            });
        }

        Ok(Self {
            stellar_mass,
            fuv,
            conditions,
            radii,
            rates,
        })
    }

    /// Build a grid by evaluating `f(condition, radius)` at every node.
    pub fn from_fn(
        stellar_mass: Mass,
        fuv: f64,
        conditions: Vec<f64>,
        radii: Vec<f64>,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, TableError> {
        let rates: Vec<f64> = conditions
            .iter()
            .flat_map(|&c| radii.iter().map(move |&r| (c, r)))
            .map(|(c, r)| f(c, r))
            .collect();
        Self::new(stellar_mass, fuv, conditions, radii, rates)
    }

    /// Condition axis nodes.
    pub fn conditions(&self) -> &[f64] {
        &self.conditions
    }

    /// Radius axis nodes (AU).
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    fn ln_rate(&self, i: usize, j: usize) -> f64 {
        self.rates[i * self.radii.len() + j].ln()
    }
}

impl RateTable for RateGrid {
    fn rate(&self, condition: f64, radius: f64) -> f64 {
        let (Some((i, tx)), Some((j, ty))) =
            (locate(&self.conditions, condition), locate(&self.radii, radius))
        else {
            return f64::NAN;
        };

        let ln_rate = (1.0 - tx) * (1.0 - ty) * self.ln_rate(i, j)
            + tx * (1.0 - ty) * self.ln_rate(i + 1, j)
            + (1.0 - tx) * ty * self.ln_rate(i, j + 1)
            + tx * ty * self.ln_rate(i + 1, j + 1);

        ln_rate.exp()
    }

    fn stellar_mass(&self) -> Option<Mass> {
        Some(self.stellar_mass)
    }

    fn fuv(&self) -> Option<f64> {
        Some(self.fuv)
    }
}

/// Lower bracketing node and fractional position in log space, or `None`
/// outside the axis (including NaN input).
fn locate(axis: &[f64], x: f64) -> Option<(usize, f64)> {
    let (first, last) = (*axis.first()?, *axis.last()?);
    if !(x >= first && x <= last) {
        return None;
    }

    let upper = axis.partition_point(|&node| node <= x).min(axis.len() - 1);
    let i = upper - 1;
    let (lo, hi) = (axis[i].ln(), axis[i + 1].ln());

    Some((i, (x.ln() - lo) / (hi - lo)))
}

fn check_axis(axis: &'static str, nodes: &[f64]) -> Result<(), TableError> {
    if nodes.len() < 2 {
        return Err(TableError::AxisTooShort {
            axis,
            len: nodes.len(),
        });
    }
    let positive = nodes[0] > 0.0 && nodes.iter().all(|n| n.is_finite());
    if !positive || nodes.windows(2).any(|w| w[1] <= w[0]) {
        return Err(TableError::AxisNotIncreasing { axis });
    }
    Ok(())
}
