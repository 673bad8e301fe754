//! The disc state the wind acts on.
//!
//! A `Disc` is a snapshot of a radially-gridded protoplanetary disc: annulus
//! radii, total surface density and the thermal structure needed by the
//! entrainment model. The engine borrows it mutably for the duration of one
//! removal step and only ever writes `sigma` and the dust fractions.
//!
//! # Units
//!
//! | quantity | unit |
//! |----------|------|
//! | radii, scale height | AU |
//! | surface density | g/cm² |
//! | sound speed | AU per dynamical time |
//! | grain size | cm |
//! | grain density | g/cm³ |
//!
//! With G = 1 in AU³ M☉⁻¹ t_dyn⁻², the Keplerian frequency is
//! Ω = √(M_* / r³) and the isothermal sound speed is c_s = h Ω.

use serde::{Deserialize, Serialize};
use units::{Mass, SurfaceDensity};

use crate::error::{DiscError, DiscResult};
use crate::geometry::annulus_areas;

/// Power-law index of the MRN grain size distribution, n(a) ∝ a^(-3.5).
pub const MRN_SIZE_INDEX: f64 = 3.5;

/// Internal density of silicate grains (g/cm³).
pub const DEFAULT_GRAIN_DENSITY: f64 = 1.0;

/// Two-population dust content of a disc.
///
/// Population 0 holds the small grains that stay coupled to the gas,
/// population 1 the large grains whose size sets the top of the size
/// distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustState {
    /// Dust-to-total mass fraction of each population.
    pub dust_frac: [Vec<f64>; 2],

    /// Representative grain size of each population (cm).
    pub grain_size: [Vec<f64>; 2],

    /// Internal grain density ρ_s (g/cm³).
    pub grain_density: f64,

    /// Index p of the grain size distribution n(a) ∝ a^(-p).
    pub size_distribution_index: f64,
}

impl DustState {
    /// Dust with uniform fractions and sizes, MRN distribution and silicate
    /// grain density.
    pub fn uniform(n_cells: usize, dust_frac: [f64; 2], grain_size: [f64; 2]) -> Self {
        Self {
            dust_frac: [vec![dust_frac[0]; n_cells], vec![dust_frac[1]; n_cells]],
            grain_size: [vec![grain_size[0]; n_cells], vec![grain_size[1]; n_cells]],
            grain_density: DEFAULT_GRAIN_DENSITY,
            size_distribution_index: MRN_SIZE_INDEX,
        }
    }

    /// Combined dust fraction ε₀ + ε₁ per annulus.
    pub fn integ_dust_frac(&self) -> Vec<f64> {
        self.dust_frac[0]
            .iter()
            .zip(&self.dust_frac[1])
            .map(|(e0, e1)| e0 + e1)
            .collect()
    }
}

/// Radially-gridded disc.
///
/// Deserialization goes through [`Disc::new`] and [`Disc::with_dust`]:
/// centre radii are recomputed from the edges and every other field is
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDisc")]
pub struct Disc {
    /// Annulus centre radii (AU), inner to outer.
    pub r: Vec<f64>,

    /// Annulus edge radii (AU), one more than `r`.
    pub r_edge: Vec<f64>,

    /// Total (gas + dust) surface density (g/cm²).
    pub sigma: Vec<f64>,

    /// Pressure scale height (AU).
    pub h: Vec<f64>,

    /// Sound speed (AU per dynamical time).
    pub cs: Vec<f64>,

    /// Central stellar mass.
    pub stellar_mass: Mass,

    /// External FUV field strength (G0).
    pub fuv: f64,

    /// Dust content, if the disc carries any.
    pub dust: Option<DustState>,
}

/// Unvalidated disc as it appears on the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDisc {
    r_edge: Vec<f64>,
    sigma: Vec<f64>,
    h: Vec<f64>,
    cs: Vec<f64>,
    stellar_mass: Mass,
    fuv: f64,
    #[serde(default)]
    dust: Option<DustState>,
}

impl TryFrom<RawDisc> for Disc {
    type Error = DiscError;

    fn try_from(raw: RawDisc) -> Result<Self, Self::Error> {
        let disc = Disc::new(raw.r_edge, raw.sigma, raw.h, raw.cs, raw.stellar_mass, raw.fuv)?;
        match raw.dust {
            Some(dust) => disc.with_dust(dust),
            None => Ok(disc),
        }
    }
}

impl Disc {
    /// Create a dust-free disc from edge radii and per-annulus quantities.
    ///
    /// Centre radii are the arithmetic midpoints of the edges.
    ///
    /// # Errors
    /// Returns a [`DiscError`] if the edges are not strictly increasing, any
    /// per-annulus vector has the wrong length, or a density is negative.
    pub fn new(
        r_edge: Vec<f64>,
        sigma: Vec<f64>,
        h: Vec<f64>,
        cs: Vec<f64>,
        stellar_mass: Mass,
        fuv: f64,
    ) -> DiscResult<Self> {
        if r_edge.len() < 2 {
            return Err(DiscError::NoAnnuli);
        }
        if let Some(index) = r_edge
            .windows(2)
            .position(|w| !(w[0] >= 0.0 && w[1] > w[0]))
        {
            return Err(DiscError::NonMonotonicEdges { index });
        }

        let r: Vec<f64> = r_edge.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
        let n = r.len();

        check_len("sigma", &sigma, n)?;
        check_len("h", &h, n)?;
        check_len("cs", &cs, n)?;
        check_non_negative("sigma", &sigma)?;

        Ok(Self {
            r,
            r_edge,
            sigma,
            h,
            cs,
            stellar_mass,
            fuv,
            dust: None,
        })
    }

    /// Create a locally isothermal disc with constant aspect ratio h/r.
    ///
    /// h = (h/r) r and c_s = h Ω with Ω = √(M_* / r³).
    pub fn isothermal(
        r_edge: Vec<f64>,
        sigma: Vec<f64>,
        aspect_ratio: f64,
        stellar_mass: Mass,
        fuv: f64,
    ) -> DiscResult<Self> {
        let m_star = stellar_mass.to_solar_masses();
        let h: Vec<f64> = r_edge
            .windows(2)
            .map(|w| aspect_ratio * 0.5 * (w[0] + w[1]))
            .collect();
        let cs: Vec<f64> = r_edge
            .windows(2)
            .zip(&h)
            .map(|(w, h)| {
                let r = 0.5 * (w[0] + w[1]);
                h * (m_star / r.powi(3)).sqrt()
            })
            .collect();

        Self::new(r_edge, sigma, h, cs, stellar_mass, fuv)
    }

    /// Attach dust to the disc.
    ///
    /// # Errors
    /// Returns a [`DiscError`] if the dust vectors do not match the grid or
    /// hold negative values.
    pub fn with_dust(mut self, dust: DustState) -> DiscResult<Self> {
        let n = self.n_cells();
        for (field, values) in [
            ("dust_frac[0]", &dust.dust_frac[0]),
            ("dust_frac[1]", &dust.dust_frac[1]),
            ("grain_size[0]", &dust.grain_size[0]),
            ("grain_size[1]", &dust.grain_size[1]),
        ] {
            check_len(field, values, n)?;
            check_non_negative(field, values)?;
        }
        self.dust = Some(dust);
        Ok(self)
    }

    /// Number of annuli.
    pub fn n_cells(&self) -> usize {
        self.r.len()
    }

    /// Whether the disc carries a dust component.
    pub fn has_dust(&self) -> bool {
        self.dust.is_some()
    }

    /// Combined dust fraction per annulus (zero for a dust-free disc).
    pub fn integ_dust_frac(&self) -> Vec<f64> {
        match &self.dust {
            Some(dust) => dust.integ_dust_frac(),
            None => vec![0.0; self.n_cells()],
        }
    }

    /// Gas surface density Σ_G = Σ (1 − ε₀ − ε₁).
    pub fn sigma_gas(&self) -> Vec<f64> {
        match &self.dust {
            Some(dust) => self
                .sigma
                .iter()
                .zip(dust.integ_dust_frac())
                .map(|(sigma, eps)| sigma * (1.0 - eps))
                .collect(),
            None => self.sigma.clone(),
        }
    }

    /// Dust surface density of each population, Σ_D,k = Σ ε_k.
    pub fn sigma_dust(&self) -> Option<[Vec<f64>; 2]> {
        self.dust.as_ref().map(|dust| {
            let population = |k: usize| -> Vec<f64> {
                self.sigma
                    .iter()
                    .zip(&dust.dust_frac[k])
                    .map(|(sigma, eps)| sigma * eps)
                    .collect()
            };
            [population(0), population(1)]
        })
    }

    /// Total dust surface density Σ_D,0 + Σ_D,1 (zero for a dust-free disc).
    pub fn sigma_dust_total(&self) -> Vec<f64> {
        match self.sigma_dust() {
            Some([small, large]) => small.iter().zip(&large).map(|(a, b)| a + b).collect(),
            None => vec![0.0; self.n_cells()],
        }
    }

    /// Total disc mass (gas + dust).
    pub fn total_mass(&self) -> Mass {
        annulus_areas(&self.r_edge)
            .iter()
            .zip(&self.sigma)
            .map(|(&area, &sigma)| SurfaceDensity::from_grams_per_cm2(sigma).mass_over(area))
            .fold(Mass::zero(), |total, mass| total + mass)
    }

    /// Whether any annulus still holds gas.
    pub fn has_gas(&self) -> bool {
        self.sigma_gas().iter().any(|&s| s > 0.0)
    }
}

fn check_len(field: &'static str, values: &[f64], expected: usize) -> DiscResult<()> {
    if values.len() != expected {
        return Err(DiscError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, values: &[f64]) -> DiscResult<()> {
    match values.iter().position(|v| !(v.is_finite() && *v >= 0.0)) {
        Some(index) => Err(DiscError::InvalidValue {
            field,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
