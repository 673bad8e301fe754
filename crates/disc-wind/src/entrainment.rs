//! Dust entrainment in photoevaporative winds.
//!
//! Gas flowing off the disc surface drags dust grains with it as long as
//! the drag force beats the stellar gravity. Only grains below a critical
//! size make it into the wind; the rest stay behind in the disc.
//!
//! # Physics
//!
//! Facchini et al. (2016, Eq. 35) give the largest entrained grain:
//!
//! ```text
//! a_entr = v_th Ṁ / (4π F M_* ρ_s)
//!
//! F    = H / √(H² + R²)      (solid angle subtended by the flow)
//! v_th = √(8/π) c_s          (mean thermal speed)
//! ```
//!
//! With G = 1 in AU³ M☉⁻¹ t_dyn⁻², Ṁ in M☉/yr and c_s in AU/t_dyn, the
//! result is brought to cm by the factor M☉ / AU² / yr.
//!
//! For an MRN-like distribution n(a) ∝ a^(-p) the mass fraction in grains
//! below a_entr, relative to a distribution extending up to a_max, is
//! (a_entr / a_max)^(4−p).
//!
//! # References
//! - Facchini, Clarke & Bisbas (2016) - "External photoevaporation of
//!   protoplanetary discs in sparse stellar groups: the impact of dust
//!   growth"

use units::{SurfaceDensity, Time};

use crate::disc::{DEFAULT_GRAIN_DENSITY, Disc};
use crate::geometry::annulus_areas;

/// Conversion from code units (M☉/yr, AU/t_dyn, g/cm³) to cm.
fn entrainment_unit() -> f64 {
    SurfaceDensity::from_solar_masses_per_au2(1.0).to_grams_per_cm2()
        / Time::from_years(1.0).to_dynamical_times()
}

/// Largest entrained grain size (cm) for a single annulus.
///
/// # Arguments
/// * `h` - Scale height (AU)
/// * `r` - Radius (AU)
/// * `cs` - Sound speed (AU per dynamical time)
/// * `stellar_mass` - Stellar mass (M☉)
/// * `grain_density` - Internal grain density (g/cm³)
/// * `mdot` - Wind mass-loss rate (M☉/yr)
pub fn entrainment_size(
    h: f64,
    r: f64,
    cs: f64,
    stellar_mass: f64,
    grain_density: f64,
    mdot: f64,
) -> f64 {
    let geometric = h / (h * h + r * r).sqrt();
    let v_th = (8.0 / std::f64::consts::PI).sqrt() * cs;

    let a_entr = (v_th * mdot) / (stellar_mass * 4.0 * std::f64::consts::PI * geometric * grain_density);
    a_entr * entrainment_unit()
}

/// Facchini limit at every annulus for per-annulus wind rates `mdot`
/// (M☉/yr).
///
/// Dust-free discs use the default silicate grain density.
pub fn facchini_limit(disc: &Disc, mdot: &[f64]) -> Vec<f64> {
    let grain_density = disc
        .dust
        .as_ref()
        .map_or(DEFAULT_GRAIN_DENSITY, |dust| dust.grain_density);
    let m_star = disc.stellar_mass.to_solar_masses();

    disc.h
        .iter()
        .zip(&disc.r)
        .zip(&disc.cs)
        .zip(mdot)
        .map(|(((&h, &r), &cs), &mdot)| entrainment_size(h, r, cs, m_star, grain_density, mdot))
        .collect()
}

/// Fraction of the dust mass in grains no larger than `a_entr`, for a
/// size distribution of index `p` topped at `a_max`. Never exceeds one.
pub fn entrained_fraction(a_entr: f64, a_max: f64, p: f64) -> f64 {
    if a_entr <= 0.0 {
        0.0
    } else if a_max <= 0.0 {
        1.0
    } else {
        (a_entr / a_max).powf(4.0 - p).min(1.0)
    }
}

/// Dust mass (g) in each annulus small enough to be carried off, given the
/// maximum entrained size `amax_entrained` (cm).
///
/// Annuli without gas entrain nothing, as does a dust-free disc.
pub fn dust_entrainment(disc: &Disc, amax_entrained: &[f64]) -> Vec<f64> {
    let Some(dust) = &disc.dust else {
        return vec![0.0; disc.n_cells()];
    };

    let areas = annulus_areas(&disc.r_edge);
    let sigma_gas = disc.sigma_gas();
    let sigma_dust = disc.sigma_dust_total();
    let p = dust.size_distribution_index;

    (0..disc.n_cells())
        .map(|i| {
            if sigma_gas[i] > 0.0 {
                let f_ent = entrained_fraction(amax_entrained[i], dust.grain_size[1][i], p);
                sigma_dust[i] * areas[i] * f_ent
            } else {
                0.0
            }
        })
        .collect()
}
