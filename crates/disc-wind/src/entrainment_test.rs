//! Tests for the Facchini entrainment limit and entrained dust mass.

use super::*;
use crate::entrainment::{dust_entrainment, entrained_fraction, entrainment_size, facchini_limit};
use crate::geometry::annulus_areas;
use crate::test_support::{uniform_disc, with_dust};
use approx::assert_relative_eq;
use proptest::prelude::*;

#[test]
fn entrainment_size_at_100_au() {
    // h/r = 0.05 around a solar-mass star, 1e-7 M☉/yr
    let cs = 5.0 * (1.0 / 100f64.powi(3)).sqrt();
    let a = entrainment_size(5.0, 100.0, cs, 1.0, 1.0, 1e-7);

    assert_relative_eq!(a, 1.7979499646327305e-3, max_relative = 1e-10);
}

#[test]
fn facchini_limit_uses_disc_grain_density() {
    let disc = uniform_disc(10.0);
    let mut dusty = with_dust(disc.clone());
    if let Some(dust) = dusty.dust.as_mut() {
        dust.grain_density = 2.0;
    }

    let mdot = vec![1e-8; 5];
    let light = facchini_limit(&disc, &mdot);
    let heavy = facchini_limit(&dusty, &mdot);

    for (l, h) in light.iter().zip(&heavy) {
        assert_relative_eq!(*h, 0.5 * l, max_relative = 1e-12);
    }
}

#[test]
fn facchini_limit_zero_without_wind() {
    let disc = uniform_disc(10.0);
    assert!(facchini_limit(&disc, &[0.0; 5]).iter().all(|&a| a == 0.0));
}

#[test]
fn fraction_edge_cases() {
    assert_eq!(entrained_fraction(0.0, 0.1, MRN_SIZE_INDEX), 0.0);
    assert_eq!(entrained_fraction(1e-3, 0.0, MRN_SIZE_INDEX), 1.0);
    assert_eq!(entrained_fraction(1.0, 0.1, MRN_SIZE_INDEX), 1.0);
    assert_relative_eq!(entrained_fraction(1e-3, 0.1, MRN_SIZE_INDEX), 0.1, max_relative = 1e-12);
}

#[test]
fn entrains_all_dust_below_limit() {
    let disc = with_dust(uniform_disc(10.0));
    let areas = annulus_areas(&disc.r_edge);

    let entrained = dust_entrainment(&disc, &[0.1; 5]);
    for (m, area) in entrained.iter().zip(&areas) {
        assert_relative_eq!(*m, 0.1 * area, max_relative = 1e-12);
    }

    let partial = dust_entrainment(&disc, &[1e-3; 5]);
    for (m, area) in partial.iter().zip(&areas) {
        assert_relative_eq!(*m, 0.01 * area, max_relative = 1e-12);
    }
}

#[test]
fn no_entrainment_without_gas_or_dust() {
    let mut dusty = with_dust(uniform_disc(10.0));
    dusty.sigma[4] = 0.0;
    let entrained = dust_entrainment(&dusty, &[0.1; 5]);
    assert_eq!(entrained[4], 0.0);
    assert!(entrained[..4].iter().all(|&m| m > 0.0));

    let clean = uniform_disc(10.0);
    assert_eq!(dust_entrainment(&clean, &[0.1; 5]), vec![0.0; 5]);
}

proptest! {
    #[test]
    fn size_grows_with_rate(mdot in 1e-12f64..1e-5, factor in 1.01f64..100.0) {
        let cs = 2.5 * (1.0 / 50f64.powi(3)).sqrt();
        let low = entrainment_size(2.5, 50.0, cs, 1.0, 1.0, mdot);
        let high = entrainment_size(2.5, 50.0, cs, 1.0, 1.0, mdot * factor);
        prop_assert!(high > low);
    }

    #[test]
    fn size_shrinks_with_stellar_mass(m_star in 0.1f64..3.0, factor in 1.01f64..10.0) {
        let cs = 2.5 * (1.0 / 50f64.powi(3)).sqrt();
        let light = entrainment_size(2.5, 50.0, cs, m_star, 1.0, 1e-8);
        let heavy = entrainment_size(2.5, 50.0, cs, m_star * factor, 1.0, 1e-8);
        prop_assert!(heavy < light);
    }

    #[test]
    fn size_shrinks_with_grain_density(rho in 0.5f64..5.0, factor in 1.01f64..10.0) {
        let cs = 2.5 * (1.0 / 50f64.powi(3)).sqrt();
        let fluffy = entrainment_size(2.5, 50.0, cs, 1.0, rho, 1e-8);
        let compact = entrainment_size(2.5, 50.0, cs, 1.0, rho * factor, 1e-8);
        prop_assert!(compact < fluffy);
    }

    #[test]
    fn fraction_never_exceeds_one(
        a_entr in 0.0f64..10.0,
        a_max in 0.0f64..10.0,
        p in 2.0f64..3.9,
    ) {
        let f = entrained_fraction(a_entr, a_max, p);
        prop_assert!((0.0..=1.0).contains(&f));
    }
}
