//! Integration tests driving photoevaporation over many timesteps.
//!
//! These check that repeated removal steps shrink the disc from the outside
//! in and that mass bookkeeping stays consistent across a run.

use disc_wind::{
    Disc, DustState, ExternalPhotoevaporation, PhotoevaporationConfig, RateGrid, RateModel,
    RemovalScheme,
};
use units::{Mass, MassRate, Time};

/// Σ ∝ 1/R between 1 and 200 AU around a solar-mass star at 1000 G0.
fn mmsn_like(n: usize) -> Disc {
    let edges: Vec<f64> = (0..=n).map(|i| 200f64.powf(i as f64 / n as f64)).collect();
    let sigma: Vec<f64> = edges.windows(2).map(|w| 100.0 / (0.5 * (w[0] + w[1]))).collect();
    Disc::isothermal(edges, sigma, 0.05, Mass::from_solar_masses(1.0), 1000.0)
        .expect("valid disc")
}

fn grid() -> RateGrid {
    RateGrid::from_fn(
        Mass::from_solar_masses(1.0),
        1000.0,
        vec![1e-3, 1e-2, 0.1, 1.0, 10.0, 100.0, 1e3, 1e4],
        vec![1.0, 5.0, 10.0, 50.0, 100.0, 200.0, 400.0],
        |sigma, r| 1e-8 * (r / 100.0).powi(2) * sigma.powf(0.5),
    )
    .expect("valid grid")
}

fn outer_edge(disc: &Disc) -> Option<usize> {
    disc.sigma.iter().rposition(|&s| s > 0.0)
}

#[test]
fn fixed_wind_disperses_disc_from_outside_in() {
    let mut disc = mmsn_like(40);
    let initial_mass = disc.total_mass();
    let mut wind: ExternalPhotoevaporation = ExternalPhotoevaporation::new(RateModel::default(), &disc);

    let step = Time::from_years(1e5);
    let mut removed = Mass::zero();
    let mut last_edge = outer_edge(&disc);
    let mut steps = 0;

    while let Some(report) = wind.remove_over(&mut disc, step) {
        assert_eq!(report.scheme, RemovalScheme::Timescale);
        assert!(disc.sigma.iter().all(|&s| s >= 0.0));

        let edge = outer_edge(&disc);
        assert!(edge <= last_edge, "outer edge moved outward");
        last_edge = edge;

        removed = removed + report.gas_mass_removed;
        steps += 1;
        assert!(steps < 1000, "disc never dispersed");
    }

    assert!(!disc.has_gas());
    assert_eq!(wind.history().rates().len(), steps);

    let relative = (removed.to_grams() - initial_mass.to_grams()).abs() / initial_mass.to_grams();
    assert!(relative < 1e-9, "removed {removed:?} of {initial_mass:?}");
}

#[test]
fn fixed_wind_removes_mass_at_its_rate() {
    let mut disc = mmsn_like(40);
    let mut wind: ExternalPhotoevaporation = ExternalPhotoevaporation::new(RateModel::default(), &disc);

    let initial = disc.total_mass();
    for _ in 0..10 {
        wind.remove_over(&mut disc, Time::from_years(1e4));
    }
    let lost = (initial - disc.total_mass()).to_solar_masses();
    let expected = MassRate::from_solar_masses_per_year(1e-8)
        .integrate(Time::from_years(1e5))
        .to_solar_masses();

    assert!((lost - expected).abs() / expected < 1e-6, "lost {lost} M☉");
}

#[test]
fn tabulated_wind_carries_dust_away() {
    let disc = mmsn_like(40);
    let n = disc.n_cells();
    let mut disc = disc
        .with_dust(DustState::uniform(n, [0.002, 0.008], [1e-4, 1e-3]))
        .expect("valid dust");

    let mut wind = ExternalPhotoevaporation::new(RateModel::BySurfaceDensity(grid()), &disc);
    let initial = disc.total_mass();

    let mut gas = Mass::zero();
    let mut dust = Mass::zero();
    for _ in 0..50 {
        let report = wind
            .remove_over(&mut disc, Time::from_years(1e4))
            .expect("disc still has gas");
        assert_eq!(report.scheme, RemovalScheme::Weighted);
        gas = gas + report.gas_mass_removed;
        dust = dust + report.dust_mass_removed;
    }

    assert!(dust.to_grams() > 0.0);
    let wind_dust = wind.history().wind_dust_mass().to_grams();
    assert!((wind_dust - dust.to_grams()).abs() / dust.to_grams() < 1e-9);

    let lost = (initial - disc.total_mass()).to_grams();
    assert!((lost - (gas + dust).to_grams()).abs() / lost < 1e-6);

    assert!(disc.sigma.iter().all(|&s| s >= 0.0));
    assert!(wind.max_size_entrained(&disc).iter().any(|&a| a > 0.0));
}

#[test]
fn configured_run_matches_direct_construction() {
    let config = PhotoevaporationConfig::from_json_str(
        r#"{"model": {"type": "fixed", "mdot": 1e-7, "amax": 1.0}}"#,
    )
    .expect("valid config");

    let mut configured_disc = mmsn_like(20);
    let mut direct_disc = configured_disc.clone();

    let mut configured = config.into_evaporation(&configured_disc);
    let mut direct: ExternalPhotoevaporation =
        ExternalPhotoevaporation::new(RateModel::Fixed { mdot: 1e-7, amax: 1.0 }, &direct_disc);

    for _ in 0..5 {
        configured.remove_over(&mut configured_disc, Time::from_years(1e4));
        direct.remove_over(&mut direct_disc, Time::from_years(1e4));
    }

    assert_eq!(configured_disc, direct_disc);
    assert_eq!(configured.history(), direct.history());
}
