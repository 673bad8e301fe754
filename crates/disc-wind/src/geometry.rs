//! Annulus geometry and radial sums.

use units::Length;

/// Area of each annulus (cm²) from edge radii in AU.
///
/// A_i = π (R_{i+1}² − R_i²)
pub fn annulus_areas(r_edge: &[f64]) -> Vec<f64> {
    r_edge
        .windows(2)
        .map(|w| Length::from_au(w[0]).annulus_area_cm2(Length::from_au(w[1])))
        .collect()
}

/// Mass in each annulus (g) given areas (cm²) and surface densities (g/cm²).
pub fn annulus_masses(areas: &[f64], sigma: &[f64]) -> Vec<f64> {
    areas.iter().zip(sigma).map(|(a, s)| a * s).collect()
}

/// Reverse cumulative sum: entry i holds the sum of entries i..N.
///
/// Used to accumulate quantities from the outer edge inward.
pub fn cumulative_inward(values: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; values.len()];
    let mut total = 0.0;
    for (slot, v) in out.iter_mut().zip(values).rev() {
        total += v;
        *slot = total;
    }
    out
}

/// Running sum from the centre: entry i holds the sum of entries 0..=i.
pub fn cumulative_outward(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |total, v| {
            *total += v;
            Some(*total)
        })
        .collect()
}
