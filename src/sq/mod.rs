/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Static structure factor S(Q)
//!
//! The structure factor is obtained as the Fourier transform of the
//! element-pair radial distribution functions, combined with Faber-Ziman
//! weighting: a full double sum over species, each partial weighted by
//! composition fractions and Q-dependent form factors and normalized by
//! the squared mean form factor.
//!
//! The lowest Q that a box of characteristic length L can describe is
//! `2π / (L/2)`; the radial cutoff of every pair RDF is fixed at L/2
//! accordingly.

pub mod errors;

pub use errors::{Result, SqError};

use crate::form_factor::{form_factor, FormFactorMethod};
use crate::mixing::{self, ElementPair, RdfCache};
use crate::pairdist::{compute_rdf, rdf_by_frame, BinSpec};
use crate::traj::{Selection, TrajError, Trajectory};
use crate::utils::math::simpson;
use log::{debug, info};
use ndarray::Array1;
use std::collections::HashMap;
use std::f64::consts::PI;

/// Radial bin width for the pair RDFs entering the transform, in nm
const RDF_BIN_WIDTH: f64 = 0.001;

/// Options for [`structure_factor`]
#[derive(Debug, Clone)]
pub struct SqOptions {
    /// Minimum and maximum scattering vector magnitude, in 1/nm
    pub q_range: (f64, f64),
    /// Number of log-spaced Q values
    pub n_points: usize,
    /// Compute pair RDFs frame by frame (lower memory, same result)
    pub framewise_rdf: bool,
    /// Weighting convention; only `"fz"` (Faber-Ziman) is supported
    pub weighting_factor: String,
    /// Form-factor evaluation method
    pub form: FormFactorMethod,
}

impl Default for SqOptions {
    fn default() -> Self {
        Self {
            q_range: (0.5, 50.0),
            n_points: 1000,
            framewise_rdf: false,
            weighting_factor: "fz".to_string(),
            form: FormFactorMethod::Atomic,
        }
    }
}

/// `n` log-spaced values between the bounds, inclusive
fn logspace(bounds: (f64, f64), n: usize) -> Array1<f64> {
    let (lo, hi) = (bounds.0.log10(), bounds.1.log10());
    if n == 1 {
        return Array1::from(vec![bounds.0]);
    }
    Array1::from_iter((0..n).map(|i| 10f64.powf(lo + (hi - lo) * i as f64 / (n - 1) as f64)))
}

/// Compute the structure factor of a trajectory
///
/// # Arguments
///
/// * `trj` - Trajectory with valid element identities
/// * `options` - Q grid, weighting and form-factor settings
///
/// # Returns
///
/// `(Q, S)` with Q in 1/nm, or `SqError::UnsupportedWeighting` for any
/// weighting factor other than `"fz"` (raised before any computation).
pub fn structure_factor(
    trj: &Trajectory,
    options: &SqOptions,
) -> Result<(Array1<f64>, Array1<f64>)> {
    if options.weighting_factor != "fz" {
        return Err(SqError::UnsupportedWeighting(
            options.weighting_factor.clone(),
        ));
    }
    if trj.n_frames() == 0 {
        return Err(TrajError::InvalidShape("trajectory has no frames".to_string()).into());
    }

    let n_atoms = trj.n_atoms() as f64;
    let rho = trj
        .unitcell_volumes()
        .mapv(|v| n_atoms / v)
        .sum()
        / trj.n_frames() as f64;
    let l_min = trj.min_unitcell_length();
    let r_range = (0.0, l_min / 2.0);

    let elements = trj.topology().unique_elements(false);
    let mut compositions = HashMap::new();
    for elem in &elements {
        let x = trj.topology().select(&Selection::element(elem.symbol())).len() as f64 / n_atoms;
        compositions.insert(elem.symbol().to_string(), x);
    }

    let q_axis = logspace(options.q_range, options.n_points);
    let mut s_axis = Array1::zeros(options.n_points);
    let mut cache = RdfCache::new();

    info!(
        "structure factor: {} elements, {} Q points, r cutoff {:.3} nm",
        elements.len(),
        options.n_points,
        r_range.1
    );

    for (qi, &q) in q_axis.iter().enumerate() {
        // Q is carried in 1/nm; form-factor tables are in 1/angstrom.
        let q_lookup = q / 10.0;

        let mut denom = 0.0;
        for elem in &elements {
            denom += compositions[elem.symbol()]
                * form_factor(elem.symbol(), Some(q_lookup), false, options.form)?;
        }

        let mut num = 0.0;
        for e1 in &elements {
            for e2 in &elements {
                let f_a = form_factor(e1.symbol(), Some(q_lookup), false, options.form)?;
                let f_b = form_factor(e2.symbol(), Some(q_lookup), false, options.form)?;
                let x_a = compositions[e1.symbol()];
                let x_b = compositions[e2.symbol()];

                let key = ElementPair::new(e1.symbol(), e2.symbol());
                let (r, g_r) = cache.get_or_insert_with::<SqError, _>(key.clone(), || {
                    debug!("computing pair RDF for {}", key);
                    let pairs = trj.topology().select_pairs(
                        &Selection::element(e1.symbol()),
                        &Selection::element(e2.symbol()),
                    );
                    let bins = BinSpec::Width(RDF_BIN_WIDTH);
                    let rdf = if options.framewise_rdf {
                        rdf_by_frame(trj, &pairs, r_range, bins, true)?
                    } else {
                        compute_rdf(trj, &pairs, r_range, bins, true)?
                    };
                    Ok(rdf)
                })?;

                let integrand = Array1::from_iter(
                    r.iter()
                        .zip(g_r.iter())
                        .map(|(&r, &g)| r * r * (g - 1.0) * (q * r).sin() / (q * r)),
                );
                let integral = simpson(integrand.view(), r.view())?;
                let partial_sq = 4.0 * PI * rho * integral + 1.0;

                num += mixing::coefficient(x_a, f_a, x_b, f_b) * partial_sq;
            }
        }
        s_axis[qi] = num / (denom * denom);
    }

    Ok((q_axis, s_axis))
}

/// Composition-weighted total RDF from element-pair partials
///
/// Each ordered element pair's g(r) is weighted by
/// `x_a·x_b·Z_a·Z_b / (Σ x·Z)²` and summed. The radial cutoff defaults
/// to half the smallest box length.
pub fn total_rdf(
    trj: &Trajectory,
    r_range: Option<(f64, f64)>,
) -> Result<(Array1<f64>, Array1<f64>)> {
    if trj.n_frames() == 0 {
        return Err(TrajError::InvalidShape("trajectory has no frames".to_string()).into());
    }
    let r_range = r_range.unwrap_or((0.0, trj.min_unitcell_length() / 2.0));
    let n_atoms = trj.n_atoms() as f64;

    let elements = trj.topology().unique_elements(false);
    let mut compositions = HashMap::new();
    let mut denom = 0.0;
    for elem in &elements {
        let x = trj.topology().select(&Selection::element(elem.symbol())).len() as f64 / n_atoms;
        compositions.insert(elem.symbol().to_string(), x);
        denom += x * elem.atomic_number() as f64;
    }

    let mut cache = RdfCache::new();
    let mut r_axis: Option<Array1<f64>> = None;
    let mut total: Option<Array1<f64>> = None;

    for e1 in &elements {
        for e2 in &elements {
            let x_a = compositions[e1.symbol()];
            let x_b = compositions[e2.symbol()];
            let f_a = e1.atomic_number() as f64;
            let f_b = e2.atomic_number() as f64;

            let key = ElementPair::new(e1.symbol(), e2.symbol());
            let (r, g_r) = cache.get_or_insert_with::<SqError, _>(key, || {
                let pairs = trj.topology().select_pairs(
                    &Selection::element(e1.symbol()),
                    &Selection::element(e2.symbol()),
                );
                Ok(compute_rdf(trj, &pairs, r_range, BinSpec::Width(0.005), true)?)
            })?;

            let weighted = g_r * (mixing::coefficient(x_a, f_a, x_b, f_b) / (denom * denom));
            if r_axis.is_none() {
                r_axis = Some(r.clone());
            }
            total = Some(match total {
                Some(sum) => sum + &weighted,
                None => weighted,
            });
        }
    }

    // unique_elements is nonempty for any trajectory with atoms
    let r_axis = r_axis
        .ok_or_else(|| TrajError::InvalidShape("trajectory has no atoms".to_string()))?;
    let total = total
        .ok_or_else(|| TrajError::InvalidShape("trajectory has no atoms".to_string()))?;
    Ok((r_axis, total))
}
