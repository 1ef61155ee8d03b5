/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Time-resolved van Hove correlation functions
//!
//! The van Hove function G(r, t) generalizes the radial distribution
//! function to pairs of atoms separated in time: its lag-0 slice is the
//! static g(r) and later rows describe how structural correlations decay.
//! The trajectory is split into consecutive chunks of equal length; each
//! chunk contributes one (chunk_length, n_bins) histogram referenced to
//! its first frame, and the total is the average over chunks.
//!
//! [`compute_partial_van_hove`] is the single-pair engine and returns the
//! raw sum over chunks; [`compute_van_hove`] enumerates element pairs,
//! mixes the partials with composition and form-factor weights and
//! divides by the chunk count. Partial enumeration here is unordered with
//! replacement, each pair entering the mix exactly once.

pub mod errors;

pub use errors::{Result, VanHoveError};

use crate::form_factor::{form_factor, FormFactorMethod};
use crate::mixing::{self, ElementPair};
use crate::pairdist::{compute_rdf_t, BinSpec};
use crate::traj::{Denominator, Selection, Trajectory};
use log::info;
use ndarray::{s, Array1, Array2};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};

/// Options for [`compute_van_hove`]
#[derive(Debug, Clone)]
pub struct VanHoveOptions {
    /// Frames per chunk; also the number of lag times in the output
    pub chunk_length: usize,
    /// Compute element-pair partials on the rayon thread pool
    pub parallel: bool,
    /// Use effective water form factors for H and O when mixing
    pub water: bool,
    /// Minimum and maximum radii in nm
    pub r_range: (f64, f64),
    /// Radial binning
    pub bins: BinSpec,
    /// Include the (i, i) self terms of atoms shared by both selections
    pub self_correlation: bool,
    /// Apply the minimum-image convention
    pub periodic: bool,
}

impl Default for VanHoveOptions {
    fn default() -> Self {
        Self {
            chunk_length: 10,
            parallel: false,
            water: false,
            r_range: (0.0, 1.0),
            bins: BinSpec::Width(0.005),
            self_correlation: true,
            periodic: true,
        }
    }
}

/// Compute the van Hove histogram sum for one selection pair
///
/// The trajectory is cut into `floor(n_frames / chunk_length)` chunks; a
/// trailing remainder of frames is dropped. Within chunk i, row j
/// histograms the distances between atoms at frame `i·L` and frame
/// `i·L + j`. The returned array is the raw sum over chunks; divide by
/// the chunk count for the averaged partial.
///
/// # Arguments
///
/// * `trj` - Trajectory with a uniform timestep
/// * `chunk_length` - Frames per chunk
/// * `sel1`, `sel2` - Selections, each resolving to a single element
/// * `r_range` - Minimum and maximum radii in nm
/// * `bins` - Radial binning
/// * `self_correlation` - Include the (i, i) terms of atoms common to
///   both selections
/// * `periodic` - Apply the minimum-image convention
///
/// # Returns
///
/// `(r, g_r_t_sum)` with `g_r_t_sum` of shape `(chunk_length, n_bins)`.
pub fn compute_partial_van_hove(
    trj: &Trajectory,
    chunk_length: usize,
    sel1: &Selection,
    sel2: &Selection,
    r_range: (f64, f64),
    bins: BinSpec,
    self_correlation: bool,
    periodic: bool,
) -> Result<(Array1<f64>, Array2<f64>)> {
    trj.topology().single_element(sel1)?;
    trj.topology().single_element(sel2)?;
    trj.timestep()?;

    if chunk_length == 0 || chunk_length > trj.n_frames() {
        return Err(VanHoveError::ChunkTooLong {
            chunk_length,
            n_frames: trj.n_frames(),
        });
    }
    let n_chunks = trj.n_frames() / chunk_length;

    let pairs = trj.topology().select_pairs(sel1, sel2);
    let self_indices = if self_correlation {
        trj.topology().selection_intersection(sel1, sel2)
    } else {
        Vec::new()
    };

    let mut r_axis: Option<Array1<f64>> = None;
    let mut sum: Option<Array2<f64>> = None;
    for chunk in 0..n_chunks {
        let start = chunk * chunk_length;
        let times: Vec<(usize, usize)> = (0..chunk_length).map(|j| (start, start + j)).collect();
        let (r, g_r_t) = compute_rdf_t(
            trj,
            &pairs,
            &times,
            r_range,
            bins,
            &self_indices,
            periodic,
        )?;
        if r_axis.is_none() {
            r_axis = Some(r);
        }
        sum = Some(match sum {
            Some(acc) => acc + &g_r_t,
            None => g_r_t,
        });
    }

    // n_chunks >= 1 here
    Ok((
        r_axis.expect("at least one chunk"),
        sum.expect("at least one chunk"),
    ))
}

/// Element-pair partial sums over the unordered pairs with replacement
fn partial_map(
    trj: &Trajectory,
    options: &VanHoveOptions,
) -> Result<(Array1<f64>, BTreeMap<ElementPair, Array2<f64>>)> {
    let elements = trj.topology().unique_elements(true);
    let mut pairs = Vec::new();
    for (n, e1) in elements.iter().enumerate() {
        for e2 in &elements[n..] {
            pairs.push((e1.symbol().to_string(), e2.symbol().to_string()));
        }
    }

    let compute = |a: &str, b: &str| -> Result<(ElementPair, (Array1<f64>, Array2<f64>))> {
        let partial = compute_partial_van_hove(
            trj,
            options.chunk_length,
            &Selection::element(a),
            &Selection::element(b),
            options.r_range,
            options.bins,
            options.self_correlation,
            options.periodic,
        )?;
        Ok((ElementPair::new(a, b), partial))
    };

    let results: Vec<(ElementPair, (Array1<f64>, Array2<f64>))> = if options.parallel {
        pairs
            .par_iter()
            .map(|(a, b)| compute(a, b))
            .collect::<Result<Vec<_>>>()?
    } else {
        let mut results = Vec::with_capacity(pairs.len());
        for (a, b) in &pairs {
            info!("computing partial van Hove function for {}-{}", a, b);
            results.push(compute(a, b)?);
        }
        results
    };

    let mut r_axis: Option<Array1<f64>> = None;
    let mut partials = BTreeMap::new();
    for (pair, (r, g_r_t)) in results {
        if r_axis.is_none() {
            r_axis = Some(r);
        }
        partials.insert(pair, g_r_t);
    }

    match r_axis {
        Some(r) => Ok((r, partials)),
        None => Err(mixing::MixingError::EmptyPartials.into()),
    }
}

/// Per-element Q→0 form factors and physical-atom composition fractions
fn mixing_maps(
    trj: &Trajectory,
    water: bool,
) -> Result<(HashMap<String, f64>, HashMap<String, f64>)> {
    let mut compositions = HashMap::new();
    let mut form_factors = HashMap::new();
    for elem in trj.topology().unique_elements(true) {
        let symbol = elem.symbol();
        compositions.insert(
            symbol.to_string(),
            trj.composition(&Selection::element(symbol), Denominator::PhysicalAtoms),
        );
        form_factors.insert(
            symbol.to_string(),
            form_factor(symbol, None, water, FormFactorMethod::Atomic)?,
        );
    }
    Ok((compositions, form_factors))
}

/// Compute the total van Hove function of a trajectory
///
/// Element-pair partials are computed over the physical elements,
/// combined with Q→0 form factors and physical-atom composition
/// fractions, and averaged over chunks.
///
/// # Arguments
///
/// * `trj` - Trajectory with a uniform timestep
/// * `options` - Chunking, binning and mixing settings
///
/// # Returns
///
/// `(r, t, g_r_t)` with `t` in ps relative to the trajectory start and
/// `g_r_t` of shape `(chunk_length, n_bins)`.
pub fn compute_van_hove(
    trj: &Trajectory,
    options: &VanHoveOptions,
) -> Result<(Array1<f64>, Array1<f64>, Array2<f64>)> {
    let (r, partials) = partial_map(trj, options)?;
    let (compositions, form_factors) = mixing_maps(trj, options.water)?;

    let n_chunks = trj.n_frames() / options.chunk_length;
    let total = mixing::mix(&partials, &compositions, &form_factors)? / n_chunks as f64;

    let t = trj.time().slice(s![..options.chunk_length]).to_owned();
    Ok((r, t, total))
}

/// Compute the element-pair partials without mixing
///
/// Each partial is the raw sum over chunks, as returned by
/// [`compute_partial_van_hove`]; divide by `n_frames / chunk_length` for
/// the averaged functions.
///
/// # Returns
///
/// `(r, partials)` with one `(chunk_length, n_bins)` array per unordered
/// element pair.
pub fn compute_van_hove_partial(
    trj: &Trajectory,
    options: &VanHoveOptions,
) -> Result<(Array1<f64>, BTreeMap<ElementPair, Array2<f64>>)> {
    partial_map(trj, options)
}

/// Combine externally computed partials, keyed by `"{atom}-{atom}"`
/// strings, into a total van Hove function
///
/// Compositions are taken from atom-name counts over all atoms, and
/// weights are Q→0 form factors of the named elements. Every key is
/// validated before any mixing.
///
/// # Arguments
///
/// * `trj` - Trajectory the partials were computed from
/// * `partials` - Partial van Hove functions keyed by `"{atom}-{atom}"`,
///   all of the same shape
///
/// # Returns
///
/// The normalized total, `VanHoveError::MalformedKey` when a key does not
/// split into exactly two tokens, or `VanHoveError::UnknownElement` when
/// a token is not an element of the trajectory.
pub fn vhf_from_pvhf(
    trj: &Trajectory,
    partials: &BTreeMap<String, Array2<f64>>,
) -> Result<Array2<f64>> {
    let known: Vec<String> = trj
        .topology()
        .unique_elements(false)
        .iter()
        .map(|e| e.symbol().to_string())
        .collect();

    let mut keys = Vec::with_capacity(partials.len());
    for key in partials.keys() {
        let tokens: Vec<&str> = key.split('-').collect();
        if tokens.len() != 2 {
            return Err(VanHoveError::MalformedKey(key.clone()));
        }
        for token in &tokens {
            if !known.iter().any(|s| s == token) {
                return Err(VanHoveError::UnknownElement(token.to_string()));
            }
        }
        keys.push((tokens[0].to_string(), tokens[1].to_string()));
    }

    let mut total: Option<Array2<f64>> = None;
    let mut norm = 0.0;
    for ((a, b), partial) in keys.iter().zip(partials.values()) {
        let x_a = trj.composition(&Selection::name(a), Denominator::AllAtoms);
        let x_b = trj.composition(&Selection::name(b), Denominator::AllAtoms);
        let f_a = form_factor(a, None, false, FormFactorMethod::Atomic)?;
        let f_b = form_factor(b, None, false, FormFactorMethod::Atomic)?;

        let coeff = mixing::coefficient(x_a, f_a, x_b, f_b);
        let weighted = partial * coeff;
        total = Some(match total {
            Some(sum) => sum + &weighted,
            None => weighted,
        });
        norm += coeff;
    }

    let total = total.ok_or(mixing::MixingError::EmptyPartials)?;
    if norm == 0.0 {
        return Err(mixing::MixingError::DegenerateNormalization.into());
    }
    Ok(total / norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traj::{Atom, Element, Topology};
    use ndarray::{Array1, Array2, Array3};

    fn frozen_oxygen(n_frames: usize) -> Trajectory {
        let o = Element::from_symbol("O").unwrap();
        let top = Topology::new(vec![
            Atom::new("O", o.clone()),
            Atom::new("O", o.clone()),
            Atom::new("O", o),
        ]);
        let mut coords = Array3::zeros((n_frames, 3, 3));
        for f in 0..n_frames {
            coords[[f, 1, 0]] = 0.3;
            coords[[f, 2, 1]] = 0.45;
        }
        let box_lengths = Array2::from_elem((n_frames, 3), 2.0);
        let time = Array1::from_iter((0..n_frames).map(|i| i as f64));
        Trajectory::new(top, coords, box_lengths, time).unwrap()
    }

    #[test]
    fn test_chunk_too_long() {
        let trj = frozen_oxygen(4);
        let err = compute_partial_van_hove(
            &trj,
            8,
            &Selection::element("O"),
            &Selection::element("O"),
            (0.0, 1.0),
            BinSpec::Width(0.005),
            false,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, VanHoveError::ChunkTooLong { .. }));
    }

    #[test]
    fn test_partial_shape() {
        let trj = frozen_oxygen(8);
        let (r, g_r_t) = compute_partial_van_hove(
            &trj,
            4,
            &Selection::element("O"),
            &Selection::element("O"),
            (0.0, 1.0),
            BinSpec::Width(0.005),
            false,
            true,
        )
        .unwrap();
        assert_eq!(g_r_t.shape(), &[4, 200]);
        assert_eq!(r.len(), 200);
    }

    #[test]
    fn test_malformed_key_rejected() {
        let trj = frozen_oxygen(4);
        let mut partials = BTreeMap::new();
        partials.insert("C-C-C".to_string(), Array2::zeros((2, 10)));
        let err = vhf_from_pvhf(&trj, &partials).unwrap_err();
        assert!(matches!(err, VanHoveError::MalformedKey(_)));
    }

    #[test]
    fn test_unknown_element_key_rejected() {
        let trj = frozen_oxygen(4);
        let mut partials = BTreeMap::new();
        partials.insert("Xx-Xx".to_string(), Array2::zeros((2, 10)));
        let err = vhf_from_pvhf(&trj, &partials).unwrap_err();
        assert!(matches!(err, VanHoveError::UnknownElement(_)));
    }
}
