/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Pairwise-distance histogramming and radial distribution functions
//!
//! This module is the low-level collaborator the correlation pipelines
//! delegate to: given a pair set and a radial binning, it histograms
//! minimum-image distances and normalizes counts into g(r). Three entry
//! points cover the pipelines' needs:
//!
//! - [`compute_rdf`]: one histogram over all frames,
//! - [`rdf_by_frame`]: per-frame histograms averaged afterwards (identical
//!   in the uniform case, cheaper in memory for large systems),
//! - [`compute_rdf_t`]: one histogram row per (reference, offset) frame
//!   pair, the building block of the van Hove function.
//!
//! Normalization follows the standard convention: counts divided by
//! `n_pairs · Σ_f 1/V_f · V_shell`, so an ideal gas gives g(r) = 1.

pub mod errors;

pub use errors::{PairDistError, Result};

use crate::traj::Trajectory;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::f64::consts::PI;

/// Radial binning specification
///
/// `Count` overrides `Width`: when a bin count is given the width is
/// derived from the radial range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinSpec {
    /// Fixed bin width in nm
    Width(f64),
    /// Fixed number of bins over the radial range
    Count(usize),
}

impl BinSpec {
    /// Resolve the number of bins for a radial range
    pub fn n_bins(&self, r_range: (f64, f64)) -> Result<usize> {
        let (r_min, r_max) = r_range;
        if !(r_max > r_min) || r_min < 0.0 {
            return Err(PairDistError::InvalidBinning(format!(
                "radial range ({}, {}) must satisfy 0 <= r_min < r_max",
                r_min, r_max
            )));
        }
        let n = match *self {
            BinSpec::Width(width) => {
                if !(width > 0.0) {
                    return Err(PairDistError::InvalidBinning(format!(
                        "bin width {} must be positive",
                        width
                    )));
                }
                ((r_max - r_min) / width) as usize
            }
            BinSpec::Count(count) => count,
        };
        if n == 0 {
            return Err(PairDistError::InvalidBinning(
                "binning resolves to zero bins".to_string(),
            ));
        }
        Ok(n)
    }
}

/// Bin edges: n_bins + 1 uniformly spaced values over the radial range
fn bin_edges(r_range: (f64, f64), n_bins: usize) -> Array1<f64> {
    let (r_min, r_max) = r_range;
    let h = (r_max - r_min) / n_bins as f64;
    Array1::from_iter((0..=n_bins).map(|i| r_min + i as f64 * h))
}

/// Bin centers from edges
fn bin_centers(edges: &Array1<f64>) -> Array1<f64> {
    Array1::from_iter(
        edges
            .windows(2)
            .into_iter()
            .map(|w| 0.5 * (w[0] + w[1])),
    )
}

/// Spherical shell volume of each bin
fn shell_volumes(edges: &Array1<f64>) -> Array1<f64> {
    Array1::from_iter(
        edges
            .windows(2)
            .into_iter()
            .map(|w| 4.0 / 3.0 * PI * (w[1].powi(3) - w[0].powi(3))),
    )
}

/// Minimum-image distance between two points in an orthorhombic box
fn distance(
    a: ArrayView1<'_, f64>,
    b: ArrayView1<'_, f64>,
    box_lengths: ArrayView1<'_, f64>,
    periodic: bool,
) -> f64 {
    let mut d2 = 0.0;
    for k in 0..3 {
        let mut dx = b[k] - a[k];
        if periodic {
            let l = box_lengths[k];
            dx -= l * (dx / l).round();
        }
        d2 += dx * dx;
    }
    d2.sqrt()
}

/// Histogram one frame's pair distances into `counts`
fn bin_distances(
    coords_ref: ArrayView2<'_, f64>,
    coords_off: ArrayView2<'_, f64>,
    pairs: &[(usize, usize)],
    box_lengths: ArrayView1<'_, f64>,
    r_range: (f64, f64),
    periodic: bool,
    counts: &mut Array1<f64>,
) {
    let (r_min, r_max) = r_range;
    let n_bins = counts.len();
    let inv_width = n_bins as f64 / (r_max - r_min);

    for &(i, j) in pairs {
        let d = distance(coords_ref.row(i), coords_off.row(j), box_lengths, periodic);
        if d >= r_min && d < r_max {
            let bin = ((d - r_min) * inv_width) as usize;
            counts[bin.min(n_bins - 1)] += 1.0;
        }
    }
}

fn check_frame(trj: &Trajectory, frame: usize) -> Result<()> {
    if frame >= trj.n_frames() {
        return Err(PairDistError::FrameOutOfRange {
            frame,
            n_frames: trj.n_frames(),
        });
    }
    Ok(())
}

/// Compute the radial distribution function over all frames
///
/// # Arguments
///
/// * `trj` - Trajectory to histogram
/// * `pairs` - Atom index pairs to bin
/// * `r_range` - Minimum and maximum radii in nm
/// * `bins` - Radial binning
/// * `periodic` - Apply the minimum-image convention
///
/// # Returns
///
/// `(r, g_r)` where `r` holds the bin centers.
pub fn compute_rdf(
    trj: &Trajectory,
    pairs: &[(usize, usize)],
    r_range: (f64, f64),
    bins: BinSpec,
    periodic: bool,
) -> Result<(Array1<f64>, Array1<f64>)> {
    if pairs.is_empty() {
        return Err(PairDistError::EmptyPairs);
    }
    let n_bins = bins.n_bins(r_range)?;
    let edges = bin_edges(r_range, n_bins);

    let mut counts = Array1::zeros(n_bins);
    let mut inv_volume_sum = 0.0;
    for frame in 0..trj.n_frames() {
        let coords = trj.frame_coords(frame);
        bin_distances(
            coords,
            coords,
            pairs,
            trj.frame_box(frame),
            r_range,
            periodic,
            &mut counts,
        );
        inv_volume_sum += 1.0 / trj.frame_volume(frame);
    }

    let norm = shell_volumes(&edges) * (pairs.len() as f64 * inv_volume_sum);
    Ok((bin_centers(&edges), counts / norm))
}

/// Compute the RDF frame by frame and average the per-frame results
///
/// Numerically identical to [`compute_rdf`] for a constant-volume
/// trajectory; useful when a whole-trajectory distance array would not fit
/// in memory.
pub fn rdf_by_frame(
    trj: &Trajectory,
    pairs: &[(usize, usize)],
    r_range: (f64, f64),
    bins: BinSpec,
    periodic: bool,
) -> Result<(Array1<f64>, Array1<f64>)> {
    if pairs.is_empty() {
        return Err(PairDistError::EmptyPairs);
    }
    let n_bins = bins.n_bins(r_range)?;
    let edges = bin_edges(r_range, n_bins);
    let shells = shell_volumes(&edges);

    let mut g_r = Array1::zeros(n_bins);
    for frame in 0..trj.n_frames() {
        let coords = trj.frame_coords(frame);
        let mut counts = Array1::zeros(n_bins);
        bin_distances(
            coords,
            coords,
            pairs,
            trj.frame_box(frame),
            r_range,
            periodic,
            &mut counts,
        );
        let norm = pairs.len() as f64 / trj.frame_volume(frame);
        g_r += &(counts / (&shells * norm));
    }
    g_r /= trj.n_frames() as f64;

    Ok((bin_centers(&edges), g_r))
}

/// Compute time-resolved pair histograms
///
/// For each `(reference, offset)` entry of `times`, histogram the
/// distances between atom i at the reference frame and atom j at the
/// offset frame for every pair (i, j), one output row per entry. Atoms in
/// `self_indices` additionally contribute their own (i, i) displacement to
/// every row, which is the self part of the van Hove function.
///
/// Rows are normalized with the reference frame's box volume so that the
/// lag-0 row of a same-selection pair set reproduces the static RDF.
pub fn compute_rdf_t(
    trj: &Trajectory,
    pairs: &[(usize, usize)],
    times: &[(usize, usize)],
    r_range: (f64, f64),
    bins: BinSpec,
    self_indices: &[usize],
    periodic: bool,
) -> Result<(Array1<f64>, Array2<f64>)> {
    if pairs.is_empty() && self_indices.is_empty() {
        return Err(PairDistError::EmptyPairs);
    }
    let n_bins = bins.n_bins(r_range)?;
    let edges = bin_edges(r_range, n_bins);
    let shells = shell_volumes(&edges);
    let n_pairs_total = pairs.len() + self_indices.len();

    let mut g_r_t = Array2::zeros((times.len(), n_bins));
    for (row, &(t_ref, t_off)) in times.iter().enumerate() {
        check_frame(trj, t_ref)?;
        check_frame(trj, t_off)?;

        let coords_ref = trj.frame_coords(t_ref);
        let coords_off = trj.frame_coords(t_off);
        let box_lengths = trj.frame_box(t_ref);

        let mut counts = Array1::zeros(n_bins);
        bin_distances(
            coords_ref,
            coords_off,
            pairs,
            box_lengths,
            r_range,
            periodic,
            &mut counts,
        );
        let self_pairs: Vec<(usize, usize)> = self_indices.iter().map(|&i| (i, i)).collect();
        bin_distances(
            coords_ref,
            coords_off,
            &self_pairs,
            box_lengths,
            r_range,
            periodic,
            &mut counts,
        );

        let norm = n_pairs_total as f64 / trj.frame_volume(t_ref);
        let g_row = counts / (&shells * norm);
        g_r_t.row_mut(row).assign(&g_row);
    }

    Ok((bin_centers(&edges), g_r_t))
}
