/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Integration tests for pair-distance histogramming

mod common;

use approx::assert_relative_eq;
use scatter_rs::pairdist::{compute_rdf, rdf_by_frame, BinSpec, PairDistError};
use scatter_rs::traj::Selection;

#[test]
fn test_framewise_average_matches_whole_histogram() {
    // Identical frames in a constant-volume box: averaging per-frame RDFs
    // and histogramming all frames at once are the same estimator.
    let trj = common::frozen_monatomic_box("O", 5, 40, 2.0);
    let pairs = trj
        .topology()
        .select_pairs(&Selection::element("O"), &Selection::element("O"));
    let r_range = (0.0, 1.0);
    let bins = BinSpec::Count(100);

    let (r_a, g_whole) = compute_rdf(&trj, &pairs, r_range, bins, true).unwrap();
    let (r_b, g_framewise) = rdf_by_frame(&trj, &pairs, r_range, bins, true).unwrap();

    assert_eq!(r_a.len(), r_b.len());
    for (a, b) in g_whole.iter().zip(g_framewise.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn test_ideal_gas_rdf_is_flat() {
    // Uniform positions give g(r) = 1 in expectation; check the bins with
    // enough shell volume for decent statistics.
    let trj = common::disordered_monatomic_box("Ar", 20, 200, 2.0);
    let pairs = trj
        .topology()
        .select_pairs(&Selection::element("Ar"), &Selection::element("Ar"));
    let (r, g_r) = compute_rdf(&trj, &pairs, (0.0, 1.0), BinSpec::Count(50), true).unwrap();

    for (radius, g) in r.iter().zip(g_r.iter()) {
        if *radius > 0.3 {
            assert_relative_eq!(*g, 1.0, epsilon = 0.15);
        }
    }
}

#[test]
fn test_empty_pair_set_rejected() {
    let trj = common::disordered_monatomic_box("Ar", 2, 10, 2.0);
    let pairs = trj
        .topology()
        .select_pairs(&Selection::element("Ar"), &Selection::element("Kr"));
    let err = compute_rdf(&trj, &pairs, (0.0, 1.0), BinSpec::Count(50), true).unwrap_err();
    assert!(matches!(err, PairDistError::EmptyPairs));
}
