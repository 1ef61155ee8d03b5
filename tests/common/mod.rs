/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Shared trajectory fixtures for the integration tests
//!
//! Fixtures are built from a deterministic linear congruential generator
//! so every run sees identical coordinates.

#![allow(dead_code)]

use ndarray::{Array1, Array2, Array3};
use scatter_rs::traj::{Atom, Element, Topology, Trajectory};

/// Deterministic uniform sample in [0, 1)
pub fn lcg(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*state >> 11) as f64 / (1u64 << 53) as f64
}

/// Water topology: one O and two H per molecule
pub fn water_topology(n_molecules: usize) -> Topology {
    let o = Element::from_symbol("O").unwrap();
    let h = Element::from_symbol("H").unwrap();
    let mut atoms = Vec::with_capacity(3 * n_molecules);
    for _ in 0..n_molecules {
        atoms.push(Atom::new("O", o.clone()));
        atoms.push(Atom::new("H", h.clone()));
        atoms.push(Atom::new("H", h.clone()));
    }
    Topology::new(atoms)
}

/// Topology of identical atoms named after their element
pub fn monatomic_topology(symbol: &str, n_atoms: usize) -> Topology {
    let elem = Element::from_symbol(symbol).unwrap();
    Topology::new(
        (0..n_atoms)
            .map(|_| Atom::new(symbol, elem.clone()))
            .collect(),
    )
}

fn uniform_coords(state: &mut u64, n_frames: usize, n_atoms: usize, box_l: f64) -> Array3<f64> {
    let mut coords = Array3::zeros((n_frames, n_atoms, 3));
    for f in 0..n_frames {
        for a in 0..n_atoms {
            for k in 0..3 {
                coords[[f, a, k]] = box_l * lcg(state);
            }
        }
    }
    coords
}

/// Disordered water-like box: atoms placed uniformly, fresh positions
/// every frame, cubic box of edge `box_l` nm, 1 ps timestep
pub fn disordered_water_box(n_frames: usize, n_molecules: usize, box_l: f64) -> Trajectory {
    let top = water_topology(n_molecules);
    let n_atoms = top.n_atoms();
    let mut state = 0x5eed;
    let coords = uniform_coords(&mut state, n_frames, n_atoms, box_l);
    let box_lengths = Array2::from_elem((n_frames, 3), box_l);
    let time = Array1::from_iter((0..n_frames).map(|i| i as f64));
    Trajectory::new(top, coords, box_lengths, time).unwrap()
}

/// Monatomic box with fresh uniform positions every frame
pub fn disordered_monatomic_box(
    symbol: &str,
    n_frames: usize,
    n_atoms: usize,
    box_l: f64,
) -> Trajectory {
    let top = monatomic_topology(symbol, n_atoms);
    let mut state = 0xfeed;
    let coords = uniform_coords(&mut state, n_frames, n_atoms, box_l);
    let box_lengths = Array2::from_elem((n_frames, 3), box_l);
    let time = Array1::from_iter((0..n_frames).map(|i| i as f64));
    Trajectory::new(top, coords, box_lengths, time).unwrap()
}

/// Monatomic box where every frame repeats the same configuration
pub fn frozen_monatomic_box(
    symbol: &str,
    n_frames: usize,
    n_atoms: usize,
    box_l: f64,
) -> Trajectory {
    let top = monatomic_topology(symbol, n_atoms);
    let mut state = 0xc0ffee;
    let frame = uniform_coords(&mut state, 1, n_atoms, box_l);
    let mut coords = Array3::zeros((n_frames, n_atoms, 3));
    for f in 0..n_frames {
        coords
            .index_axis_mut(ndarray::Axis(0), f)
            .assign(&frame.index_axis(ndarray::Axis(0), 0));
    }
    let box_lengths = Array2::from_elem((n_frames, 3), box_l);
    let time = Array1::from_iter((0..n_frames).map(|i| i as f64));
    Trajectory::new(top, coords, box_lengths, time).unwrap()
}
