/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::{Array1, Array2, Array3};
use scatter_rs::pairdist::{compute_rdf, BinSpec};
use scatter_rs::sq::{structure_factor, SqOptions};
use scatter_rs::traj::{Atom, Element, Selection, Topology, Trajectory};
use scatter_rs::van_hove::{compute_van_hove, VanHoveOptions};

fn lcg(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*state >> 11) as f64 / (1u64 << 53) as f64
}

fn water_box(n_frames: usize, n_molecules: usize, box_l: f64) -> Trajectory {
    let o = Element::from_symbol("O").unwrap();
    let h = Element::from_symbol("H").unwrap();
    let mut atoms = Vec::with_capacity(3 * n_molecules);
    for _ in 0..n_molecules {
        atoms.push(Atom::new("O", o.clone()));
        atoms.push(Atom::new("H", h.clone()));
        atoms.push(Atom::new("H", h.clone()));
    }
    let top = Topology::new(atoms);

    let n_atoms = top.n_atoms();
    let mut state = 0x5eed;
    let mut coords = Array3::zeros((n_frames, n_atoms, 3));
    for f in 0..n_frames {
        for a in 0..n_atoms {
            for k in 0..3 {
                coords[[f, a, k]] = box_l * lcg(&mut state);
            }
        }
    }
    let box_lengths = Array2::from_elem((n_frames, 3), box_l);
    let time = Array1::from_iter((0..n_frames).map(|i| i as f64));
    Trajectory::new(top, coords, box_lengths, time).unwrap()
}

fn rdf_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Radial Distribution Function");
    let trj = water_box(20, 32, 2.0);
    let pairs = trj
        .topology()
        .select_pairs(&Selection::element("O"), &Selection::element("O"));

    group.bench_function("compute_rdf O-O", |b| {
        b.iter(|| {
            black_box(
                compute_rdf(
                    black_box(&trj),
                    &pairs,
                    (0.0, 1.0),
                    BinSpec::Width(0.005),
                    true,
                )
                .unwrap(),
            )
        })
    });

    group.finish();
}

fn structure_factor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Structure Factor");
    group.sample_size(10);
    let trj = water_box(10, 32, 2.0);
    let options = SqOptions {
        n_points: 100,
        ..SqOptions::default()
    };

    group.bench_function("structure_factor water box", |b| {
        b.iter(|| black_box(structure_factor(black_box(&trj), &options).unwrap()))
    });

    group.finish();
}

fn van_hove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Van Hove Function");
    group.sample_size(10);
    let trj = water_box(20, 32, 2.0);
    let options = VanHoveOptions {
        chunk_length: 5,
        ..VanHoveOptions::default()
    };
    let parallel = VanHoveOptions {
        parallel: true,
        ..options.clone()
    };

    group.bench_function("compute_van_hove sequential", |b| {
        b.iter(|| black_box(compute_van_hove(black_box(&trj), &options).unwrap()))
    });

    group.bench_function("compute_van_hove parallel", |b| {
        b.iter(|| black_box(compute_van_hove(black_box(&trj), &parallel).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    rdf_benchmark,
    structure_factor_benchmark,
    van_hove_benchmark
);
criterion_main!(benches);
