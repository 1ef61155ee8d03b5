/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! # scatter-rs
//!
//! Scattering structure functions from molecular dynamics trajectories.
//!
//! Two pipelines operate on an in-memory [`traj::Trajectory`]:
//!
//! - [`sq::structure_factor`] computes the static structure factor S(Q)
//!   as the Fourier transform of element-pair radial distribution
//!   functions with Faber-Ziman weighting, and
//! - [`van_hove::compute_van_hove`] computes the time-resolved van Hove
//!   correlation function G(r, t) by chunked time averaging.
//!
//! Both decompose the system into element-pair partials
//! ([`pairdist`]), weight them with X-ray form factors
//! ([`form_factor`]) and combine them into totals ([`mixing`]).
//!
//! Units follow the MD convention: lengths in nanometers, times in
//! picoseconds, scattering vectors in inverse nanometers (converted to
//! inverse angstrom internally for form-factor lookups).
//!
//! ## Example
//!
//! ```no_run
//! use scatter_rs::sq::{structure_factor, SqOptions};
//! # fn load_trajectory() -> scatter_rs::traj::Trajectory { unimplemented!() }
//!
//! let trj = load_trajectory();
//! let (q, s) = structure_factor(&trj, &SqOptions::default()).unwrap();
//! ```

pub mod form_factor;
pub mod mixing;
pub mod pairdist;
pub mod sq;
pub mod traj;
pub mod utils;
pub mod van_hove;

/// Version of the scatter-rs crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
