/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Error types for the trajectory module

use thiserror::Error;

/// Errors that can occur while building or querying a trajectory
#[derive(Error, Debug)]
pub enum TrajError {
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("Selection `{0}` matches no atoms")]
    EmptySelection(String),

    #[error("Selection `{selection}` resolves to {n_elements} distinct elements; a single species is required for scattering partials")]
    AmbiguousSelection { selection: String, n_elements: usize },

    #[error("Inconsistent timestep between frames: found spacings {0:?}")]
    InconsistentTimestep(Vec<f64>),

    #[error("Invalid trajectory shape: {0}")]
    InvalidShape(String),
}

/// A specialized Result type for trajectory operations
pub type Result<T> = std::result::Result<T, TrajError>;
