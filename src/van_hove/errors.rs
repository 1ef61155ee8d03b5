/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Error types for the van Hove module

use crate::form_factor::FormFactorError;
use crate::mixing::MixingError;
use crate::pairdist::PairDistError;
use crate::traj::TrajError;
use thiserror::Error;

/// Errors that can occur in the van Hove pipeline
#[derive(Error, Debug)]
pub enum VanHoveError {
    #[error("Partial key `{0}` is malformed; expected the format {{atom}}-{{atom}}, e.g. `O-H`")]
    MalformedKey(String),

    #[error("Partial key references `{0}`, which is not an element of the trajectory")]
    UnknownElement(String),

    #[error("Chunk length {chunk_length} does not fit a trajectory of {n_frames} frames")]
    ChunkTooLong { chunk_length: usize, n_frames: usize },

    #[error("Trajectory error: {0}")]
    Traj(#[from] TrajError),

    #[error("Pair-distance error: {0}")]
    PairDist(#[from] PairDistError),

    #[error("Form-factor error: {0}")]
    FormFactor(#[from] FormFactorError),

    #[error("Mixing error: {0}")]
    Mixing(#[from] MixingError),
}

/// A specialized Result type for van Hove operations
pub type Result<T> = std::result::Result<T, VanHoveError>;
