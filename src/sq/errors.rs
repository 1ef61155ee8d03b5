/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Error types for the structure-factor module

use crate::form_factor::FormFactorError;
use crate::pairdist::PairDistError;
use crate::traj::TrajError;
use crate::utils::UtilsError;
use thiserror::Error;

/// Errors that can occur in the structure-factor pipeline
#[derive(Error, Debug)]
pub enum SqError {
    #[error("Invalid weighting factor `{0}`; the only weighting factor currently supported is `fz` (Faber-Ziman)")]
    UnsupportedWeighting(String),

    #[error("Trajectory error: {0}")]
    Traj(#[from] TrajError),

    #[error("Pair-distance error: {0}")]
    PairDist(#[from] PairDistError),

    #[error("Form-factor error: {0}")]
    FormFactor(#[from] FormFactorError),

    #[error("Integration error: {0}")]
    Integration(#[from] UtilsError),
}

/// A specialized Result type for structure-factor operations
pub type Result<T> = std::result::Result<T, SqError>;
