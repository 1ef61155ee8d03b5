/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Error types for the mixing module

use thiserror::Error;

/// Errors that can occur while combining partial correlation functions
#[derive(Error, Debug)]
pub enum MixingError {
    #[error("No composition or form factor available for element: {0}")]
    UnknownElement(String),

    #[error("No partial functions to mix")]
    EmptyPartials,

    #[error("Mixing coefficients sum to zero; the normalized total is undefined")]
    DegenerateNormalization,
}

/// A specialized Result type for mixing operations
pub type Result<T> = std::result::Result<T, MixingError>;
