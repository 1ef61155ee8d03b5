/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Error types for the form-factor module

use thiserror::Error;

/// Errors that can occur during form-factor lookup
#[derive(Error, Debug)]
pub enum FormFactorError {
    #[error("No form-factor data for element symbol: {0}")]
    UnknownElement(String),

    #[error("Scattering vector magnitude must be non-negative, got {0}")]
    NegativeQ(f64),
}

/// A specialized Result type for form-factor operations
pub type Result<T> = std::result::Result<T, FormFactorError>;
