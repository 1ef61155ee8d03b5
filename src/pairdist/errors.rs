/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Error types for the pair-distance module

use thiserror::Error;

/// Errors that can occur during pair-distance histogramming
#[derive(Error, Debug)]
pub enum PairDistError {
    #[error("Invalid radial binning: {0}")]
    InvalidBinning(String),

    #[error("Empty pair set: at least one atom pair is required")]
    EmptyPairs,

    #[error("Frame index {frame} out of range for trajectory with {n_frames} frames")]
    FrameOutOfRange { frame: usize, n_frames: usize },
}

/// A specialized Result type for pair-distance operations
pub type Result<T> = std::result::Result<T, PairDistError>;
