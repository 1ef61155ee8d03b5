/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Numerical utilities shared by the correlation pipelines

pub mod errors;
pub mod math;

pub use errors::{Result, UtilsError};
