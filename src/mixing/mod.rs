/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Combining partial correlation functions into totals
//!
//! Partial functions are keyed by an unordered [`ElementPair`]; the total
//! is the coefficient-weighted sum normalized so the coefficients sum to
//! unity. The mixing coefficient of a pair (a, b) is
//! `x_a·f_a · x_b·f_b` with x the composition fraction and f the form
//! factor.
//!
//! Pair enumeration is the caller's responsibility and differs between
//! pipelines: van Hove totals enumerate each unordered pair once (every
//! partial already carries the symmetric contribution), while the
//! structure-factor sums run the full ordered cross product including
//! self pairs, matching the double sum over species in the Faber-Ziman
//! definition. Collapsing one convention into the other shifts the result
//! by a combinatorial factor.

pub mod errors;

pub use errors::{MixingError, Result};

use ndarray::{Array, Array1, Dimension};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// An unordered pair of element symbols
///
/// The two symbols are stored in sorted order, so `("O", "H")` and
/// `("H", "O")` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementPair {
    first: String,
    second: String,
}

impl ElementPair {
    /// Create a pair; argument order does not matter
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The lexicographically smaller symbol
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexicographically larger symbol
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Whether this is a self pair (both symbols equal)
    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for ElementPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// The mixing coefficient of one pair
pub fn coefficient(x_a: f64, f_a: f64, x_b: f64, f_b: f64) -> f64 {
    x_a * f_a * x_b * f_b
}

/// Mix partial correlation functions into a normalized total
///
/// `total = Σ coeff(pair)·partial[pair] / Σ coeff(pair)`, where the
/// coefficient of each pair is built from the per-element compositions and
/// form factors.
///
/// # Arguments
///
/// * `partials` - Partial functions keyed by element pair; all arrays must
///   share the same shape and binning
/// * `compositions` - Element symbol → composition fraction
/// * `form_factors` - Element symbol → form-factor weight
///
/// # Returns
///
/// The normalized total, or an error when an element is missing from the
/// maps, the partial map is empty, or the coefficients sum to zero.
pub fn mix<D: Dimension>(
    partials: &BTreeMap<ElementPair, Array<f64, D>>,
    compositions: &HashMap<String, f64>,
    form_factors: &HashMap<String, f64>,
) -> Result<Array<f64, D>> {
    let lookup = |map: &HashMap<String, f64>, symbol: &str| -> Result<f64> {
        map.get(symbol)
            .copied()
            .ok_or_else(|| MixingError::UnknownElement(symbol.to_string()))
    };

    let mut total: Option<Array<f64, D>> = None;
    let mut norm = 0.0;

    for (pair, partial) in partials {
        let x_a = lookup(compositions, pair.first())?;
        let x_b = lookup(compositions, pair.second())?;
        let f_a = lookup(form_factors, pair.first())?;
        let f_b = lookup(form_factors, pair.second())?;

        let coeff = coefficient(x_a, f_a, x_b, f_b);
        let weighted = partial * coeff;
        total = Some(match total {
            Some(sum) => sum + &weighted,
            None => weighted,
        });
        norm += coeff;
    }

    let total = total.ok_or(MixingError::EmptyPartials)?;
    if norm == 0.0 {
        return Err(MixingError::DegenerateNormalization);
    }
    Ok(total / norm)
}

/// Memoized pair RDFs for one pipeline invocation
///
/// The structure-factor Q loop needs each element pair's g(r) many times;
/// the RDF does not depend on Q, so each pair is computed once and read
/// for every Q value. The cache lives for a single invocation; nothing is
/// shared across calls.
#[derive(Debug, Default)]
pub struct RdfCache {
    entries: HashMap<ElementPair, (Array1<f64>, Array1<f64>)>,
}

impl RdfCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fetch a pair's `(r, g_r)`, computing and storing it on first use
    ///
    /// The tagged hit/miss of the entry API replaces exception-driven
    /// compute-or-fetch control flow.
    pub fn get_or_insert_with<E, F>(
        &mut self,
        key: ElementPair,
        compute: F,
    ) -> std::result::Result<&(Array1<f64>, Array1<f64>), E>
    where
        F: FnOnce() -> std::result::Result<(Array1<f64>, Array1<f64>), E>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(compute()?)),
        }
    }
}
