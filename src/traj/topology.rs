/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Topology and atom-selection queries
//!
//! A topology is the per-atom metadata shared by every frame of a
//! trajectory: atom names and element identities. Selections resolve to
//! atom index sets and are the unit at which partial correlation
//! functions are decomposed.

use super::element::Element;
use super::errors::{Result, TrajError};
use std::collections::BTreeSet;
use std::fmt;

/// An atom in the topology
#[derive(Debug, Clone)]
pub struct Atom {
    name: String,
    element: Element,
}

impl Atom {
    /// Create a new atom with the given name and element
    pub fn new(name: impl Into<String>, element: Element) -> Self {
        Self {
            name: name.into(),
            element,
        }
    }

    /// Get the atom name (e.g. `"OW"` for SPC/E water oxygen)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the atom's element
    pub fn element(&self) -> &Element {
        &self.element
    }
}

/// A typed atom-selection query
///
/// Replaces stringly queries like `"element O"` with an explicit variant;
/// `Display` renders the conventional query syntax for error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    /// All atoms of a chemical element, by symbol
    Element(String),
    /// All atoms with a given name
    Name(String),
}

impl Selection {
    /// Select by element symbol
    pub fn element(symbol: impl Into<String>) -> Self {
        Selection::Element(symbol.into())
    }

    /// Select by atom name
    pub fn name(name: impl Into<String>) -> Self {
        Selection::Name(name.into())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Element(symbol) => write!(f, "element {}", symbol),
            Selection::Name(name) => write!(f, "name {}", name),
        }
    }
}

/// Per-atom metadata shared by all frames of a trajectory
#[derive(Debug, Clone, Default)]
pub struct Topology {
    atoms: Vec<Atom>,
}

impl Topology {
    /// Create a topology from a list of atoms
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Number of atoms, including virtual sites
    pub fn n_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// All atoms in index order
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Resolve a selection to the matching atom indices, in index order
    pub fn select(&self, selection: &Selection) -> Vec<usize> {
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, atom)| match selection {
                Selection::Element(symbol) => atom.element.symbol() == symbol,
                Selection::Name(name) => atom.name() == name,
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Build the pair set for two selections
    ///
    /// When both selections resolve to the same index set, each unordered
    /// pair is enumerated once (i < j, no self pairs). Otherwise the full
    /// cross product is returned, excluding i == j. Self-pair inclusion at
    /// lag time is controlled separately by the `self_correlation` flag of
    /// the pair-distance routines.
    pub fn select_pairs(&self, a: &Selection, b: &Selection) -> Vec<(usize, usize)> {
        let idx_a = self.select(a);
        let idx_b = self.select(b);

        if idx_a == idx_b {
            let mut pairs = Vec::with_capacity(idx_a.len() * idx_a.len().saturating_sub(1) / 2);
            for (n, &i) in idx_a.iter().enumerate() {
                for &j in &idx_a[n + 1..] {
                    pairs.push((i, j));
                }
            }
            pairs
        } else {
            let mut pairs = Vec::with_capacity(idx_a.len() * idx_b.len());
            for &i in &idx_a {
                for &j in &idx_b {
                    if i != j {
                        pairs.push((i, j));
                    }
                }
            }
            pairs
        }
    }

    /// Atom indices common to both selections
    ///
    /// These are the atoms whose (i, i) self terms enter a time-resolved
    /// histogram when self correlation is requested.
    pub fn selection_intersection(&self, a: &Selection, b: &Selection) -> Vec<usize> {
        let set_a: BTreeSet<usize> = self.select(a).into_iter().collect();
        let set_b: BTreeSet<usize> = self.select(b).into_iter().collect();
        set_a.intersection(&set_b).copied().collect()
    }

    /// The single chemical element a selection resolves to
    ///
    /// # Returns
    ///
    /// `TrajError::AmbiguousSelection` if the selection spans more than one
    /// distinct element (scattering partials require a single species per
    /// selection), `TrajError::EmptySelection` if it matches nothing.
    pub fn single_element(&self, selection: &Selection) -> Result<Element> {
        let indices = self.select(selection);
        if indices.is_empty() {
            return Err(TrajError::EmptySelection(selection.to_string()));
        }

        let elements: BTreeSet<&Element> =
            indices.iter().map(|&i| self.atoms[i].element()).collect();
        if elements.len() > 1 {
            return Err(TrajError::AmbiguousSelection {
                selection: selection.to_string(),
                n_elements: elements.len(),
            });
        }
        Ok((*elements.iter().next().expect("nonempty")).clone())
    }

    /// Distinct elements present in the topology, sorted by symbol
    ///
    /// # Arguments
    ///
    /// * `physical_only` - Exclude massless virtual sites
    pub fn unique_elements(&self, physical_only: bool) -> Vec<Element> {
        let set: BTreeSet<&Element> = self
            .atoms
            .iter()
            .map(|a| a.element())
            .filter(|e| !physical_only || e.is_physical())
            .collect();
        set.into_iter().cloned().collect()
    }

    /// Distinct atom names, in first-appearance order
    pub fn unique_atom_names(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut names = Vec::new();
        for atom in &self.atoms {
            if seen.insert(atom.name()) {
                names.push(atom.name().to_string());
            }
        }
        names
    }
}
