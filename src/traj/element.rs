/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Chemical element identities and periodic-table lookups
//!
//! Elements are identified by symbol; atomic number and mass are carried
//! along so that selections can distinguish physical atoms from massless
//! virtual sites (e.g. the M site of four-point water models).

use super::errors::{Result, TrajError};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A chemical element (or a massless virtual site)
#[derive(Debug, Clone)]
pub struct Element {
    symbol: String,
    atomic_number: u32,
    mass: f64,
}

impl Element {
    /// Look up an element by its symbol
    ///
    /// # Arguments
    ///
    /// * `symbol` - Element symbol, e.g. `"O"` or `"Na"`
    ///
    /// # Returns
    ///
    /// The element, or `TrajError::UnknownElement` for symbols not in the
    /// periodic-table database.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        let atomic_number = atomic_number_from_symbol(symbol)
            .ok_or_else(|| TrajError::UnknownElement(symbol.to_string()))?;
        let mass = atomic_weight(atomic_number)
            .ok_or_else(|| TrajError::UnknownElement(symbol.to_string()))?;
        Ok(Self {
            symbol: symbol.to_string(),
            atomic_number,
            mass,
        })
    }

    /// A massless virtual interaction site
    ///
    /// Virtual sites carry no electrons and are excluded from
    /// physical-atom counts and scattering weights.
    pub fn virtual_site() -> Self {
        Self {
            symbol: "VS".to_string(),
            atomic_number: 0,
            mass: 0.0,
        }
    }

    /// Get the element symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the atomic number (Z)
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Get the atomic mass in amu
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether this element represents a physical atom (nonzero mass)
    pub fn is_physical(&self) -> bool {
        self.mass > 0.0
    }
}

// Identity is the symbol; mass and Z are derived data.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol.cmp(&other.symbol)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Provides element symbols for atomic numbers
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    match atomic_number {
        1 => Some("H"),
        2 => Some("He"),
        3 => Some("Li"),
        4 => Some("Be"),
        5 => Some("B"),
        6 => Some("C"),
        7 => Some("N"),
        8 => Some("O"),
        9 => Some("F"),
        10 => Some("Ne"),
        11 => Some("Na"),
        12 => Some("Mg"),
        13 => Some("Al"),
        14 => Some("Si"),
        15 => Some("P"),
        16 => Some("S"),
        17 => Some("Cl"),
        18 => Some("Ar"),
        19 => Some("K"),
        20 => Some("Ca"),
        21 => Some("Sc"),
        22 => Some("Ti"),
        23 => Some("V"),
        24 => Some("Cr"),
        25 => Some("Mn"),
        26 => Some("Fe"),
        27 => Some("Co"),
        28 => Some("Ni"),
        29 => Some("Cu"),
        30 => Some("Zn"),
        31 => Some("Ga"),
        32 => Some("Ge"),
        33 => Some("As"),
        34 => Some("Se"),
        35 => Some("Br"),
        36 => Some("Kr"),
        37 => Some("Rb"),
        38 => Some("Sr"),
        39 => Some("Y"),
        40 => Some("Zr"),
        41 => Some("Nb"),
        42 => Some("Mo"),
        43 => Some("Tc"),
        44 => Some("Ru"),
        45 => Some("Rh"),
        46 => Some("Pd"),
        47 => Some("Ag"),
        48 => Some("Cd"),
        49 => Some("In"),
        50 => Some("Sn"),
        51 => Some("Sb"),
        52 => Some("Te"),
        53 => Some("I"),
        54 => Some("Xe"),
        55 => Some("Cs"),
        56 => Some("Ba"),
        78 => Some("Pt"),
        79 => Some("Au"),
        80 => Some("Hg"),
        82 => Some("Pb"),
        _ => None,
    }
}

/// Returns the atomic number for an element symbol
pub fn atomic_number_from_symbol(symbol: &str) -> Option<u32> {
    match symbol {
        "H" => Some(1),
        "He" => Some(2),
        "Li" => Some(3),
        "Be" => Some(4),
        "B" => Some(5),
        "C" => Some(6),
        "N" => Some(7),
        "O" => Some(8),
        "F" => Some(9),
        "Ne" => Some(10),
        "Na" => Some(11),
        "Mg" => Some(12),
        "Al" => Some(13),
        "Si" => Some(14),
        "P" => Some(15),
        "S" => Some(16),
        "Cl" => Some(17),
        "Ar" => Some(18),
        "K" => Some(19),
        "Ca" => Some(20),
        "Sc" => Some(21),
        "Ti" => Some(22),
        "V" => Some(23),
        "Cr" => Some(24),
        "Mn" => Some(25),
        "Fe" => Some(26),
        "Co" => Some(27),
        "Ni" => Some(28),
        "Cu" => Some(29),
        "Zn" => Some(30),
        "Ga" => Some(31),
        "Ge" => Some(32),
        "As" => Some(33),
        "Se" => Some(34),
        "Br" => Some(35),
        "Kr" => Some(36),
        "Rb" => Some(37),
        "Sr" => Some(38),
        "Y" => Some(39),
        "Zr" => Some(40),
        "Nb" => Some(41),
        "Mo" => Some(42),
        "Tc" => Some(43),
        "Ru" => Some(44),
        "Rh" => Some(45),
        "Pd" => Some(46),
        "Ag" => Some(47),
        "Cd" => Some(48),
        "In" => Some(49),
        "Sn" => Some(50),
        "Sb" => Some(51),
        "Te" => Some(52),
        "I" => Some(53),
        "Xe" => Some(54),
        "Cs" => Some(55),
        "Ba" => Some(56),
        "Pt" => Some(78),
        "Au" => Some(79),
        "Hg" => Some(80),
        "Pb" => Some(82),
        _ => None,
    }
}

/// Returns the atomic weight in atomic mass units (amu)
///
/// Values are based on the IUPAC relative atomic masses.
pub fn atomic_weight(atomic_number: u32) -> Option<f64> {
    match atomic_number {
        1 => Some(1.008),
        2 => Some(4.0026),
        3 => Some(6.94),
        4 => Some(9.0122),
        5 => Some(10.81),
        6 => Some(12.011),
        7 => Some(14.007),
        8 => Some(15.999),
        9 => Some(18.998),
        10 => Some(20.180),
        11 => Some(22.990),
        12 => Some(24.305),
        13 => Some(26.982),
        14 => Some(28.085),
        15 => Some(30.974),
        16 => Some(32.06),
        17 => Some(35.45),
        18 => Some(39.948),
        19 => Some(39.098),
        20 => Some(40.078),
        21 => Some(44.956),
        22 => Some(47.867),
        23 => Some(50.942),
        24 => Some(51.996),
        25 => Some(54.938),
        26 => Some(55.845),
        27 => Some(58.933),
        28 => Some(58.693),
        29 => Some(63.546),
        30 => Some(65.38),
        31 => Some(69.723),
        32 => Some(72.630),
        33 => Some(74.922),
        34 => Some(78.971),
        35 => Some(79.904),
        36 => Some(83.798),
        37 => Some(85.468),
        38 => Some(87.62),
        39 => Some(88.906),
        40 => Some(91.224),
        41 => Some(92.906),
        42 => Some(95.95),
        43 => Some(98.0),
        44 => Some(101.07),
        45 => Some(102.91),
        46 => Some(106.42),
        47 => Some(107.87),
        48 => Some(112.41),
        49 => Some(114.82),
        50 => Some(118.71),
        51 => Some(121.76),
        52 => Some(127.60),
        53 => Some(126.90),
        54 => Some(131.29),
        55 => Some(132.91),
        56 => Some(137.33),
        78 => Some(195.08),
        79 => Some(196.97),
        80 => Some(200.59),
        82 => Some(207.2),
        _ => None,
    }
}
