/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! X-ray form factors
//!
//! Element-specific scattering amplitudes f(Q), either as the flat
//! atomic-number estimate or from tabulated Cromer-Mann coefficients.
//! Scattering vector magnitudes are in inverse angstrom here; callers
//! working in inverse nanometer must divide by 10 before lookup.

pub mod cromer_mann;
pub mod errors;

pub use cromer_mann::{CromerMann, CROMER_MANN};
pub use errors::{FormFactorError, Result};

use crate::traj::atomic_number_from_symbol;

/// Method for evaluating form factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFactorMethod {
    /// Estimate from the atomic number (Q-independent)
    #[default]
    Atomic,
    /// Tabulated Cromer-Mann coefficients (Q-dependent)
    CromerMann,
}

// Effective electron counts for bound water: polarization shifts roughly
// two thirds of an electron from each hydrogen onto the oxygen.
const WATER_H: f64 = 0.3333;
const WATER_O: f64 = 9.3333;

/// Look up the X-ray form factor of an element
///
/// # Arguments
///
/// * `symbol` - Element symbol
/// * `q` - Scattering vector magnitude in inverse angstrom; `None` (or
///   zero) requests the forward-scattering Q→0 limit
/// * `water` - Use effective values for hydrogen and oxygen bound in
///   liquid water; has no effect on other elements and applies at the
///   Q→0 limit only
/// * `method` - Atomic-number estimate or Cromer-Mann tables
///
/// # Returns
///
/// The scalar weight, or `FormFactorError::UnknownElement` when no data
/// exists for the symbol.
pub fn form_factor(
    symbol: &str,
    q: Option<f64>,
    water: bool,
    method: FormFactorMethod,
) -> Result<f64> {
    let q = q.unwrap_or(0.0);
    if q < 0.0 {
        return Err(FormFactorError::NegativeQ(q));
    }

    if water && q == 0.0 {
        match symbol {
            "H" => return Ok(WATER_H),
            "O" => return Ok(WATER_O),
            _ => {}
        }
    }

    match method {
        FormFactorMethod::Atomic => atomic_number_from_symbol(symbol)
            .map(|z| z as f64)
            .ok_or_else(|| FormFactorError::UnknownElement(symbol.to_string())),
        FormFactorMethod::CromerMann => CROMER_MANN
            .get(symbol)
            .map(|cm| cm.evaluate(q / (4.0 * std::f64::consts::PI)))
            .ok_or_else(|| FormFactorError::UnknownElement(symbol.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atomic_method_is_q_independent() {
        let f0 = form_factor("O", None, false, FormFactorMethod::Atomic).unwrap();
        let f5 = form_factor("O", Some(5.0), false, FormFactorMethod::Atomic).unwrap();
        assert_relative_eq!(f0, 8.0);
        assert_relative_eq!(f0, f5);
    }

    #[test]
    fn test_cromer_mann_decays_with_q() {
        let f0 = form_factor("O", None, false, FormFactorMethod::CromerMann).unwrap();
        let f5 = form_factor("O", Some(5.0), false, FormFactorMethod::CromerMann).unwrap();
        assert!(f0 > f5);
        assert_relative_eq!(f0, 8.0, epsilon = 0.05);
    }

    #[test]
    fn test_water_adjustment_only_affects_h_and_o() {
        let h = form_factor("H", None, true, FormFactorMethod::Atomic).unwrap();
        let o = form_factor("O", None, true, FormFactorMethod::Atomic).unwrap();
        let c = form_factor("C", None, true, FormFactorMethod::Atomic).unwrap();
        assert_relative_eq!(h, 0.3333);
        assert_relative_eq!(o, 9.3333);
        assert_relative_eq!(c, 6.0);

        // Electron balance of one water molecule is preserved
        assert_relative_eq!(o + 2.0 * h, 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_unknown_element_fails() {
        assert!(form_factor("Xx", None, false, FormFactorMethod::Atomic).is_err());
        assert!(form_factor("Xx", None, false, FormFactorMethod::CromerMann).is_err());
    }
}
