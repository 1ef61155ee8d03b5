/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! Cromer-Mann atomic scattering factor coefficients
//!
//! Four-Gaussian parametrization `f(s) = Σᵢ aᵢ·exp(-bᵢ s²) + c` with
//! `s = sin(θ)/λ = q / 4π` in inverse angstrom.
//!
//! Data source: International Tables for Crystallography, Vol. C,
//! Table 6.1.1.4.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cromer-Mann coefficients for one element
#[derive(Debug, Clone, Copy)]
pub struct CromerMann {
    pub a: [f64; 4],
    pub b: [f64; 4],
    pub c: f64,
}

impl CromerMann {
    /// Evaluate the scattering factor at `s = q / 4π` (inverse angstrom)
    pub fn evaluate(&self, s: f64) -> f64 {
        let s2 = s * s;
        let mut f = self.c;
        for i in 0..4 {
            f += self.a[i] * (-self.b[i] * s2).exp();
        }
        f
    }
}

macro_rules! cm {
    ($map:expr, $sym:literal, [$a0:expr, $a1:expr, $a2:expr, $a3:expr],
     [$b0:expr, $b1:expr, $b2:expr, $b3:expr], $c:expr) => {
        $map.insert(
            $sym,
            CromerMann {
                a: [$a0, $a1, $a2, $a3],
                b: [$b0, $b1, $b2, $b3],
                c: $c,
            },
        );
    };
}

/// Coefficient table, keyed by element symbol
pub static CROMER_MANN: Lazy<HashMap<&'static str, CromerMann>> = Lazy::new(|| {
    let mut m = HashMap::new();

    cm!(m, "H", [0.493002, 0.322912, 0.140191, 0.040810], [10.5109, 26.1257, 3.14236, 57.7997], 0.003038);
    cm!(m, "He", [0.8734, 0.6309, 0.3112, 0.1780], [9.1037, 3.3568, 22.9276, 0.9821], 0.0064);
    cm!(m, "Li", [1.1282, 0.7508, 0.6175, 0.4653], [3.9546, 1.0524, 85.3905, 168.261], 0.0377);
    cm!(m, "Be", [1.5919, 1.1278, 0.5391, 0.7029], [43.6427, 1.8623, 103.483, 0.5420], 0.0385);
    cm!(m, "B", [2.0545, 1.3326, 1.0979, 0.7068], [23.2185, 1.0210, 60.3498, 0.1403], -0.1932);
    cm!(m, "C", [2.3100, 1.0200, 1.5886, 0.8650], [20.8439, 10.2075, 0.5687, 51.6512], 0.2156);
    cm!(m, "N", [12.2126, 3.1322, 2.0125, 1.1663], [0.0057, 9.8933, 28.9975, 0.5826], -11.529);
    cm!(m, "O", [3.0485, 2.2868, 1.5463, 0.8670], [13.2771, 5.7011, 0.3239, 32.9089], 0.2508);
    cm!(m, "F", [3.5392, 2.6412, 1.5170, 1.0243], [10.2825, 4.2944, 0.2615, 26.1476], 0.2776);
    cm!(m, "Na", [4.7626, 3.1736, 1.2674, 1.1128], [3.2850, 8.8422, 0.3136, 129.424], 0.6760);
    cm!(m, "Mg", [5.4204, 2.1735, 1.2269, 2.3073], [2.8275, 79.2611, 0.3808, 7.1937], 0.8584);
    cm!(m, "Al", [6.4202, 1.9002, 1.5936, 1.9646], [3.0387, 0.7426, 31.5472, 85.0886], 1.1151);
    cm!(m, "Si", [6.2915, 3.0353, 1.9891, 1.5410], [2.4386, 32.3337, 0.6785, 81.6937], 1.1407);
    cm!(m, "P", [6.4345, 4.1791, 1.7800, 1.4908], [1.9067, 27.1570, 0.5260, 68.1645], 1.1149);
    cm!(m, "S", [6.9053, 5.2034, 1.4379, 1.5863], [1.4679, 22.2151, 0.2536, 56.1720], 0.8669);
    cm!(m, "Cl", [11.4604, 7.1964, 6.2556, 1.6455], [0.0104, 1.1662, 18.5194, 47.7784], -9.5574);
    cm!(m, "Ar", [7.4845, 6.7723, 0.6539, 1.6442], [0.9072, 14.8407, 43.8983, 33.3929], 1.4445);
    cm!(m, "K", [8.2186, 7.4398, 1.0519, 0.8659], [12.7949, 0.7748, 213.187, 41.6841], 1.4228);
    cm!(m, "Ca", [8.6266, 7.3873, 1.5899, 1.0211], [10.4421, 0.6599, 85.7484, 178.437], 1.3751);
    cm!(m, "Ti", [9.7595, 7.3558, 1.6991, 1.9021], [7.8508, 0.5000, 35.6338, 116.105], 1.2807);
    cm!(m, "V", [10.2971, 7.3511, 2.0703, 2.0571], [6.8657, 0.4385, 26.8938, 102.478], 1.2199);
    cm!(m, "Cr", [10.6406, 7.3537, 3.3240, 1.4922], [6.1038, 0.3920, 20.2626, 98.7399], 1.1832);
    cm!(m, "Mn", [11.2819, 7.3573, 3.0193, 2.2441], [5.3409, 0.3432, 17.8674, 83.7543], 1.0896);
    cm!(m, "Fe", [11.7695, 7.3573, 3.5222, 2.3045], [4.7611, 0.3072, 15.3535, 76.8805], 1.0369);
    cm!(m, "Co", [12.2841, 7.3409, 4.0034, 2.3488], [4.2791, 0.2784, 13.5359, 71.1692], 1.0118);
    cm!(m, "Ni", [12.8376, 7.2920, 4.4438, 2.3800], [3.8785, 0.2565, 12.1763, 66.3421], 1.0341);
    cm!(m, "Cu", [13.3380, 7.1676, 5.6158, 1.6735], [3.5828, 0.2470, 11.3966, 64.8126], 1.1910);
    cm!(m, "Zn", [14.0743, 7.0318, 5.1652, 2.4100], [3.2655, 0.2333, 10.3163, 58.7097], 1.3041);
    cm!(m, "Ga", [15.2354, 6.7006, 4.3591, 2.9623], [3.0669, 0.2412, 10.7805, 61.4135], 1.7189);
    cm!(m, "Ge", [16.0816, 6.3747, 3.7068, 3.6830], [2.8509, 0.2516, 11.4468, 54.7625], 2.1313);
    cm!(m, "As", [16.6723, 6.0701, 3.4313, 4.2779], [2.6345, 0.2647, 12.9479, 47.7972], 2.5310);
    cm!(m, "Se", [17.0006, 5.8196, 3.9731, 4.3543], [2.4098, 0.2726, 15.2372, 43.8163], 2.8409);
    cm!(m, "Br", [17.1789, 5.2358, 5.6377, 3.9851], [2.1723, 16.5796, 0.2609, 41.4328], 2.9557);

    m
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_limit_approaches_atomic_number() {
        // f(0) = Σ aᵢ + c ≈ Z for neutral atoms
        for (symbol, z) in [("H", 1.0), ("C", 6.0), ("O", 8.0), ("Fe", 26.0)] {
            let f0 = CROMER_MANN[symbol].evaluate(0.0);
            assert_relative_eq!(f0, z, epsilon = 0.05);
        }
    }

    #[test]
    fn test_monotonic_falloff() {
        let o = CROMER_MANN["O"];
        let mut prev = o.evaluate(0.0);
        for i in 1..10 {
            let f = o.evaluate(i as f64 * 0.1);
            assert!(f < prev);
            prev = f;
        }
    }
}
