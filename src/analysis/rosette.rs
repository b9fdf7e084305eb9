//! Rotational order of rosette formulas

use crate::formula::relationship::PowerPair;
use num_integer::Integer;

/// Rotational symmetry of a rosette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosetteSymmetry {
    /// The pattern repeats after a turn of `360° / multifold`
    pub multifold: u32,
}

/// Greatest common divisor of every non-zero power magnitude
///
/// Never zero: a rosette without non-zero powers reports 1.
pub fn analyze_multifold<I>(powers: I) -> RosetteSymmetry
where
    I: IntoIterator<Item = PowerPair>,
{
    let multifold = powers
        .into_iter()
        .flat_map(|pair| [pair.n, pair.m])
        .filter(|power| *power != 0)
        .fold(0_u32, |divisor, power| divisor.gcd(&power.unsigned_abs()));

    RosetteSymmetry {
        multifold: multifold.max(1),
    }
}
