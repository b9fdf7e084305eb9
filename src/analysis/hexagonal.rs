//! Hexagonal wallpaper group detection and desired-symmetry validation

use crate::formula::relationship::PowerPair;
use crate::io::error::{PatternError, Result};
use serde::{Deserialize, Serialize};

/// The five hexagonal wallpaper groups
///
/// Used both as an analysis result and as the request passed to
/// [`crate::formula::hexagonal::HexagonalWallpaperFormula::with_symmetry`].
// Allow bools: each wallpaper group is an independent yes/no
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HexagonalSymmetry {
    /// 3-fold rotation
    pub p3: bool,
    /// 3-fold rotation with mirrors through the rotation centres' edges
    pub p31m: bool,
    /// 3-fold rotation with mirrors through every rotation centre
    pub p3m1: bool,
    /// 6-fold rotation
    pub p6: bool,
    /// 6-fold rotation with mirrors
    pub p6m: bool,
}

impl HexagonalSymmetry {
    /// Names of the groups that are present
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.p3, "p3"),
            (self.p31m, "p31m"),
            (self.p3m1, "p3m1"),
            (self.p6, "p6"),
            (self.p6m, "p6m"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }

    // The groups beyond p3 that need extra packets
    fn requested_extensions(self) -> Vec<&'static str> {
        [
            (self.p31m, "p31m"),
            (self.p3m1, "p3m1"),
            (self.p6, "p6"),
            (self.p6m, "p6m"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

/// Check a desired symmetry can be synthesized
///
/// p3 is always implied by the packets. At most one of p31m, p3m1, p6 and
/// p6m may be requested on top of it.
///
/// # Errors
///
/// Returns [`PatternError::InvalidSymmetry`] naming the requested groups
/// when more than one extension is asked for
pub fn validate_desired_symmetry(desired: &HexagonalSymmetry) -> Result<()> {
    let requested = desired.requested_extensions();
    if requested.len() > 1 {
        return Err(PatternError::InvalidSymmetry { requested });
    }
    Ok(())
}

/// Detect the wallpaper groups formed by a set of packet base pairs
///
/// Relations only count between two different packets. When one packet has
/// its swapped, negated and negated swapped partners all present, the
/// result is p6m alone rather than p6m alongside p31m, p3m1 and p6.
pub fn find_symmetries(base_pairs: &[PowerPair]) -> HexagonalSymmetry {
    let has_partner = |index: usize, target: PowerPair| {
        base_pairs
            .iter()
            .enumerate()
            .any(|(other, pair)| other != index && *pair == target)
    };

    let mut symmetry = HexagonalSymmetry {
        p3: true,
        ..HexagonalSymmetry::default()
    };

    for (index, pair) in base_pairs.iter().enumerate() {
        let swapped = has_partner(index, pair.swapped());
        let negated_swapped = has_partner(index, pair.negated_swapped());
        let negated = has_partner(index, pair.negated());

        symmetry.p31m |= swapped;
        symmetry.p3m1 |= negated_swapped;
        symmetry.p6 |= negated;
        symmetry.p6m |= swapped && negated_swapped && negated;
    }

    if symmetry.p6m {
        symmetry.p31m = false;
        symmetry.p3m1 = false;
        symmetry.p6 = false;
    }

    symmetry
}
