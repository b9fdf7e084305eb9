//! Frieze group detection from locked coefficient relationships

use crate::formula::relationship::Relationship;
use crate::formula::term::Term;
use crate::math::basis::Basis;

/// The seven frieze groups, `true` where the formula has that symmetry
// Allow bools: each frieze group is an independent yes/no
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriezeSymmetry {
    /// Translation only
    pub p111: bool,
    /// Half-turn rotation
    pub p211: bool,
    /// Vertical mirror
    pub p1m1: bool,
    /// Glide reflection
    pub p11g: bool,
    /// Horizontal mirror
    pub p11m: bool,
    /// Horizontal and vertical mirrors
    pub p2mm: bool,
    /// Vertical mirror with glide reflection
    pub p2mg: bool,
}

impl FriezeSymmetry {
    /// Every group present, the starting point of an analysis
    pub const fn all() -> Self {
        Self {
            p111: true,
            p211: true,
            p1m1: true,
            p11g: true,
            p11m: true,
            p2mm: true,
            p2mg: true,
        }
    }

    /// Names of the groups that are present
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.p111, "p111"),
            (self.p211, "p211"),
            (self.p1m1, "p1m1"),
            (self.p11g, "p11g"),
            (self.p11m, "p11m"),
            (self.p2mm, "p2mm"),
            (self.p2mg, "p2mg"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

impl Default for FriezeSymmetry {
    fn default() -> Self {
        Self::all()
    }
}

// Relationship evidence carried by a single term
// Allow bools: one flag per relationship check mirrors the group rules directly
#[allow(clippy::struct_excessive_bools)]
struct TermEvidence {
    minus_n_minus_m: bool,
    minus_m_minus_n: bool,
    plus_m_plus_n: bool,
    minus_m_minus_n_flip_odd: bool,
    plus_m_plus_n_flip_odd: bool,
    minus_m_minus_n_flip_even: bool,
    plus_m_plus_n_flip_even: bool,
}

impl TermEvidence {
    fn of<B: Basis>(term: &Term<B>) -> Self {
        let pairs = &term.coefficient_pairs;
        let even_sum = !term.powers.sum_is_odd();
        let minus_m_minus_n_flip = pairs.contains(Relationship::MinusMMinusNMaybeFlip);
        let plus_m_plus_n_flip = pairs.contains(Relationship::PlusMPlusNMaybeFlip);

        Self {
            minus_n_minus_m: pairs.contains(Relationship::MinusNMinusM),
            minus_m_minus_n: pairs.contains(Relationship::MinusMMinusN),
            plus_m_plus_n: pairs.contains(Relationship::PlusMPlusN),
            minus_m_minus_n_flip_odd: minus_m_minus_n_flip && !even_sum,
            plus_m_plus_n_flip_odd: plus_m_plus_n_flip && !even_sum,
            minus_m_minus_n_flip_even: minus_m_minus_n_flip && even_sum,
            plus_m_plus_n_flip_even: plus_m_plus_n_flip && even_sum,
        }
    }

    const fn horizontal_mirror(&self) -> bool {
        self.minus_m_minus_n || self.minus_m_minus_n_flip_even
    }

    const fn vertical_mirror(&self) -> bool {
        self.plus_m_plus_n || self.plus_m_plus_n_flip_even
    }
}

/// Narrow the frieze groups to those every term supports
///
/// A flag only ever moves from `true` to `false`. Ignoring the conjugate
/// removes every group but p111, which always survives.
pub fn analyze_frieze_terms<B: Basis>(terms: &[Term<B>]) -> FriezeSymmetry {
    let mut symmetry = FriezeSymmetry::all();

    for term in terms {
        if term.ignore_complex_conjugate {
            symmetry.p211 = false;
            symmetry.p1m1 = false;
            symmetry.p11g = false;
            symmetry.p11m = false;
            symmetry.p2mm = false;
            symmetry.p2mg = false;
            continue;
        }

        let evidence = TermEvidence::of(term);
        symmetry.p211 &= evidence.minus_n_minus_m;
        symmetry.p1m1 &= evidence.plus_m_plus_n;
        symmetry.p11g &= evidence.minus_m_minus_n_flip_odd;
        symmetry.p11m &= evidence.horizontal_mirror();
        symmetry.p2mm &=
            evidence.minus_n_minus_m && evidence.vertical_mirror() && evidence.horizontal_mirror();
        symmetry.p2mg &= evidence.minus_n_minus_m
            && evidence.plus_m_plus_n_flip_odd
            && evidence.minus_m_minus_n_flip_odd;
    }

    symmetry
}
