//! Single formula terms and their locked sibling terms

use crate::formula::relationship::{Pairing, PowerPair, Relationship, resolve_pairings};
use crate::math::basis::Basis;
use num_complex::Complex64;
use num_traits::Zero;
use std::marker::PhantomData;

/// Multiplier and relationships that derive sibling terms from a base term
///
/// Each relationship adds one sibling whose scale is the base scale times
/// `multiplier`, negated when the derived pairing asks for it.
#[derive(Debug, Clone, PartialEq)]
pub struct LockedCoefficientPair {
    /// Real factor applied to every sibling
    pub multiplier: f64,
    /// Relationships in declaration order
    pub relationships: Vec<Relationship>,
}

impl LockedCoefficientPair {
    /// Create a locked pair
    pub const fn new(multiplier: f64, relationships: Vec<Relationship>) -> Self {
        Self {
            multiplier,
            relationships,
        }
    }

    /// Whether `relationship` is declared
    pub fn contains(&self, relationship: Relationship) -> bool {
        self.relationships.contains(&relationship)
    }
}

impl Default for LockedCoefficientPair {
    fn default() -> Self {
        Self::new(1.0, Vec::new())
    }
}

/// One term of a formula, evaluated with the basis `B`
#[derive(Debug, Clone, PartialEq)]
pub struct Term<B> {
    /// Complex scale of the base term and its siblings
    pub scale: Complex64,
    /// Base powers `(n, m)`
    pub powers: PowerPair,
    /// Treat `conj(z)` factors as `1`
    pub ignore_complex_conjugate: bool,
    /// Sibling terms locked to this one
    pub coefficient_pairs: LockedCoefficientPair,
    basis: PhantomData<B>,
}

impl<B: Basis> Term<B> {
    /// Create a term with no locked siblings
    pub const fn new(scale: Complex64, powers: PowerPair) -> Self {
        Self {
            scale,
            powers,
            ignore_complex_conjugate: false,
            coefficient_pairs: LockedCoefficientPair {
                multiplier: 1.0,
                relationships: Vec::new(),
            },
            basis: PhantomData,
        }
    }

    /// Drop the conjugate factor from this term and every sibling
    #[must_use]
    pub const fn ignoring_complex_conjugate(mut self, ignore: bool) -> Self {
        self.ignore_complex_conjugate = ignore;
        self
    }

    /// Lock sibling terms to this one
    #[must_use]
    pub fn with_coefficient_pairs(mut self, coefficient_pairs: LockedCoefficientPair) -> Self {
        self.coefficient_pairs = coefficient_pairs;
        self
    }

    /// Every pairing that contributes to this term, the base pairing first
    pub fn pairings(&self) -> Vec<Pairing> {
        let mut pairings = Vec::with_capacity(self.coefficient_pairs.relationships.len() + 1);
        pairings.push(Relationship::PlusNPlusM.pairing(self.powers));
        pairings.extend(resolve_pairings(
            self.powers,
            &self.coefficient_pairs.relationships,
        ));
        pairings
    }

    /// Evaluate the term and its locked siblings at `z`
    pub fn calculate(&self, z: Complex64) -> Complex64 {
        let z_conjugate = z.conj();
        let sibling_scale = self.scale * self.coefficient_pairs.multiplier;

        self.pairings()
            .into_iter()
            .enumerate()
            .fold(Complex64::zero(), |sum, (index, pairing)| {
                let scale = if index == 0 { self.scale } else { sibling_scale };
                sum + self.evaluate_pairing(z, z_conjugate, pairing, scale)
            })
    }

    fn evaluate_pairing(
        &self,
        z: Complex64,
        z_conjugate: Complex64,
        pairing: Pairing,
        scale: Complex64,
    ) -> Complex64 {
        let scale = if pairing.negate_multiplier {
            -scale
        } else {
            scale
        };
        let primary = B::primary(z, pairing.powers.n);
        if self.ignore_complex_conjugate {
            return primary * scale;
        }
        primary * B::conjugate(z_conjugate, pairing.powers.m) * scale
    }
}
