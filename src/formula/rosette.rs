//! Rosette formulas: power-form terms with rotational symmetry about the origin

use crate::analysis::rosette::{RosetteSymmetry, analyze_multifold};
use crate::formula::pattern::{CalculationResult, Formula, sum_terms};
use crate::formula::term::Term;
use crate::io::error::Result;
use crate::io::format;
use crate::math::basis::PowerBasis;
use num_complex::Complex64;

/// Term of a rosette, `scale · z^n · conj(z)^m`
pub type RosetteTerm = Term<PowerBasis>;

/// Sum of power-form terms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosetteFormula {
    terms: Vec<RosetteTerm>,
}

impl RosetteFormula {
    /// Create a rosette from its terms
    pub const fn new(terms: Vec<RosetteTerm>) -> Self {
        Self { terms }
    }

    /// Parse a rosette document in JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::Parse`] if the document is malformed
    pub fn from_json(text: &str) -> Result<Self> {
        format::rosette_from_json(text)
    }

    /// Parse a rosette document in YAML
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::Parse`] if the document is malformed
    pub fn from_yaml(text: &str) -> Result<Self> {
        format::rosette_from_yaml(text)
    }

    /// Terms in declaration order
    pub fn terms(&self) -> &[RosetteTerm] {
        &self.terms
    }

    /// Rotational symmetry order
    pub fn analyze_for_symmetry(&self) -> RosetteSymmetry {
        analyze_multifold(self.terms.iter().map(|term| term.powers))
    }
}

impl Formula for RosetteFormula {
    fn calculate(&self, z: Complex64) -> CalculationResult {
        sum_terms(&self.terms, z)
    }
}
