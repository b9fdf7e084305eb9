//! Frieze formulas: exponential-form terms repeating along the real axis

use crate::analysis::frieze::{FriezeSymmetry, analyze_frieze_terms};
use crate::formula::pattern::{CalculationResult, Formula, sum_terms};
use crate::formula::term::Term;
use crate::io::error::Result;
use crate::io::format;
use crate::math::basis::EulerBasis;
use num_complex::Complex64;

/// Term of a frieze, `scale · e^(inz) · e^(-im·conj(z))`
pub type FriezeTerm = Term<EulerBasis>;

/// Sum of exponential-form terms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FriezeFormula {
    terms: Vec<FriezeTerm>,
}

impl FriezeFormula {
    /// Create a frieze from its terms
    pub const fn new(terms: Vec<FriezeTerm>) -> Self {
        Self { terms }
    }

    /// Parse a frieze document in JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::Parse`] if the document is malformed
    pub fn from_json(text: &str) -> Result<Self> {
        format::frieze_from_json(text)
    }

    /// Parse a frieze document in YAML
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::Parse`] if the document is malformed
    pub fn from_yaml(text: &str) -> Result<Self> {
        format::frieze_from_yaml(text)
    }

    /// Terms in declaration order
    pub fn terms(&self) -> &[FriezeTerm] {
        &self.terms
    }

    /// Frieze groups every term's locked relationships agree on
    pub fn analyze_for_symmetry(&self) -> FriezeSymmetry {
        analyze_frieze_terms(&self.terms)
    }
}

impl Formula for FriezeFormula {
    fn calculate(&self, z: Complex64) -> CalculationResult {
        sum_terms(&self.terms, z)
    }
}
