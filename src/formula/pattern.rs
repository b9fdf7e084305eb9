//! The evaluation seam shared by every formula kind

use crate::analysis::frieze::FriezeSymmetry;
use crate::analysis::hexagonal::HexagonalSymmetry;
use crate::analysis::rosette::RosetteSymmetry;
use crate::formula::frieze::FriezeFormula;
use crate::formula::hexagonal::HexagonalWallpaperFormula;
use crate::formula::rosette::RosetteFormula;
use crate::formula::term::Term;
use crate::formula::wave::WavePacket;
use crate::io::error::Result;
use crate::io::format;
use crate::math::basis::Basis;
use num_complex::Complex64;
use num_traits::Zero;
use std::path::Path;

/// Value of a formula at one point, with the share of each top-level term
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Sum over every term, after any formula-level multiplier
    pub total: Complex64,
    /// One entry per top-level term, in declaration order
    pub contribution_by_term: Vec<Complex64>,
}

/// Anything that maps a sample point to a complex value
pub trait Formula {
    /// Evaluate at `z`
    fn calculate(&self, z: Complex64) -> CalculationResult;
}

/// Sum a term list, keeping each term's contribution
pub fn sum_terms<B: Basis>(terms: &[Term<B>], z: Complex64) -> CalculationResult {
    let contribution_by_term: Vec<Complex64> = terms.iter().map(|term| term.calculate(z)).collect();
    let total = contribution_by_term
        .iter()
        .fold(Complex64::zero(), |sum, contribution| sum + contribution);
    CalculationResult {
        total,
        contribution_by_term,
    }
}

/// Symmetries detected for a [`Pattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryReport {
    /// Rotational order of a rosette
    Rosette(RosetteSymmetry),
    /// Frieze groups the formula satisfies
    Frieze(FriezeSymmetry),
    /// Hexagonal wallpaper groups the formula satisfies
    Hexagonal(HexagonalSymmetry),
    /// Wave formulas are not analysed on their own
    Unanalyzed,
}

impl SymmetryReport {
    /// Names of the detected groups, for display
    pub fn group_names(&self) -> Vec<String> {
        match self {
            Self::Rosette(symmetry) => vec![format!("{}-fold", symmetry.multifold)],
            Self::Frieze(symmetry) => symmetry.names().into_iter().map(String::from).collect(),
            Self::Hexagonal(symmetry) => symmetry.names().into_iter().map(String::from).collect(),
            Self::Unanalyzed => Vec::new(),
        }
    }
}

/// Every formula kind a document can describe
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Power-form terms around the origin
    Rosette(RosetteFormula),
    /// Exponential-form terms repeating along the real axis
    Frieze(FriezeFormula),
    /// A single wave formula over a lattice
    Wave(WavePacket),
    /// Hexagonal wallpaper built from wave packets
    Hexagonal(HexagonalWallpaperFormula),
}

impl Pattern {
    /// Load a formula document, choosing JSON or YAML from the extension
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The extension is not `json`, `yaml` or `yml`
    /// - The document is malformed or describes an invalid formula
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        format::load_pattern(path.as_ref())
    }

    /// Run the symmetry analysis that applies to this formula kind
    pub fn symmetry_report(&self) -> SymmetryReport {
        match self {
            Self::Rosette(formula) => SymmetryReport::Rosette(formula.analyze_for_symmetry()),
            Self::Frieze(formula) => SymmetryReport::Frieze(formula.analyze_for_symmetry()),
            Self::Hexagonal(formula) => SymmetryReport::Hexagonal(formula.find_symmetries()),
            Self::Wave(_) => SymmetryReport::Unanalyzed,
        }
    }
}

impl Formula for Pattern {
    fn calculate(&self, z: Complex64) -> CalculationResult {
        match self {
            Self::Rosette(formula) => formula.calculate(z),
            Self::Frieze(formula) => formula.calculate(z),
            Self::Wave(formula) => formula.calculate(z),
            Self::Hexagonal(formula) => formula.calculate(z),
        }
    }
}
