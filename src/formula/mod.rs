//! Pattern formulas: terms, relationships and the formula kinds built from them
//!
//! Every formula kind implements [`pattern::Formula`], mapping a point of the
//! complex plane to a total and the contribution of each top-level term.

/// Frieze formulas over exponential terms
pub mod frieze;
/// Hexagonal wallpaper formulas built from wave packets
pub mod hexagonal;
/// The shared evaluation trait and the document-level pattern enum
pub mod pattern;
/// Power pairs and the relationship tags that derive sibling terms
pub mod relationship;
/// Rosette formulas over power terms
pub mod rosette;
/// Terms and locked coefficient pairs
pub mod term;
/// Wave packets on a lattice
pub mod wave;

pub use pattern::{CalculationResult, Formula, Pattern};
