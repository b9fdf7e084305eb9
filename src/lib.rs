//! Rosette, frieze and hexagonal wallpaper formulas with symmetry analysis
//!
//! Formulas are sums of terms in `z` and `conj(z)`. Locked coefficient
//! relationships add sibling terms that force symmetries, and the analysis
//! modules read those relationships back to report which groups a formula has.

#![forbid(unsafe_code)]

/// Frieze, hexagonal and rosette symmetry detection
pub mod analysis;
/// Terms, relationships and formula kinds
pub mod formula;
/// Documents, images, CLI and error handling
pub mod io;
/// Bases, lattices and range utilities
pub mod math;
/// Output-pixel sampling of the complex plane
pub mod spatial;

pub use io::error::{PatternError, Result};
