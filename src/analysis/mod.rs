//! Symmetry analysis of formulas

/// Frieze groups from locked coefficient relationships
pub mod frieze;
/// Hexagonal wallpaper groups and desired-symmetry validation
pub mod hexagonal;
/// Rotational order of rosettes
pub mod rosette;
