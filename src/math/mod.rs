//! Numeric building blocks for formula evaluation

/// Evaluation bases shared by every term flavour
pub mod basis;
/// Lattice vector pairs and lattice coordinates
pub mod lattice;
/// Range mapping and bounding boxes
pub mod scaling;
