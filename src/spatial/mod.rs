//! Mapping output pixels onto the complex plane

/// Sample grid construction and formula evaluation over it
pub mod sampling;

pub use sampling::{SampleSpace, TransformedGrid};
