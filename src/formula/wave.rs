//! Wave packets: lattice plane waves summed under one multiplier

use crate::formula::pattern::{CalculationResult, Formula, sum_terms};
use crate::formula::relationship::{PowerPair, Relationship};
use crate::formula::term::Term;
use crate::io::configuration::HEXAGONAL_PACKET_TERMS;
use crate::io::error::Result;
use crate::io::format;
use crate::math::basis::WaveBasis;
use crate::math::lattice::LatticeVectorPair;
use num_complex::Complex64;

/// Plane-wave term over lattice coordinates, `scale · e^(2πi(n·a + m·b))`
pub type WaveTerm = Term<WaveBasis>;

/// Wave terms sharing one lattice basis, scaled by a packet multiplier
#[derive(Debug, Clone, PartialEq)]
pub struct WavePacket {
    terms: Vec<WaveTerm>,
    multiplier: Complex64,
    lattice: LatticeVectorPair,
}

impl WavePacket {
    /// Create a packet from arbitrary terms
    pub const fn new(terms: Vec<WaveTerm>, multiplier: Complex64, lattice: LatticeVectorPair) -> Self {
        Self {
            terms,
            multiplier,
            lattice,
        }
    }

    /// Build the 3-fold symmetric packet for one base pair on the hexagonal lattice
    ///
    /// The terms are `(n, m)`, `(m, -(n+m))` and `(-(n+m), n)`, averaged so
    /// the packet multiplier is `multiplier / 3`.
    pub fn hexagonal(base: PowerPair, multiplier: Complex64) -> Self {
        Self::hexagonal_from_terms(&[(base, Complex64::new(1.0, 0.0))], multiplier)
    }

    /// Build a hexagonal packet where every `(pair, scale)` contributes its 3 cyclic terms
    pub fn hexagonal_from_terms(base_terms: &[(PowerPair, Complex64)], multiplier: Complex64) -> Self {
        let cycle = [
            Relationship::PlusNPlusM,
            Relationship::PlusMMinusSumNAndM,
            Relationship::MinusSumNAndMPlusN,
        ];
        let terms = base_terms
            .iter()
            .flat_map(|&(base, scale)| {
                cycle
                    .into_iter()
                    .map(move |relationship| WaveTerm::new(scale, relationship.pairing(base).powers))
            })
            .collect();

        Self {
            terms,
            multiplier: multiplier / HEXAGONAL_PACKET_TERMS as f64,
            lattice: LatticeVectorPair::hexagonal(),
        }
    }

    /// Parse a wave formula document in JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or its lattice is invalid
    pub fn from_json(text: &str) -> Result<Self> {
        format::wave_from_json(text)
    }

    /// Parse a wave formula document in YAML
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or its lattice is invalid
    pub fn from_yaml(text: &str) -> Result<Self> {
        format::wave_from_yaml(text)
    }

    /// Terms in declaration order
    pub fn terms(&self) -> &[WaveTerm] {
        &self.terms
    }

    /// Factor applied to the packet total
    pub const fn multiplier(&self) -> Complex64 {
        self.multiplier
    }

    /// Lattice the terms are evaluated on
    pub const fn lattice(&self) -> &LatticeVectorPair {
        &self.lattice
    }

    /// Powers of the first term, which identify the packet
    pub fn base_powers(&self) -> Option<PowerPair> {
        self.terms.first().map(|term| term.powers)
    }

    /// Evaluate at a point already expressed in lattice coordinates
    pub fn calculate_lattice(&self, lattice_coordinate: Complex64) -> CalculationResult {
        let mut result = sum_terms(&self.terms, lattice_coordinate);
        result.total *= self.multiplier;
        result
    }
}

impl Formula for WavePacket {
    fn calculate(&self, z: Complex64) -> CalculationResult {
        self.calculate_lattice(self.lattice.convert_to_lattice_coordinates(z))
    }
}
