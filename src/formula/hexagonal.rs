//! Hexagonal wallpaper formulas and synthesis of a requested symmetry

use crate::analysis::hexagonal::{HexagonalSymmetry, find_symmetries, validate_desired_symmetry};
use crate::formula::pattern::{CalculationResult, Formula};
use crate::formula::relationship::PowerPair;
use crate::formula::wave::WavePacket;
use crate::io::error::Result;
use crate::io::format;
use num_complex::Complex64;
use num_traits::Zero;

/// Base power pair and multiplier a hexagonal packet is built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerTerm {
    /// Base powers `(n, m)`
    pub powers: PowerPair,
    /// Multiplier of the packet built from these powers
    pub multiplier: Complex64,
}

impl PowerTerm {
    /// Create a power term
    pub const fn new(powers: PowerPair, multiplier: Complex64) -> Self {
        Self { powers, multiplier }
    }
}

/// Sum of wave packets scaled by an overall multiplier
#[derive(Debug, Clone, PartialEq)]
pub struct HexagonalWallpaperFormula {
    wave_packets: Vec<WavePacket>,
    multiplier: Complex64,
}

impl HexagonalWallpaperFormula {
    /// Create a formula from ready-made packets
    pub const fn new(wave_packets: Vec<WavePacket>, multiplier: Complex64) -> Self {
        Self {
            wave_packets,
            multiplier,
        }
    }

    /// Build one 3-fold packet per base term, giving p3 symmetry
    pub fn from_power_terms(base_terms: &[PowerTerm], multiplier: Complex64) -> Self {
        let wave_packets = base_terms
            .iter()
            .map(|term| WavePacket::hexagonal(term.powers, term.multiplier))
            .collect();
        Self::new(wave_packets, multiplier)
    }

    /// Build a formula that has the desired symmetry
    ///
    /// Every base term contributes its own packet, followed by the packets
    /// the requested group needs: the swapped pair for p31m, the negated
    /// swapped pair for p3m1, the negated pair for p6, or all three (negated,
    /// swapped, negated swapped) for p6m.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::InvalidSymmetry`] if more than one of
    /// p31m, p3m1, p6 and p6m is requested
    pub fn with_symmetry(
        base_terms: &[PowerTerm],
        multiplier: Complex64,
        desired: &HexagonalSymmetry,
    ) -> Result<Self> {
        validate_desired_symmetry(desired)?;

        let mut wave_packets = Vec::new();
        for term in base_terms {
            let base = term.powers;
            wave_packets.push(WavePacket::hexagonal(base, term.multiplier));

            let mut extra_pairs = Vec::new();
            if desired.p6m {
                extra_pairs.extend([base.negated(), base.swapped(), base.negated_swapped()]);
            } else if desired.p31m {
                extra_pairs.push(base.swapped());
            } else if desired.p3m1 {
                extra_pairs.push(base.negated_swapped());
            } else if desired.p6 {
                extra_pairs.push(base.negated());
            }

            wave_packets.extend(
                extra_pairs
                    .into_iter()
                    .map(|pair| WavePacket::hexagonal(pair, term.multiplier)),
            );
        }

        Ok(Self::new(wave_packets, multiplier))
    }

    /// Parse a hexagonal wallpaper document in JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or asks for an invalid symmetry
    pub fn from_json(text: &str) -> Result<Self> {
        format::hexagonal_from_json(text)
    }

    /// Parse a hexagonal wallpaper document in YAML
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or asks for an invalid symmetry
    pub fn from_yaml(text: &str) -> Result<Self> {
        format::hexagonal_from_yaml(text)
    }

    /// Packets in declaration order
    pub fn wave_packets(&self) -> &[WavePacket] {
        &self.wave_packets
    }

    /// Factor applied to the sum of packet totals
    pub const fn multiplier(&self) -> Complex64 {
        self.multiplier
    }

    /// Wallpaper groups implied by the packets' base pairs
    pub fn find_symmetries(&self) -> HexagonalSymmetry {
        let base_pairs: Vec<PowerPair> = self
            .wave_packets
            .iter()
            .filter_map(WavePacket::base_powers)
            .collect();
        find_symmetries(&base_pairs)
    }
}

impl Formula for HexagonalWallpaperFormula {
    fn calculate(&self, z: Complex64) -> CalculationResult {
        let contribution_by_term: Vec<Complex64> = self
            .wave_packets
            .iter()
            .map(|packet| packet.calculate(z).total)
            .collect();
        let total = contribution_by_term
            .iter()
            .fold(Complex64::zero(), |sum, contribution| sum + contribution)
            * self.multiplier;
        CalculationResult {
            total,
            contribution_by_term,
        }
    }
}
