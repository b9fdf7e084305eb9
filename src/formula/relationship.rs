//! Locked coefficient relationships between a term and its derived siblings

use crate::io::error::{PatternError, parse_error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer powers `(n, m)` applied to `z` and its conjugate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PowerPair {
    /// Power applied to the sample point
    pub n: i32,
    /// Power applied to the complex conjugate
    pub m: i32,
}

impl PowerPair {
    /// Create a power pair
    pub const fn new(n: i32, m: i32) -> Self {
        Self { n, m }
    }

    /// `n + m`, saturating at the `i32` limits
    pub const fn sum(self) -> i32 {
        self.n.saturating_add(self.m)
    }

    /// Whether `n + m` is odd
    pub const fn sum_is_odd(self) -> bool {
        (self.n ^ self.m) & 1 != 0
    }

    /// Whether both powers are within `limit` in magnitude
    pub const fn within_magnitude(self, limit: u32) -> bool {
        self.n.unsigned_abs() <= limit && self.m.unsigned_abs() <= limit
    }

    /// `(m, n)`
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self::new(self.m, self.n)
    }

    /// `(-n, -m)`
    #[must_use]
    pub const fn negated(self) -> Self {
        Self::new(self.n.saturating_neg(), self.m.saturating_neg())
    }

    /// `(-m, -n)`
    #[must_use]
    pub const fn negated_swapped(self) -> Self {
        Self::new(self.m.saturating_neg(), self.n.saturating_neg())
    }
}

impl fmt::Display for PowerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.n, self.m)
    }
}

/// How a sibling term's powers and sign derive from a base pair
///
/// `Plus` keeps a power's sign and `Minus` negates it. Whichever of `N` or
/// `M` is written first goes on `z`, the other on `conj(z)`. The
/// `MaybeFlip` variants also negate the multiplier when `n + m` is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    /// `+N+M`: same powers
    #[serde(rename = "+N+M")]
    PlusNPlusM,
    /// `+M+N`: powers swapped
    #[serde(rename = "+M+N")]
    PlusMPlusN,
    /// `+M+NF`: powers swapped, sign flipped on odd sums
    #[serde(rename = "+M+NF", alias = "+M+N(flip)")]
    PlusMPlusNMaybeFlip,
    /// `-N-M`: powers negated
    #[serde(rename = "-N-M")]
    MinusNMinusM,
    /// `-M-N`: powers swapped and negated
    #[serde(rename = "-M-N")]
    MinusMMinusN,
    /// `-M-NF`: powers swapped and negated, sign flipped on odd sums
    #[serde(rename = "-M-NF", alias = "-M-N(flip)")]
    MinusMMinusNMaybeFlip,
    /// `+M-(N+M)`: first step of the 3-fold cycle
    #[serde(rename = "+M-(N+M)")]
    PlusMMinusSumNAndM,
    /// `-(N+M)+N`: second step of the 3-fold cycle
    #[serde(rename = "-(N+M)+N")]
    MinusSumNAndMPlusN,
}

impl Relationship {
    /// Every relationship, in declaration order
    pub const ALL: [Self; 8] = [
        Self::PlusNPlusM,
        Self::PlusMPlusN,
        Self::PlusMPlusNMaybeFlip,
        Self::MinusNMinusM,
        Self::MinusMMinusN,
        Self::MinusMMinusNMaybeFlip,
        Self::PlusMMinusSumNAndM,
        Self::MinusSumNAndMPlusN,
    ];

    /// Canonical tag text
    pub const fn tag(self) -> &'static str {
        match self {
            Self::PlusNPlusM => "+N+M",
            Self::PlusMPlusN => "+M+N",
            Self::PlusMPlusNMaybeFlip => "+M+NF",
            Self::MinusNMinusM => "-N-M",
            Self::MinusMMinusN => "-M-N",
            Self::MinusMMinusNMaybeFlip => "-M-NF",
            Self::PlusMMinusSumNAndM => "+M-(N+M)",
            Self::MinusSumNAndMPlusN => "-(N+M)+N",
        }
    }

    /// Derive the sibling pairing of `base` under this relationship
    ///
    /// Powers saturate at the `i32` limits. Documents reject powers beyond
    /// [`crate::io::configuration::MAX_POWER_MAGNITUDE`], so loaded
    /// formulas never reach them.
    pub const fn pairing(self, base: PowerPair) -> Pairing {
        let (n, m) = (base.n, base.m);
        let parity_flip = base.sum_is_odd();
        let negated_sum = base.sum().saturating_neg();
        let (powers, negate_multiplier) = match self {
            Self::PlusNPlusM => (base, false),
            Self::PlusMPlusN => (base.swapped(), false),
            Self::PlusMPlusNMaybeFlip => (base.swapped(), parity_flip),
            Self::MinusNMinusM => (base.negated(), false),
            Self::MinusMMinusN => (base.negated_swapped(), false),
            Self::MinusMMinusNMaybeFlip => (base.negated_swapped(), parity_flip),
            Self::PlusMMinusSumNAndM => (PowerPair::new(m, negated_sum), false),
            Self::MinusSumNAndMPlusN => (PowerPair::new(negated_sum, n), false),
        };
        Pairing {
            powers,
            negate_multiplier,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Relationship {
    type Err = PatternError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        match trimmed {
            "+M+N(flip)" => return Ok(Self::PlusMPlusNMaybeFlip),
            "-M-N(flip)" => return Ok(Self::MinusMMinusNMaybeFlip),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|relationship| relationship.tag() == trimmed)
            .ok_or_else(|| {
                parse_error(
                    "relationship",
                    &format!("unknown coefficient relationship '{text}'"),
                )
            })
    }
}

/// Powers and sign of one derived sibling term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    /// Powers applied to `z` and `conj(z)`
    pub powers: PowerPair,
    /// Whether the sibling's multiplier is negated
    pub negate_multiplier: bool,
}

/// Resolve every relationship against `base`, preserving order and length
pub fn resolve_pairings(base: PowerPair, relationships: &[Relationship]) -> Vec<Pairing> {
    relationships
        .iter()
        .map(|relationship| relationship.pairing(base))
        .collect()
}
