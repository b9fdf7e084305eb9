//! JSON and YAML formula documents
//!
//! Both formats share one schema. Terms carry a complex `multiplier`, the
//! powers `power_n` and `power_m`, `ignore_complex_conjugate`, and locked
//! `coefficient_relationships` scaled by `coefficient_multiplier`.

use crate::analysis::hexagonal::HexagonalSymmetry;
use crate::formula::frieze::FriezeFormula;
use crate::formula::hexagonal::{HexagonalWallpaperFormula, PowerTerm};
use crate::formula::pattern::Pattern;
use crate::formula::relationship::{PowerPair, Relationship};
use crate::formula::rosette::RosetteFormula;
use crate::formula::term::{LockedCoefficientPair, Term};
use crate::formula::wave::WavePacket;
use crate::io::configuration::MAX_POWER_MAGNITUDE;
use crate::io::error::{PatternError, Result, parse_error};
use crate::math::basis::Basis;
use crate::math::lattice::LatticeVectorPair;
use num_complex::Complex64;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Textual representation a document is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Parse`] for anything but `json`, `yaml` or `yml`
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(parse_error(
                "document",
                &format!("unsupported formula file '{}'", path.display()),
            )),
        }
    }

    /// Deserialize `text` in this format
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Parse`] if the text does not match the schema
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

/// `{ real, imaginary }`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplexDocument {
    /// Real part
    pub real: f64,
    /// Imaginary part
    pub imaginary: f64,
}

impl From<ComplexDocument> for Complex64 {
    fn from(value: ComplexDocument) -> Self {
        Self::new(value.real, value.imaginary)
    }
}

const fn unit_multiplier() -> ComplexDocument {
    ComplexDocument {
        real: 1.0,
        imaginary: 0.0,
    }
}

const fn unit_coefficient_multiplier() -> f64 {
    1.0
}

/// One term of a formula
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermDocument {
    /// Scale of the term
    #[serde(default = "unit_multiplier")]
    pub multiplier: ComplexDocument,
    /// Power applied to `z`
    pub power_n: i32,
    /// Power applied to `conj(z)`
    pub power_m: i32,
    /// Drop the conjugate factor
    #[serde(default)]
    pub ignore_complex_conjugate: bool,
    /// Locked sibling relationships
    #[serde(default)]
    pub coefficient_relationships: Vec<Relationship>,
    /// Factor applied to every locked sibling
    #[serde(default = "unit_coefficient_multiplier")]
    pub coefficient_multiplier: f64,
}

impl TermDocument {
    fn powers(&self) -> Result<PowerPair> {
        let powers = PowerPair::new(self.power_n, self.power_m);
        if !powers.within_magnitude(MAX_POWER_MAGNITUDE) {
            return Err(parse_error(
                "term",
                &format!("powers {powers} exceed the magnitude limit {MAX_POWER_MAGNITUDE}"),
            ));
        }
        Ok(powers)
    }

    fn into_term<B: Basis>(self) -> Result<Term<B>> {
        Ok(Term::new(self.multiplier.into(), self.powers()?)
            .ignoring_complex_conjugate(self.ignore_complex_conjugate)
            .with_coefficient_pairs(LockedCoefficientPair::new(
                self.coefficient_multiplier,
                self.coefficient_relationships,
            )))
    }
}

/// Terms of a rosette or frieze
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermListDocument {
    /// Terms in evaluation order
    pub terms: Vec<TermDocument>,
}

/// Basis vectors of a wave lattice
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatticeDocument {
    /// First basis vector
    pub x: ComplexDocument,
    /// Second basis vector
    pub y: ComplexDocument,
}

/// A wave packet: multiplier, terms and an optional lattice
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WavePacketDocument {
    /// Packet multiplier
    #[serde(default = "unit_multiplier")]
    pub multiplier: ComplexDocument,
    /// Terms of the packet
    pub terms: Vec<TermDocument>,
    /// Lattice basis, hexagonal when omitted
    #[serde(default)]
    pub lattice_vectors: Option<LatticeDocument>,
}

/// Hexagonal wallpaper: overall multiplier and packets of base terms
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HexagonalDocument {
    /// Overall multiplier
    #[serde(default = "unit_multiplier")]
    pub multiplier: ComplexDocument,
    /// Packets whose terms are base pairs
    pub wave_packets: Vec<WavePacketDocument>,
    /// Synthesize this symmetry from the base terms instead
    #[serde(default)]
    pub desired_symmetry: Option<HexagonalSymmetry>,
}

/// Top-level document naming its formula kind
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum PatternDocument {
    /// Rosette terms
    Rosette(TermListDocument),
    /// Frieze terms
    Frieze(TermListDocument),
    /// Wave formula
    Wave(WavePacketDocument),
    /// Hexagonal wallpaper
    HexagonalWallpaper(HexagonalDocument),
}

fn build_terms<B: Basis>(terms: Vec<TermDocument>) -> Result<Vec<Term<B>>> {
    terms.into_iter().map(TermDocument::into_term).collect()
}

fn build_rosette(document: TermListDocument) -> Result<RosetteFormula> {
    build_terms(document.terms).map(RosetteFormula::new)
}

fn build_frieze(document: TermListDocument) -> Result<FriezeFormula> {
    build_terms(document.terms).map(FriezeFormula::new)
}

fn build_wave(document: WavePacketDocument) -> Result<WavePacket> {
    let lattice = match document.lattice_vectors {
        Some(vectors) => LatticeVectorPair::new(vectors.x.into(), vectors.y.into())?,
        None => LatticeVectorPair::hexagonal(),
    };
    let terms = build_terms(document.terms)?;
    Ok(WavePacket::new(terms, document.multiplier.into(), lattice))
}

fn build_hexagonal(document: HexagonalDocument) -> Result<HexagonalWallpaperFormula> {
    let multiplier = document.multiplier.into();

    if document
        .wave_packets
        .iter()
        .any(|packet| packet.terms.is_empty())
    {
        return Err(parse_error(
            "hexagonal wallpaper",
            &"every wave packet needs at least one base term",
        ));
    }

    if let Some(desired) = document.desired_symmetry {
        let mut base_terms = Vec::new();
        for packet in &document.wave_packets {
            let packet_multiplier = Complex64::from(packet.multiplier);
            for term in &packet.terms {
                base_terms.push(PowerTerm::new(
                    term.powers()?,
                    packet_multiplier * Complex64::from(term.multiplier),
                ));
            }
        }
        return HexagonalWallpaperFormula::with_symmetry(&base_terms, multiplier, &desired);
    }

    let mut wave_packets = Vec::with_capacity(document.wave_packets.len());
    for packet in document.wave_packets {
        let base_terms = packet
            .terms
            .iter()
            .map(|term| Ok((term.powers()?, term.multiplier.into())))
            .collect::<Result<Vec<(PowerPair, Complex64)>>>()?;
        wave_packets.push(WavePacket::hexagonal_from_terms(
            &base_terms,
            packet.multiplier.into(),
        ));
    }
    Ok(HexagonalWallpaperFormula::new(wave_packets, multiplier))
}

/// Parse a rosette from JSON
///
/// # Errors
///
/// Returns [`PatternError::Parse`] if the document is malformed or a power
/// exceeds the magnitude limit
pub fn rosette_from_json(text: &str) -> Result<RosetteFormula> {
    DocumentFormat::Json.parse(text).and_then(build_rosette)
}

/// Parse a rosette from YAML
///
/// # Errors
///
/// Returns [`PatternError::Parse`] if the document is malformed or a power
/// exceeds the magnitude limit
pub fn rosette_from_yaml(text: &str) -> Result<RosetteFormula> {
    DocumentFormat::Yaml.parse(text).and_then(build_rosette)
}

/// Parse a frieze from JSON
///
/// # Errors
///
/// Returns [`PatternError::Parse`] if the document is malformed or a power
/// exceeds the magnitude limit
pub fn frieze_from_json(text: &str) -> Result<FriezeFormula> {
    DocumentFormat::Json.parse(text).and_then(build_frieze)
}

/// Parse a frieze from YAML
///
/// # Errors
///
/// Returns [`PatternError::Parse`] if the document is malformed or a power
/// exceeds the magnitude limit
pub fn frieze_from_yaml(text: &str) -> Result<FriezeFormula> {
    DocumentFormat::Yaml.parse(text).and_then(build_frieze)
}

/// Parse a wave formula from JSON
///
/// # Errors
///
/// Returns an error if the document is malformed or the lattice is invalid
pub fn wave_from_json(text: &str) -> Result<WavePacket> {
    DocumentFormat::Json.parse(text).and_then(build_wave)
}

/// Parse a wave formula from YAML
///
/// # Errors
///
/// Returns an error if the document is malformed or the lattice is invalid
pub fn wave_from_yaml(text: &str) -> Result<WavePacket> {
    DocumentFormat::Yaml.parse(text).and_then(build_wave)
}

/// Parse a hexagonal wallpaper from JSON
///
/// # Errors
///
/// Returns an error if the document is malformed or the symmetry is invalid
pub fn hexagonal_from_json(text: &str) -> Result<HexagonalWallpaperFormula> {
    DocumentFormat::Json.parse(text).and_then(build_hexagonal)
}

/// Parse a hexagonal wallpaper from YAML
///
/// # Errors
///
/// Returns an error if the document is malformed or the symmetry is invalid
pub fn hexagonal_from_yaml(text: &str) -> Result<HexagonalWallpaperFormula> {
    DocumentFormat::Yaml.parse(text).and_then(build_hexagonal)
}

/// Parse any pattern document
///
/// # Errors
///
/// Returns an error if the document is malformed or describes an invalid formula
pub fn parse_pattern(text: &str, format: DocumentFormat) -> Result<Pattern> {
    match format.parse(text)? {
        PatternDocument::Rosette(document) => build_rosette(document).map(Pattern::Rosette),
        PatternDocument::Frieze(document) => build_frieze(document).map(Pattern::Frieze),
        PatternDocument::Wave(document) => build_wave(document).map(Pattern::Wave),
        PatternDocument::HexagonalWallpaper(document) => {
            build_hexagonal(document).map(Pattern::Hexagonal)
        }
    }
}

/// Read and parse a pattern document from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension,
/// or holds an invalid document
pub fn load_pattern(path: &Path) -> Result<Pattern> {
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "read formula",
        source: e,
    })?;
    parse_pattern(&text, format)
}
