//! Numeric tolerances and runtime configuration defaults

// Lattice validation
/// Tolerance when comparing |x·y| against |x||y| for collinear lattice vectors
pub const COLLINEAR_TOLERANCE: f64 = 1e-8;
/// Below this real part the first lattice vector is swapped out before solving
pub const LATTICE_SWAP_THRESHOLD: f64 = 1e-6;

// Term powers
/// Largest power magnitude a document may use, keeping every derived `-(n + m)` inside `i32`
pub const MAX_POWER_MAGNITUDE: u32 = 1_000_000_000;

// Hexagonal wave packets
/// Number of cyclic terms in a hexagonal wave packet
pub const HEXAGONAL_PACKET_TERMS: usize = 3;

// Default sample space the output pixels are mapped into
/// Lower-left corner of the default sample space
pub const DEFAULT_SAMPLE_MIN: (f64, f64) = (-1.0, -1.0);
/// Upper-right corner of the default sample space
pub const DEFAULT_SAMPLE_MAX: (f64, f64) = (1.0, 1.0);

// Transformed values outside this window are rendered transparent
/// Lower bound of transformed values that pick up a source colour
pub const DEFAULT_COLOR_VALUE_MIN: (f64, f64) = (-2e5, -2e5);
/// Upper bound of transformed values that pick up a source colour
pub const DEFAULT_COLOR_VALUE_MAX: (f64, f64) = (2e5, 2e5);

/// Default output width in pixels
pub const DEFAULT_OUTPUT_WIDTH: u32 = 800;
/// Default output height in pixels
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 450;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension
pub const MAX_OUTPUT_DIMENSION: u32 = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Extensions recognised as formula documents
pub const FORMULA_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];
