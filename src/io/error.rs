//! Error types for formula construction, parsing and rendering

use num_complex::Complex64;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// Lattice basis vectors cannot span the plane
    InvalidLattice {
        /// First lattice vector
        x: Complex64,
        /// Second lattice vector
        y: Complex64,
        /// Why the pair was rejected
        reason: &'static str,
    },

    /// A textual formula document could not be read
    Parse {
        /// Format being parsed (`json`, `yaml`, `relationship`, ...)
        format: &'static str,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Requested symmetry groups cannot be synthesized together
    InvalidSymmetry {
        /// Names of the groups that were requested
        requested: Vec<&'static str>,
    },

    /// Rendering or CLI parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load the colour source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLattice { x, y, reason } => {
                write!(
                    f,
                    "Invalid lattice vectors ({},{}) and ({},{}): {reason}",
                    x.re, x.im, y.re, y.im
                )
            }
            Self::Parse { format, reason } => {
                write!(f, "Failed to parse {format}: {reason}")
            }
            Self::InvalidSymmetry { requested } => {
                write!(
                    f,
                    "invalid desired symmetry: {} cannot be combined",
                    requested.join(", ")
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        parse_error("json", &err)
    }
}

impl From<serde_yaml::Error> for PatternError {
    fn from(err: serde_yaml::Error) -> Self {
        parse_error("yaml", &err)
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parse error for the given input format
pub fn parse_error(format: &'static str, reason: &impl ToString) -> PatternError {
    PatternError::Parse {
        format,
        reason: reason.to_string(),
    }
}
