//! Error types for catalog loading, configuration and generation

use crate::math::interpolation::CurveError;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Square-only and diagonal-only were both requested
    ConflictingAxisMode,

    /// A connector name does not name a direction
    InvalidAxis {
        /// The unrecognised name
        name: String,
    },

    /// Catalog contents cannot support generation
    InvalidCatalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Linearity response curve could not be built
    InvalidCurve {
        /// Underlying curve error
        source: CurveError,
    },

    /// Every attempt produced a grid outside the accepted size range
    OutOfRange {
        /// Attempts made before giving up
        attempts: usize,
        /// Tile count of the last attempt
        size: usize,
        /// Smallest accepted tile count
        min: f64,
        /// Largest accepted tile count
        max: f64,
    },

    /// The closing pass kept growing new open connectors
    TerminationDiverged {
        /// Passes run before giving up
        passes: usize,
    },

    /// Catalog file is not valid JSON for a catalog
    CatalogFormat {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Data could not be encoded as JSON
    Serialization {
        /// What was being encoded
        what: &'static str,
        /// Underlying encoding error
        source: serde_json::Error,
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

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingAxisMode => write!(
                f,
                "Cannot use only square roads and only diagonal roads at once; set at most one"
            ),
            Self::InvalidAxis { name } => write!(f, "Axis '{name}' does not exist"),
            Self::InvalidCatalog { reason } => write!(f, "Invalid catalog: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCurve { source } => write!(f, "Invalid linearity curve: {source}"),
            Self::OutOfRange {
                attempts,
                size,
                min,
                max,
            } => write!(
                f,
                "No grid within {min}..={max} tiles after {attempts} attempts (last had {size})"
            ),
            Self::TerminationDiverged { passes } => {
                write!(f, "Closing open roads did not converge after {passes} passes")
            }
            Self::CatalogFormat { path, source } => {
                write!(f, "Failed to parse catalog '{}': {source}", path.display())
            }
            Self::Serialization { what, source } => {
                write!(f, "Failed to encode {what} as JSON: {source}")
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

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCurve { source } => Some(source),
            Self::CatalogFormat { source, .. } | Self::Serialization { source, .. } => {
                Some(source)
            }
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<CurveError> for GenerationError {
    fn from(source: CurveError) -> Self {
        Self::InvalidCurve { source }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
