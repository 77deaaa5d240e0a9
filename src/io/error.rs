//! Error types and helpers for diagram generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all diagram operations
#[derive(Debug)]
pub enum DiagramError {
    /// Diagram parameter validation failed
    ///
    /// Raised before any generation work begins, so no partial output exists
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A pixel finished the nearest-site search without any site beating the search bound
    NoSiteFound {
        /// Pixel column
        x: u32,
        /// Pixel row
        y: u32,
    },

    /// Failed to save the rendered canvas to disk
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

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoSiteFound { x, y } => {
                write!(
                    f,
                    "No site found within the search bound for pixel ({x}, {y})"
                )
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for DiagramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for diagram results
pub type Result<T> = std::result::Result<T, DiagramError>;

impl DiagramError {
    /// Whether the error was caused by user-supplied configuration
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DiagramError {
    DiagramError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> DiagramError {
    DiagramError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
