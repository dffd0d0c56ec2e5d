//! Error types for generation, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fern operations
#[derive(Debug)]
pub enum FernError {
    /// Generation or rendering parameter validation failed
    ///
    /// Raised before any point is produced, so no partial output exists.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: String,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Color string could not be parsed
    InvalidColor {
        /// The rejected input
        input: String,
    },

    /// Failed to save rendered image to disk
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

impl fmt::Display for FernError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidColor { input } => {
                write!(f, "Invalid color '{input}': expected #rrggbb")
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

impl std::error::Error for FernError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fern results
pub type Result<T> = std::result::Result<T, FernError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: impl Into<String>,
    value: &impl ToString,
    reason: &impl ToString,
) -> FernError {
    FernError::InvalidParameter {
        parameter: parameter.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
