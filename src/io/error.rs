//! Error types for map generation and the interactive session

use std::fmt;

/// Main error type for all generation operations
///
/// An unreachable home is not represented here: it is an expected outcome
/// of a generation attempt and is reported by
/// [`validate_and_prune`](crate::algorithm::connectivity::validate_and_prune)
/// returning `false`.
#[derive(Debug)]
pub enum MapError {
    /// Grid dimensions cannot hold a start and a home cell
    InvalidDimensions {
        /// Requested number of columns
        width: usize,
        /// Requested number of rows
        height: usize,
        /// Why the dimensions were rejected
        reason: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An internally produced coordinate fell outside the grid
    ///
    /// Coordinates only come from scans and bounds-checked neighbor lookups,
    /// so this signals a broken invariant rather than bad input.
    CoordinateOutOfBounds {
        /// Offending `[x, y]` position
        position: [usize; 2],
        /// Grid dimensions `(width, height)`
        dimensions: (usize, usize),
    },

    /// Connectivity validation found no start cell in the first column
    MissingStart,

    /// Every allowed generation attempt left home unreachable
    AttemptsExhausted {
        /// Number of attempts made
        attempts: usize,
    },

    /// Terminal input or output failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {width}x{height}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CoordinateOutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::MissingStart => f.write_str("No start cell found in the first column"),
            Self::AttemptsExhausted { attempts } => {
                write!(f, "Home stayed unreachable after {attempts} attempts")
            }
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, MapError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the operation it interrupted
pub fn io_error(operation: &'static str) -> impl Fn(std::io::Error) -> MapError {
    move |source| MapError::Io { operation, source }
}
