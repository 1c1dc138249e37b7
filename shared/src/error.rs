//! Error types for the life core.

use thiserror::Error;

/// Errors reported by grid and simulation operations.
///
/// All of them are local and recoverable: the caller (usually a UI event
/// handler) decides whether to surface or ignore them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A coordinate outside `[0, height) x [0, width)`.
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Seek input that is not a non-negative integer.
    #[error("invalid seek target: {0:?}")]
    InvalidSeekTarget(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[must_use]
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPattern(msg.into())
    }

    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = Error::OutOfRange {
            row: 7,
            col: 2,
            height: 5,
            width: 4,
        };
        assert_eq!(err.to_string(), "cell (7, 2) is outside the 5x4 grid");
    }

    #[test]
    fn test_seek_target_display_quotes_input() {
        let err = Error::InvalidSeekTarget("abc".to_string());
        assert_eq!(err.to_string(), "invalid seek target: \"abc\"");
    }
}
